// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

#![allow(dead_code)]

use std::io::Write;

use redact::presence::PresenceTable;
use tempfile::NamedTempFile;

/// Generate `n` distinct keys whose home index in `table` is `home`.
pub fn keys_with_home(table: &PresenceTable, home: usize, n: usize) -> Vec<String> {
    (0..)
        .map(|i| format!("WORD{i}"))
        .filter(|key| table.home_index(key) == Some(home))
        .take(n)
        .collect()
}

/// Write `contents` to a fresh temp file. The file is deleted when the
/// returned handle is dropped.
pub fn write_temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
