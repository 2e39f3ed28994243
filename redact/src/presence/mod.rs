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

//! Fixed-capacity presence table for exact byte-string membership.
//!
//! The table stores keys only; a key being present in some slot is the whole
//! of the stored information. Collisions are resolved by open addressing with
//! linear probing from the key's home index, `hash(key) % capacity`.
//!
//! # Usage
//!
//! ```rust
//! use redact::presence::PresenceTable;
//!
//! let mut table = PresenceTable::new(1024);
//! table.insert("SECRET").unwrap();
//!
//! assert!(table.contains("SECRET"));
//! assert!(!table.contains("secret"));
//!
//! table.remove("SECRET").unwrap();
//! assert!(!table.contains("SECRET"));
//! ```
//!
//! # Notes
//!
//! - The table never grows. Once no empty slot is reachable, insertions fail
//!   with [`ErrorKind::TableFull`](crate::error::ErrorKind::TableFull).
//! - Removal leaves a tombstone that keeps probe chains intact. Tombstoned
//!   slots are not reused, so insert/remove cycles consume capacity until the
//!   table is destroyed.
//! - Comparison is byte-for-byte and case-sensitive. Normalize keys before
//!   handing them to the table.

mod builder;
mod table;

pub use self::builder::PresenceTableBuilder;
pub use self::table::PresenceTable;
pub use self::table::Slot;

/// Capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 1024;
