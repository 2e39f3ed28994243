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

use crate::error::Error;
use crate::hash::KeyHashing;
use crate::presence::DEFAULT_CAPACITY;
use crate::presence::PresenceTable;

/// Builder for creating presence tables.
///
/// # Examples
///
/// ```
/// use redact::hash::KeyHashing;
/// use redact::presence::PresenceTable;
///
/// let table = PresenceTable::builder()
///     .capacity(64)
///     .hashing(KeyHashing::LegacyPrefix)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.capacity(), 64);
/// assert!(table.is_live());
/// ```
#[derive(Debug, Clone)]
pub struct PresenceTableBuilder {
    capacity: usize,
    hashing: KeyHashing,
}

impl Default for PresenceTableBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hashing: KeyHashing::default(),
        }
    }
}

impl PresenceTableBuilder {
    /// Sets the fixed number of slots.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets how keys are hashed to their home index.
    pub fn hashing(mut self, hashing: KeyHashing) -> Self {
        self.hashing = hashing;
        self
    }

    /// Builds a live table with every slot empty.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind::ConfigInvalid)
    /// if the capacity is 0.
    pub fn build(self) -> Result<PresenceTable, Error> {
        if self.capacity == 0 {
            return Err(Error::config_invalid("capacity must be at least 1")
                .with_context("capacity", self.capacity));
        }
        Ok(PresenceTable::with_config(self.capacity, self.hashing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults() {
        let table = PresenceTableBuilder::default().build().unwrap();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.hashing(), KeyHashing::Full);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = PresenceTableBuilder::default().capacity(0).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
