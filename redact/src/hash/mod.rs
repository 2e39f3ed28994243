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

//! Key hashing for slot placement.
//!
//! Keys are hashed with Bob Jenkins' one-at-a-time hash. The hash is
//! deterministic, unseeded and non-cryptographic; it only spreads keys over
//! slot indices.

mod one_at_a_time;

pub use self::one_at_a_time::OneAtATime;
pub use self::one_at_a_time::one_at_a_time;

/// Number of key bytes mixed by [`KeyHashing::LegacyPrefix`].
pub const LEGACY_PREFIX_LEN: usize = 4;

/// Selects how many bytes of a key feed the slot hash.
///
/// Lookups always compare full keys, so the choice only affects where keys
/// land and how often they collide, never whether a stored key is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyHashing {
    /// Hash every byte of the key.
    #[default]
    Full,
    /// Hash exactly [`LEGACY_PREFIX_LEN`] bytes, mixing `0` for bytes past the
    /// end of a shorter key.
    ///
    /// For ASCII keys this reproduces the slot placement of the older
    /// word-list tables, which only ever hashed the first machine word of a
    /// key. Bytes of `0x80` and above are mixed as unsigned values, so
    /// non-ASCII keys may land elsewhere than they did there. Keys sharing a
    /// four byte prefix always share a home index in this mode.
    LegacyPrefix,
}

impl KeyHashing {
    /// Hash `key` according to this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use redact::hash::KeyHashing;
    ///
    /// let full = KeyHashing::Full;
    /// assert_ne!(full.hash(b"ABCDEF"), full.hash(b"ABCDXYZ"));
    ///
    /// let legacy = KeyHashing::LegacyPrefix;
    /// assert_eq!(legacy.hash(b"ABCDEF"), legacy.hash(b"ABCDXYZ"));
    /// ```
    pub fn hash(self, key: &[u8]) -> u32 {
        match self {
            KeyHashing::Full => one_at_a_time(key),
            KeyHashing::LegacyPrefix => {
                let mut prefix = [0u8; LEGACY_PREFIX_LEN];
                let n = key.len().min(LEGACY_PREFIX_LEN);
                prefix[..n].copy_from_slice(&key[..n]);
                one_at_a_time(&prefix)
            }
        }
    }
}
