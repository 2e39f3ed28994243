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

use std::hash::Hasher;

/// Bob Jenkins' one-at-a-time hash, a 32-bit byte-wise mixing hash.
///
/// The accumulator is mixed on every [`write`](Hasher::write) and finalized
/// by [`finish32`](Self::finish32), so a hasher can be fed in pieces.
#[derive(Debug, Default, Clone, Copy)]
pub struct OneAtATime {
    acc: u32,
}

impl OneAtATime {
    /// Create a hasher with a zero accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mix one byte into the accumulator.
    #[inline]
    fn mix(&mut self, byte: u8) {
        self.acc = self.acc.wrapping_add(byte as u32);
        self.acc = self.acc.wrapping_add(self.acc << 10);
        self.acc ^= self.acc >> 6;
    }

    /// Finalize the accumulator into the 32-bit hash.
    pub fn finish32(&self) -> u32 {
        let mut hash = self.acc;
        hash = hash.wrapping_add(hash << 3);
        hash ^= hash >> 11;
        hash = hash.wrapping_add(hash << 15);
        hash
    }
}

impl Hasher for OneAtATime {
    fn finish(&self) -> u64 {
        self.finish32() as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.mix(byte);
        }
    }
}

/// Hash `key` in one call.
///
/// # Examples
///
/// ```
/// use redact::hash::one_at_a_time;
///
/// assert_eq!(one_at_a_time(b"a"), 0xca2e9442);
/// ```
pub fn one_at_a_time(key: &[u8]) -> u32 {
    let mut hasher = OneAtATime::new();
    hasher.write(key);
    hasher.finish32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(one_at_a_time(b""), 0);
        assert_eq!(one_at_a_time(b"a"), 0xca2e9442);
        assert_eq!(
            one_at_a_time(b"The quick brown fox jumps over the lazy dog"),
            0x519e91f5
        );
    }

    #[test]
    fn test_incremental_writes_match_one_shot() {
        let key = b"The quick brown fox jumps over the lazy dog";
        let mut hasher = OneAtATime::new();
        for chunk in key.chunks(5) {
            hasher.write(chunk);
        }
        assert_eq!(hasher.finish32(), one_at_a_time(key));
        assert_eq!(hasher.finish(), one_at_a_time(key) as u64);
    }
}
