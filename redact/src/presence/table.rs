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
use crate::presence::PresenceTableBuilder;

/// One position in the slot array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Not written since the table was created.
    Empty,
    /// Holds a stored key.
    Occupied(Box<[u8]>),
    /// Held a key that has been removed. Counts as used for probing and is
    /// never handed out again.
    Tombstoned,
}

impl Slot {
    /// Returns whether the slot was never written.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns the stored key, if the slot holds one.
    pub fn key(&self) -> Option<&[u8]> {
        match self {
            Slot::Occupied(key) => Some(&**key),
            _ => None,
        }
    }
}

/// A fixed-capacity set of byte strings with tombstone deletion.
///
/// The handle owns at most one live slot array at a time. [`destroy`] releases
/// it and [`create`] allocates a fresh, all-empty one of the same capacity.
/// While no array is live, mutating operations fail with
/// [`ErrorKind::NoTable`](crate::error::ErrorKind::NoTable) and
/// [`contains`] answers `false`.
///
/// [`create`]: PresenceTable::create
/// [`destroy`]: PresenceTable::destroy
/// [`contains`]: PresenceTable::contains
#[derive(Debug)]
pub struct PresenceTable {
    capacity: usize,
    hashing: KeyHashing,

    // `None` while no table is live: after `destroy` and before `create`.
    slots: Option<Vec<Slot>>,

    num_live: usize,
    num_tombstones: usize,
}

impl PresenceTable {
    /// Create a live table with `capacity` slots and full-key hashing.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0. Use [`PresenceTable::builder`] to get an
    /// error instead.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be at least 1, got {capacity}");
        Self::with_config(capacity, KeyHashing::default())
    }

    /// Returns a builder for creating a presence table.
    pub fn builder() -> PresenceTableBuilder {
        PresenceTableBuilder::default()
    }

    pub(super) fn with_config(capacity: usize, hashing: KeyHashing) -> Self {
        let mut table = Self {
            capacity,
            hashing,
            slots: None,
            num_live: 0,
            num_tombstones: 0,
        };
        table.allocate();
        table
    }

    fn allocate(&mut self) {
        // Probing relies on every slot starting out empty.
        self.slots = Some(vec![Slot::Empty; self.capacity]);
        self.num_live = 0;
        self.num_tombstones = 0;

        #[cfg(feature = "logging")]
        log::debug!("presence table created with {} slots", self.capacity);
    }

    /// Allocate a fresh, empty slot array for a destroyed table.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::AlreadyExists`](crate::error::ErrorKind::AlreadyExists)
    /// if the table is still live.
    pub fn create(&mut self) -> Result<(), Error> {
        if self.slots.is_some() {
            return Err(Error::already_exists().with_context("capacity", self.capacity));
        }
        self.allocate();
        Ok(())
    }

    /// Release every stored key, tombstones included, and the slot array.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoTable`](crate::error::ErrorKind::NoTable) if the
    /// table was already destroyed.
    pub fn destroy(&mut self) -> Result<(), Error> {
        if self.slots.take().is_none() {
            return Err(Error::no_table("destroy"));
        }
        self.num_live = 0;
        self.num_tombstones = 0;

        #[cfg(feature = "logging")]
        log::debug!("presence table destroyed");
        Ok(())
    }

    /// Store a copy of `key` in the first empty slot probed from its home
    /// index.
    ///
    /// Inserting a key that is already present stores a second copy further
    /// along the probe chain.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::NoTable`](crate::error::ErrorKind::NoTable) if the table
    ///   is not live.
    /// - [`ErrorKind::TableFull`](crate::error::ErrorKind::TableFull) if no
    ///   slot is empty. The key is dropped and stored keys are untouched.
    pub fn insert<K: AsRef<[u8]>>(&mut self, key: K) -> Result<(), Error> {
        let key = key.as_ref();
        let home = self.home(key);
        let Some(slots) = self.slots.as_mut() else {
            return Err(Error::no_table("insert"));
        };

        let Some(dest) = find_empty(slots, home) else {
            #[cfg(feature = "logging")]
            log::warn!(
                "presence table full ({} slots), dropping key {:?}",
                self.capacity,
                String::from_utf8_lossy(key)
            );
            return Err(Error::table_full(self.capacity)
                .with_context("key", String::from_utf8_lossy(key)));
        };

        slots[dest] = Slot::Occupied(Box::from(key));
        self.num_live += 1;
        Ok(())
    }

    /// Returns whether `key` is stored. Answers `false` when the table is not
    /// live.
    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> bool {
        let key = key.as_ref();
        match &self.slots {
            Some(slots) => find_index(slots, self.home(key), key).is_some(),
            None => false,
        }
    }

    /// Replace the first stored copy of `key` with a tombstone.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::NoTable`](crate::error::ErrorKind::NoTable) if the table
    ///   is not live.
    /// - [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound) if `key`
    ///   is not stored. Nothing changes.
    pub fn remove<K: AsRef<[u8]>>(&mut self, key: K) -> Result<(), Error> {
        let key = key.as_ref();
        let home = self.home(key);
        let Some(slots) = self.slots.as_mut() else {
            return Err(Error::no_table("remove"));
        };

        let Some(index) = find_index(slots, home, key) else {
            return Err(Error::not_found(key));
        };

        slots[index] = Slot::Tombstoned;
        self.num_live -= 1;
        self.num_tombstones += 1;
        Ok(())
    }

    /// Returns the home index of `key`, or `None` when the table is not live.
    pub fn home_index<K: AsRef<[u8]>>(&self, key: K) -> Option<usize> {
        self.slots.as_ref().map(|_| self.home(key.as_ref()))
    }

    /// Returns the slot at `index`, or `None` when the index is out of range
    /// or the table is not live.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.as_ref().and_then(|slots| slots.get(index))
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how keys are hashed to their home index.
    pub fn hashing(&self) -> KeyHashing {
        self.hashing
    }

    /// Returns whether a slot array is live.
    pub fn is_live(&self) -> bool {
        self.slots.is_some()
    }

    /// Returns the number of stored keys, duplicates included.
    pub fn len(&self) -> usize {
        self.num_live
    }

    /// Returns whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.num_live == 0
    }

    /// Returns the number of tombstoned slots.
    pub fn num_tombstones(&self) -> usize {
        self.num_tombstones
    }

    /// Returns the number of slots that are no longer empty.
    pub fn slots_used(&self) -> usize {
        self.num_live + self.num_tombstones
    }

    /// Returns the fraction of slots that are no longer empty.
    pub fn load_factor(&self) -> f64 {
        self.slots_used() as f64 / self.capacity as f64
    }

    /// Iterate over stored keys in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.slots.iter().flatten().filter_map(Slot::key)
    }

    fn home(&self, key: &[u8]) -> usize {
        self.hashing.hash(key) as usize % self.capacity
    }
}

/// Find the first empty slot probing linearly from `start`, wrapping around
/// at most once.
///
/// Returns `None` if every slot is used.
fn find_empty(slots: &[Slot], start: usize) -> Option<usize> {
    let capacity = slots.len();
    (0..capacity)
        .map(|i| (start + i) % capacity)
        .find(|&index| slots[index].is_empty())
}

/// Find the slot holding exactly `key` on the probe chain that starts at
/// `home`.
///
/// The scan is bounded by the first empty slot reachable from `home`, or by a
/// full revolution when no slot is empty. Tombstones are stepped over.
fn find_index(slots: &[Slot], home: usize, key: &[u8]) -> Option<usize> {
    let capacity = slots.len();
    let num_items = match find_empty(slots, home) {
        Some(stop) => (stop + capacity - home) % capacity,
        None => capacity,
    };

    for i in 0..num_items {
        let index = (home + i) % capacity;
        match &slots[index] {
            // An insertion for this chain would have taken this slot.
            Slot::Empty => return None,
            Slot::Occupied(stored) if stored.first() == key.first() && **stored == *key => {
                return Some(index);
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Generate `n` distinct keys whose home index in `table` is `home`.
    fn keys_with_home(table: &PresenceTable, home: usize, n: usize) -> Vec<String> {
        (0..)
            .map(|i| format!("key_{i}"))
            .filter(|key| table.home_index(key) == Some(home))
            .take(n)
            .collect()
    }

    fn occupied(key: &str) -> Slot {
        Slot::Occupied(Box::from(key.as_bytes()))
    }

    #[test]
    fn test_new_table() {
        let table = PresenceTable::new(16);
        assert!(table.is_live());
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 16);
        assert_eq!(table.slots_used(), 0);
        assert_eq!(table.load_factor(), 0.0);
        assert!((0..16).all(|i| table.slot(i) == Some(&Slot::Empty)));
        assert_eq!(table.slot(16), None);
    }

    #[test]
    #[should_panic(expected = "capacity must be at least 1")]
    fn test_new_with_zero_capacity_panics() {
        let _ = PresenceTable::new(0);
    }

    #[test]
    fn test_find_empty_wraps_around() {
        let slots = vec![Slot::Empty, occupied("A"), Slot::Tombstoned, occupied("B")];
        assert_eq!(find_empty(&slots, 0), Some(0));
        assert_eq!(find_empty(&slots, 1), Some(0));
        assert_eq!(find_empty(&slots, 3), Some(0));

        let slots = vec![occupied("A"), Slot::Tombstoned, Slot::Empty, occupied("B")];
        assert_eq!(find_empty(&slots, 3), Some(2));
    }

    #[test]
    fn test_find_empty_full() {
        let slots = vec![occupied("A"), Slot::Tombstoned, occupied("B")];
        for start in 0..3 {
            assert_eq!(find_empty(&slots, start), None);
        }
    }

    #[test]
    fn test_find_index_bounded_by_empty_slot() {
        // "C" sits past the empty slot, so a probe from 0 can never reach it.
        let slots = vec![occupied("A"), occupied("B"), Slot::Empty, occupied("C")];
        assert_eq!(find_index(&slots, 0, b"A"), Some(0));
        assert_eq!(find_index(&slots, 0, b"B"), Some(1));
        assert_eq!(find_index(&slots, 0, b"C"), None);
        assert_eq!(find_index(&slots, 2, b"C"), None);
        assert_eq!(find_index(&slots, 3, b"C"), Some(3));
    }

    #[test]
    fn test_find_index_wrapped_window() {
        let slots = vec![occupied("B"), Slot::Empty, Slot::Empty, occupied("A")];
        assert_eq!(find_index(&slots, 3, b"A"), Some(3));
        assert_eq!(find_index(&slots, 3, b"B"), Some(0));
        assert_eq!(find_index(&slots, 3, b"Z"), None);
    }

    #[test]
    fn test_find_index_full_revolution() {
        let slots = vec![occupied("A"), Slot::Tombstoned, occupied("B"), occupied("C")];
        assert_eq!(find_index(&slots, 2, b"A"), Some(0));
        assert_eq!(find_index(&slots, 0, b"C"), Some(3));
        assert_eq!(find_index(&slots, 1, b"Z"), None);
    }

    #[test]
    fn test_find_index_requires_exact_match() {
        let slots = vec![occupied("SECRETS"), occupied("SECRET"), Slot::Empty];
        assert_eq!(find_index(&slots, 0, b"SECRET"), Some(1));
        assert_eq!(find_index(&slots, 0, b"SECRETS"), Some(0));
        assert_eq!(find_index(&slots, 0, b"SECRE"), None);
        assert_eq!(find_index(&slots, 0, b""), None);
    }

    #[test]
    fn test_collision_probes_to_next_slot() {
        let mut table = PresenceTable::new(8);
        let keys = keys_with_home(&table, 5, 3);

        for key in &keys {
            table.insert(key).unwrap();
        }

        // Placed at 5, 6, 7 in insertion order.
        for (offset, key) in keys.iter().enumerate() {
            assert_eq!(table.slot(5 + offset).and_then(Slot::key), Some(key.as_bytes()));
            assert!(table.contains(key));
        }
    }

    #[test]
    fn test_collision_chain_wraps_to_front() {
        let mut table = PresenceTable::new(8);
        let keys = keys_with_home(&table, 7, 2);

        table.insert(&keys[0]).unwrap();
        table.insert(&keys[1]).unwrap();

        assert_eq!(table.slot(7).and_then(Slot::key), Some(keys[0].as_bytes()));
        assert_eq!(table.slot(0).and_then(Slot::key), Some(keys[1].as_bytes()));
        assert!(table.contains(&keys[1]));
    }

    #[test]
    fn test_remove_leaves_tombstone_and_keeps_chain() {
        let mut table = PresenceTable::new(8);
        let keys = keys_with_home(&table, 2, 2);
        table.insert(&keys[0]).unwrap();
        table.insert(&keys[1]).unwrap();

        table.remove(&keys[0]).unwrap();

        assert_eq!(table.slot(2), Some(&Slot::Tombstoned));
        assert!(!table.contains(&keys[0]));
        assert!(table.contains(&keys[1]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.num_tombstones(), 1);
        assert_eq!(table.slots_used(), 2);
    }

    #[test]
    fn test_insert_does_not_reuse_tombstone() {
        let mut table = PresenceTable::new(8);
        let keys = keys_with_home(&table, 4, 2);
        table.insert(&keys[0]).unwrap();
        table.remove(&keys[0]).unwrap();

        table.insert(&keys[1]).unwrap();
        assert_eq!(table.slot(4), Some(&Slot::Tombstoned));
        assert_eq!(table.slot(5).and_then(Slot::key), Some(keys[1].as_bytes()));
    }

    #[test]
    fn test_duplicate_insert_stores_two_copies() {
        let mut table = PresenceTable::new(8);
        table.insert("DUP").unwrap();
        table.insert("DUP").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().filter(|key| *key == b"DUP").count(), 2);

        table.remove("DUP").unwrap();
        assert!(table.contains("DUP"));
        table.remove("DUP").unwrap();
        assert!(!table.contains("DUP"));
    }

    #[test]
    fn test_lifecycle() {
        let mut table = PresenceTable::new(4);
        table.insert("A").unwrap();

        assert_eq!(table.create().unwrap_err().kind(), ErrorKind::AlreadyExists);
        assert!(table.contains("A"));

        table.destroy().unwrap();
        assert!(!table.is_live());
        assert_eq!(table.len(), 0);
        assert_eq!(table.home_index("A"), None);
        assert_eq!(table.slot(0), None);
        assert_eq!(table.iter().count(), 0);

        table.create().unwrap();
        assert!(table.is_live());
        assert!(!table.contains("A"));
        assert_eq!(table.slots_used(), 0);
    }
}
