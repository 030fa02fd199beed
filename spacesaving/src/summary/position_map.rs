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

//! Position index for the ranked counter list.
//!
//! This linear-probing hash map maps each resident item to its position in
//! the summary's counter list. Deletion uses backward shifting so that probe
//! chains stay intact without tombstones.

use std::hash::Hash;
use std::hash::Hasher;

use crate::hash::MurmurHash3X64128;

const MIN_MAP_SIZE: usize = 8;
const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;
const DRIFT_LIMIT: usize = 1024;

/// Linear-probing hash map from items to counter-list positions.
///
/// The table grows by doubling up to the size needed for the summary's fixed
/// capacity; the summary removes an entry before each insert once full, so
/// occupancy never exceeds that capacity.
#[derive(Debug, Clone)]
pub(super) struct PositionMap<T> {
    max_length: usize,
    load_threshold: usize,
    keys: Vec<Option<T>>,
    values: Vec<usize>,
    states: Vec<u16>,
    num_active: usize,
}

impl<T: Eq + Hash> PositionMap<T> {
    /// Creates a map able to hold `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut max_length = MIN_MAP_SIZE;
        while max_length * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR < capacity {
            max_length *= 2;
        }
        let mut map = Self {
            max_length,
            load_threshold: 0,
            keys: Vec::new(),
            values: Vec::new(),
            states: Vec::new(),
            num_active: 0,
        };
        map.allocate(MIN_MAP_SIZE);
        map
    }

    /// Returns the position for `key`, if resident.
    pub fn get(&self, key: &T) -> Option<usize> {
        let probe = self.hash_probe(key);
        if self.states[probe] > 0 {
            return Some(self.values[probe]);
        }
        None
    }

    /// Inserts `key` at `position`, overwriting the position if the key is
    /// already resident.
    pub fn insert(&mut self, key: T, position: usize) {
        if self.num_active >= self.load_threshold && self.keys.len() < self.max_length {
            self.resize(self.keys.len() * 2);
        }
        let mask = self.keys.len() - 1;
        let mut probe = (hash_item(&key) as usize) & mask;
        let mut drift: usize = 1;
        while self.states[probe] != 0 {
            let matches = self.keys[probe]
                .as_ref()
                .map(|existing| existing == &key)
                .unwrap_or(false);
            if matches {
                break;
            }
            probe = (probe + 1) & mask;
            drift += 1;
            debug_assert!(drift < DRIFT_LIMIT, "drift limit exceeded");
        }
        if self.states[probe] == 0 {
            self.keys[probe] = Some(key);
            self.states[probe] = drift as u16;
            self.num_active += 1;
        }
        self.values[probe] = position;
    }

    /// Re-points a resident `key` at `position`.
    ///
    /// Used when a rank swap moves a counter; the key must be resident.
    pub fn set(&mut self, key: &T, position: usize) {
        let probe = self.hash_probe(key);
        debug_assert!(self.states[probe] > 0, "set of non-resident key");
        self.values[probe] = position;
    }

    /// Removes `key` from the map.
    pub fn remove(&mut self, key: &T) {
        let probe = self.hash_probe(key);
        debug_assert!(self.states[probe] > 0, "remove of non-resident key");
        if self.states[probe] > 0 {
            self.hash_delete(probe);
            self.num_active -= 1;
        }
    }

    /// Returns the number of resident keys.
    pub fn num_active(&self) -> usize {
        self.num_active
    }

    fn allocate(&mut self, map_size: usize) {
        self.keys = (0..map_size).map(|_| None).collect();
        self.values = vec![0; map_size];
        self.states = vec![0; map_size];
        self.load_threshold = map_size * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR;
    }

    fn resize(&mut self, new_size: usize) {
        let mut old_keys = std::mem::take(&mut self.keys);
        let old_values = std::mem::take(&mut self.values);
        let old_states = std::mem::take(&mut self.states);
        self.allocate(new_size);
        self.num_active = 0;
        for i in 0..old_keys.len() {
            if old_states[i] > 0 {
                if let Some(key) = old_keys[i].take() {
                    self.insert(key, old_values[i]);
                }
            }
        }
    }

    fn hash_probe(&self, key: &T) -> usize {
        let mask = self.keys.len() - 1;
        let mut probe = (hash_item(key) as usize) & mask;
        while self.states[probe] > 0 {
            let matches = self.keys[probe]
                .as_ref()
                .map(|existing| existing == key)
                .unwrap_or(false);
            if matches {
                break;
            }
            probe = (probe + 1) & mask;
        }
        probe
    }

    fn hash_delete(&mut self, mut delete_probe: usize) {
        self.states[delete_probe] = 0;
        self.keys[delete_probe] = None;
        let mut drift: usize = 1;
        let mask = self.keys.len() - 1;
        let mut probe = (delete_probe + drift) & mask;
        while self.states[probe] != 0 {
            if self.states[probe] as usize > drift {
                self.keys[delete_probe] = self.keys[probe].take();
                self.values[delete_probe] = self.values[probe];
                self.states[delete_probe] = self.states[probe] - drift as u16;
                self.states[probe] = 0;
                drift = 0;
                delete_probe = probe;
            }
            probe = (probe + 1) & mask;
            drift += 1;
            debug_assert!(drift < DRIFT_LIMIT, "drift limit exceeded");
        }
    }
}

#[inline]
fn hash_item<T: Hash>(item: &T) -> u64 {
    let mut hasher = MurmurHash3X64128::default();
    item.hash(&mut hasher);
    hasher.finish()
}
