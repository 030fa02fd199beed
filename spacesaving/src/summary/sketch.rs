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

//! Stream-Summary sketch implementation.

use std::hash::Hash;

use crate::summary::position_map::PositionMap;

/// A counted item tracked by a [`StreamSummary`].
///
/// Each counter carries the item, its approximate count, and an upper bound
/// on how much the count may overstate the true frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<T> {
    item: T,
    count: u64,
    error_rate: u64,
}

impl<T> Counter<T> {
    /// Returns the item value.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the approximate count for the item.
    ///
    /// This value is never smaller than the item's true frequency.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the maximum possible overestimation of the count.
    ///
    /// This is zero unless the counter was installed by evicting another
    /// item, in which case it is the evicted item's count. The true frequency
    /// is at least `count - error_rate`.
    pub fn error_rate(&self) -> u64 {
        self.error_rate
    }
}

/// Space-Saving sketch over a ranked list of counters.
///
/// The sketch tracks at most `capacity` items at a time, kept sorted by count
/// in descending order. Observing an untracked item while full evicts the
/// minimum counter and transfers its count to the new item.
///
/// See [`crate::summary`] for an overview and error guarantees.
#[derive(Debug, Clone)]
pub struct StreamSummary<T> {
    capacity: usize,
    counters: Vec<Counter<T>>,
    index: PositionMap<T>,
    observed: u64,
}

impl<T: Eq + Hash> StreamSummary<T> {
    /// Creates a new summary tracking at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        Self {
            capacity,
            counters: Vec::new(),
            index: PositionMap::with_capacity(capacity),
            observed: 0,
        }
    }

    /// Returns the maximum number of items the summary can track.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently tracked.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Returns true if no items have been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Returns the lifetime total of all observed counts.
    ///
    /// This is the number of [`StreamSummary::observe`] calls plus the counts
    /// passed to [`StreamSummary::observe_with_count`]; it is never reset.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Returns the top `n` counters in descending order of count.
    ///
    /// If fewer than `n` items are tracked, all tracked counters are
    /// returned. The slice reflects the summary's state at call time.
    pub fn top(&self, n: usize) -> &[Counter<T>] {
        &self.counters[..n.min(self.counters.len())]
    }

    /// Returns an iterator over all tracked counters in descending order of
    /// count.
    pub fn iter(&self) -> impl Iterator<Item = &Counter<T>> {
        self.counters.iter()
    }

    /// Returns the estimated frequency for an item.
    ///
    /// If the item is tracked this is its counter's count, which never
    /// undercounts the true frequency. Otherwise it is zero.
    pub fn estimate(&self, item: &T) -> u64 {
        match self.index.get(item) {
            Some(position) => self.counters[position].count,
            None => 0,
        }
    }

    /// Returns the guaranteed lower bound frequency for an item.
    ///
    /// This value is guaranteed to be no larger than the true frequency.
    /// If the item is not tracked, the lower bound is zero.
    pub fn lower_bound(&self, item: &T) -> u64 {
        match self.index.get(item) {
            Some(position) => {
                let counter = &self.counters[position];
                counter.count - counter.error_rate
            }
            None => 0,
        }
    }

    /// Returns the guaranteed upper bound frequency for an item.
    ///
    /// This value is guaranteed to be no smaller than the true frequency. For
    /// an untracked item it is the minimum tracked count once the summary is
    /// full, since an untracked item cannot have been observed more often
    /// than the counter it would have had to evict.
    pub fn upper_bound(&self, item: &T) -> u64 {
        match self.index.get(item) {
            Some(position) => self.counters[position].count,
            None if self.counters.len() == self.capacity => {
                self.counters[self.counters.len() - 1].count
            }
            None => 0,
        }
    }

    /// Adds an observation of an item with a count of one.
    pub fn observe(&mut self, item: T)
    where
        T: Clone,
    {
        self.observe_with_count(item, 1);
    }

    /// Adds an observation of an item with an associated count.
    ///
    /// A count of zero is a no-op.
    pub fn observe_with_count(&mut self, item: T, count: u64)
    where
        T: Clone,
    {
        if count == 0 {
            return;
        }
        self.observed += count;
        if let Some(position) = self.index.get(&item) {
            self.counters[position].count += count;
            self.promote(position);
        } else if self.counters.len() < self.capacity {
            let position = self.counters.len();
            self.index.insert(item.clone(), position);
            self.counters.push(Counter {
                item,
                count,
                error_rate: 0,
            });
            self.promote(position);
        } else {
            // The tail counter is the minimum by the sort invariant.
            let position = self.counters.len() - 1;
            let evicted_count = self.counters[position].count;
            self.index.remove(&self.counters[position].item);
            self.index.insert(item.clone(), position);
            self.counters[position] = Counter {
                item,
                count: evicted_count + count,
                error_rate: evicted_count,
            };
            self.promote(position);
        }
    }

    /// Restores descending order after the counter at `position` grew, by
    /// swapping it past strictly smaller left neighbors. Ties keep their
    /// existing order.
    fn promote(&mut self, mut position: usize) {
        while position > 0 && self.counters[position].count > self.counters[position - 1].count {
            self.counters.swap(position - 1, position);
            self.index.set(&self.counters[position - 1].item, position - 1);
            self.index.set(&self.counters[position].item, position);
            position -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StreamSummary;

    // Public behavior is covered by the integration tests; these pin the
    // internal index against the counter list.

    #[test]
    fn index_tracks_positions_through_promotions_and_evictions() {
        let mut summary = StreamSummary::new(3);
        for item in ["a", "b", "c", "c", "b", "d", "d"] {
            summary.observe(item);
            for (position, counter) in summary.iter().enumerate() {
                assert_eq!(summary.index.get(counter.item()), Some(position));
            }
            assert_eq!(summary.index.num_active(), summary.len());
        }
    }

    #[test]
    fn evicted_item_leaves_the_index() {
        let mut summary = StreamSummary::new(1);
        summary.observe("a");
        summary.observe("b");
        assert_eq!(summary.index.get(&"a"), None);
        assert_eq!(summary.index.get(&"b"), Some(0));
    }
}
