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

//! Thread-safe adapter around the Stream-Summary sketch.

use std::hash::Hash;
use std::sync::RwLock;

use crate::summary::Counter;
use crate::summary::StreamSummary;

/// A [`StreamSummary`] behind a reader-writer lock.
///
/// Observations take the write lock; queries take the read lock, so any
/// number of readers may query concurrently between observations. The
/// underlying summary is unchanged, which keeps single-threaded and
/// concurrent use on one code path.
///
/// # Panics
///
/// Every method panics if the lock is poisoned, that is, if a previous caller
/// panicked while holding it.
#[derive(Debug)]
pub struct SharedStreamSummary<T> {
    inner: RwLock<StreamSummary<T>>,
}

impl<T: Eq + Hash> SharedStreamSummary<T> {
    /// Creates a new shared summary tracking at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(StreamSummary::new(capacity)),
        }
    }

    /// Consumes the adapter and returns the summary inside.
    pub fn into_inner(self) -> StreamSummary<T> {
        self.inner.into_inner().expect("summary lock poisoned")
    }

    /// Adds an observation of an item with a count of one.
    pub fn observe(&self, item: T)
    where
        T: Clone,
    {
        self.write().observe(item);
    }

    /// Adds an observation of an item with an associated count.
    ///
    /// A count of zero is a no-op.
    pub fn observe_with_count(&self, item: T, count: u64)
    where
        T: Clone,
    {
        self.write().observe_with_count(item, count);
    }

    /// Returns clones of the top `n` counters in descending order of count.
    ///
    /// If fewer than `n` items are tracked, all tracked counters are
    /// returned. The result reflects the state at the time the read lock was
    /// held; observations from other threads may land before the caller
    /// inspects it.
    pub fn top(&self, n: usize) -> Vec<Counter<T>>
    where
        T: Clone,
    {
        self.read().top(n).to_vec()
    }

    /// Returns the lifetime total of all observed counts.
    pub fn observed(&self) -> u64 {
        self.read().observed()
    }

    /// Returns the estimated frequency for an item.
    pub fn estimate(&self, item: &T) -> u64 {
        self.read().estimate(item)
    }

    /// Returns the guaranteed lower bound frequency for an item.
    pub fn lower_bound(&self, item: &T) -> u64 {
        self.read().lower_bound(item)
    }

    /// Returns the guaranteed upper bound frequency for an item.
    pub fn upper_bound(&self, item: &T) -> u64 {
        self.read().upper_bound(item)
    }

    /// Returns the maximum number of items the summary can track.
    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }

    /// Returns the number of items currently tracked.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no items have been tracked yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StreamSummary<T>> {
        self.inner.read().expect("summary lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StreamSummary<T>> {
        self.inner.write().expect("summary lock poisoned")
    }
}

impl<T: Eq + Hash> From<StreamSummary<T>> for SharedStreamSummary<T> {
    fn from(summary: StreamSummary<T>) -> Self {
        Self {
            inner: RwLock::new(summary),
        }
    }
}
