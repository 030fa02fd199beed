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

//! Stream-Summary sketch for approximate top-k frequency counting.
//!
//! # Overview
//!
//! This sketch is based on the paper ["Efficient Computation of Frequent and
//! Top-k Elements in Data Streams"](https://doi.org/10.1007/978-3-540-30570-5_27)
//! by Ahmed Metwally, Divyakant Agrawal, and Amr El Abbadi, commonly known as
//! the Space-Saving algorithm.
//!
//! The sketch maintains a fixed number of counters, one per tracked item of
//! type `T`, kept sorted by count in descending order. When a new item
//! arrives and every counter is taken, the minimum counter is evicted and the
//! new item inherits its count, recording the inherited amount as the
//! counter's maximum possible overestimation.
//!
//! This implementation provides the following capabilities:
//! * Observe items one at a time, or with an associated count.
//! * Return the top `n` tracked items in descending order of count.
//! * Estimate the frequency of any item.
//! * Return upper and lower bounds for any item, such that the true frequency
//!   is always between the upper and lower bounds.
//! * Report the lifetime total of all observations.
//!
//! # Accuracy
//!
//! All guarantees are deterministic. For an item that has never been evicted,
//! the reported count is exact. For any tracked item, the true frequency `f`
//! satisfies `count - error_rate <= f <= count`. The minimum tracked count
//! never exceeds `observed / capacity`, so any item whose true frequency
//! exceeds `observed / capacity` is guaranteed to be tracked.
//!
//! # Background
//!
//! Space-Saving belongs to the counter-based family of frequent-items
//! algorithms descending from the Misra-Gries algorithm:
//! * "Finding repeated elements", Misra, Gries, 1982
//! * "Frequency estimation of Internet packet streams with limited space"
//!   Demaine, Lopez-Ortiz, Munro, 2002
//! * "Efficient Computation of Frequent and Top-k Elements in Data Streams"
//!   Metwally, Agrawal, El Abbadi, 2006
//!
//! Unlike sampling or hashing based sketches, the counters here never
//! undercount: eviction transfers the evicted count to the new item, so every
//! reported count is an upper bound on the true frequency.
//!
//! # Examples
//!
//! ```
//! # use spacesaving::summary::StreamSummary;
//! let mut summary = StreamSummary::new(8);
//! summary.observe_with_count("alpha", 3);
//! summary.observe("beta");
//! summary.observe("beta");
//! summary.observe("gamma");
//!
//! let top = summary.top(2);
//! assert_eq!(top[0].item(), &"alpha");
//! assert_eq!(top[1].item(), &"beta");
//! assert_eq!(summary.observed(), 6);
//! ```
//!
//! For use from multiple threads, wrap the summary in
//! [`SharedStreamSummary`]:
//!
//! ```
//! # use spacesaving::summary::SharedStreamSummary;
//! let summary = SharedStreamSummary::new(8);
//! std::thread::scope(|scope| {
//!     scope.spawn(|| summary.observe("alpha"));
//!     scope.spawn(|| summary.observe("alpha"));
//! });
//! assert_eq!(summary.estimate(&"alpha"), 2);
//! ```

mod position_map;
mod shared;
mod sketch;

pub use self::shared::SharedStreamSummary;
pub use self::sketch::Counter;
pub use self::sketch::StreamSummary;
