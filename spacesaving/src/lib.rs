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

//! Approximate top-k frequency counting over data streams in bounded memory.
//!
//! This crate implements the Space-Saving algorithm over a Stream-Summary
//! structure: a fixed-capacity ranked list of counters that approximates the
//! true frequency ranking of an unbounded stream without storing per-item
//! state for every distinct item ever seen. See [`summary`] for the
//! algorithm, its accuracy guarantees, and usage examples.
//!
//! ```
//! # use spacesaving::summary::StreamSummary;
//! let mut summary = StreamSummary::new(2);
//! summary.observe("alpha");
//! summary.observe("alpha");
//! summary.observe("beta");
//! assert_eq!(summary.top(1)[0].item(), &"alpha");
//! assert_eq!(summary.top(1)[0].count(), 2);
//! ```

pub mod hash;
pub mod summary;
