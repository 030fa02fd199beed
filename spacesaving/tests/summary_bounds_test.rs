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

use std::collections::HashMap;

use googletest::prelude::*;
use spacesaving::summary::StreamSummary;

/// Staircase workload: item `i` of `0..50` is observed `50 - i` times, with
/// the observations interleaved round-robin so ranks keep changing.
fn staircase_summary(capacity: usize) -> (StreamSummary<usize>, HashMap<usize, u64>) {
    let mut summary = StreamSummary::new(capacity);
    let mut true_counts = HashMap::new();
    for round in 0..50usize {
        for item in 0..=round {
            summary.observe(item);
            *true_counts.entry(item).or_insert(0u64) += 1;
        }
    }
    (summary, true_counts)
}

#[gtest]
fn counts_bracket_the_true_frequency() {
    let (summary, true_counts) = staircase_summary(8);
    for counter in summary.iter() {
        let true_count = true_counts[counter.item()];
        assert_that!(counter.count(), ge(true_count));
        assert_that!(counter.count() - counter.error_rate(), le(true_count));
    }
}

#[gtest]
fn resident_counts_sum_to_the_observed_total() {
    let (summary, true_counts) = staircase_summary(8);
    let total: u64 = true_counts.values().sum();
    let resident: u64 = summary.iter().map(|counter| counter.count()).sum();
    assert_that!(summary.observed(), eq(total));
    assert_that!(resident, eq(total));
}

#[gtest]
fn minimum_count_is_bounded_by_observed_over_capacity() {
    let (summary, _) = staircase_summary(8);
    let minimum = summary
        .iter()
        .map(|counter| counter.count())
        .min()
        .expect("summary is non-empty");
    assert_that!(minimum * 8, le(summary.observed()));
}

#[gtest]
fn point_queries_match_the_resident_counters() {
    let (summary, _) = staircase_summary(8);
    for counter in summary.iter() {
        assert_that!(summary.estimate(counter.item()), eq(counter.count()));
        assert_that!(
            summary.upper_bound(counter.item()),
            eq(counter.count())
        );
        assert_that!(
            summary.lower_bound(counter.item()),
            eq(counter.count() - counter.error_rate())
        );
    }
}

#[gtest]
fn heavy_hitter_above_the_threshold_is_always_tracked() {
    let mut summary = StreamSummary::new(4);
    for i in 0..100usize {
        summary.observe("heavy".to_string());
        summary.observe("heavy".to_string());
        summary.observe(format!("noise{i}"));
    }
    // True frequency 200 exceeds observed / capacity = 75.
    assert_that!(summary.observed(), eq(300));
    assert_that!(summary.estimate(&"heavy".to_string()), ge(200));
    assert_that!(summary.top(1)[0].item().as_str(), eq("heavy"));
}
