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

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use spacesaving::summary::StreamSummary;

const CAPACITY: usize = 32;
const STREAM_LEN: usize = 10_000;
const UNIVERSE: u64 = 400;

fn run_stream(
    mut next_item: impl FnMut() -> u64,
) -> (StreamSummary<u64>, HashMap<u64, u64>) {
    let mut summary = StreamSummary::new(CAPACITY);
    let mut true_counts = HashMap::new();
    for step in 0..STREAM_LEN {
        let item = next_item();
        summary.observe(item);
        *true_counts.entry(item).or_insert(0u64) += 1;

        assert_eq!(summary.observed(), step as u64 + 1);
        assert!(summary.len() <= CAPACITY);
        for pair in summary.top(CAPACITY).windows(2) {
            assert!(pair[0].count() >= pair[1].count());
        }
    }
    (summary, true_counts)
}

fn assert_guarantees(summary: &StreamSummary<u64>, true_counts: &HashMap<u64, u64>) {
    assert_eq!(summary.len(), CAPACITY);

    // Point queries agree with the ranked counters.
    for counter in summary.iter() {
        assert_eq!(summary.estimate(counter.item()), counter.count());
    }

    let min_count = summary
        .iter()
        .map(|counter| counter.count())
        .min()
        .expect("summary is non-empty");
    assert!(min_count * CAPACITY as u64 <= summary.observed());

    let threshold = summary.observed() / CAPACITY as u64;
    for item in 0..UNIVERSE {
        let true_count = true_counts.get(&item).copied().unwrap_or(0);
        assert!(summary.lower_bound(&item) <= true_count);
        assert!(summary.upper_bound(&item) >= true_count);

        // Any item more frequent than observed / capacity must be tracked.
        if true_count > threshold {
            assert!(summary.estimate(&item) > 0);
        }
    }
}

#[test]
fn test_skewed_stream() {
    let mut rng = StdRng::seed_from_u64(7);
    let (summary, true_counts) = run_stream(|| {
        let r = rng.random_range(0..UNIVERSE);
        r * r / UNIVERSE
    });
    assert_guarantees(&summary, &true_counts);

    // The squared draw concentrates roughly 5% of the stream on item 0,
    // well above observed / capacity, so it must be tracked with a count at
    // least its true frequency.
    assert!(summary.estimate(&0) >= true_counts[&0]);
}

#[test]
fn test_uniform_stream() {
    let mut rng = StdRng::seed_from_u64(99);
    let (summary, true_counts) = run_stream(|| rng.random_range(0..UNIVERSE));
    assert_guarantees(&summary, &true_counts);
}

#[test]
fn test_bursty_stream_keeps_late_heavy_hitter() {
    // A flood of distinct noise first, then a single item observed more than
    // observed / capacity times in total.
    let mut summary = StreamSummary::new(CAPACITY);
    for i in 0..3_000u64 {
        summary.observe(1_000 + i);
    }
    for _ in 0..200 {
        summary.observe(0);
    }
    assert!(200 > summary.observed() / CAPACITY as u64);
    assert!(summary.estimate(&0) >= 200);
    assert_eq!(summary.top(1)[0].item(), &0);
}
