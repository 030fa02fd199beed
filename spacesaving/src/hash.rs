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

//! MurmurHash3 implementation used for item hashing.
//!
//! This is the 128-bit x64 variant of MurmurHash3 by Austin Appleby, exposed
//! as a [`std::hash::Hasher`] so that any `T: Hash` item can be hashed into
//! the summary's identity index.

use std::hash::Hasher;

/// The default seed used when hashing items.
pub const DEFAULT_UPDATE_SEED: u64 = 9001;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ab2d_914c_3490;

/// MurmurHash3 x64 128 as a [`Hasher`].
///
/// Written bytes are buffered and digested on [`Hasher::finish`], which
/// returns the first 64-bit lane of the 128-bit digest. The full digest is
/// available through [`MurmurHash3X64128::finish128`].
#[derive(Debug, Clone)]
pub struct MurmurHash3X64128 {
    seed: u64,
    buffer: Vec<u8>,
}

impl MurmurHash3X64128 {
    /// Creates a hasher with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            buffer: Vec::new(),
        }
    }

    /// Returns both 64-bit lanes of the 128-bit digest of the bytes written
    /// so far.
    pub fn finish128(&self) -> (u64, u64) {
        digest(&self.buffer, self.seed)
    }
}

impl Default for MurmurHash3X64128 {
    fn default() -> Self {
        Self::with_seed(DEFAULT_UPDATE_SEED)
    }
}

impl Hasher for MurmurHash3X64128 {
    fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    fn finish(&self) -> u64 {
        self.finish128().0
    }
}

fn digest(data: &[u8], seed: u64) -> (u64, u64) {
    let num_blocks = data.len() / 16;
    let mut h1 = seed;
    let mut h2 = seed;

    for block in 0..num_blocks {
        let mut k1 = read_u64_le(data, block * 16);
        let mut k2 = read_u64_le(data, block * 16 + 8);

        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;
        h2 = h2.rotate_left(31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    let tail = &data[num_blocks * 16..];
    if tail.len() > 8 {
        let mut k2: u64 = 0;
        for (i, &byte) in tail.iter().enumerate().skip(8) {
            k2 ^= (byte as u64) << (8 * (i - 8));
        }
        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;
    }
    if !tail.is_empty() {
        let mut k1: u64 = 0;
        for (i, &byte) in tail.iter().enumerate().take(8) {
            k1 ^= (byte as u64) << (8 * i);
        }
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
    }

    h1 ^= data.len() as u64;
    h2 ^= data.len() as u64;
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    h1 = fmix64(h1);
    h2 = fmix64(h2);
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    (h1, h2)
}

#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

#[inline]
fn read_u64_le(bytes: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
        bytes[offset + 4],
        bytes[offset + 5],
        bytes[offset + 6],
        bytes[offset + 7],
    ])
}
