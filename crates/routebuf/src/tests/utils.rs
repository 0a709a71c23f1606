// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for routebuf.

use routebuf_rand::Xorshift64;

use crate::obfuscated_buffer::ObfuscatedBuffer;

pub(crate) fn seeded(seed: u64) -> Xorshift64 {
    Xorshift64::new(seed).expect("Failed to Xorshift64::new()")
}

pub(crate) fn seeded_buffer(size: usize, alignment: usize, seed: u64) -> ObfuscatedBuffer<Xorshift64> {
    ObfuscatedBuffer::new(size, alignment, seeded(seed)).expect("Failed to ObfuscatedBuffer::new()")
}

/// Reverse permutation: logical `i` maps to physical `len - 1 - i`.
pub(crate) fn reversed_routes(len: usize) -> Vec<usize> {
    (0..len).rev().collect()
}
