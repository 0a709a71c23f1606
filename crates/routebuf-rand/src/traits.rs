// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;

use crate::error::RandomError;

/// Capability producing uniformly distributed 64-bit values on demand.
///
/// Consumers never depend on the algorithm behind it: OS entropy, a seeded
/// generator, or a replayed sequence in tests all look the same. Calls only
/// mutate the source's own state.
pub trait RandomSource {
    /// Returns the next uniformly distributed `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyNotAvailable`] if the underlying source
    /// cannot produce a value.
    fn next_u64(&mut self) -> Result<u64, RandomError>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline(always)]
    fn next_u64(&mut self) -> Result<u64, RandomError> {
        (**self).next_u64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline(always)]
    fn next_u64(&mut self) -> Result<u64, RandomError> {
        (**self).next_u64()
    }
}
