// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Adapters turning foreign generators into a [`RandomSource`].

use core::fmt;

use rand_core::RngCore;

use crate::error::RandomError;
use crate::traits::RandomSource;

/// Binds a free function or a closure as a [`RandomSource`].
///
/// A closure capturing `&mut obj` covers the object-plus-method case:
///
/// ```rust
/// use routebuf_rand::{FnRandomSource, RandomSource};
///
/// struct Counter(u64);
///
/// impl Counter {
///     fn bump(&mut self) -> u64 {
///         self.0 += 1;
///         self.0
///     }
/// }
///
/// let mut counter = Counter(0);
/// let mut source = FnRandomSource::new(|| counter.bump());
///
/// assert_eq!(source.next_u64(), Ok(1));
/// assert_eq!(source.next_u64(), Ok(2));
/// ```
pub struct FnRandomSource<F> {
    f: F,
}

impl<F: FnMut() -> u64> FnRandomSource<F> {
    /// Wraps `f`; every [`RandomSource::next_u64`] call invokes it once.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: FnMut() -> u64> RandomSource for FnRandomSource<F> {
    #[inline(always)]
    fn next_u64(&mut self) -> Result<u64, RandomError> {
        Ok((self.f)())
    }
}

impl<F> fmt::Debug for FnRandomSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRandomSource").finish_non_exhaustive()
    }
}

/// Adapts any [`rand_core::RngCore`] generator.
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use routebuf_rand::{RandomSource, RngCoreSource};
///
/// let mut a = RngCoreSource::new(StdRng::seed_from_u64(7));
/// let mut b = RngCoreSource::new(StdRng::seed_from_u64(7));
///
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
pub struct RngCoreSource<R> {
    rng: R,
}

impl<R: RngCore> RngCoreSource<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngCoreSource<R> {
    #[inline(always)]
    fn next_u64(&mut self) -> Result<u64, RandomError> {
        Ok(self.rng.next_u64())
    }
}

impl<R> fmt::Debug for RngCoreSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RngCoreSource").finish_non_exhaustive()
    }
}
