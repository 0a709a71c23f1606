// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use routebuf_util::zeroize_primitive;

use crate::error::RandomError;
use crate::system::SystemRandomSource;
use crate::traits::RandomSource;

/// Xorshift64 PRNG.
///
/// Fast, with good statistical properties, but **not** cryptographic: anyone
/// who learns the seed can replay every layout built from it. Use it for
/// reproducible layouts and tests, and [`SystemRandomSource`] otherwise.
///
/// # Properties
///
/// - Period: 2^64 - 1
/// - Shifts: (13, 7, 17)
///
/// # Reference
///
/// Marsaglia, George (2003). "Xorshift RNGs". Journal of Statistical Software.
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Creates a generator from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidSeed`] if `seed` is 0 (xorshift64 would
    /// stay at zero forever).
    pub fn new(seed: u64) -> Result<Self, RandomError> {
        if seed == 0 {
            return Err(RandomError::InvalidSeed);
        }

        Ok(Self { state: seed })
    }

    /// Creates a generator seeded from [`SystemRandomSource`].
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EntropyNotAvailable`] if the OS source fails.
    pub fn from_entropy() -> Result<Self, RandomError> {
        let mut system = SystemRandomSource::new();

        loop {
            let mut seed = system.next_u64()?;

            if seed != 0 {
                let rng = Self { state: seed };
                zeroize_primitive(&mut seed);
                return Ok(rng);
            }
        }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    #[inline(always)]
    fn next_u64(&mut self) -> Result<u64, RandomError> {
        Ok(self.step())
    }
}

impl Drop for Xorshift64 {
    fn drop(&mut self) {
        zeroize_primitive(&mut self.state);
    }
}

impl fmt::Debug for Xorshift64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Xorshift64([REDACTED])")
    }
}
