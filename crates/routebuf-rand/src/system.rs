// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use routebuf_util::zeroize_primitive;

use crate::error::RandomError;
use crate::traits::RandomSource;

/// System-provided cryptographically secure random number generator.
///
/// Uses the OS-level CSPRNG via `getrandom`:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `BCryptGenRandom`
/// - WASI: `random_get`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandomSource {}

impl SystemRandomSource {
    /// Creates a handle to the OS entropy source.
    pub fn new() -> Self {
        Self {}
    }

    pub(crate) fn next_u64_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
    ) -> Result<u64, RandomError> {
        let mut bytes = [0u8; 8];
        let result = fill_fn(&mut bytes).map_err(|_| RandomError::EntropyNotAvailable);
        let value = u64::from_le_bytes(bytes);

        for byte in bytes.iter_mut() {
            zeroize_primitive(byte);
        }

        result.map(|_| value)
    }
}

impl RandomSource for SystemRandomSource {
    fn next_u64(&mut self) -> Result<u64, RandomError> {
        Self::next_u64_with(&getrandom::fill)
    }
}
