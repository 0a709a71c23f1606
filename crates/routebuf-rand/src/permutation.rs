// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unbiased permutation generation with the inside-out Fisher-Yates shuffle.
//!
//! # Algorithm
//!
//! For `i` in `0..n`:
//! 1. Draw `j` uniformly from `[0, i]` (`j = 0` for `i == 0`, no draw)
//! 2. If `j != i`, move `result[j]` to `result[i]`
//! 3. Store `i` at `result[j]`
//!
//! A single forward pass, O(n) time, no identity array to pre-populate.
//! Equivalent to sampling positions without replacement.
//!
//! # Uniformity
//!
//! `j` comes from [`next_index`], which rejects the low `2^64 mod (i + 1)`
//! draws so every index in range is equally likely.

use alloc::vec;
use alloc::vec::Vec;

use routebuf_util::fast_zeroize_slice;

use crate::error::RandomError;
use crate::traits::RandomSource;

/// Consecutive rejected draws tolerated before the source is given up on.
///
/// A healthy source is rejected with probability below `n / 2^64` per draw.
pub const MAX_REJECTIONS: usize = 128;

/// Draws a uniform index in `[0, n)` from `rng`.
///
/// Uses rejection sampling to avoid modulo bias.
///
/// # Errors
///
/// - Whatever `rng` returns
/// - [`RandomError::SourceExhausted`] after [`MAX_REJECTIONS`] rejected draws
///   in a row (e.g. a source stuck at 0)
///
/// # Panics
///
/// Debug builds panic if `n` is 0.
#[inline(always)]
pub fn next_index<R: RandomSource + ?Sized>(rng: &mut R, n: usize) -> Result<usize, RandomError> {
    debug_assert!(n > 0, "n must be non-zero");

    let n_u64 = n as u64;
    let threshold = n_u64.wrapping_neg() % n_u64;

    for _ in 0..MAX_REJECTIONS {
        let r = rng.next_u64()?;
        if r >= threshold {
            return Ok((r % n_u64) as usize);
        }
    }

    Err(RandomError::SourceExhausted)
}

/// Fills `out` with a uniformly random permutation of `[0, out.len())`.
///
/// Previous contents of `out` are ignored. On error `out` is zeroized, so a
/// half-built permutation never survives.
///
/// # Example
///
/// ```rust
/// use routebuf_rand::permutation::{fill_permutation, is_permutation};
/// use routebuf_rand::Xorshift64;
///
/// let mut rng = Xorshift64::new(42).expect("Failed to new()");
/// let mut routes = [0usize; 8];
/// fill_permutation(&mut routes, &mut rng).expect("Failed to fill_permutation()");
///
/// assert!(is_permutation(&routes));
/// ```
pub fn fill_permutation<R: RandomSource + ?Sized>(
    out: &mut [usize],
    rng: &mut R,
) -> Result<(), RandomError> {
    for i in 0..out.len() {
        let j = if i == 0 {
            0
        } else {
            match next_index(rng, i + 1) {
                Ok(j) => j,
                Err(e) => {
                    fast_zeroize_slice(out);
                    return Err(e);
                }
            }
        };

        if j != i {
            out[i] = out[j];
        }
        out[j] = i;
    }

    Ok(())
}

/// Returns a freshly allocated uniformly random permutation of `[0, n)`.
///
/// `n == 0` yields an empty vector without touching `rng`.
pub fn generate_permutation<R: RandomSource + ?Sized>(
    n: usize,
    rng: &mut R,
) -> Result<Vec<usize>, RandomError> {
    let mut result = vec![0usize; n];
    fill_permutation(&mut result, rng)?;

    Ok(result)
}

/// Returns `true` if `candidate` holds every index of `[0, candidate.len())`
/// exactly once.
///
/// # Example
///
/// ```rust
/// use routebuf_rand::permutation::is_permutation;
///
/// assert!(is_permutation(&[2, 0, 1]));
/// assert!(!is_permutation(&[0, 0, 1]));
/// assert!(!is_permutation(&[0, 1, 3]));
/// assert!(is_permutation(&[]));
/// ```
pub fn is_permutation(candidate: &[usize]) -> bool {
    let mut seen = vec![false; candidate.len()];

    for &index in candidate {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }

    true
}
