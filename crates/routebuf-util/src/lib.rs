// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Alignment arithmetic and zeroization helpers shared by the routebuf crates.
//!
//! Nothing here allocates. Zeroization helpers use volatile accesses so the
//! optimizer cannot drop writes to memory that is about to be released.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

use core::sync::atomic::{Ordering, compiler_fence};

/// Returns `true` if `alignment` is a non-zero power of two.
///
/// # Example
///
/// ```
/// use routebuf_util::is_valid_alignment;
///
/// assert!(is_valid_alignment(1));
/// assert!(is_valid_alignment(8));
/// assert!(!is_valid_alignment(0));
/// assert!(!is_valid_alignment(12));
/// ```
#[inline(always)]
pub const fn is_valid_alignment(alignment: usize) -> bool {
    alignment.is_power_of_two()
}

/// Rounds `value` up to the next multiple of `alignment`.
///
/// Returns `None` when `alignment` is not a power of two or when the rounded
/// value does not fit in `usize`.
///
/// # Example
///
/// ```
/// use routebuf_util::checked_align_up;
///
/// assert_eq!(checked_align_up(13, 8), Some(16));
/// assert_eq!(checked_align_up(16, 8), Some(16));
/// assert_eq!(checked_align_up(0, 4), Some(0));
/// assert_eq!(checked_align_up(usize::MAX, 2), None);
/// assert_eq!(checked_align_up(3, 3), None);
/// ```
#[inline(always)]
pub const fn checked_align_up(value: usize, alignment: usize) -> Option<usize> {
    if !is_valid_alignment(alignment) {
        return None;
    }

    let mask = alignment - 1;

    match value.checked_add(mask) {
        Some(bumped) => Some(bumped & !mask),
        None => None,
    }
}

/// Rounds `value` up to the next multiple of `alignment`, wrapping on overflow.
///
/// `alignment` must be a power of two; callers validate it up front and use
/// [`checked_align_up`] where the input is not trusted.
#[inline(always)]
pub const fn align_up(value: usize, alignment: usize) -> usize {
    debug_assert!(is_valid_alignment(alignment));

    let mask = alignment.wrapping_sub(1);
    value.wrapping_add(mask) & !mask
}

/// Overwrites every byte of `slice` with zero, front to back.
///
/// Each store is volatile and the loop is followed by a compiler fence, so the
/// writes survive even when the memory is freed right after.
///
/// # Example
///
/// ```
/// use routebuf_util::{fast_zeroize_slice, is_slice_zeroized};
///
/// let mut data = [0xABu8; 64];
/// fast_zeroize_slice(&mut data);
/// assert!(is_slice_zeroized(&data));
/// ```
#[inline(always)]
pub fn fast_zeroize_slice<T: Copy + Default>(slice: &mut [T]) {
    for elem in slice.iter_mut() {
        // Safety: `elem` is a valid, aligned, exclusive reference.
        unsafe { core::ptr::write_volatile(elem, T::default()) };
    }

    compiler_fence(Ordering::SeqCst);
}

/// Zeroizes a single `Copy` value with a volatile write.
///
/// # Example
///
/// ```
/// use routebuf_util::zeroize_primitive;
///
/// let mut seed = 0x1234_5678u64;
/// zeroize_primitive(&mut seed);
/// assert_eq!(seed, 0);
/// ```
#[inline(always)]
pub fn zeroize_primitive<T: Copy + Default>(val: &mut T) {
    // Safety: `val` is a valid, aligned, exclusive reference.
    unsafe { core::ptr::write_volatile(val, T::default()) };
    compiler_fence(Ordering::SeqCst);
}

/// Verifies that every byte in the slice is zero.
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}
