// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for routebuf.
use routebuf_rand::RandomError;
use thiserror::Error;

/// Errors that can occur when working with an [`ObfuscatedBuffer`](crate::ObfuscatedBuffer).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// Storage or route table could not be obtained, or the aligned size
    /// does not fit in `usize`.
    #[error("AllocationFailure")]
    AllocationFailure,

    /// The requested alignment is not a power of two.
    #[error("InvalidAlignment: {0} is not a power of two")]
    InvalidAlignment(usize),

    /// The access would run past the end of the buffer.
    #[error("OutOfRange: {requested} byte(s) at position {position} exceed length {len}")]
    OutOfRange {
        /// Logical position the access starts at.
        position: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Buffer length.
        len: usize,
    },

    /// A supplied route sequence is not a permutation of the buffer positions.
    #[error("InvalidPermutation")]
    InvalidPermutation,

    /// The buffer has been deallocated.
    #[error("NotAllocated")]
    NotAllocated,

    /// The random source failed while generating routes.
    #[error("RandomError: {0}")]
    Random(#[from] RandomError),
}

/// Errors from [`from_bytes`](crate::from_bytes).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CodecError {
    /// The input does not hold exactly the encoded size of the target type.
    #[error("LengthMismatch: expected {expected} byte(s), got {actual}")]
    LengthMismatch {
        /// Encoded size of the target type.
        expected: usize,
        /// Length of the input.
        actual: usize,
    },
}
