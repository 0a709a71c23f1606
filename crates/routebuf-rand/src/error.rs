// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when drawing random values.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RandomError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,

    /// A seeded generator was given a seed it cannot run from.
    #[error("InvalidSeed")]
    InvalidSeed,

    /// The source kept producing values that had to be rejected as biased.
    #[error("SourceExhausted")]
    SourceExhausted,
}
