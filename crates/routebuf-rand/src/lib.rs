// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # routebuf_rand
//!
//! Random sources and permutation generation for the routebuf stack.
//!
//! ## Core Types
//!
//! - [`SystemRandomSource`]: OS-level CSPRNG (via `getrandom`)
//! - [`Xorshift64`]: small seeded generator for reproducible layouts
//! - [`FnRandomSource`]: binds any `FnMut() -> u64`
//! - [`RngCoreSource`]: adapts any `rand_core::RngCore`
//!
//! ## Traits
//!
//! - [`RandomSource`]: the injected capability, a single `next_u64` operation
//!
//! ## Example
//!
//! ```rust
//! use routebuf_rand::permutation::{generate_permutation, is_permutation};
//! use routebuf_rand::Xorshift64;
//!
//! let mut rng = Xorshift64::new(0x1234_5678_9ABC_DEF0).expect("Failed to new()");
//! let routes = generate_permutation(16, &mut rng).expect("Failed to generate_permutation()");
//!
//! assert_eq!(routes.len(), 16);
//! assert!(is_permutation(&routes));
//! ```
//!
//! ## Bias
//!
//! Indices are drawn with rejection sampling, never with a bare `% n`, so every
//! permutation is equiprobable as long as the source is uniform.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod adapter;
mod error;
mod support;
mod system;
mod traits;
mod xorshift;

pub mod permutation;

pub use adapter::{FnRandomSource, RngCoreSource};
pub use error::RandomError;
pub use system::SystemRandomSource;
pub use traits::RandomSource;
pub use xorshift::Xorshift64;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
