// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte buffers whose physical layout is scrambled by a random permutation.
//!
//! Every byte written through an [`ObfuscatedBuffer`] lands at a physical
//! offset chosen by a [`RouteTable`], so a multi-byte value never appears as a
//! contiguous run in the backing memory. A memory scan for a known key or
//! counter pattern comes up empty.
//!
//! # What this is not
//!
//! Layout scrambling is **not** encryption. Whoever recovers the route table
//! recovers the data. Use it to raise the cost of naive memory inspection, on
//! top of real protections.
//!
//! # Layout
//!
//! - **Storage**: `align_up(size, alignment)` zero-initialized bytes
//! - **Route table**: one physical index per logical position, a permutation
//!   drawn from an injected [`RandomSource`](routebuf_rand::RandomSource)
//! - **Cursor**: logical offset advanced by every typed access
//!
//! # Example
//!
//! ```rust
//! use routebuf::{BufferError, ObfuscatedBuffer};
//! use routebuf_rand::SystemRandomSource;
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = ObfuscatedBuffer::new(16, 4, SystemRandomSource::new())?;
//!
//!     buffer.write(0xDEAD_BEEFu32)?;
//!     buffer.write(-7i16)?;
//!
//!     buffer.seek(0)?;
//!     assert_eq!(buffer.read::<u32>()?, 0xDEAD_BEEF);
//!     assert_eq!(buffer.read::<i16>()?, -7);
//!
//!     // Storage and routes are zeroized on drop
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - `tracing`: emits lifecycle events (allocation, resize, reroute, dealloc)
//!   through the `tracing` crate. Only sizes and alignment are recorded.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod log;

#[cfg(test)]
mod tests;

mod codec;
mod error;
mod obfuscated_buffer;
mod route_table;

pub use codec::{Routable, from_bytes, to_bytes};
pub use error::{BufferError, CodecError};
pub use obfuscated_buffer::ObfuscatedBuffer;
pub use route_table::RouteTable;
