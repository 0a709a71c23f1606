// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-size little-endian byte codec for values routed through a buffer.
//!
//! Values are taken apart with shifts and put back together the same way, so
//! no code path reinterprets memory as another type and the byte order is the
//! same on every host.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::CodecError;

/// A plain, fixed-size value that can be split into bytes and rebuilt.
///
/// Implemented for every integer width, `f32`, `f64`, `bool` and arrays of
/// `Routable` values. Fixed-layout structs get an implementation through
/// [`routable_struct!`](crate::routable_struct).
pub trait Routable: Sized {
    /// Number of bytes the value occupies once encoded.
    const SIZE: usize;

    /// Writes the value into `out[..Self::SIZE]`, little-endian.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`Self::SIZE`](Routable::SIZE).
    fn encode(&self, out: &mut [u8]);

    /// Rebuilds a value from `bytes[..Self::SIZE]`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Self::SIZE`](Routable::SIZE).
    fn decode(bytes: &[u8]) -> Self;
}

macro_rules! impl_routable_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Routable for $ty {
                const SIZE: usize = core::mem::size_of::<$ty>();

                #[inline(always)]
                fn encode(&self, out: &mut [u8]) {
                    for (i, byte) in out[..Self::SIZE].iter_mut().enumerate() {
                        *byte = (*self >> (8 * i)) as u8;
                    }
                }

                #[inline(always)]
                fn decode(bytes: &[u8]) -> Self {
                    let mut value: $ty = 0;
                    for (i, &byte) in bytes[..Self::SIZE].iter().enumerate() {
                        value |= (byte as $ty) << (8 * i);
                    }
                    value
                }
            }
        )*
    };
}

impl_routable_for_integers!(u8, u16, u32, u64, u128, usize);
impl_routable_for_integers!(i8, i16, i32, i64, i128, isize);

impl Routable for f32 {
    const SIZE: usize = 4;

    #[inline(always)]
    fn encode(&self, out: &mut [u8]) {
        self.to_bits().encode(out);
    }

    #[inline(always)]
    fn decode(bytes: &[u8]) -> Self {
        f32::from_bits(u32::decode(bytes))
    }
}

impl Routable for f64 {
    const SIZE: usize = 8;

    #[inline(always)]
    fn encode(&self, out: &mut [u8]) {
        self.to_bits().encode(out);
    }

    #[inline(always)]
    fn decode(bytes: &[u8]) -> Self {
        f64::from_bits(u64::decode(bytes))
    }
}

// Any non-zero byte decodes as `true`.
impl Routable for bool {
    const SIZE: usize = 1;

    #[inline(always)]
    fn encode(&self, out: &mut [u8]) {
        out[0] = *self as u8;
    }

    #[inline(always)]
    fn decode(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

impl<T: Routable, const N: usize> Routable for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn encode(&self, out: &mut [u8]) {
        for (i, item) in self.iter().enumerate() {
            item.encode(&mut out[i * T::SIZE..(i + 1) * T::SIZE]);
        }
    }

    fn decode(bytes: &[u8]) -> Self {
        core::array::from_fn(|i| T::decode(&bytes[i * T::SIZE..(i + 1) * T::SIZE]))
    }
}

/// Encodes `value` into a freshly allocated `Vec` of exactly `T::SIZE` bytes.
///
/// # Example
///
/// ```rust
/// use routebuf::to_bytes;
///
/// assert_eq!(to_bytes(&0x0102_0304u32), vec![0x04, 0x03, 0x02, 0x01]);
/// ```
pub fn to_bytes<T: Routable>(value: &T) -> Vec<u8> {
    let mut out = vec![0u8; T::SIZE];
    value.encode(&mut out);
    out
}

/// Decodes a `T` from exactly `T::SIZE` bytes.
///
/// # Errors
///
/// Returns [`CodecError::LengthMismatch`] if `bytes.len() != T::SIZE`.
///
/// # Example
///
/// ```rust
/// use routebuf::{CodecError, from_bytes};
///
/// assert_eq!(from_bytes::<u16>(&[0x34, 0x12]), Ok(0x1234));
/// assert_eq!(
///     from_bytes::<u16>(&[0x34]),
///     Err(CodecError::LengthMismatch { expected: 2, actual: 1 })
/// );
/// ```
pub fn from_bytes<T: Routable>(bytes: &[u8]) -> Result<T, CodecError> {
    if bytes.len() != T::SIZE {
        return Err(CodecError::LengthMismatch {
            expected: T::SIZE,
            actual: bytes.len(),
        });
    }

    Ok(T::decode(bytes))
}

/// Implements [`Routable`] for a struct with named fields.
///
/// Fields are encoded back to back in declaration order with no padding, so
/// the encoded size is the sum of the field sizes.
///
/// # Example
///
/// ```rust
/// use routebuf::{Routable, routable_struct, to_bytes};
///
/// #[derive(Debug, PartialEq)]
/// struct Session {
///     id: u32,
///     counter: u64,
///     active: bool,
/// }
///
/// routable_struct!(Session { id: u32, counter: u64, active: bool });
///
/// assert_eq!(Session::SIZE, 13);
///
/// let session = Session { id: 7, counter: 42, active: true };
/// let bytes = to_bytes(&session);
/// assert_eq!(Session::decode(&bytes), session);
/// ```
#[macro_export]
macro_rules! routable_struct {
    ($ty:ident { $($field:ident : $fty:ty),+ $(,)? }) => {
        impl $crate::Routable for $ty {
            const SIZE: usize = 0 $(+ <$fty as $crate::Routable>::SIZE)+;

            fn encode(&self, out: &mut [u8]) {
                let mut offset = 0usize;
                $(
                    let size = <$fty as $crate::Routable>::SIZE;
                    $crate::Routable::encode(&self.$field, &mut out[offset..offset + size]);
                    offset += size;
                )+
                let _ = offset;
            }

            fn decode(bytes: &[u8]) -> Self {
                let mut offset = 0usize;
                $(
                    let size = <$fty as $crate::Routable>::SIZE;
                    let $field = <$fty as $crate::Routable>::decode(&bytes[offset..offset + size]);
                    offset += size;
                )+
                let _ = offset;

                Self { $($field),+ }
            }
        }
    };
}
