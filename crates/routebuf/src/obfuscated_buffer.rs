// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ObfuscatedBuffer - cursor-based typed access through a route table.
//!
//! # Lifecycle
//!
//! ```text
//! new / with_routes ──► Allocated ──dealloc──► Uninitialized
//!                         │   ▲                    │
//!                         └───┘ resize / reroute   └──resize──► Allocated
//! ```
//!
//! Storage and routes live in one `Region` and are created and released
//! together. Releasing a region zeroizes both.
//!
//! # Bounds
//!
//! Every access checks `cursor + size <= len` before touching storage. A
//! failed access leaves storage and cursor as they were.

use alloc::vec::Vec;

use smallvec::{SmallVec, smallvec};

use routebuf_rand::RandomSource;
use routebuf_rand::permutation::is_permutation;
use routebuf_util::{align_up, checked_align_up, fast_zeroize_slice, is_valid_alignment};

use crate::codec::Routable;
use crate::error::BufferError;
use crate::route_table::RouteTable;

/// Scratch space for one encoded value. Primitives stay on the stack.
type Scratch = SmallVec<[u8; 32]>;

/// Storage arena plus the routes into it.
struct Region {
    storage: Vec<u8>,
    routes: RouteTable,
}

impl Region {
    fn allocate<R: RandomSource + ?Sized>(
        len: usize,
        permutation: Option<&[usize]>,
        rng: &mut R,
    ) -> Result<Self, BufferError> {
        let routes = match permutation {
            Some(permutation) if permutation.len() != len => {
                return Err(BufferError::InvalidPermutation);
            }
            Some(permutation) => RouteTable::build(permutation)?,
            None => RouteTable::generate(len, rng)?,
        };

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(len)
            .map_err(|_| BufferError::AllocationFailure)?;
        storage.resize(len, 0);

        Ok(Self { storage, routes })
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len()
    }

    /// Stores `bytes[b]` at `storage[routes[start + b]]`.
    fn scatter(&mut self, start: usize, bytes: &[u8]) {
        let routes = &self.routes.as_slice()[start..start + bytes.len()];

        for (&physical, &byte) in routes.iter().zip(bytes) {
            self.storage[physical] = byte;
        }
    }

    /// Loads `out[b]` from `storage[routes[start + b]]`.
    fn gather(&self, start: usize, out: &mut [u8]) {
        let routes = &self.routes.as_slice()[start..start + out.len()];

        for (&physical, byte) in routes.iter().zip(out.iter_mut()) {
            *byte = self.storage[physical];
        }
    }
}

impl Drop for Region {
    fn drop(&mut self) {
        fast_zeroize_slice(&mut self.storage);
    }
}

/// A fixed-capacity byte buffer whose physical layout is a random permutation
/// of its logical layout.
///
/// Logical position `i` is stored at physical position `routes[i]`. Typed
/// reads and writes go byte by byte through the routes, so a `u32` written at
/// logical offset 0 ends up spread over four unrelated physical offsets.
///
/// Not thread-safe by itself; every mutating method takes `&mut self`.
pub struct ObfuscatedBuffer<R: RandomSource> {
    region: Option<Region>,
    cursor: usize,
    alignment: usize,
    rng: R,
}

impl<R: RandomSource> ObfuscatedBuffer<R> {
    /// Creates a zero-initialized buffer of `align_up(size, alignment)` bytes
    /// with routes drawn from `rng`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidAlignment`] if `alignment` is not a power of two
    /// - [`BufferError::AllocationFailure`] if the aligned size overflows or
    ///   allocation is refused
    /// - [`BufferError::Random`] if `rng` fails
    pub fn new(size: usize, alignment: usize, rng: R) -> Result<Self, BufferError> {
        Self::create(size, alignment, rng, None)
    }

    /// Creates a zero-initialized buffer whose routes are exactly `routes`.
    ///
    /// `rng` is kept for later [`resize`](Self::resize) and
    /// [`reshuffle`](Self::reshuffle) calls.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`BufferError::InvalidPermutation`] if
    /// `routes` is not a permutation of `[0, align_up(size, alignment))`.
    pub fn with_routes(
        size: usize,
        alignment: usize,
        rng: R,
        routes: &[usize],
    ) -> Result<Self, BufferError> {
        Self::create(size, alignment, rng, Some(routes))
    }

    fn create(
        size: usize,
        alignment: usize,
        mut rng: R,
        permutation: Option<&[usize]>,
    ) -> Result<Self, BufferError> {
        if !is_valid_alignment(alignment) {
            return Err(BufferError::InvalidAlignment(alignment));
        }

        let len = checked_align_up(size, alignment).ok_or(BufferError::AllocationFailure)?;
        let region = Region::allocate(len, permutation, &mut rng)?;

        debug_event!(len, alignment, explicit_routes = permutation.is_some(), "buffer allocated");

        Ok(Self {
            region: Some(region),
            cursor: 0,
            alignment,
            rng,
        })
    }

    /// Returns true while storage and routes are allocated.
    #[inline(always)]
    pub fn exists(&self) -> bool {
        self.region.is_some()
    }

    /// Returns the aligned length in bytes, 0 once deallocated.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.region.as_ref().map_or(0, Region::len)
    }

    /// Returns true if the buffer holds no bytes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the byte alignment, 0 once deallocated.
    #[inline(always)]
    pub fn alignment(&self) -> usize {
        if self.exists() { self.alignment } else { 0 }
    }

    /// Rounds `value` up to the buffer's alignment.
    ///
    /// Wraps on overflow; [`seek`](Self::seek) uses the checked form.
    #[inline(always)]
    pub fn align_up(&self, value: usize) -> usize {
        align_up(value, self.alignment)
    }

    /// Returns the cursor.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the number of bytes between the cursor and the end.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.cursor)
    }

    /// Moves the cursor to `align_up(pos)`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::OutOfRange`] if the aligned position exceeds [`len`](Self::len)
    pub fn seek(&mut self, pos: usize) -> Result<(), BufferError> {
        let len = self.region()?.len();
        let aligned = checked_align_up(pos, self.alignment).ok_or(BufferError::OutOfRange {
            position: pos,
            requested: 0,
            len,
        })?;

        self.seek_raw(aligned)
    }

    /// Moves the cursor to `pos` exactly.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::OutOfRange`] if `pos` exceeds [`len`](Self::len)
    pub fn seek_raw(&mut self, pos: usize) -> Result<(), BufferError> {
        self.check_span(pos, 0)?;
        self.cursor = pos;

        Ok(())
    }

    /// Zeroes every storage byte, walking physical order.
    ///
    /// Routes are not consulted; since they are a bijection every logical
    /// position reads 0 afterwards. The cursor is unchanged.
    pub fn zero(&mut self) {
        if let Some(region) = self.region.as_mut() {
            fast_zeroize_slice(&mut region.storage);
        }
    }

    /// Writes `value` at the cursor and advances it by `T::SIZE`.
    ///
    /// Byte `b` of the little-endian encoding lands at
    /// `storage[routes[cursor + b]]`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::OutOfRange`] if fewer than `T::SIZE` bytes remain
    pub fn write<T: Routable>(&mut self, value: T) -> Result<(), BufferError> {
        let mut scratch: Scratch = smallvec![0u8; T::SIZE];
        value.encode(&mut scratch);

        let result = self.write_bytes(&scratch);
        fast_zeroize_slice(&mut scratch);

        result
    }

    /// Reads a `T` at the cursor and advances it by `T::SIZE`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::OutOfRange`] if fewer than `T::SIZE` bytes remain
    pub fn read<T: Routable>(&mut self) -> Result<T, BufferError> {
        let mut scratch: Scratch = smallvec![0u8; T::SIZE];

        let result = self.read_bytes(&mut scratch).map(|_| T::decode(&scratch));
        fast_zeroize_slice(&mut scratch);

        result
    }

    /// Writes `value` at logical position `pos`, leaving the cursor after it.
    ///
    /// # Errors
    ///
    /// As [`write`](Self::write), checked against `pos` instead of the cursor.
    pub fn write_at<T: Routable>(&mut self, pos: usize, value: T) -> Result<(), BufferError> {
        self.check_span(pos, T::SIZE)?;
        self.cursor = pos;

        self.write(value)
    }

    /// Reads a `T` at logical position `pos`, leaving the cursor after it.
    ///
    /// # Errors
    ///
    /// As [`read`](Self::read), checked against `pos` instead of the cursor.
    pub fn read_at<T: Routable>(&mut self, pos: usize) -> Result<T, BufferError> {
        self.check_span(pos, T::SIZE)?;
        self.cursor = pos;

        self.read()
    }

    /// Writes raw bytes at the cursor and advances it by `bytes.len()`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::OutOfRange`] if fewer than `bytes.len()` bytes remain
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        let start = self.cursor;
        let end = self.check_span(start, bytes.len())?;

        self.region_mut()?.scatter(start, bytes);
        self.cursor = end;

        Ok(())
    }

    /// Fills `out` from the cursor and advances it by `out.len()`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::OutOfRange`] if fewer than `out.len()` bytes remain
    pub fn read_bytes(&mut self, out: &mut [u8]) -> Result<(), BufferError> {
        let start = self.cursor;
        let end = self.check_span(start, out.len())?;

        self.region()?.gather(start, out);
        self.cursor = end;

        Ok(())
    }

    /// Discards the current contents and allocates `align_up(new_size)`
    /// fresh zeroed bytes.
    ///
    /// Routes come from `permutation` when given, else from the random
    /// source. Arguments are validated before anything is released; if
    /// allocation then fails the buffer is left deallocated. Also revives a
    /// deallocated buffer, reusing the alignment it was created with. The
    /// cursor is reset to 0.
    ///
    /// # Errors
    ///
    /// - [`BufferError::AllocationFailure`] if the aligned size overflows or
    ///   allocation is refused
    /// - [`BufferError::InvalidPermutation`] if `permutation` is invalid or
    ///   has the wrong length
    /// - [`BufferError::Random`] if the random source fails
    pub fn resize(&mut self, new_size: usize, permutation: Option<&[usize]>) -> Result<(), BufferError> {
        let len = checked_align_up(new_size, self.alignment).ok_or(BufferError::AllocationFailure)?;

        if let Some(permutation) = permutation {
            if permutation.len() != len || !is_permutation(permutation) {
                return Err(BufferError::InvalidPermutation);
            }
        }

        self.dealloc();

        let region = Region::allocate(len, permutation, &mut self.rng)?;
        self.region = Some(region);

        debug_event!(len, explicit_routes = permutation.is_some(), "buffer resized");

        Ok(())
    }

    /// Replaces the routes with `permutation` without touching storage.
    ///
    /// Bytes stay where they are physically, so logical contents are
    /// rearranged accordingly.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::InvalidPermutation`] if `permutation` is invalid or
    ///   has the wrong length
    pub fn reroute(&mut self, permutation: &[usize]) -> Result<(), BufferError> {
        self.region_mut()?.routes.rebuild(permutation)?;

        trace_event!(len = permutation.len(), "buffer rerouted");

        Ok(())
    }

    /// Replaces the routes with a freshly generated permutation without
    /// touching storage.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NotAllocated`] after [`dealloc`](Self::dealloc)
    /// - [`BufferError::AllocationFailure`] if the new table cannot be allocated
    /// - [`BufferError::Random`] if the random source fails; the old routes
    ///   stay in place
    pub fn reshuffle(&mut self) -> Result<(), BufferError> {
        let len = self.region()?.len();
        let routes = RouteTable::generate(len, &mut self.rng)?;

        self.region_mut()?.routes = routes;

        trace_event!(len, "buffer reshuffled");

        Ok(())
    }

    /// Zeroizes and releases storage and routes.
    ///
    /// Afterwards [`exists`](Self::exists) is false, [`len`](Self::len) and
    /// [`alignment`](Self::alignment) report 0. Calling it again is a no-op.
    pub fn dealloc(&mut self) {
        if let Some(_region) = self.region.take() {
            debug_event!(len = _region.len(), "buffer deallocated");
        }

        self.cursor = 0;
    }

    /// Returns the physical offset backing logical position `logical`.
    pub fn physical_offset(&self, logical: usize) -> Option<usize> {
        self.region.as_ref()?.routes.physical(logical)
    }

    /// Returns the raw storage in physical order, as a memory scan would see it.
    pub fn physical_bytes(&self) -> &[u8] {
        match &self.region {
            Some(region) => &region.storage,
            None => &[],
        }
    }

    fn region(&self) -> Result<&Region, BufferError> {
        self.region.as_ref().ok_or(BufferError::NotAllocated)
    }

    fn region_mut(&mut self) -> Result<&mut Region, BufferError> {
        self.region.as_mut().ok_or(BufferError::NotAllocated)
    }

    /// Checks that `requested` bytes fit at `position`; returns the end offset.
    fn check_span(&self, position: usize, requested: usize) -> Result<usize, BufferError> {
        let len = self.region()?.len();

        match position.checked_add(requested) {
            Some(end) if end <= len => Ok(end),
            _ => Err(BufferError::OutOfRange {
                position,
                requested,
                len,
            }),
        }
    }
}

impl<R: RandomSource> core::fmt::Debug for ObfuscatedBuffer<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObfuscatedBuffer")
            .field("len", &self.len())
            .field("alignment", &self.alignment())
            .field("position", &self.cursor)
            .finish_non_exhaustive()
    }
}
