// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Logical-to-physical index mapping.
//!
//! Routes are plain indices into the storage arena, never addresses, so the
//! table stays valid no matter where the storage lives.

use alloc::vec::Vec;

use routebuf_rand::RandomSource;
use routebuf_rand::permutation::{fill_permutation, is_permutation};
use routebuf_util::fast_zeroize_slice;

use crate::error::BufferError;

/// Maps every logical position `i` to the physical position `routes[i]`.
///
/// Invariant: the routes always form a permutation of `[0, len)`, so no two
/// logical positions share a physical byte and every physical byte is
/// reachable. Routes are zeroized on drop.
pub struct RouteTable {
    routes: Vec<usize>,
}

impl RouteTable {
    /// Builds a table whose mapping is exactly `permutation`.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidPermutation`] if `permutation` is not a
    ///   permutation of `[0, permutation.len())`
    /// - [`BufferError::AllocationFailure`] if the table cannot be allocated
    pub fn build(permutation: &[usize]) -> Result<Self, BufferError> {
        if !is_permutation(permutation) {
            return Err(BufferError::InvalidPermutation);
        }

        let mut routes = try_alloc_routes(permutation.len())?;
        routes.copy_from_slice(permutation);

        Ok(Self { routes })
    }

    /// Builds a table of `len` routes from a freshly generated permutation.
    ///
    /// # Errors
    ///
    /// - [`BufferError::AllocationFailure`] if the table cannot be allocated
    /// - [`BufferError::Random`] if `rng` fails
    pub fn generate<R: RandomSource + ?Sized>(len: usize, rng: &mut R) -> Result<Self, BufferError> {
        let mut routes = try_alloc_routes(len)?;
        fill_permutation(&mut routes, rng)?;

        Ok(Self { routes })
    }

    /// Replaces the mapping in place with `permutation`.
    ///
    /// The table keeps its length; on error it is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidPermutation`] if `permutation` has the
    /// wrong length or is not a permutation.
    pub fn rebuild(&mut self, permutation: &[usize]) -> Result<(), BufferError> {
        if permutation.len() != self.routes.len() || !is_permutation(permutation) {
            return Err(BufferError::InvalidPermutation);
        }

        self.routes.copy_from_slice(permutation);

        Ok(())
    }

    /// Returns the physical position backing logical position `logical`.
    #[inline(always)]
    pub fn physical(&self, logical: usize) -> Option<usize> {
        self.routes.get(logical).copied()
    }

    /// Returns the number of routes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the table has no routes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the routes as a slice, indexed by logical position.
    #[inline(always)]
    pub fn as_slice(&self) -> &[usize] {
        &self.routes
    }
}

fn try_alloc_routes(len: usize) -> Result<Vec<usize>, BufferError> {
    let mut routes = Vec::new();
    routes
        .try_reserve_exact(len)
        .map_err(|_| BufferError::AllocationFailure)?;
    routes.resize(len, 0);

    Ok(routes)
}

impl Drop for RouteTable {
    fn drop(&mut self) {
        fast_zeroize_slice(&mut self.routes);
    }
}

impl core::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RouteTable")
            .field("len", &self.routes.len())
            .finish_non_exhaustive()
    }
}
