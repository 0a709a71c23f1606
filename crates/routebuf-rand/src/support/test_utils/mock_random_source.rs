// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::error::RandomError;
use crate::traits::RandomSource;

/// Configurable behavior for [`MockRandomSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockRandomSourceBehaviour {
    /// Normal operation (replays the sequence).
    None,
    /// Always fail next_u64.
    FailAlways,
    /// Fail next_u64 on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthCall(usize),
}

/// Mock random source for testing.
///
/// Replays a fixed sequence cyclically, so permutations built from it are
/// reproducible. Failures are simulated via [`MockRandomSourceBehaviour`].
#[derive(Debug, Clone)]
pub struct MockRandomSource {
    sequence: Vec<u64>,
    cursor: usize,
    behaviour: MockRandomSourceBehaviour,
    call_count: usize,
}

impl MockRandomSource {
    /// Creates a mock replaying `sequence`.
    ///
    /// An empty sequence yields zeros.
    pub fn new(sequence: &[u64], behaviour: MockRandomSourceBehaviour) -> Self {
        Self {
            sequence: sequence.to_vec(),
            cursor: 0,
            behaviour,
            call_count: 0,
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockRandomSourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&mut self) {
        self.call_count = 0;
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    fn replay(&mut self) -> u64 {
        if self.sequence.is_empty() {
            return 0;
        }

        let value = self.sequence[self.cursor];
        self.cursor = (self.cursor + 1) % self.sequence.len();

        value
    }
}

impl RandomSource for MockRandomSource {
    fn next_u64(&mut self) -> Result<u64, RandomError> {
        self.call_count += 1;

        match self.behaviour {
            MockRandomSourceBehaviour::None => Ok(self.replay()),
            MockRandomSourceBehaviour::FailAlways => Err(RandomError::EntropyNotAvailable),
            MockRandomSourceBehaviour::FailAtNthCall(n) if self.call_count == n => {
                Err(RandomError::EntropyNotAvailable)
            }
            MockRandomSourceBehaviour::FailAtNthCall(_) => Ok(self.replay()),
        }
    }
}
