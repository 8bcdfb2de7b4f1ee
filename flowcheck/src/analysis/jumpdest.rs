// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jump-destination analysis.

use crate::analysis::bitset::BitSet;
use crate::bytecode::Instructions;
use crate::opcode::Opcode;

/// Offsets that hold a `JUMPDEST` opcode at an instruction boundary.
///
/// A `0x5B` byte inside push immediate data is not a jump destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpDests {
    marks: BitSet,
}

impl JumpDests {
    /// Scans `code` once, skipping push immediates.
    ///
    /// Never fails: unassigned bytes and a truncated trailing push are simply not jump
    /// destinations, so dead trailing data cannot change the result for reachable code.
    #[must_use]
    pub fn analyze(code: &[u8]) -> Self {
        let mut marks = BitSet::new_empty(code.len());
        for di in Instructions::new(code).flatten() {
            if di.opcode == Opcode::Jumpdest {
                marks.set(di.offset as usize);
            }
        }
        Self { marks }
    }

    /// Returns `true` if `offset` is a valid jump destination.
    #[must_use]
    pub fn is_valid(&self, offset: u32) -> bool {
        self.marks.get(offset as usize)
    }

    /// Number of valid jump destinations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.marks.count_ones()
    }

    /// Length of the analyzed code.
    #[must_use]
    pub fn code_len(&self) -> usize {
        self.marks.len()
    }
}
