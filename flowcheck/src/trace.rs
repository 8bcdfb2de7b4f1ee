// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing hooks for the verifier.
//!
//! Tracing is optional and is designed to be `no_std` friendly.
//! The verifier only emits events requested by a [`TraceMask`].
//!
//! To enable tracing, pass a [`TraceSink`] to [`verify_traced`].

#[cfg(doc)]
use crate::verifier::verify_traced;

use crate::opcode::Opcode;
use crate::verifier::VerifyError;

/// A set of trace events requested by a [`TraceSink`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TraceMask(u32);

impl core::ops::BitOr for TraceMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for TraceMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl TraceMask {
    /// No tracing.
    pub const NONE: Self = Self(0);
    /// Trace verification boundaries.
    ///
    /// Enables:
    /// - [`TraceSink::run_start`]
    /// - [`TraceSink::run_end`]
    pub const RUN: Self = Self(1 << 0);
    /// Trace each symbolically executed instruction.
    ///
    /// Enables:
    /// - [`TraceSink::instr`]
    pub const INSTR: Self = Self(1 << 1);
    /// Trace basic-block entries.
    ///
    /// Enables:
    /// - [`TraceSink::block_enter`]
    pub const BLOCK: Self = Self(1 << 2);
    /// Trace jump resolution.
    ///
    /// Enables:
    /// - [`TraceSink::jump`]
    pub const JUMP: Self = Self(1 << 3);
    /// Every event.
    pub const ALL: Self = Self(Self::RUN.0 | Self::INSTR.0 | Self::BLOCK.0 | Self::JUMP.0);

    /// Returns `true` if this mask includes all bits in `other`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

/// How a jump destination was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpResolution {
    /// The destination is a traced constant.
    Static {
        /// Destination offset.
        dst: u32,
    },
    /// The destination comes from the jump/trap tables.
    Dynamic {
        /// Number of listed destinations (all of which were validated).
        listed: usize,
    },
}

/// Verification outcome for tracing.
#[derive(Clone, Debug)]
pub enum TraceOutcome<'a> {
    /// The code was accepted.
    Accepted,
    /// The code was rejected.
    Rejected(&'a VerifyError),
}

/// A trace sink that can receive verifier events.
pub trait TraceSink {
    /// Returns the set of events the sink wants.
    fn mask(&self) -> TraceMask {
        TraceMask::NONE
    }

    /// Called before traversal starts.
    ///
    /// Called only if `mask()` includes [`TraceMask::RUN`].
    fn run_start(&mut self, _code_len: usize, _table_entries: usize) {}

    /// Called when a task starts, a static jump redirects the current task, or a `JUMPI` falls
    /// through.
    ///
    /// Called only if `mask()` includes [`TraceMask::BLOCK`].
    ///
    /// - `pc`: block entry offset
    /// - `depth`: stack depth on entry
    fn block_enter(&mut self, _pc: u32, _depth: usize) {}

    /// Called for each instruction after its stack effect is applied.
    ///
    /// Called only if `mask()` includes [`TraceMask::INSTR`].
    ///
    /// - `pc`: instruction offset
    /// - `next_pc`: offset of the following instruction
    /// - `opcode`: the opcode
    /// - `depth`: stack depth after the instruction
    fn instr(&mut self, _pc: u32, _next_pc: u32, _opcode: Opcode, _depth: usize) {}

    /// Called when a `JUMP`/`JUMPI` destination has been validated.
    ///
    /// Called only if `mask()` includes [`TraceMask::JUMP`].
    fn jump(&mut self, _pc: u32, _resolution: JumpResolution) {}

    /// Called once the accept/reject decision is made.
    ///
    /// Called only if `mask()` includes [`TraceMask::RUN`].
    fn run_end(&mut self, _outcome: TraceOutcome<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::TraceMask;

    #[test]
    fn mask_combines() {
        let mut m = TraceMask::RUN | TraceMask::JUMP;
        assert!(m.contains(TraceMask::RUN));
        assert!(!m.contains(TraceMask::INSTR));
        m |= TraceMask::INSTR;
        assert!(m.contains(TraceMask::INSTR | TraceMask::JUMP));
        assert!(TraceMask::ALL.contains(m | TraceMask::BLOCK));
        assert!(m.contains(TraceMask::NONE));
    }
}
