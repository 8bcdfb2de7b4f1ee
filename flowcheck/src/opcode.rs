// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opcode byte values and per-opcode stack effects.
//!
//! This module is a small wrapper around generated opcode tables (see `opcodes.json` and
//! `flowcheck_codegen`).

include!("opcodes_gen.rs");

impl Opcode {
    /// Returns the opcode byte value.
    #[must_use]
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Parses an opcode from its byte value.
    #[must_use]
    pub fn from_byte(b: u8) -> Option<Self> {
        Self::from_u8(b)
    }

    /// Returns the `PUSHn` opcode carrying an `n`-byte immediate (`n == 0` is `PUSH0`).
    #[must_use]
    pub fn push_n(n: usize) -> Option<Self> {
        let n = u8::try_from(n).ok().filter(|n| *n <= 32)?;
        Self::from_u8(Self::Push0 as u8 + n)
    }

    /// Number of stack items removed (`removeItems`).
    #[must_use]
    pub fn stack_in(self) -> usize {
        usize::from(self.info().stack_in)
    }

    /// Number of stack items added (`addItems`).
    #[must_use]
    pub fn stack_out(self) -> usize {
        usize::from(self.info().stack_out)
    }

    /// Number of immediate bytes following the opcode byte.
    #[must_use]
    pub fn immediate_len(self) -> usize {
        usize::from(self.info().immediate)
    }

    /// Returns the opcode's traits.
    #[must_use]
    pub fn flags(self) -> OpcodeFlags {
        self.info().flags
    }

    /// Returns `true` for `PUSH0`..`PUSH32`.
    #[must_use]
    pub fn is_push(self) -> bool {
        self.flags().contains(OpcodeFlags::PUSH)
    }

    /// Returns `n` for `DUPn`.
    #[must_use]
    pub fn dup_depth(self) -> Option<usize> {
        self.flags()
            .contains(OpcodeFlags::DUP)
            .then(|| self.stack_in())
    }

    /// Returns `n` for `SWAPn`.
    #[must_use]
    pub fn swap_depth(self) -> Option<usize> {
        self.flags()
            .contains(OpcodeFlags::SWAP)
            .then(|| self.stack_in() - 1)
    }
}
