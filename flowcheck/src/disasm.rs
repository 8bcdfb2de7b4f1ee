// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disassembler for `flowcheck` code.
//!
//! This module provides:
//! - A structured view ([`Disassembly`], [`InstrView`]) for tooling/tests.
//! - A stable, human-readable text format via [`core::fmt::Display`].
//!
//! Disassembly walks every instruction position linearly, reachable or not. Unassigned bytes
//! and a truncated trailing push are shown in place rather than aborting the listing.

use alloc::vec::Vec;
use core::fmt;

use crate::bytecode::{BytecodeError, DecodedInstr, Instructions};
use crate::jump_table::{JumpTables, Lookup, TableKind};
use crate::opcode::Opcode;
use crate::verifier::VerifiedCode;

/// Disassembles `code` into a structured view.
#[must_use]
pub fn disassemble(code: &[u8]) -> Disassembly<'_> {
    Disassembly {
        code,
        instrs: Instructions::new(code).map(InstrView::new).collect(),
        tables: None,
    }
}

/// Disassembles `code`, annotating `JUMP`/`JUMPI` with their listed destinations.
#[must_use]
pub fn disassemble_with_tables<'a>(code: &'a [u8], tables: &'a JumpTables) -> Disassembly<'a> {
    Disassembly {
        tables: Some(tables),
        ..disassemble(code)
    }
}

/// Disassembles a [`VerifiedCode`] together with its tables.
#[must_use]
pub fn disassemble_verified(verified: &VerifiedCode) -> Disassembly<'_> {
    disassemble_with_tables(verified.code(), verified.tables())
}

/// A disassembled code buffer.
#[derive(Clone, Debug)]
pub struct Disassembly<'a> {
    code: &'a [u8],
    instrs: Vec<InstrView<'a>>,
    tables: Option<&'a JumpTables>,
}

impl<'a> Disassembly<'a> {
    /// Returns the underlying code.
    #[must_use]
    pub fn code(&self) -> &'a [u8] {
        self.code
    }

    /// Returns every instruction position in order.
    #[must_use]
    pub fn instrs(&self) -> &[InstrView<'a>] {
        &self.instrs
    }

    /// Returns the listed destinations for the jump at `pc`, if tables are attached.
    #[must_use]
    pub fn listed(&self, pc: u32) -> Option<Lookup<'a>> {
        self.tables.map(|t| t.lookup(pc))
    }
}

/// One instruction position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstrView<'a> {
    decoded: Result<DecodedInstr<'a>, BytecodeError>,
}

impl<'a> InstrView<'a> {
    fn new(decoded: Result<DecodedInstr<'a>, BytecodeError>) -> Self {
        Self { decoded }
    }

    /// Byte offset of the instruction.
    #[must_use]
    pub fn pc(&self) -> u32 {
        match &self.decoded {
            Ok(di) => di.offset,
            Err(
                BytecodeError::UnknownOpcode { pc, .. }
                | BytecodeError::TruncatedImmediate { pc, .. }
                | BytecodeError::OutOfBounds { pc },
            ) => *pc,
        }
    }

    /// The opcode, if the byte is assigned.
    #[must_use]
    pub fn opcode(&self) -> Option<Opcode> {
        match &self.decoded {
            Ok(di) => Some(di.opcode),
            Err(BytecodeError::TruncatedImmediate { opcode, .. }) => Some(*opcode),
            Err(_) => None,
        }
    }

    /// The decoded instruction, or the reason it does not decode.
    #[must_use]
    pub fn decoded(&self) -> Result<&DecodedInstr<'a>, &BytecodeError> {
        self.decoded.as_ref()
    }
}

impl fmt::Display for InstrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}: ", self.pc())?;
        match &self.decoded {
            Ok(di) => {
                f.write_str(di.opcode.mnemonic())?;
                if !di.immediate.is_empty() {
                    f.write_str(" 0x")?;
                    for b in di.immediate {
                        write!(f, "{b:02x}")?;
                    }
                }
                Ok(())
            }
            Err(BytecodeError::UnknownOpcode { opcode, .. }) => {
                write!(f, "<unassigned 0x{opcode:02x}>")
            }
            Err(BytecodeError::TruncatedImmediate {
                opcode,
                needed,
                available,
                ..
            }) => write!(
                f,
                "{} <truncated: {available} of {needed} bytes>",
                opcode.mnemonic()
            ),
            Err(BytecodeError::OutOfBounds { .. }) => f.write_str("<out of bounds>"),
        }
    }
}

impl fmt::Display for Disassembly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for iv in &self.instrs {
            write!(f, "{iv}")?;
            if matches!(iv.opcode(), Some(Opcode::Jump | Opcode::Jumpi))
                && let Some(l) = self.listed(iv.pc())
                && l.is_listed()
            {
                f.write_str(" ;")?;
                for (kind, dst) in l.destinations() {
                    let tag = match kind {
                        TableKind::Jump => "jump",
                        TableKind::Trap => "trap",
                    };
                    write!(f, " {tag}->{dst:04}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
