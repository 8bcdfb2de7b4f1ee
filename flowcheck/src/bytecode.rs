// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instruction decoding.
//!
//! Instructions are a single opcode byte followed by zero or more immediate bytes; only the
//! push family carries immediates. A push whose immediate runs past the end of the buffer is
//! malformed rather than zero-padded.

use core::fmt;

use crate::opcode::Opcode;

/// A bytecode decoding error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BytecodeError {
    /// The byte at `pc` is not an assigned opcode.
    UnknownOpcode {
        /// Byte offset of the instruction.
        pc: u32,
        /// The unrecognized opcode byte.
        opcode: u8,
    },
    /// A push-family immediate runs past the end of the code.
    TruncatedImmediate {
        /// Byte offset of the instruction.
        pc: u32,
        /// The push opcode.
        opcode: Opcode,
        /// Immediate bytes required by the opcode.
        needed: usize,
        /// Immediate bytes present before the end of the code.
        available: usize,
    },
    /// `pc` does not address a byte of the code.
    OutOfBounds {
        /// The offending offset.
        pc: u32,
    },
}

impl fmt::Display for BytecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOpcode { pc, opcode } => {
                write!(f, "pc={pc} unassigned opcode 0x{opcode:02X}")
            }
            Self::TruncatedImmediate {
                pc,
                opcode,
                needed,
                available,
            } => write!(
                f,
                "pc={pc} {} immediate truncated (needs {needed} bytes, {available} available)",
                opcode.mnemonic()
            ),
            Self::OutOfBounds { pc } => write!(f, "pc={pc} out of bounds"),
        }
    }
}

impl core::error::Error for BytecodeError {}

/// A decoded instruction with its byte offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodedInstr<'a> {
    /// Byte offset within the code.
    pub offset: u32,
    /// The opcode.
    pub opcode: Opcode,
    /// Immediate bytes (empty for everything but `PUSH1`..`PUSH32`).
    pub immediate: &'a [u8],
    /// Offset of the following instruction.
    pub next_pc: u32,
}

impl DecodedInstr<'_> {
    /// Interprets the immediate as a big-endian integer, if it fits in a `u32`.
    ///
    /// `PUSH0` yields `Some(0)`. Leading zero bytes are ignored, so `PUSH32 0x00..03` is `3`.
    #[must_use]
    pub fn immediate_u32(&self) -> Option<u32> {
        be_bytes_to_u32(self.immediate)
    }
}

pub(crate) fn be_bytes_to_u32(bytes: &[u8]) -> Option<u32> {
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > 4 {
        return None;
    }
    Some(
        significant
            .iter()
            .fold(0_u32, |acc, b| (acc << 8) | u32::from(*b)),
    )
}

/// Decodes the instruction at `pc`.
pub fn decode_at(code: &[u8], pc: u32) -> Result<DecodedInstr<'_>, BytecodeError> {
    let at = pc as usize;
    let Some(&byte) = code.get(at) else {
        return Err(BytecodeError::OutOfBounds { pc });
    };
    let Some(opcode) = Opcode::from_u8(byte) else {
        return Err(BytecodeError::UnknownOpcode { pc, opcode: byte });
    };
    let needed = opcode.immediate_len();
    let start = at + 1;
    let available = code.len() - start;
    if needed > available {
        return Err(BytecodeError::TruncatedImmediate {
            pc,
            opcode,
            needed,
            available,
        });
    }
    let end = start + needed;
    Ok(DecodedInstr {
        offset: pc,
        opcode,
        immediate: &code[start..end],
        next_pc: u32::try_from(end).map_err(|_| BytecodeError::OutOfBounds { pc })?,
    })
}

/// A linear walk over every instruction position of a code buffer.
///
/// Unlike [`decode_at`] this never stops early: an unassigned byte yields an error and the walk
/// resumes at the next byte; a truncated trailing push yields an error and ends the walk. This
/// is the layout every reader of the code agrees on, regardless of reachability.
#[derive(Clone, Debug)]
pub struct Instructions<'a> {
    code: &'a [u8],
    pc: usize,
}

impl<'a> Instructions<'a> {
    /// Creates a walk starting at offset 0.
    #[must_use]
    pub fn new(code: &'a [u8]) -> Self {
        Self { code, pc: 0 }
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Result<DecodedInstr<'a>, BytecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pc >= self.code.len() {
            return None;
        }
        let pc = u32::try_from(self.pc).ok()?;
        let r = decode_at(self.code, pc);
        self.pc = match &r {
            Ok(di) => di.next_pc as usize,
            Err(BytecodeError::UnknownOpcode { .. }) => self.pc + 1,
            Err(_) => self.code.len(),
        };
        Some(r)
    }
}
