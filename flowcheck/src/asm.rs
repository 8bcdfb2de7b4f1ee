// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bytecode builder ("assembler") for `flowcheck`.
//!
//! This is a small helper for constructing code without manually computing byte offsets. Label
//! references are emitted as fixed-width `PUSH2` instructions and patched in [`Asm::finish`], so
//! a reference never changes the layout of the code around it.

use alloc::vec::Vec;
use core::fmt;

use crate::jump_table::{JumpEntry, JumpTable, JumpTables};
use crate::opcode::Opcode;
use crate::verifier::{VerifyConfig, VerifyError, verify};

/// A label for control-flow targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(u32);

/// A label that has not been placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedLabel;

impl fmt::Display for UnresolvedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label was referenced but never placed")
    }
}

impl core::error::Error for UnresolvedLabel {}

/// A bytecode builder error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AsmError {
    /// A label was referenced but never placed.
    UnresolvedLabel,
    /// A label referenced through `PUSH2` was placed past offset `0xFFFF`.
    LabelOutOfRange {
        /// Offset the label was placed at.
        pc: u32,
    },
    /// The produced code failed verification.
    Verify(VerifyError),
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedLabel => write!(f, "unresolved label"),
            Self::LabelOutOfRange { pc } => write!(f, "label at pc={pc} does not fit in PUSH2"),
            Self::Verify(e) => write!(f, "verification failed: {e}"),
        }
    }
}

impl core::error::Error for AsmError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Verify(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnresolvedLabel> for AsmError {
    fn from(_: UnresolvedLabel) -> Self {
        Self::UnresolvedLabel
    }
}

impl From<VerifyError> for AsmError {
    fn from(e: VerifyError) -> Self {
        Self::Verify(e)
    }
}

/// Bytecode builder.
///
/// ## Example
///
/// ```
/// use flowcheck::asm::Asm;
/// use flowcheck::jump_table::JumpTables;
/// use flowcheck::opcode::Opcode;
///
/// let mut a = Asm::new();
/// let done = a.label();
/// a.op(Opcode::Calldatasize);
/// a.jumpi_to(done);
/// a.push_u64(0).push_u64(0).op(Opcode::Revert);
/// a.jumpdest(done)?;
/// a.op(Opcode::Stop);
/// let code = a.finish_checked(&JumpTables::empty())?;
/// assert_eq!(code[1], Opcode::Push2 as u8);
/// # Ok::<(), flowcheck::asm::AsmError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Asm {
    bytes: Vec<u8>,
    labels: Vec<Option<u32>>,
    fixups: Vec<Fixup>,
}

/// A pending `PUSH2` immediate.
#[derive(Clone, Debug)]
struct Fixup {
    at: usize,
    label: Label,
}

impl Asm {
    /// Creates an empty assembler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current byte offset ("pc") in the output.
    #[must_use]
    pub fn pc(&self) -> u32 {
        u32::try_from(self.bytes.len()).unwrap_or(u32::MAX)
    }

    /// Allocates a new label.
    #[must_use]
    pub fn label(&mut self) -> Label {
        let id = u32::try_from(self.labels.len()).unwrap_or(u32::MAX);
        self.labels.push(None);
        Label(id)
    }

    /// Places `label` at the current `pc`.
    pub fn place(&mut self, label: Label) -> Result<(), UnresolvedLabel> {
        let pc = self.pc();
        let slot = self
            .labels
            .get_mut(label.0 as usize)
            .ok_or(UnresolvedLabel)?;
        *slot = Some(pc);
        Ok(())
    }

    /// Returns the offset `label` was placed at.
    #[must_use]
    pub fn label_pc(&self, label: Label) -> Option<u32> {
        self.labels.get(label.0 as usize).copied().flatten()
    }

    /// Emits a bare opcode byte.
    ///
    /// Push opcodes emitted this way carry no immediate; use [`Asm::push`] instead.
    pub fn op(&mut self, op: Opcode) -> &mut Self {
        self.bytes.push(op as u8);
        self
    }

    /// Emits raw bytes, for example unassigned opcodes or deliberately truncated pushes.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Pushes a big-endian value with the narrowest push opcode (`PUSH0` for zero).
    ///
    /// Only the low 32 bytes of `value` are kept.
    pub fn push(&mut self, value: &[u8]) -> &mut Self {
        let value = &value[value.len().saturating_sub(32)..];
        let first = value.iter().position(|b| *b != 0).unwrap_or(value.len());
        let significant = &value[first..];
        match Opcode::push_n(significant.len()) {
            Some(op) => {
                self.bytes.push(op as u8);
                self.bytes.extend_from_slice(significant);
            }
            None => {
                self.bytes.push(Opcode::Push0 as u8);
            }
        }
        self
    }

    /// Pushes `value` with the narrowest push opcode.
    pub fn push_u64(&mut self, value: u64) -> &mut Self {
        self.push(&value.to_be_bytes())
    }

    /// Pushes the offset of `label` as a `PUSH2`.
    pub fn push_label(&mut self, label: Label) -> &mut Self {
        self.bytes.push(Opcode::Push2 as u8);
        self.fixups.push(Fixup {
            at: self.bytes.len(),
            label,
        });
        self.bytes.extend_from_slice(&[0, 0]);
        self
    }

    /// Places `label` and emits `JUMPDEST`.
    pub fn jumpdest(&mut self, label: Label) -> Result<&mut Self, UnresolvedLabel> {
        self.place(label)?;
        Ok(self.op(Opcode::Jumpdest))
    }

    /// Static jump: `PUSH2 label; JUMP`.
    pub fn jump_to(&mut self, label: Label) -> &mut Self {
        self.push_label(label).op(Opcode::Jump)
    }

    /// Static conditional jump: `PUSH2 label; JUMPI`, consuming the condition below.
    pub fn jumpi_to(&mut self, label: Label) -> &mut Self {
        self.push_label(label).op(Opcode::Jumpi)
    }

    /// Emits a `JUMP` whose destination is computed at runtime.
    ///
    /// Returns a label placed at the `JUMP`, for use as a [`TableBuilder`] source.
    pub fn dynamic_jump(&mut self) -> Label {
        self.dynamic(Opcode::Jump)
    }

    /// Emits a `JUMPI` whose destination is computed at runtime.
    ///
    /// Returns a label placed at the `JUMPI`, for use as a [`TableBuilder`] source.
    pub fn dynamic_jumpi(&mut self) -> Label {
        self.dynamic(Opcode::Jumpi)
    }

    fn dynamic(&mut self, op: Opcode) -> Label {
        let site = Label(u32::try_from(self.labels.len()).unwrap_or(u32::MAX));
        self.labels.push(Some(self.pc()));
        self.op(op);
        site
    }

    /// Finalizes and returns the code.
    pub fn finish(mut self) -> Result<Vec<u8>, AsmError> {
        for f in &self.fixups {
            let Some(target) = self.labels.get(f.label.0 as usize).and_then(|x| *x) else {
                return Err(AsmError::UnresolvedLabel);
            };
            let Ok(target16) = u16::try_from(target) else {
                return Err(AsmError::LabelOutOfRange { pc: target });
            };
            self.bytes[f.at..f.at + 2].copy_from_slice(&target16.to_be_bytes());
        }
        Ok(self.bytes)
    }

    /// Finalizes, then verifies the code against `tables`.
    pub fn finish_checked(self, tables: &JumpTables) -> Result<Vec<u8>, AsmError> {
        self.finish_checked_with(tables, &VerifyConfig::default())
    }

    /// Finalizes, then verifies the code against `tables` with a custom verifier config.
    pub fn finish_checked_with(
        self,
        tables: &JumpTables,
        cfg: &VerifyConfig,
    ) -> Result<Vec<u8>, AsmError> {
        let code = self.finish()?;
        verify(&code, tables, cfg)?;
        Ok(code)
    }
}

/// Accumulates `(source, destination)` label pairs for one jump table.
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    pairs: Vec<(Label, Label)>,
}

impl TableBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists `dst` as a destination of the dynamic jump at `src`.
    pub fn entry(&mut self, src: Label, dst: Label) -> &mut Self {
        self.pairs.push((src, dst));
        self
    }

    /// Lists every label in `dsts` as a destination of `src`.
    pub fn entries(&mut self, src: Label, dsts: &[Label]) -> &mut Self {
        for &dst in dsts {
            self.entry(src, dst);
        }
        self
    }

    /// Resolves the pairs against the labels placed in `asm`, sorting and dropping duplicates.
    pub fn build(&self, asm: &Asm) -> Result<JumpTable, UnresolvedLabel> {
        let mut entries = Vec::with_capacity(self.pairs.len());
        for &(src, dst) in &self.pairs {
            let src = asm.label_pc(src).ok_or(UnresolvedLabel)?;
            let dst = asm.label_pc(dst).ok_or(UnresolvedLabel)?;
            entries.push(JumpEntry::new(src, dst));
        }
        Ok(JumpTable::from_unsorted(entries))
    }
}
