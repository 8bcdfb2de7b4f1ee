// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Creation-time verification.
//!
//! The verifier proves that accepted code cannot halt with an exception except by running out
//! of gas or by overflowing the stack through unbounded recursion. Concretely, on every
//! reachable path:
//! - every executed byte is an assigned opcode with its full immediate present,
//! - no instruction pops more items than are live, and the stack never exceeds its limit,
//! - every program point is reached with one path-independent stack depth,
//! - every jump lands on a `JUMPDEST`; a jump whose destination is not a traced constant must
//!   have at least one entry in the jump or trap table, and every listed entry must be valid.
//!
//! Each offset is symbolically executed at most once (later arrivals hit the depth memo), so
//! verification is linear in code size plus table size.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::analysis::jumpdest::JumpDests;
use crate::bytecode::{BytecodeError, decode_at};
use crate::jump_table::{JumpTable, JumpTables, Lookup, TableError, TableKind};
use crate::opcode::Opcode;
use crate::stack::{Constant, Origin, STACK_CAPACITY, SlotValue, StackError, SymbolicStack};
use crate::trace::{JumpResolution, TraceMask, TraceOutcome, TraceSink};

/// Default maximum code length in bytes.
pub const MAX_CODE_LEN: usize = 24_576;

/// Verifier configuration and limits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Maximum accepted code length in bytes.
    pub max_code_len: usize,
    /// Maximum operand-stack depth (clamped to [`STACK_CAPACITY`]).
    pub stack_limit: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            max_code_len: MAX_CODE_LEN,
            stack_limit: STACK_CAPACITY,
        }
    }
}

/// The destination of a rejected jump.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpTarget {
    /// A traced constant that is not a valid `JUMPDEST` (`None` if it exceeds `u32`).
    Static {
        /// The constant value.
        value: Option<u32>,
    },
    /// A dynamic destination with no entry in either table.
    Unlisted,
    /// A table entry whose destination is not a valid `JUMPDEST`.
    Listed {
        /// The table holding the entry.
        table: TableKind,
        /// The listed destination.
        dst: u32,
    },
}

impl fmt::Display for JumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static { value: Some(v) } => write!(f, "static target {v}"),
            Self::Static { value: None } => write!(f, "static target wider than u32"),
            Self::Unlisted => write!(f, "dynamic target with no table entry"),
            Self::Listed { table, dst } => write!(f, "{table} destination {dst}"),
        }
    }
}

/// Coarse classification of a [`VerifyError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unassigned opcode or truncated immediate data.
    MalformedInstruction,
    /// A jump destination that cannot be proven valid.
    UnreachableJumpTarget,
    /// An opcode demands more live items than present.
    StackUnderflow,
    /// The stack would exceed its limit.
    StackOverflow,
    /// An offset is reached with two different depths.
    DepthInconsistency,
    /// The code exceeds the configured size limit.
    Limits,
    /// A jump or trap table is malformed.
    Table,
}

/// A verification error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The code is longer than [`VerifyConfig::max_code_len`].
    CodeTooLarge {
        /// Code length in bytes.
        len: usize,
        /// Configured maximum.
        max: usize,
    },
    /// A jump or trap table is malformed.
    Table {
        /// Which table.
        table: TableKind,
        /// The table error.
        error: TableError,
    },
    /// A reachable instruction failed to decode.
    MalformedInstruction {
        /// Byte offset of the instruction.
        pc: u32,
        /// The decode error.
        error: BytecodeError,
    },
    /// A jump destination could not be proven to be a valid `JUMPDEST`.
    UnreachableJumpTarget {
        /// Byte offset of the jump.
        pc: u32,
        /// The offending destination.
        target: JumpTarget,
    },
    /// An instruction requires more live items than present.
    StackUnderflow {
        /// Byte offset of the instruction.
        pc: u32,
        /// Live items before the instruction.
        depth: usize,
        /// Items the instruction requires.
        required: usize,
    },
    /// An instruction would grow the stack past its limit.
    StackOverflow {
        /// Byte offset of the instruction.
        pc: u32,
        /// Live items before the instruction.
        depth: usize,
        /// Stack limit.
        limit: usize,
    },
    /// An offset was reached with a depth different from the one first recorded there.
    DepthInconsistency {
        /// Byte offset reached twice.
        pc: u32,
        /// Depth recorded on the first visit.
        recorded: usize,
        /// Depth observed on this visit.
        observed: usize,
    },
}

impl VerifyError {
    /// Returns the error's classification.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CodeTooLarge { .. } => ErrorKind::Limits,
            Self::Table { .. } => ErrorKind::Table,
            Self::MalformedInstruction { .. } => ErrorKind::MalformedInstruction,
            Self::UnreachableJumpTarget { .. } => ErrorKind::UnreachableJumpTarget,
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::StackOverflow { .. } => ErrorKind::StackOverflow,
            Self::DepthInconsistency { .. } => ErrorKind::DepthInconsistency,
        }
    }

    /// Returns the offending code offset, if the error has one.
    #[must_use]
    pub fn pc(&self) -> Option<u32> {
        match self {
            Self::CodeTooLarge { .. } | Self::Table { .. } => None,
            Self::MalformedInstruction { pc, .. }
            | Self::UnreachableJumpTarget { pc, .. }
            | Self::StackUnderflow { pc, .. }
            | Self::StackOverflow { pc, .. }
            | Self::DepthInconsistency { pc, .. } => Some(*pc),
        }
    }

    fn from_stack(pc: u32, e: StackError) -> Self {
        match e {
            StackError::Underflow { depth, required } => Self::StackUnderflow {
                pc,
                depth,
                required,
            },
            StackError::Overflow { depth, limit } => Self::StackOverflow { pc, depth, limit },
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeTooLarge { len, max } => {
                write!(f, "code length {len} exceeds maximum {max}")
            }
            Self::Table { table, error } => write!(f, "malformed {table}: {error}"),
            Self::MalformedInstruction { error, .. } => {
                write!(f, "malformed instruction: {error}")
            }
            Self::UnreachableJumpTarget { pc, target } => {
                write!(f, "pc={pc} unreachable jump target ({target})")
            }
            Self::StackUnderflow {
                pc,
                depth,
                required,
            } => write!(
                f,
                "pc={pc} stack underflow (depth {depth}, requires {required})"
            ),
            Self::StackOverflow { pc, depth, limit } => {
                write!(f, "pc={pc} stack overflow (depth {depth}, limit {limit})")
            }
            Self::DepthInconsistency {
                pc,
                recorded,
                observed,
            } => write!(
                f,
                "pc={pc} depth inconsistency (recorded {recorded}, observed {observed})"
            ),
        }
    }
}

impl core::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Table { error, .. } => Some(error),
            Self::MalformedInstruction { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Code that has been accepted by the verifier, together with its tables.
///
/// A runtime dispatcher holding a [`VerifiedCode`] may assume every listed `(source,
/// destination)` pair reached by a dynamic jump lands on a `JUMPDEST`, and that every such jump
/// has at least one listed destination to fall back to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedCode {
    code: Vec<u8>,
    tables: JumpTables,
    jumpdests: JumpDests,
    memo: DepthMemo,
}

impl VerifiedCode {
    /// Returns the code.
    #[must_use]
    pub fn code(&self) -> &[u8] {
        &self.code
    }

    /// Returns the jump and trap tables.
    #[must_use]
    pub fn tables(&self) -> &JumpTables {
        &self.tables
    }

    /// Returns `true` if `offset` is a valid jump destination.
    #[must_use]
    pub fn is_jumpdest(&self, offset: u32) -> bool {
        self.jumpdests.is_valid(offset)
    }

    /// Returns the destinations listed for the dynamic jump at `src`.
    #[must_use]
    pub fn listed(&self, src: u32) -> Lookup<'_> {
        self.tables.lookup(src)
    }

    /// Returns the stack depth proven for the instruction at `pc`, if it is reachable.
    ///
    /// Terminators are not recorded.
    #[must_use]
    pub fn depth_at(&self, pc: u32) -> Option<usize> {
        self.memo.get(pc)
    }

    /// Consumes `self` and returns the code and tables.
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, JumpTables) {
        (self.code, self.tables)
    }
}

/// Verifies `code` against `tables`.
pub fn verify(code: &[u8], tables: &JumpTables, cfg: &VerifyConfig) -> Result<(), VerifyError> {
    verify_traced(code, tables, cfg, None)
}

/// Verifies `code` with the default configuration and reports only accept/reject.
#[must_use]
pub fn is_valid(code: &[u8], tables: &JumpTables) -> bool {
    verify(code, tables, &VerifyConfig::default()).is_ok()
}

/// Verifies `code`, reporting events to `trace`.
pub fn verify_traced(
    code: &[u8],
    tables: &JumpTables,
    cfg: &VerifyConfig,
    mut trace: Option<&mut dyn TraceSink>,
) -> Result<(), VerifyError> {
    let mask = trace.as_ref().map_or(TraceMask::NONE, |t| t.mask());
    if mask.contains(TraceMask::RUN)
        && let Some(t) = trace.as_mut()
    {
        t.run_start(code.len(), tables.len());
    }

    let r = check_code_len(code, cfg).and_then(|()| {
        let jumpdests = JumpDests::analyze(code);
        let sink = trace.as_mut().map(|t| &mut **t as &mut dyn TraceSink);
        Traversal::new(code, tables, &jumpdests, cfg, sink, mask).run()
    });

    if mask.contains(TraceMask::RUN)
        && let Some(t) = trace.as_mut()
    {
        match &r {
            Ok(_) => t.run_end(TraceOutcome::Accepted),
            Err(e) => t.run_end(TraceOutcome::Rejected(e)),
        }
    }
    r.map(|_memo| ())
}

/// Verifies `code` and returns a [`VerifiedCode`] wrapper on success.
pub fn verify_owned(
    code: Vec<u8>,
    tables: JumpTables,
    cfg: &VerifyConfig,
) -> Result<VerifiedCode, VerifyError> {
    check_code_len(&code, cfg)?;
    let jumpdests = JumpDests::analyze(&code);
    let memo = Traversal::new(&code, &tables, &jumpdests, cfg, None, TraceMask::NONE).run()?;
    Ok(VerifiedCode {
        code,
        tables,
        jumpdests,
        memo,
    })
}

/// Decodes the jump and trap table regions, then verifies `code` against them.
///
/// Returns the decoded tables on success.
pub fn verify_regions(
    code: &[u8],
    jump_table: &[u8],
    trap_table: &[u8],
    cfg: &VerifyConfig,
) -> Result<JumpTables, VerifyError> {
    let jumps = JumpTable::decode(jump_table).map_err(|error| VerifyError::Table {
        table: TableKind::Jump,
        error,
    })?;
    let traps = JumpTable::decode(trap_table).map_err(|error| VerifyError::Table {
        table: TableKind::Trap,
        error,
    })?;
    let tables = JumpTables::new(jumps, traps);
    verify(code, &tables, cfg)?;
    Ok(tables)
}

fn check_code_len(code: &[u8], cfg: &VerifyConfig) -> Result<(), VerifyError> {
    let max = cfg.max_code_len.min(u32::MAX as usize);
    if code.len() > max {
        return Err(VerifyError::CodeTooLarge {
            len: code.len(),
            max,
        });
    }
    Ok(())
}

/// Depth recorded the first time each offset is visited.
#[derive(Clone, Debug, PartialEq, Eq)]
struct DepthMemo {
    depths: Vec<u16>,
}

enum Visit {
    First,
    Revisit,
}

impl DepthMemo {
    const UNVISITED: u16 = u16::MAX;

    fn new(code_len: usize) -> Self {
        Self {
            depths: vec![Self::UNVISITED; code_len],
        }
    }

    fn get(&self, pc: u32) -> Option<usize> {
        match self.depths.get(pc as usize) {
            Some(&d) if d != Self::UNVISITED => Some(usize::from(d)),
            _ => None,
        }
    }

    /// Records `depth` at `pc` on first visit; on later visits returns the recorded depth if it
    /// differs.
    fn visit(&mut self, pc: u32, depth: usize) -> Result<Visit, usize> {
        let slot = &mut self.depths[pc as usize];
        if *slot == Self::UNVISITED {
            // Depth is bounded by STACK_CAPACITY, well below the sentinel.
            *slot = u16::try_from(depth).unwrap_or(Self::UNVISITED - 1);
            return Ok(Visit::First);
        }
        if usize::from(*slot) == depth {
            Ok(Visit::Revisit)
        } else {
            Err(usize::from(*slot))
        }
    }
}

/// A pending block entry.
#[derive(Copy, Clone, Debug)]
struct Task {
    pc: u32,
    depth: usize,
}

struct Traversal<'a, 't> {
    code: &'a [u8],
    tables: &'a JumpTables,
    jumpdests: &'a JumpDests,
    stack: SymbolicStack,
    memo: DepthMemo,
    work: Vec<Task>,
    trace: Option<&'t mut dyn TraceSink>,
    mask: TraceMask,
}

impl<'a, 't> Traversal<'a, 't> {
    fn new(
        code: &'a [u8],
        tables: &'a JumpTables,
        jumpdests: &'a JumpDests,
        cfg: &VerifyConfig,
        trace: Option<&'t mut dyn TraceSink>,
        mask: TraceMask,
    ) -> Self {
        Self {
            code,
            tables,
            jumpdests,
            stack: SymbolicStack::new(cfg.stack_limit),
            memo: DepthMemo::new(code.len()),
            work: Vec::new(),
            trace,
            mask,
        }
    }

    fn run(mut self) -> Result<DepthMemo, VerifyError> {
        self.work.push(Task { pc: 0, depth: 0 });
        while let Some(task) = self.work.pop() {
            self.walk(task)?;
        }
        Ok(self.memo)
    }

    /// Executes straight-line code from `task` until the path terminates, hits the memo, or
    /// leaves through a dynamic `JUMP`.
    fn walk(&mut self, task: Task) -> Result<(), VerifyError> {
        self.stack
            .reset(task.depth)
            .map_err(|e| VerifyError::from_stack(task.pc, e))?;
        self.trace_block(task.pc);

        let mut pc = task.pc;
        loop {
            // Running off the end of the code is an implicit STOP.
            if pc as usize >= self.code.len() {
                return Ok(());
            }
            let di = decode_at(self.code, pc)
                .map_err(|error| VerifyError::MalformedInstruction { pc, error })?;
            let op = di.opcode;

            if op.is_terminator() {
                self.stack
                    .require(op.stack_in())
                    .map_err(|e| VerifyError::from_stack(pc, e))?;
                self.trace_instr(pc, di.next_pc, op);
                return Ok(());
            }

            let depth = self.stack.depth();
            match self.memo.visit(pc, depth) {
                Ok(Visit::First) => {}
                Ok(Visit::Revisit) => return Ok(()),
                Err(recorded) => {
                    return Err(VerifyError::DepthInconsistency {
                        pc,
                        recorded,
                        observed: depth,
                    });
                }
            }

            let stack_err = |e: StackError| VerifyError::from_stack(pc, e);
            match op {
                Opcode::Jump => {
                    let target = self.stack.pop().map_err(stack_err)?;
                    self.trace_instr(pc, di.next_pc, op);
                    match self.resolve(pc, target)? {
                        Some(dst) => {
                            self.stack.enter_block();
                            self.trace_block(dst);
                            pc = dst;
                            continue;
                        }
                        None => return Ok(()),
                    }
                }
                Opcode::Jumpi => {
                    // Checked up front so a lone operand reports both as required.
                    self.stack.require(2).map_err(stack_err)?;
                    let target = self.stack.pop().map_err(stack_err)?;
                    let _cond = self.stack.pop().map_err(stack_err)?;
                    if let Some(dst) = self.resolve(pc, target)? {
                        self.work.push(Task {
                            pc: dst,
                            depth: self.stack.depth(),
                        });
                    }
                    // The fallthrough starts a block of its own.
                    self.stack.enter_block();
                    self.trace_instr(pc, di.next_pc, op);
                    self.trace_block(di.next_pc);
                    pc = di.next_pc;
                    continue;
                }
                // A JUMPDEST may be a join; its state must be fully described by its depth.
                Opcode::Jumpdest => self.stack.enter_block(),
                Opcode::Pc => {
                    let c = Constant {
                        origin: Origin::Pc { pc },
                        value: Some(pc),
                    };
                    self.stack
                        .push(SlotValue::Constant(c))
                        .map_err(stack_err)?;
                }
                _ if op.is_push() => {
                    let c = Constant {
                        origin: Origin::Push { pc },
                        value: di.immediate_u32(),
                    };
                    self.stack
                        .push(SlotValue::Constant(c))
                        .map_err(stack_err)?;
                }
                _ => {
                    if let Some(n) = op.dup_depth() {
                        self.stack.dup(n).map_err(stack_err)?;
                    } else if let Some(n) = op.swap_depth() {
                        self.stack.swap(n).map_err(stack_err)?;
                    } else {
                        self.stack
                            .apply(op.stack_in(), op.stack_out())
                            .map_err(stack_err)?;
                    }
                }
            }
            self.trace_instr(pc, di.next_pc, op);
            pc = di.next_pc;
        }
    }

    /// Validates the destination of the jump at `pc`.
    ///
    /// Returns `Some(dst)` for a static destination. For a dynamic destination every listed
    /// destination is validated and queued as its own task, and `None` is returned.
    fn resolve(&mut self, pc: u32, target: SlotValue) -> Result<Option<u32>, VerifyError> {
        if let Some(c) = target.constant() {
            return match c.value {
                Some(dst) if self.jumpdests.is_valid(dst) => {
                    self.trace_jump(pc, JumpResolution::Static { dst });
                    Ok(Some(dst))
                }
                value => Err(VerifyError::UnreachableJumpTarget {
                    pc,
                    target: JumpTarget::Static { value },
                }),
            };
        }

        let tables = self.tables;
        let lookup = tables.lookup(pc);
        if !lookup.is_listed() {
            return Err(VerifyError::UnreachableJumpTarget {
                pc,
                target: JumpTarget::Unlisted,
            });
        }
        for (table, dst) in lookup.destinations() {
            if !self.jumpdests.is_valid(dst) {
                return Err(VerifyError::UnreachableJumpTarget {
                    pc,
                    target: JumpTarget::Listed { table, dst },
                });
            }
        }
        let depth = self.stack.depth();
        for (_, dst) in lookup.destinations() {
            self.work.push(Task { pc: dst, depth });
        }
        self.trace_jump(
            pc,
            JumpResolution::Dynamic {
                listed: lookup.len(),
            },
        );
        Ok(None)
    }

    fn trace_block(&mut self, pc: u32) {
        if self.mask.contains(TraceMask::BLOCK)
            && let Some(t) = self.trace.as_mut()
        {
            t.block_enter(pc, self.stack.depth());
        }
    }

    fn trace_instr(&mut self, pc: u32, next_pc: u32, op: Opcode) {
        if self.mask.contains(TraceMask::INSTR)
            && let Some(t) = self.trace.as_mut()
        {
            t.instr(pc, next_pc, op, self.stack.depth());
        }
    }

    fn trace_jump(&mut self, pc: u32, resolution: JumpResolution) {
        if self.mask.contains(TraceMask::JUMP)
            && let Some(t) = self.trace.as_mut()
        {
            t.jump(pc, resolution);
        }
    }
}
