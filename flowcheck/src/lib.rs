// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `flowcheck`: a creation-time verifier for EVM-style bytecode.
//!
//! Verification runs once, before code is stored. It proves that every reachable jump lands on
//! a `JUMPDEST`, that every reachable instruction decodes and finds its operands on the stack,
//! and that every program point is reached with a single stack depth. A dynamic jump (one whose
//! destination is not a traced constant) is accepted only if the jump or trap table lists its
//! destinations.
//!
//! The traversal executes each offset at most once, so verification is linear in the size of
//! the code plus the tables.
//!
//! ## Example
//!
//! ```
//! use flowcheck::asm::{Asm, TableBuilder};
//! use flowcheck::jump_table::{JumpTable, JumpTables};
//! use flowcheck::opcode::Opcode;
//! use flowcheck::verifier::{VerifyConfig, verify};
//!
//! // Dispatch on calldata through a listed dynamic jump.
//! let mut a = Asm::new();
//! let (even, odd) = (a.label(), a.label());
//! a.push_u64(0).op(Opcode::Calldataload);
//! let site = a.dynamic_jump();
//! a.jumpdest(even)?.op(Opcode::Stop);
//! a.jumpdest(odd)?.op(Opcode::Stop);
//!
//! let mut jumps = TableBuilder::new();
//! jumps.entries(site, &[even, odd]);
//! let tables = JumpTables::new(jumps.build(&a)?, JumpTable::empty());
//! let code = a.finish()?;
//!
//! verify(&code, &tables, &VerifyConfig::default())?;
//! assert!(verify(&code, &JumpTables::empty(), &VerifyConfig::default()).is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![no_std]

extern crate alloc;

pub mod analysis;
pub mod asm;
pub mod bytecode;
pub mod disasm;
pub mod jump_table;
pub mod opcode;
pub mod stack;
pub mod trace;
pub mod verifier;
