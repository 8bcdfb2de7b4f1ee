// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Workload generators for `flowcheck` benchmarks.
//!
//! Each generator returns code together with the tables it needs to verify. All workloads are
//! accepted by the verifier, so benches measure full traversals.

use flowcheck::asm::{Asm, AsmError, TableBuilder};
use flowcheck::jump_table::JumpTables;
use flowcheck::opcode::Opcode;

/// A generated benchmark input.
#[derive(Clone, Debug)]
pub struct Workload {
    /// The code.
    pub code: Vec<u8>,
    /// Jump and trap tables for `code`.
    pub tables: JumpTables,
}

impl Workload {
    fn static_only(code: Vec<u8>) -> Self {
        Self {
            code,
            tables: JumpTables::empty(),
        }
    }
}

/// `n` arithmetic steps with no control flow.
pub fn straight_line(n: usize) -> Result<Workload, AsmError> {
    let mut a = Asm::new();
    a.push_u64(1);
    for i in 0..n {
        a.push_u64(i as u64).op(Opcode::Add);
    }
    a.op(Opcode::Pop).op(Opcode::Stop);
    Ok(Workload::static_only(a.finish()?))
}

/// `n` if/else diamonds in sequence, each rejoining at a `JUMPDEST`.
pub fn diamonds(n: usize) -> Result<Workload, AsmError> {
    let mut a = Asm::new();
    for _ in 0..n {
        let (then, join) = (a.label(), a.label());
        a.op(Opcode::Calldatasize).jumpi_to(then);
        a.push_u64(1).op(Opcode::Pop).jump_to(join);
        a.jumpdest(then)?;
        a.push_u64(2).op(Opcode::Pop);
        a.jumpdest(join)?;
    }
    a.op(Opcode::Stop);
    Ok(Workload::static_only(a.finish()?))
}

/// `n` sequential counting loops.
pub fn loops(n: usize) -> Result<Workload, AsmError> {
    let mut a = Asm::new();
    for _ in 0..n {
        let (top, done) = (a.label(), a.label());
        a.push_u64(0).op(Opcode::Calldataload);
        a.jumpdest(top)?;
        a.op(Opcode::Dup1).op(Opcode::Iszero).jumpi_to(done);
        a.push_u64(1).op(Opcode::Swap1).op(Opcode::Sub).jump_to(top);
        a.jumpdest(done)?;
        a.op(Opcode::Pop);
    }
    a.op(Opcode::Stop);
    Ok(Workload::static_only(a.finish()?))
}

/// One dynamic jump listing `n` destinations, split between the jump and trap tables.
pub fn dispatch(n: usize) -> Result<Workload, AsmError> {
    let mut a = Asm::new();
    a.push_u64(0).op(Opcode::Calldataload);
    let site = a.dynamic_jump();
    let mut jumps = TableBuilder::new();
    let mut traps = TableBuilder::new();
    for i in 0..n {
        let arm = a.label();
        a.jumpdest(arm)?;
        a.push_u64(i as u64).op(Opcode::Pop).op(Opcode::Stop);
        if i % 4 == 3 {
            traps.entry(site, arm);
        } else {
            jumps.entry(site, arm);
        }
    }
    let tables = JumpTables::new(jumps.build(&a)?, traps.build(&a)?);
    Ok(Workload {
        code: a.finish()?,
        tables,
    })
}

/// `n` conditional jumps to one shared target, exercising memo hits.
pub fn fan_in(n: usize) -> Result<Workload, AsmError> {
    let mut a = Asm::new();
    let target = a.label();
    for _ in 0..n {
        a.op(Opcode::Calldatasize).jumpi_to(target);
    }
    a.jumpdest(target)?;
    a.op(Opcode::Stop);
    Ok(Workload::static_only(a.finish()?))
}
