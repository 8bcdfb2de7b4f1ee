// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disassembler example.
//!
//! Run with:
//! `cargo run -p flowcheck --example disasm`

use flowcheck::asm::{Asm, TableBuilder};
use flowcheck::disasm::disassemble_verified;
use flowcheck::jump_table::JumpTables;
use flowcheck::opcode::Opcode;
use flowcheck::verifier::{VerifyConfig, verify_owned};

fn main() {
    let mut a = Asm::new();
    let l_loop = a.label();
    let l_done = a.label();
    let l_fail = a.label();

    // Count down from calldata[0] to zero, then dispatch through the tables.
    a.push_u64(0).op(Opcode::Calldataload);
    a.jumpdest(l_loop).unwrap();
    a.op(Opcode::Dup1).op(Opcode::Iszero);
    a.jumpi_to(l_done);
    a.push_u64(1).op(Opcode::Swap1).op(Opcode::Sub);
    a.jump_to(l_loop);

    a.jumpdest(l_done).unwrap();
    a.push_u64(32).op(Opcode::Calldataload);
    let site = a.dynamic_jump();

    a.jumpdest(l_fail).unwrap();
    a.push_u64(0).push_u64(0).op(Opcode::Revert);

    let mut jumps = TableBuilder::new();
    jumps.entry(site, l_done);
    let mut traps = TableBuilder::new();
    traps.entry(site, l_fail);
    let tables = JumpTables::new(jumps.build(&a).unwrap(), traps.build(&a).unwrap());

    let code = a.finish().unwrap();
    let verified = verify_owned(code, tables, &VerifyConfig::default()).unwrap();
    println!("{}", disassemble_verified(&verified));
}
