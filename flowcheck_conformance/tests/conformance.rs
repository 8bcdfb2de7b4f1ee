// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(missing_docs, reason = "integration test crate")]

use flowcheck::asm::{Asm, TableBuilder};
use flowcheck::jump_table::{JumpEntry, JumpTable, JumpTables, TableKind};
use flowcheck::opcode::Opcode;
use flowcheck::stack::STACK_CAPACITY;
use flowcheck::verifier::{
    ErrorKind, JumpTarget, MAX_CODE_LEN, VerifyConfig, VerifyError, is_valid, verify,
    verify_owned, verify_regions,
};
use flowcheck_conformance::explore;

const PUSH0: u8 = Opcode::Push0 as u8;
const PUSH1: u8 = Opcode::Push1 as u8;
const POP: u8 = Opcode::Pop as u8;
const JUMP: u8 = Opcode::Jump as u8;
const JUMPI: u8 = Opcode::Jumpi as u8;
const JUMPDEST: u8 = Opcode::Jumpdest as u8;
const STOP: u8 = Opcode::Stop as u8;

fn check(code: &[u8], tables: &JumpTables) -> Result<(), VerifyError> {
    verify(code, tables, &VerifyConfig::default())
}

fn table(pairs: &[(u32, u32)]) -> JumpTable {
    JumpTable::new(pairs.iter().map(|&(s, d)| JumpEntry::new(s, d)).collect()).unwrap()
}

#[test]
fn scenario_static_jump_to_jumpdest_is_accepted() {
    let code = [PUSH1, 0x03, JUMP, JUMPDEST, STOP];
    check(&code, &JumpTables::empty()).unwrap();
    assert!(is_valid(&code, &JumpTables::empty()));
}

#[test]
fn scenario_static_jump_to_non_jumpdest_is_rejected() {
    let code = [PUSH1, 0x04, JUMP, JUMPDEST, STOP];
    let e = check(&code, &JumpTables::empty()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::UnreachableJumpTarget);
    assert_eq!(
        e,
        VerifyError::UnreachableJumpTarget {
            pc: 2,
            target: JumpTarget::Static { value: Some(4) }
        }
    );
}

#[test]
fn scenario_add_on_empty_stack_underflows() {
    let e = check(&[Opcode::Add as u8], &JumpTables::empty()).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::StackUnderflow);
}

#[test]
fn scenario_1025_pushes_overflow_at_the_last() {
    let code = vec![PUSH0; STACK_CAPACITY + 1];
    assert_eq!(
        check(&code, &JumpTables::empty()),
        Err(VerifyError::StackOverflow {
            pc: 1024,
            depth: 1024,
            limit: 1024
        })
    );
    check(&code[..STACK_CAPACITY], &JumpTables::empty()).unwrap();
}

/// A dynamic `JUMP` at offset 10 with `JUMPDEST`s at 50 and 60.
fn dynamic_jump_at_10() -> Vec<u8> {
    let mut code = vec![PUSH0, Opcode::Calldataload as u8];
    for _ in 0..4 {
        code.extend_from_slice(&[PUSH0, POP]);
    }
    assert_eq!(code.len(), 10);
    code.push(JUMP);
    code.resize(50, STOP);
    code.extend_from_slice(&[JUMPDEST, STOP]);
    code.resize(60, STOP);
    code.extend_from_slice(&[JUMPDEST, STOP]);
    code
}

#[test]
fn scenario_dynamic_jump_needs_a_listing() {
    let code = dynamic_jump_at_10();
    check(&code, &JumpTables::new(table(&[(10, 50)]), JumpTable::empty())).unwrap();
    check(&code, &JumpTables::new(JumpTable::empty(), table(&[(10, 60)]))).unwrap();
    check(&code, &JumpTables::new(table(&[(10, 50)]), table(&[(10, 60)]))).unwrap();
    assert_eq!(
        check(&code, &JumpTables::new(table(&[(9, 50)]), table(&[(11, 60)]))),
        Err(VerifyError::UnreachableJumpTarget {
            pc: 10,
            target: JumpTarget::Unlisted
        })
    );
}

#[test]
fn scenario_dynamic_jump_rejects_any_bad_listing() {
    let code = dynamic_jump_at_10();
    assert_eq!(
        check(&code, &JumpTables::new(table(&[(10, 50)]), table(&[(10, 61)]))),
        Err(VerifyError::UnreachableJumpTarget {
            pc: 10,
            target: JumpTarget::Listed {
                table: TableKind::Trap,
                dst: 61
            }
        })
    );
}

#[test]
fn scenario_join_with_depths_2_and_3_is_rejected() {
    // 0: PUSH0; 1: PUSH0; 2: CALLDATASIZE; 3: PUSH1 10; 5: JUMPI; 6: PUSH0; 7: PUSH1 10;
    // 9: JUMP; 10: JUMPDEST; 11: STOP
    let code = [
        PUSH0,
        PUSH0,
        Opcode::Calldatasize as u8,
        PUSH1,
        10,
        JUMPI,
        PUSH0,
        PUSH1,
        10,
        JUMP,
        JUMPDEST,
        STOP,
    ];
    assert_eq!(
        check(&code, &JumpTables::empty()),
        Err(VerifyError::DepthInconsistency {
            pc: 10,
            recorded: 3,
            observed: 2
        })
    );
    let e = explore(&code, &JumpTables::empty(), STACK_CAPACITY);
    assert_eq!(e.depths[&10].iter().copied().collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn self_loop_terminates_via_the_memo() {
    let mut a = Asm::new();
    let top = a.label();
    a.jumpdest(top).unwrap();
    a.jump_to(top);
    let v = verify_owned(a.finish().unwrap(), JumpTables::empty(), &VerifyConfig::default())
        .unwrap();
    assert_eq!(v.depth_at(0), Some(0));
}

#[test]
fn counting_loop_with_matching_depths_is_accepted() {
    let mut a = Asm::new();
    let (top, done) = (a.label(), a.label());
    a.push_u64(0).op(Opcode::Calldataload);
    a.jumpdest(top).unwrap();
    a.op(Opcode::Dup1).op(Opcode::Iszero).jumpi_to(done);
    a.push_u64(1).op(Opcode::Swap1).op(Opcode::Sub).jump_to(top);
    a.jumpdest(done).unwrap();
    a.op(Opcode::Pop).op(Opcode::Stop);
    a.finish_checked(&JumpTables::empty()).unwrap();
}

#[test]
fn dead_code_after_a_terminator_is_ignored() {
    let mut code = vec![PUSH1, 0x03, JUMP, JUMPDEST, STOP];
    code.extend_from_slice(&[0xFE, 0x0C, Opcode::Add as u8, Opcode::Push32 as u8, 0x01]);
    check(&code, &JumpTables::empty()).unwrap();
}

#[test]
fn jumpi_fallthrough_forgets_earlier_constants() {
    // 0: PUSH1 7; 2: CALLDATASIZE; 3: PUSH1 9; 5: JUMPI; 6: JUMP; 7: JUMPDEST; 8: STOP;
    // 9: JUMPDEST; 10: STOP
    let code = [
        PUSH1,
        7,
        Opcode::Calldatasize as u8,
        PUSH1,
        9,
        JUMPI,
        JUMP,
        JUMPDEST,
        STOP,
        JUMPDEST,
        STOP,
    ];
    assert_eq!(
        check(&code, &JumpTables::empty()),
        Err(VerifyError::UnreachableJumpTarget {
            pc: 6,
            target: JumpTarget::Unlisted
        })
    );
    assert!(!explore(&code, &JumpTables::empty(), STACK_CAPACITY).is_clean());

    let listed = JumpTables::new(table(&[(6, 7)]), JumpTable::empty());
    check(&code, &listed).unwrap();
    assert!(explore(&code, &listed, STACK_CAPACITY).is_clean());
}

#[test]
fn jumpdest_fallthrough_forgets_earlier_constants() {
    // 0: PUSH1 4; 2: JUMPDEST; 3: JUMP; 4: JUMPDEST; 5: STOP
    let code = [PUSH1, 4, JUMPDEST, JUMP, JUMPDEST, STOP];
    assert_eq!(
        check(&code, &JumpTables::empty()),
        Err(VerifyError::UnreachableJumpTarget {
            pc: 3,
            target: JumpTarget::Unlisted
        })
    );
    assert!(!explore(&code, &JumpTables::empty(), STACK_CAPACITY).is_clean());
    check(&code, &JumpTables::new(table(&[(3, 4)]), JumpTable::empty())).unwrap();
}

#[test]
fn blocks_may_pop_items_pushed_before_their_entry() {
    // 0: PUSH0; 1: PUSH1 4; 3: JUMP; 4: JUMPDEST; 5: POP; 6: STOP
    let code = [PUSH0, PUSH1, 4, JUMP, JUMPDEST, POP, STOP];
    let v = verify_owned(code.to_vec(), JumpTables::empty(), &VerifyConfig::default()).unwrap();
    assert_eq!(v.depth_at(4), Some(1));
    assert_eq!(v.depth_at(5), Some(1));
    assert!(explore(&code, &JumpTables::empty(), STACK_CAPACITY).is_clean());

    // Popping below the code-entry depth is still an underflow.
    let code = [PUSH1, 3, JUMP, JUMPDEST, POP, STOP];
    assert_eq!(
        check(&code, &JumpTables::empty()),
        Err(VerifyError::StackUnderflow {
            pc: 4,
            depth: 0,
            required: 1
        })
    );
}

#[test]
fn dynamic_destinations_are_traversed() {
    let mut a = Asm::new();
    let (ok, bad) = (a.label(), a.label());
    a.push_u64(0).op(Opcode::Calldataload);
    let site = a.dynamic_jump();
    a.jumpdest(ok).unwrap().op(Opcode::Stop);
    a.jumpdest(bad).unwrap().op(Opcode::Add);

    let mut traps = TableBuilder::new();
    traps.entries(site, &[ok, bad]);
    let tables = JumpTables::new(JumpTable::empty(), traps.build(&a).unwrap());
    let e = a.finish_checked(&tables).unwrap_err();
    assert!(e.to_string().contains("stack underflow"), "{e}");
}

#[test]
fn regions_decode_before_traversal() {
    let code = dynamic_jump_at_10();
    let tables = verify_regions(&code, &[0, 10, 0, 50], &[0, 10, 0, 60], &VerifyConfig::default())
        .unwrap();
    assert_eq!(tables.lookup(10).len(), 2);
    assert_eq!(
        verify_regions(&code, &[0, 10, 0], &[], &VerifyConfig::default())
            .unwrap_err()
            .kind(),
        ErrorKind::Table
    );
}

#[test]
fn code_size_limit_is_enforced() {
    let code = vec![STOP; MAX_CODE_LEN + 1];
    assert_eq!(
        check(&code, &JumpTables::empty()),
        Err(VerifyError::CodeTooLarge {
            len: MAX_CODE_LEN + 1,
            max: MAX_CODE_LEN
        })
    );
    check(&code[..MAX_CODE_LEN], &JumpTables::empty()).unwrap();
}

#[test]
fn pushed_values_wider_than_an_offset_are_not_targets() {
    let mut a = Asm::new();
    a.push(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x05]);
    a.op(Opcode::Jump);
    a.op(Opcode::Jumpdest);
    let e = a.finish_checked(&JumpTables::empty()).unwrap_err();
    assert!(e.to_string().contains("wider than u32"), "{e}");
}
