// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![allow(missing_docs, reason = "integration test crate")]

use std::collections::BTreeMap;

use flowcheck::jump_table::{JumpEntry, JumpTable, JumpTables};
use flowcheck::opcode::Opcode;
use flowcheck::stack::STACK_CAPACITY;
use flowcheck::trace::{TraceMask, TraceSink};
use flowcheck::verifier::{VerifyConfig, verify, verify_owned, verify_traced};
use flowcheck_conformance::explore;
use proptest::prelude::*;

/// Offsets targeted by generated pushes and table entries.
const SPAN: u8 = 48;

#[derive(Copy, Clone, Debug)]
enum Atom {
    Push(u8),
    Push0,
    Pc,
    Jumpdest,
    Jump,
    Jumpi,
    Pop,
    Add,
    Dup(u8),
    Swap(u8),
    Calldataload,
    Stop,
    Return,
    Byte(u8),
}

impl Atom {
    fn encode(self, out: &mut Vec<u8>) {
        match self {
            Self::Push(v) => out.extend_from_slice(&[Opcode::Push1 as u8, v]),
            Self::Push0 => out.push(Opcode::Push0 as u8),
            Self::Pc => out.push(Opcode::Pc as u8),
            Self::Jumpdest => out.push(Opcode::Jumpdest as u8),
            Self::Jump => out.push(Opcode::Jump as u8),
            Self::Jumpi => out.push(Opcode::Jumpi as u8),
            Self::Pop => out.push(Opcode::Pop as u8),
            Self::Add => out.push(Opcode::Add as u8),
            Self::Dup(n) => out.push(Opcode::Dup1 as u8 + n),
            Self::Swap(n) => out.push(Opcode::Swap1 as u8 + n),
            Self::Calldataload => out.push(Opcode::Calldataload as u8),
            Self::Stop => out.push(Opcode::Stop as u8),
            Self::Return => out.push(Opcode::Return as u8),
            Self::Byte(b) => out.push(b),
        }
    }
}

fn whole_atom() -> impl Strategy<Value = Atom> {
    prop_oneof![
        4 => (0..SPAN).prop_map(Atom::Push),
        2 => Just(Atom::Push0),
        1 => Just(Atom::Pc),
        4 => Just(Atom::Jumpdest),
        3 => Just(Atom::Jump),
        3 => Just(Atom::Jumpi),
        2 => Just(Atom::Pop),
        1 => Just(Atom::Add),
        1 => (0..3_u8).prop_map(Atom::Dup),
        1 => (0..2_u8).prop_map(Atom::Swap),
        1 => Just(Atom::Calldataload),
        1 => Just(Atom::Stop),
        1 => Just(Atom::Return),
    ]
}

fn any_atom() -> impl Strategy<Value = Atom> {
    prop_oneof![
        9 => whole_atom(),
        1 => any::<u8>().prop_map(Atom::Byte),
    ]
}

fn encode(atoms: &[Atom]) -> Vec<u8> {
    let mut code = Vec::new();
    for a in atoms {
        a.encode(&mut code);
    }
    code
}

fn table_strategy() -> impl Strategy<Value = JumpTable> {
    prop::collection::vec((0..SPAN, 0..SPAN), 0..6).prop_map(|pairs| {
        JumpTable::from_unsorted(
            pairs
                .into_iter()
                .map(|(s, d)| JumpEntry::new(u32::from(s), u32::from(d)))
                .collect(),
        )
    })
}

fn tables_strategy() -> impl Strategy<Value = JumpTables> {
    (table_strategy(), table_strategy()).prop_map(|(j, t)| JumpTables::new(j, t))
}

#[derive(Default)]
struct PerPc {
    counts: BTreeMap<u32, usize>,
}

impl TraceSink for PerPc {
    fn mask(&self) -> TraceMask {
        TraceMask::INSTR
    }

    fn instr(&mut self, pc: u32, _next_pc: u32, _opcode: Opcode, _depth: usize) {
        *self.counts.entry(pc).or_default() += 1;
    }
}

proptest! {
    /// The verifier accepts exactly when exhaustive exploration is fault-free and
    /// depth-consistent, and then agrees with it on every offset's depth.
    #[test]
    fn verifier_matches_exhaustive_exploration(
        atoms in prop::collection::vec(any_atom(), 0..40),
        tables in tables_strategy(),
    ) {
        let code = encode(&atoms);
        let e = explore(&code, &tables, STACK_CAPACITY);
        match verify_owned(code.clone(), tables, &VerifyConfig::default()) {
            Ok(v) => {
                prop_assert!(e.is_clean(), "accepted but explorer found {:?}", e);
                for pc in 0..u32::try_from(code.len()).unwrap() {
                    prop_assert_eq!(v.depth_at(pc), e.depth_at(pc), "pc={}", pc);
                }
            }
            Err(err) => prop_assert!(!e.is_clean(), "rejected clean code: {}", err),
        }
    }

    /// Identical inputs give identical results.
    #[test]
    fn verification_is_deterministic(
        atoms in prop::collection::vec(any_atom(), 0..40),
        tables in tables_strategy(),
    ) {
        let code = encode(&atoms);
        let cfg = VerifyConfig::default();
        prop_assert_eq!(verify(&code, &tables, &cfg), verify(&code, &tables, &cfg));
    }

    /// Bytes after a final terminator never change the result, as long as they add no
    /// `JUMPDEST`.
    #[test]
    fn trailing_dead_code_is_ignored(
        atoms in prop::collection::vec(whole_atom(), 0..40),
        tail in prop::collection::vec(any::<u8>().prop_filter("no JUMPDEST", |b| *b != 0x5B), 0..24),
        tables in tables_strategy(),
    ) {
        let mut code = encode(&atoms);
        code.push(Opcode::Stop as u8);
        let cfg = VerifyConfig::default();
        let base = verify(&code, &tables, &cfg);
        code.extend_from_slice(&tail);
        prop_assert_eq!(verify(&code, &tables, &cfg), base);
    }

    /// A dynamic jump is accepted iff something is listed for it and every listing is a
    /// `JUMPDEST` outside immediate data.
    #[test]
    fn dynamic_jumps_need_complete_listings(
        body in prop::collection::vec(0..3_u8, 1..16),
        listed in prop::collection::vec((any::<bool>(), 3..64_u32), 0..5),
    ) {
        // 0: PUSH0; 1: CALLDATALOAD; 2: JUMP; then blocks ending in STOP.
        let mut code = vec![
            Opcode::Push0 as u8,
            Opcode::Calldataload as u8,
            Opcode::Jump as u8,
        ];
        let mut jumpdests = Vec::new();
        for b in body {
            match b {
                0 => {
                    jumpdests.push(u32::try_from(code.len()).unwrap());
                    code.extend_from_slice(&[Opcode::Jumpdest as u8, Opcode::Stop as u8]);
                }
                1 => code.push(Opcode::Stop as u8),
                _ => code.extend_from_slice(&[Opcode::Push1 as u8, Opcode::Jumpdest as u8]),
            }
        }
        let mut jumps = Vec::new();
        let mut traps = Vec::new();
        for &(in_jumps, dst) in &listed {
            let e = JumpEntry::new(2, dst);
            if in_jumps { jumps.push(e) } else { traps.push(e) }
        }
        let tables = JumpTables::new(JumpTable::from_unsorted(jumps), JumpTable::from_unsorted(traps));
        let expected = !listed.is_empty() && listed.iter().all(|(_, d)| jumpdests.contains(d));
        let r = verify(&code, &tables, &VerifyConfig::default());
        prop_assert_eq!(r.is_ok(), expected, "{:?}", r);
    }

    /// No offset is symbolically executed more than once.
    #[test]
    fn each_offset_is_executed_at_most_once(
        atoms in prop::collection::vec(any_atom(), 0..60),
        tables in tables_strategy(),
    ) {
        let code = encode(&atoms);
        let mut sink = PerPc::default();
        let _ = verify_traced(&code, &tables, &VerifyConfig::default(), Some(&mut sink));
        for (pc, n) in sink.counts {
            prop_assert!(n <= 1, "pc={} executed {} times", pc, n);
        }
    }
}
