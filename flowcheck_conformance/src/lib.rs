// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference model for `flowcheck` conformance tests.
//!
//! [`explore`] enumerates every abstract state `(block entry, depth)` reachable from offset 0
//! without a depth memo: a `JUMPDEST` reached with two different depths is simply explored
//! twice. Block entries are offset 0, every `JUMPDEST` and every `JUMPI` fallthrough; nothing is
//! known about the stack contents at an entry. Faults are collected instead of aborting. The verifier is correct exactly when it
//! accepts the code iff the exploration is fault-free and sees one depth per offset.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use flowcheck::bytecode::{Instructions, decode_at};
use flowcheck::jump_table::JumpTables;
use flowcheck::opcode::Opcode;

/// A failure observed by [`explore`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Fault {
    /// The instruction at `pc` does not decode.
    Malformed {
        /// Instruction offset.
        pc: u32,
    },
    /// The instruction at `pc` needs more items than are live.
    Underflow {
        /// Instruction offset.
        pc: u32,
    },
    /// The instruction at `pc` exceeds the stack limit.
    Overflow {
        /// Instruction offset.
        pc: u32,
    },
    /// The jump at `pc` has a destination that is not provably a `JUMPDEST`.
    BadTarget {
        /// Jump offset.
        pc: u32,
    },
}

/// Result of [`explore`].
#[derive(Clone, Debug, Default)]
pub struct Exploration {
    /// Every depth each non-terminator instruction was reached with.
    pub depths: BTreeMap<u32, BTreeSet<usize>>,
    /// Every fault found, in no particular order.
    pub faults: BTreeSet<Fault>,
}

impl Exploration {
    /// Returns `true` if no fault was found and every offset has a single depth.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty() && self.depths.values().all(|d| d.len() == 1)
    }

    /// Returns the single depth recorded at `pc`, if there is exactly one.
    #[must_use]
    pub fn depth_at(&self, pc: u32) -> Option<usize> {
        let d = self.depths.get(&pc)?;
        if d.len() == 1 { d.first().copied() } else { None }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Val {
    Unknown,
    Const(Option<u32>),
}

/// Explores `code` from offset 0 under `tables` with a stack of at most `limit` items.
#[must_use]
pub fn explore(code: &[u8], tables: &JumpTables, limit: usize) -> Exploration {
    // A JUMPDEST byte counts only at an instruction boundary of the linear walk.
    let jumpdests: HashSet<u32> = Instructions::new(code)
        .flatten()
        .filter(|di| di.opcode == Opcode::Jumpdest)
        .map(|di| di.offset)
        .collect();
    let jumpdest = |pc: u32| jumpdests.contains(&pc);
    let mut out = Exploration::default();
    let mut seen: HashSet<(u32, usize)> = HashSet::new();
    let mut work = vec![(0_u32, 0_usize)];

    while let Some((entry, depth)) = work.pop() {
        if !seen.insert((entry, depth)) {
            continue;
        }
        let mut stack = vec![Val::Unknown; depth];
        let mut pc = entry;
        loop {
            if pc as usize >= code.len() {
                break;
            }
            let Ok(di) = decode_at(code, pc) else {
                out.faults.insert(Fault::Malformed { pc });
                break;
            };
            let op = di.opcode;
            if op == Opcode::Jumpdest && pc != entry {
                work.push((pc, stack.len()));
                break;
            }
            if op.is_terminator() {
                if stack.len() < op.stack_in() {
                    out.faults.insert(Fault::Underflow { pc });
                }
                break;
            }
            out.depths.entry(pc).or_default().insert(stack.len());

            // DUPn and SWAPn list their full read window as stack_in.
            if stack.len() < op.stack_in() {
                out.faults.insert(Fault::Underflow { pc });
                break;
            }
            if stack.len() - op.stack_in() + op.stack_out() > limit {
                out.faults.insert(Fault::Overflow { pc });
                break;
            }

            match op {
                Opcode::Jump | Opcode::Jumpi => {
                    let target = stack.pop().unwrap_or(Val::Unknown);
                    if op == Opcode::Jumpi {
                        stack.pop();
                    }
                    let dsts: Vec<u32> = match target {
                        Val::Const(Some(dst)) if jumpdest(dst) => vec![dst],
                        Val::Const(_) => Vec::new(),
                        Val::Unknown => {
                            let l = tables.lookup(pc);
                            let all: Vec<u32> = l.destinations().map(|(_, d)| d).collect();
                            if all.iter().all(|&d| jumpdest(d)) {
                                all
                            } else {
                                Vec::new()
                            }
                        }
                    };
                    if dsts.is_empty() {
                        out.faults.insert(Fault::BadTarget { pc });
                        break;
                    }
                    for d in dsts {
                        work.push((d, stack.len()));
                    }
                    // The JUMPI fallthrough is a block entry like any jump target.
                    if op == Opcode::Jumpi {
                        work.push((di.next_pc, stack.len()));
                    }
                    break;
                }
                Opcode::Pc => stack.push(Val::Const(Some(pc))),
                _ if op.is_push() => stack.push(Val::Const(di.immediate_u32())),
                _ => {
                    if let Some(n) = op.dup_depth() {
                        let v = stack[stack.len() - n];
                        stack.push(v);
                    } else if let Some(n) = op.swap_depth() {
                        let top = stack.len() - 1;
                        stack.swap(top, top - n);
                    } else {
                        stack.truncate(stack.len() - op.stack_in());
                        stack.extend(std::iter::repeat_n(Val::Unknown, op.stack_out()));
                    }
                }
            }
            pc = di.next_pc;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_sees_both_depths_of_a_bad_join() {
        // 0: CALLDATASIZE; 1: PUSH1 7; 3: JUMPI; 4: PUSH0; 5: PUSH0; 6: POP; 7: JUMPDEST
        let code = [
            Opcode::Calldatasize as u8,
            Opcode::Push1 as u8,
            7,
            Opcode::Jumpi as u8,
            Opcode::Push0 as u8,
            Opcode::Push0 as u8,
            Opcode::Pop as u8,
            Opcode::Jumpdest as u8,
        ];
        let e = explore(&code, &JumpTables::empty(), 1024);
        assert!(e.faults.is_empty());
        assert_eq!(e.depths[&7], BTreeSet::from([0, 1]));
        assert!(!e.is_clean());
        assert_eq!(e.depth_at(4), Some(0));
        assert_eq!(e.depth_at(7), None);
    }

    #[test]
    fn explorer_forgets_constants_across_jumpi() {
        // 0: PUSH1 7; 2: CALLDATASIZE; 3: PUSH1 9; 5: JUMPI; 6: JUMP; 7: JUMPDEST; 8: STOP;
        // 9: JUMPDEST; 10: STOP
        let code = [
            Opcode::Push1 as u8,
            7,
            Opcode::Calldatasize as u8,
            Opcode::Push1 as u8,
            9,
            Opcode::Jumpi as u8,
            Opcode::Jump as u8,
            Opcode::Jumpdest as u8,
            Opcode::Stop as u8,
            Opcode::Jumpdest as u8,
            Opcode::Stop as u8,
        ];
        let e = explore(&code, &JumpTables::empty(), 1024);
        assert_eq!(e.faults, BTreeSet::from([Fault::BadTarget { pc: 6 }]));
    }

    #[test]
    fn explorer_collects_faults() {
        let e = explore(&[Opcode::Add as u8], &JumpTables::empty(), 1024);
        assert_eq!(e.faults, BTreeSet::from([Fault::Underflow { pc: 0 }]));
        let e = explore(&[0xFE], &JumpTables::empty(), 1024);
        assert_eq!(e.faults, BTreeSet::from([Fault::Malformed { pc: 0 }]));
        let e = explore(&[Opcode::Push0 as u8; 3], &JumpTables::empty(), 2);
        assert_eq!(e.faults, BTreeSet::from([Fault::Overflow { pc: 2 }]));
    }
}
