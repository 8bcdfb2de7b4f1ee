// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The symbolic operand stack.
//!
//! Each slot is either [`SlotValue::Unknown`] or a [`Constant`] whose provenance is a push
//! immediate or a `PC` instruction. `DUPn`/`SWAPn` move slots together with their provenance;
//! every other opcode consumes its inputs and produces unknown outputs.
//!
//! The stack grows upward: `depth` counts live items from the frame base at code entry.
//! Provenance does not cross a block entry. Slots written before the most recent
//! [`SymbolicStack::enter_block`] read back as unknown; this is tracked with an epoch stamp so
//! entering a block is O(1).

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Maximum operand-stack depth of the target machine.
pub const STACK_CAPACITY: usize = 1024;

/// Where a constant came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Literal immediate of the push instruction at `pc`.
    Push {
        /// Offset of the push.
        pc: u32,
    },
    /// Offset of the `PC` instruction at `pc`.
    Pc {
        /// Offset of the `PC` instruction.
        pc: u32,
    },
}

/// A traceable compile-time constant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    /// Origin of the value.
    pub origin: Origin,
    /// The value, or `None` if it does not fit in a `u32` (and so cannot be a code offset).
    pub value: Option<u32>,
}

/// Abstract value held by a stack slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SlotValue {
    /// Anything produced by a non-tracked opcode, or a value from before the block entry.
    #[default]
    Unknown,
    /// A constant traced only through push/`PC` and `DUP`/`SWAP`.
    Constant(Constant),
}

impl SlotValue {
    /// Returns the constant, if the slot holds one.
    #[must_use]
    pub fn constant(self) -> Option<Constant> {
        match self {
            Self::Constant(c) => Some(c),
            Self::Unknown => None,
        }
    }
}

/// A stack discipline violation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// An operation required more live items than present.
    Underflow {
        /// Live items before the operation.
        depth: usize,
        /// Live items the operation requires.
        required: usize,
    },
    /// An operation would grow the stack past its limit.
    Overflow {
        /// Live items before the operation.
        depth: usize,
        /// Maximum depth.
        limit: usize,
    },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underflow { depth, required } => {
                write!(f, "stack underflow (depth {depth}, requires {required})")
            }
            Self::Overflow { depth, limit } => {
                write!(f, "stack overflow (depth {depth}, limit {limit})")
            }
        }
    }
}

impl core::error::Error for StackError {}

#[derive(Copy, Clone, Debug)]
struct Slot {
    value: SlotValue,
    epoch: u32,
}

impl Slot {
    const STALE: Self = Self {
        value: SlotValue::Unknown,
        epoch: 0,
    };
}

/// A bounded stack of [`SlotValue`]s.
#[derive(Clone, Debug)]
pub struct SymbolicStack {
    slots: Vec<Slot>,
    sp: usize,
    epoch: u32,
}

impl SymbolicStack {
    /// Creates an empty stack holding at most `limit` items (clamped to [`STACK_CAPACITY`]).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            slots: vec![Slot::STALE; limit.min(STACK_CAPACITY)],
            sp: 0,
            epoch: 1,
        }
    }

    /// Number of live items.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.sp
    }

    /// Maximum number of live items.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.slots.len()
    }

    /// Starts a fresh block at `depth` with no known constants.
    pub fn reset(&mut self, depth: usize) -> Result<(), StackError> {
        if depth > self.limit() {
            return Err(StackError::Overflow {
                depth,
                limit: self.limit(),
            });
        }
        self.sp = depth;
        self.enter_block();
        Ok(())
    }

    /// Marks a block entry: every live slot becomes unknown.
    pub fn enter_block(&mut self) {
        if self.epoch == u32::MAX {
            self.slots.fill(Slot::STALE);
            self.epoch = 0;
        }
        self.epoch += 1;
    }

    fn read(&self, idx: usize) -> SlotValue {
        let slot = self.slots[idx];
        if slot.epoch == self.epoch {
            slot.value
        } else {
            SlotValue::Unknown
        }
    }

    fn write(&mut self, idx: usize, value: SlotValue) {
        self.slots[idx] = Slot {
            value,
            epoch: self.epoch,
        };
    }

    /// Fails unless at least `n` items are live.
    pub fn require(&self, n: usize) -> Result<(), StackError> {
        if self.sp < n {
            return Err(StackError::Underflow {
                depth: self.sp,
                required: n,
            });
        }
        Ok(())
    }

    fn require_room(&self, remove: usize, add: usize) -> Result<(), StackError> {
        self.require(remove)?;
        if self.sp - remove + add > self.limit() {
            return Err(StackError::Overflow {
                depth: self.sp,
                limit: self.limit(),
            });
        }
        Ok(())
    }

    /// Pushes `value`.
    pub fn push(&mut self, value: SlotValue) -> Result<(), StackError> {
        self.require_room(0, 1)?;
        self.write(self.sp, value);
        self.sp += 1;
        Ok(())
    }

    /// Pops the top item.
    pub fn pop(&mut self) -> Result<SlotValue, StackError> {
        self.require(1)?;
        self.sp -= 1;
        Ok(self.read(self.sp))
    }

    /// Returns the `n`th item from the top (`n == 1` is the top).
    #[cfg(test)]
    fn peek(&self, n: usize) -> Result<SlotValue, StackError> {
        self.require(n.max(1))?;
        Ok(self.read(self.sp - n.max(1)))
    }

    /// `DUPn`: pushes a copy of the `n`th item, provenance included.
    pub fn dup(&mut self, n: usize) -> Result<(), StackError> {
        self.require_room(n, n + 1)?;
        let v = self.read(self.sp - n);
        self.write(self.sp, v);
        self.sp += 1;
        Ok(())
    }

    /// `SWAPn`: exchanges the top with the `(n + 1)`th item, provenance included.
    pub fn swap(&mut self, n: usize) -> Result<(), StackError> {
        self.require(n + 1)?;
        let top = self.sp - 1;
        let other = top - n;
        let a = self.read(top);
        let b = self.read(other);
        self.write(top, b);
        self.write(other, a);
        Ok(())
    }

    /// Generic effect: removes `remove` items and pushes `add` unknown items.
    pub fn apply(&mut self, remove: usize, add: usize) -> Result<(), StackError> {
        self.require_room(remove, add)?;
        self.sp -= remove;
        for _ in 0..add {
            self.write(self.sp, SlotValue::Unknown);
            self.sp += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Constant, Origin, STACK_CAPACITY, SlotValue, StackError, SymbolicStack};

    fn lit(pc: u32, value: u32) -> SlotValue {
        SlotValue::Constant(Constant {
            origin: Origin::Push { pc },
            value: Some(value),
        })
    }

    #[test]
    fn push_pop_preserves_provenance() {
        let mut s = SymbolicStack::new(STACK_CAPACITY);
        s.push(lit(0, 3)).unwrap();
        s.push(SlotValue::Unknown).unwrap();
        assert_eq!(s.depth(), 2);
        assert_eq!(s.pop(), Ok(SlotValue::Unknown));
        assert_eq!(s.pop(), Ok(lit(0, 3)));
        assert_eq!(
            s.pop(),
            Err(StackError::Underflow {
                depth: 0,
                required: 1
            })
        );
    }

    #[test]
    fn dup_and_swap_carry_constants() {
        let mut s = SymbolicStack::new(16);
        s.push(lit(0, 7)).unwrap();
        s.push(SlotValue::Unknown).unwrap();
        s.dup(2).unwrap();
        assert_eq!(s.peek(1), Ok(lit(0, 7)));
        s.swap(2).unwrap();
        assert_eq!(s.peek(3), Ok(lit(0, 7)));
        assert_eq!(s.peek(1), Ok(lit(0, 7)));
        assert_eq!(s.depth(), 3);
        assert_eq!(
            s.swap(3),
            Err(StackError::Underflow {
                depth: 3,
                required: 4
            })
        );
        assert_eq!(
            s.dup(4),
            Err(StackError::Underflow {
                depth: 3,
                required: 4
            })
        );
    }

    #[test]
    fn apply_destroys_constness() {
        let mut s = SymbolicStack::new(16);
        s.push(lit(0, 1)).unwrap();
        s.push(lit(2, 2)).unwrap();
        s.apply(2, 1).unwrap();
        assert_eq!(s.depth(), 1);
        assert_eq!(s.peek(1), Ok(SlotValue::Unknown));
        assert_eq!(
            s.apply(2, 1),
            Err(StackError::Underflow {
                depth: 1,
                required: 2
            })
        );
    }

    #[test]
    fn overflow_at_limit() {
        let mut s = SymbolicStack::new(2);
        s.push(SlotValue::Unknown).unwrap();
        s.push(SlotValue::Unknown).unwrap();
        assert_eq!(
            s.push(SlotValue::Unknown),
            Err(StackError::Overflow { depth: 2, limit: 2 })
        );
        assert_eq!(
            s.dup(1),
            Err(StackError::Overflow { depth: 2, limit: 2 })
        );
        s.swap(1).unwrap();
        assert_eq!(s.depth(), 2);
    }

    #[test]
    fn limit_is_clamped_to_capacity() {
        assert_eq!(SymbolicStack::new(4096).limit(), STACK_CAPACITY);
    }

    #[test]
    fn block_entry_forgets_constants() {
        let mut s = SymbolicStack::new(16);
        s.push(lit(0, 5)).unwrap();
        s.enter_block();
        assert_eq!(s.depth(), 1);
        assert_eq!(s.peek(1), Ok(SlotValue::Unknown));
        s.dup(1).unwrap();
        assert_eq!(s.peek(1), Ok(SlotValue::Unknown));

        // A constant written below the block-entry depth after popping is still tracked.
        s.apply(2, 0).unwrap();
        s.push(lit(9, 4)).unwrap();
        assert_eq!(s.peek(1), Ok(lit(9, 4)));
        assert_eq!(s.depth(), 1);
    }

    #[test]
    fn reset_starts_a_block_at_depth() {
        let mut s = SymbolicStack::new(8);
        s.push(lit(0, 1)).unwrap();
        s.reset(3).unwrap();
        assert_eq!(s.depth(), 3);
        assert_eq!(s.peek(3), Ok(SlotValue::Unknown));
        assert_eq!(
            s.reset(9),
            Err(StackError::Overflow { depth: 9, limit: 8 })
        );
    }
}
