// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small bitset used by verifier analyses.

use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitSet {
    bits: Vec<u64>,
    len: usize,
}

impl BitSet {
    #[must_use]
    pub(crate) fn new_empty(len: usize) -> Self {
        let words = len.div_ceil(64);
        Self {
            bits: vec![0; words],
            len,
        }
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub(crate) fn get(&self, idx: usize) -> bool {
        if idx >= self.len {
            return false;
        }
        let w = idx / 64;
        let b = idx % 64;
        (self.bits[w] >> b) & 1 == 1
    }

    pub(crate) fn set(&mut self, idx: usize) {
        if idx >= self.len {
            return;
        }
        let w = idx / 64;
        let b = idx % 64;
        self.bits[w] |= 1_u64 << b;
    }

    #[must_use]
    pub(crate) fn count_ones(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::BitSet;

    #[test]
    fn set_and_get_across_words() {
        let mut s = BitSet::new_empty(130);
        s.set(0);
        s.set(64);
        s.set(129);
        assert!(s.get(0));
        assert!(!s.get(1));
        assert!(s.get(64));
        assert!(s.get(129));
        assert_eq!(s.count_ones(), 3);
        assert_eq!(s.len(), 130);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut s = BitSet::new_empty(3);
        s.set(3);
        assert!(!s.get(3));
        assert_eq!(s.count_ones(), 0);
    }
}
