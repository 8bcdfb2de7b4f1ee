// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic-jump and dynamic-trap tables.
//!
//! Both tables are sorted sequences of `(source offset, destination offset)` pairs. The runtime
//! dispatcher consults the jump table first and falls back to the trap table; the verifier only
//! needs to know every destination either table lists for a given source.
//!
//! Wire encoding: each entry is `src` then `dst`, both big-endian `u16`, concatenated with no
//! header. Entries are in strictly ascending `(src, dst)` order.

use alloc::vec::Vec;
use core::fmt;

/// Width in bytes of one encoded table entry.
pub const ENTRY_SIZE: usize = 4;

/// A `(source, destination)` pair. Ordering is lexicographic on `(src, dst)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JumpEntry {
    /// Offset of the `JUMP`/`JUMPI` instruction.
    pub src: u32,
    /// Offset the runtime may transfer control to.
    pub dst: u32,
}

impl JumpEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(src: u32, dst: u32) -> Self {
        Self { src, dst }
    }
}

/// Which of the two tables an error or lookup refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TableKind {
    /// The dynamic-jump table.
    Jump,
    /// The dynamic-trap table.
    Trap,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jump => write!(f, "jump table"),
            Self::Trap => write!(f, "trap table"),
        }
    }
}

/// A malformed jump table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The encoded length is not a multiple of [`ENTRY_SIZE`].
    TrailingBytes {
        /// Encoded byte length.
        len: usize,
    },
    /// Entry `index` is not strictly greater than its predecessor.
    Unsorted {
        /// Entry index within the table.
        index: usize,
    },
    /// Entry `index` does not fit the fixed-width encoding.
    EntryTooLarge {
        /// Entry index within the table.
        index: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrailingBytes { len } => {
                write!(f, "length {len} is not a multiple of {ENTRY_SIZE}")
            }
            Self::Unsorted { index } => write!(f, "entry {index} is out of order"),
            Self::EntryTooLarge { index } => write!(f, "entry {index} does not fit in u16"),
        }
    }
}

impl core::error::Error for TableError {}

/// A sorted table of jump entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JumpTable {
    entries: Vec<JumpEntry>,
}

impl JumpTable {
    /// An empty table.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Wraps `entries`, checking strictly ascending order.
    ///
    /// Fails with [`TableError::Unsorted`] on out-of-order or duplicate entries.
    pub fn new(entries: Vec<JumpEntry>) -> Result<Self, TableError> {
        for (i, w) in entries.windows(2).enumerate() {
            if w[0] >= w[1] {
                return Err(TableError::Unsorted { index: i + 1 });
            }
        }
        Ok(Self { entries })
    }

    /// Builds a table from unsorted entries, sorting and dropping exact duplicates.
    #[must_use]
    pub fn from_unsorted(mut entries: Vec<JumpEntry>) -> Self {
        entries.sort_unstable();
        entries.dedup();
        Self { entries }
    }

    /// Decodes a table from its wire encoding.
    pub fn decode(bytes: &[u8]) -> Result<Self, TableError> {
        if bytes.len() % ENTRY_SIZE != 0 {
            return Err(TableError::TrailingBytes { len: bytes.len() });
        }
        let entries = bytes
            .chunks_exact(ENTRY_SIZE)
            .map(|b| {
                let src = u16::from_be_bytes([b[0], b[1]]);
                let dst = u16::from_be_bytes([b[2], b[3]]);
                JumpEntry::new(u32::from(src), u32::from(dst))
            })
            .collect();
        Self::new(entries)
    }

    /// Encodes the table in its wire encoding.
    pub fn encode(&self) -> Result<Vec<u8>, TableError> {
        let mut out = Vec::with_capacity(self.entries.len() * ENTRY_SIZE);
        for (index, e) in self.entries.iter().enumerate() {
            let (Ok(src), Ok(dst)) = (u16::try_from(e.src), u16::try_from(e.dst)) else {
                return Err(TableError::EntryTooLarge { index });
            };
            out.extend_from_slice(&src.to_be_bytes());
            out.extend_from_slice(&dst.to_be_bytes());
        }
        Ok(out)
    }

    /// Returns all entries in order.
    #[must_use]
    pub fn entries(&self) -> &[JumpEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every entry whose source is `src` (binary search for the equal range).
    #[must_use]
    pub fn destinations(&self, src: u32) -> &[JumpEntry] {
        let start = self.entries.partition_point(|e| e.src < src);
        let len = self.entries[start..].partition_point(|e| e.src == src);
        &self.entries[start..start + len]
    }
}

/// The dynamic-jump table and its trap fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JumpTables {
    /// Primary dynamic-jump table.
    pub jumps: JumpTable,
    /// Fallback table used when a computed destination is not in `jumps`.
    pub traps: JumpTable,
}

impl JumpTables {
    /// Bundles both tables.
    #[must_use]
    pub fn new(jumps: JumpTable, traps: JumpTable) -> Self {
        Self { jumps, traps }
    }

    /// Two empty tables: every jump must be static.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            jumps: JumpTable::empty(),
            traps: JumpTable::empty(),
        }
    }

    /// Returns the table of `kind`.
    #[must_use]
    pub fn table(&self, kind: TableKind) -> &JumpTable {
        match kind {
            TableKind::Jump => &self.jumps,
            TableKind::Trap => &self.traps,
        }
    }

    /// Looks up every destination listed for `src` in either table.
    #[must_use]
    pub fn lookup(&self, src: u32) -> Lookup<'_> {
        Lookup {
            src,
            jumps: self.jumps.destinations(src),
            traps: self.traps.destinations(src),
        }
    }

    /// Total number of entries across both tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jumps.len() + self.traps.len()
    }

    /// Returns `true` if both tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty() && self.traps.is_empty()
    }
}

/// Result of [`JumpTables::lookup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// Source offset that was looked up.
    pub src: u32,
    /// Matching dynamic-jump table entries.
    pub jumps: &'a [JumpEntry],
    /// Matching dynamic-trap table entries.
    pub traps: &'a [JumpEntry],
}

impl<'a> Lookup<'a> {
    /// Returns `true` if at least one destination is listed.
    #[must_use]
    pub fn is_listed(&self) -> bool {
        !self.jumps.is_empty() || !self.traps.is_empty()
    }

    /// Number of listed destinations across both tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.jumps.len() + self.traps.len()
    }

    /// Returns `true` if nothing is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_listed()
    }

    /// Iterates listed destinations, jump-table entries first.
    pub fn destinations(self) -> impl Iterator<Item = (TableKind, u32)> + 'a {
        let jumps = self.jumps.iter().map(|e| (TableKind::Jump, e.dst));
        let traps = self.traps.iter().map(|e| (TableKind::Trap, e.dst));
        jumps.chain(traps)
    }
}

#[cfg(test)]
mod tests {
    use super::{JumpEntry, JumpTable, JumpTables, TableError, TableKind};
    use alloc::vec;
    use alloc::vec::Vec;

    fn table(pairs: &[(u32, u32)]) -> JumpTable {
        JumpTable::new(pairs.iter().map(|&(s, d)| JumpEntry::new(s, d)).collect()).unwrap()
    }

    #[test]
    fn destinations_returns_equal_range() {
        let t = table(&[(1, 9), (10, 50), (10, 60), (11, 4)]);
        assert_eq!(
            t.destinations(10),
            &[JumpEntry::new(10, 50), JumpEntry::new(10, 60)]
        );
        assert_eq!(t.destinations(11), &[JumpEntry::new(11, 4)]);
        assert!(t.destinations(0).is_empty());
        assert!(t.destinations(5).is_empty());
        assert!(t.destinations(12).is_empty());
        assert!(JumpTable::empty().destinations(10).is_empty());
    }

    #[test]
    fn new_rejects_out_of_order_and_duplicates() {
        let unsorted = vec![JumpEntry::new(10, 50), JumpEntry::new(3, 4)];
        assert_eq!(
            JumpTable::new(unsorted),
            Err(TableError::Unsorted { index: 1 })
        );
        let dup = vec![
            JumpEntry::new(1, 1),
            JumpEntry::new(10, 50),
            JumpEntry::new(10, 50),
        ];
        assert_eq!(JumpTable::new(dup), Err(TableError::Unsorted { index: 2 }));
        let same_src_desc = vec![JumpEntry::new(10, 60), JumpEntry::new(10, 50)];
        assert_eq!(
            JumpTable::new(same_src_desc),
            Err(TableError::Unsorted { index: 1 })
        );
    }

    #[test]
    fn from_unsorted_sorts_and_dedups() {
        let t = JumpTable::from_unsorted(vec![
            JumpEntry::new(10, 60),
            JumpEntry::new(2, 1),
            JumpEntry::new(10, 60),
            JumpEntry::new(10, 50),
        ]);
        assert_eq!(
            t.entries(),
            &[
                JumpEntry::new(2, 1),
                JumpEntry::new(10, 50),
                JumpEntry::new(10, 60)
            ]
        );
    }

    #[test]
    fn decode_reads_big_endian_pairs() {
        let bytes = [0x00, 0x0A, 0x00, 0x32, 0x01, 0x00, 0x00, 0x3C];
        let t = JumpTable::decode(&bytes).unwrap();
        assert_eq!(
            t.entries(),
            &[JumpEntry::new(10, 50), JumpEntry::new(256, 60)]
        );
        assert_eq!(t.encode().unwrap(), bytes.to_vec());
    }

    #[test]
    fn decode_rejects_bad_lengths_and_order() {
        assert_eq!(
            JumpTable::decode(&[0, 1, 0]),
            Err(TableError::TrailingBytes { len: 3 })
        );
        assert_eq!(
            JumpTable::decode(&[0, 9, 0, 1, 0, 8, 0, 1]),
            Err(TableError::Unsorted { index: 1 })
        );
        assert!(JumpTable::decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn encode_rejects_wide_entries() {
        let t = table(&[(1, 2), (3, 70_000)]);
        assert_eq!(t.encode(), Err(TableError::EntryTooLarge { index: 1 }));
    }

    #[test]
    fn lookup_spans_both_tables() {
        let tables = JumpTables::new(table(&[(10, 50)]), table(&[(10, 60), (20, 70)]));
        let l = tables.lookup(10);
        assert!(l.is_listed());
        assert_eq!(l.len(), 2);
        let dests: Vec<_> = l.destinations().collect();
        assert_eq!(dests, vec![(TableKind::Jump, 50), (TableKind::Trap, 60)]);

        let l = tables.lookup(20);
        assert_eq!(
            l.destinations().collect::<Vec<_>>(),
            vec![(TableKind::Trap, 70)]
        );
        assert!(tables.lookup(30).is_empty());
        assert_eq!(tables.len(), 3);
        assert_eq!(tables.table(TableKind::Trap).len(), 2);
        assert!(JumpTables::empty().is_empty());
    }
}
