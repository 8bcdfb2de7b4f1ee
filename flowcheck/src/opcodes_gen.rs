// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// @generated by flowcheck_codegen. Do not edit by hand.

/// Optional per-opcode traits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct OpcodeFlags(u8);

impl OpcodeFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Push-family opcode (`PUSH0`..`PUSH32`); records a literal constant.
    pub const PUSH: Self = Self(1 << 0);
    /// `DUPn`; copies a slot together with its provenance.
    pub const DUP: Self = Self(1 << 1);
    /// `SWAPn`; exchanges two slots together with their provenance.
    pub const SWAP: Self = Self(1 << 2);
    /// `PC`; records the current offset as a constant.
    pub const PC: Self = Self(1 << 3);
    /// Unconditional jump.
    pub const JUMP: Self = Self(1 << 4);
    /// Conditional jump.
    pub const JUMPI: Self = Self(1 << 5);
    /// Jump destination marker.
    pub const JUMPDEST: Self = Self(1 << 6);

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if `other` is a subset of `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

/// Per-opcode metadata used by decode, disasm, and verification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Stable, parseable opcode name.
    pub mnemonic: &'static str,
    /// Whether this byte is an assigned opcode.
    pub is_assigned: bool,
    /// Number of stack items the opcode removes.
    pub stack_in: u8,
    /// Number of stack items the opcode adds.
    pub stack_out: u8,
    /// Number of immediate bytes following the opcode byte.
    pub immediate: u8,
    /// Whether this opcode halts execution successfully.
    pub is_terminator: bool,
    /// Optional per-opcode traits.
    pub flags: OpcodeFlags,
}

/// Metadata indexed by opcode byte (all 256 byte values).
pub static OPCODE_INFO_BY_BYTE: [OpcodeInfo; 256] = [
    OpcodeInfo { mnemonic: "STOP", is_assigned: true, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: true, flags: OpcodeFlags::NONE }, // 0x00
    OpcodeInfo { mnemonic: "ADD", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x01
    OpcodeInfo { mnemonic: "MUL", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x02
    OpcodeInfo { mnemonic: "SUB", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x03
    OpcodeInfo { mnemonic: "DIV", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x04
    OpcodeInfo { mnemonic: "SDIV", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x05
    OpcodeInfo { mnemonic: "MOD", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x06
    OpcodeInfo { mnemonic: "SMOD", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x07
    OpcodeInfo { mnemonic: "ADDMOD", is_assigned: true, stack_in: 3, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x08
    OpcodeInfo { mnemonic: "MULMOD", is_assigned: true, stack_in: 3, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x09
    OpcodeInfo { mnemonic: "EXP", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x0A
    OpcodeInfo { mnemonic: "SIGNEXTEND", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x0B
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x0C
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x0D
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x0E
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x0F
    OpcodeInfo { mnemonic: "LT", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x10
    OpcodeInfo { mnemonic: "GT", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x11
    OpcodeInfo { mnemonic: "SLT", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x12
    OpcodeInfo { mnemonic: "SGT", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x13
    OpcodeInfo { mnemonic: "EQ", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x14
    OpcodeInfo { mnemonic: "ISZERO", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x15
    OpcodeInfo { mnemonic: "AND", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x16
    OpcodeInfo { mnemonic: "OR", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x17
    OpcodeInfo { mnemonic: "XOR", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x18
    OpcodeInfo { mnemonic: "NOT", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x19
    OpcodeInfo { mnemonic: "BYTE", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x1A
    OpcodeInfo { mnemonic: "SHL", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x1B
    OpcodeInfo { mnemonic: "SHR", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x1C
    OpcodeInfo { mnemonic: "SAR", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x1D
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x1E
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x1F
    OpcodeInfo { mnemonic: "KECCAK256", is_assigned: true, stack_in: 2, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x20
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x21
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x22
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x23
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x24
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x25
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x26
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x27
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x28
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x29
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x2A
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x2B
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x2C
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x2D
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x2E
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x2F
    OpcodeInfo { mnemonic: "ADDRESS", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x30
    OpcodeInfo { mnemonic: "BALANCE", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x31
    OpcodeInfo { mnemonic: "ORIGIN", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x32
    OpcodeInfo { mnemonic: "CALLER", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x33
    OpcodeInfo { mnemonic: "CALLVALUE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x34
    OpcodeInfo { mnemonic: "CALLDATALOAD", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x35
    OpcodeInfo { mnemonic: "CALLDATASIZE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x36
    OpcodeInfo { mnemonic: "CALLDATACOPY", is_assigned: true, stack_in: 3, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x37
    OpcodeInfo { mnemonic: "CODESIZE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x38
    OpcodeInfo { mnemonic: "CODECOPY", is_assigned: true, stack_in: 3, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x39
    OpcodeInfo { mnemonic: "GASPRICE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x3A
    OpcodeInfo { mnemonic: "EXTCODESIZE", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x3B
    OpcodeInfo { mnemonic: "EXTCODECOPY", is_assigned: true, stack_in: 4, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x3C
    OpcodeInfo { mnemonic: "RETURNDATASIZE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x3D
    OpcodeInfo { mnemonic: "RETURNDATACOPY", is_assigned: true, stack_in: 3, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x3E
    OpcodeInfo { mnemonic: "EXTCODEHASH", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x3F
    OpcodeInfo { mnemonic: "BLOCKHASH", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x40
    OpcodeInfo { mnemonic: "COINBASE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x41
    OpcodeInfo { mnemonic: "TIMESTAMP", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x42
    OpcodeInfo { mnemonic: "NUMBER", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x43
    OpcodeInfo { mnemonic: "PREVRANDAO", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x44
    OpcodeInfo { mnemonic: "GASLIMIT", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x45
    OpcodeInfo { mnemonic: "CHAINID", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x46
    OpcodeInfo { mnemonic: "SELFBALANCE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x47
    OpcodeInfo { mnemonic: "BASEFEE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x48
    OpcodeInfo { mnemonic: "BLOBHASH", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x49
    OpcodeInfo { mnemonic: "BLOBBASEFEE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x4A
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x4B
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x4C
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x4D
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x4E
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x4F
    OpcodeInfo { mnemonic: "POP", is_assigned: true, stack_in: 1, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x50
    OpcodeInfo { mnemonic: "MLOAD", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x51
    OpcodeInfo { mnemonic: "MSTORE", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x52
    OpcodeInfo { mnemonic: "MSTORE8", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x53
    OpcodeInfo { mnemonic: "SLOAD", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x54
    OpcodeInfo { mnemonic: "SSTORE", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x55
    OpcodeInfo { mnemonic: "JUMP", is_assigned: true, stack_in: 1, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::JUMP }, // 0x56
    OpcodeInfo { mnemonic: "JUMPI", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::JUMPI }, // 0x57
    OpcodeInfo { mnemonic: "PC", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::PC }, // 0x58
    OpcodeInfo { mnemonic: "MSIZE", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x59
    OpcodeInfo { mnemonic: "GAS", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x5A
    OpcodeInfo { mnemonic: "JUMPDEST", is_assigned: true, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::JUMPDEST }, // 0x5B
    OpcodeInfo { mnemonic: "TLOAD", is_assigned: true, stack_in: 1, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x5C
    OpcodeInfo { mnemonic: "TSTORE", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x5D
    OpcodeInfo { mnemonic: "MCOPY", is_assigned: true, stack_in: 3, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0x5E
    OpcodeInfo { mnemonic: "PUSH0", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x5F
    OpcodeInfo { mnemonic: "PUSH1", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 1, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x60
    OpcodeInfo { mnemonic: "PUSH2", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 2, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x61
    OpcodeInfo { mnemonic: "PUSH3", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 3, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x62
    OpcodeInfo { mnemonic: "PUSH4", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 4, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x63
    OpcodeInfo { mnemonic: "PUSH5", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 5, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x64
    OpcodeInfo { mnemonic: "PUSH6", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 6, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x65
    OpcodeInfo { mnemonic: "PUSH7", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 7, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x66
    OpcodeInfo { mnemonic: "PUSH8", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 8, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x67
    OpcodeInfo { mnemonic: "PUSH9", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 9, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x68
    OpcodeInfo { mnemonic: "PUSH10", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 10, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x69
    OpcodeInfo { mnemonic: "PUSH11", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 11, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x6A
    OpcodeInfo { mnemonic: "PUSH12", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 12, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x6B
    OpcodeInfo { mnemonic: "PUSH13", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 13, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x6C
    OpcodeInfo { mnemonic: "PUSH14", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 14, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x6D
    OpcodeInfo { mnemonic: "PUSH15", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 15, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x6E
    OpcodeInfo { mnemonic: "PUSH16", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 16, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x6F
    OpcodeInfo { mnemonic: "PUSH17", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 17, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x70
    OpcodeInfo { mnemonic: "PUSH18", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 18, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x71
    OpcodeInfo { mnemonic: "PUSH19", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 19, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x72
    OpcodeInfo { mnemonic: "PUSH20", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 20, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x73
    OpcodeInfo { mnemonic: "PUSH21", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 21, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x74
    OpcodeInfo { mnemonic: "PUSH22", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 22, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x75
    OpcodeInfo { mnemonic: "PUSH23", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 23, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x76
    OpcodeInfo { mnemonic: "PUSH24", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 24, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x77
    OpcodeInfo { mnemonic: "PUSH25", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 25, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x78
    OpcodeInfo { mnemonic: "PUSH26", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 26, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x79
    OpcodeInfo { mnemonic: "PUSH27", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 27, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x7A
    OpcodeInfo { mnemonic: "PUSH28", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 28, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x7B
    OpcodeInfo { mnemonic: "PUSH29", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 29, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x7C
    OpcodeInfo { mnemonic: "PUSH30", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 30, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x7D
    OpcodeInfo { mnemonic: "PUSH31", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 31, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x7E
    OpcodeInfo { mnemonic: "PUSH32", is_assigned: true, stack_in: 0, stack_out: 1, immediate: 32, is_terminator: false, flags: OpcodeFlags::PUSH }, // 0x7F
    OpcodeInfo { mnemonic: "DUP1", is_assigned: true, stack_in: 1, stack_out: 2, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x80
    OpcodeInfo { mnemonic: "DUP2", is_assigned: true, stack_in: 2, stack_out: 3, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x81
    OpcodeInfo { mnemonic: "DUP3", is_assigned: true, stack_in: 3, stack_out: 4, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x82
    OpcodeInfo { mnemonic: "DUP4", is_assigned: true, stack_in: 4, stack_out: 5, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x83
    OpcodeInfo { mnemonic: "DUP5", is_assigned: true, stack_in: 5, stack_out: 6, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x84
    OpcodeInfo { mnemonic: "DUP6", is_assigned: true, stack_in: 6, stack_out: 7, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x85
    OpcodeInfo { mnemonic: "DUP7", is_assigned: true, stack_in: 7, stack_out: 8, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x86
    OpcodeInfo { mnemonic: "DUP8", is_assigned: true, stack_in: 8, stack_out: 9, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x87
    OpcodeInfo { mnemonic: "DUP9", is_assigned: true, stack_in: 9, stack_out: 10, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x88
    OpcodeInfo { mnemonic: "DUP10", is_assigned: true, stack_in: 10, stack_out: 11, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x89
    OpcodeInfo { mnemonic: "DUP11", is_assigned: true, stack_in: 11, stack_out: 12, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x8A
    OpcodeInfo { mnemonic: "DUP12", is_assigned: true, stack_in: 12, stack_out: 13, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x8B
    OpcodeInfo { mnemonic: "DUP13", is_assigned: true, stack_in: 13, stack_out: 14, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x8C
    OpcodeInfo { mnemonic: "DUP14", is_assigned: true, stack_in: 14, stack_out: 15, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x8D
    OpcodeInfo { mnemonic: "DUP15", is_assigned: true, stack_in: 15, stack_out: 16, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x8E
    OpcodeInfo { mnemonic: "DUP16", is_assigned: true, stack_in: 16, stack_out: 17, immediate: 0, is_terminator: false, flags: OpcodeFlags::DUP }, // 0x8F
    OpcodeInfo { mnemonic: "SWAP1", is_assigned: true, stack_in: 2, stack_out: 2, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x90
    OpcodeInfo { mnemonic: "SWAP2", is_assigned: true, stack_in: 3, stack_out: 3, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x91
    OpcodeInfo { mnemonic: "SWAP3", is_assigned: true, stack_in: 4, stack_out: 4, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x92
    OpcodeInfo { mnemonic: "SWAP4", is_assigned: true, stack_in: 5, stack_out: 5, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x93
    OpcodeInfo { mnemonic: "SWAP5", is_assigned: true, stack_in: 6, stack_out: 6, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x94
    OpcodeInfo { mnemonic: "SWAP6", is_assigned: true, stack_in: 7, stack_out: 7, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x95
    OpcodeInfo { mnemonic: "SWAP7", is_assigned: true, stack_in: 8, stack_out: 8, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x96
    OpcodeInfo { mnemonic: "SWAP8", is_assigned: true, stack_in: 9, stack_out: 9, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x97
    OpcodeInfo { mnemonic: "SWAP9", is_assigned: true, stack_in: 10, stack_out: 10, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x98
    OpcodeInfo { mnemonic: "SWAP10", is_assigned: true, stack_in: 11, stack_out: 11, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x99
    OpcodeInfo { mnemonic: "SWAP11", is_assigned: true, stack_in: 12, stack_out: 12, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x9A
    OpcodeInfo { mnemonic: "SWAP12", is_assigned: true, stack_in: 13, stack_out: 13, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x9B
    OpcodeInfo { mnemonic: "SWAP13", is_assigned: true, stack_in: 14, stack_out: 14, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x9C
    OpcodeInfo { mnemonic: "SWAP14", is_assigned: true, stack_in: 15, stack_out: 15, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x9D
    OpcodeInfo { mnemonic: "SWAP15", is_assigned: true, stack_in: 16, stack_out: 16, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x9E
    OpcodeInfo { mnemonic: "SWAP16", is_assigned: true, stack_in: 17, stack_out: 17, immediate: 0, is_terminator: false, flags: OpcodeFlags::SWAP }, // 0x9F
    OpcodeInfo { mnemonic: "LOG0", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA0
    OpcodeInfo { mnemonic: "LOG1", is_assigned: true, stack_in: 3, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA1
    OpcodeInfo { mnemonic: "LOG2", is_assigned: true, stack_in: 4, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA2
    OpcodeInfo { mnemonic: "LOG3", is_assigned: true, stack_in: 5, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA3
    OpcodeInfo { mnemonic: "LOG4", is_assigned: true, stack_in: 6, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA4
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA5
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA6
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA7
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA8
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xA9
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xAA
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xAB
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xAC
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xAD
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xAE
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xAF
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB0
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB1
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB2
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB3
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB4
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB5
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB6
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB7
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB8
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xB9
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xBA
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xBB
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xBC
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xBD
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xBE
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xBF
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC0
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC1
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC2
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC3
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC4
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC5
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC6
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC7
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC8
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xC9
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xCA
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xCB
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xCC
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xCD
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xCE
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xCF
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD0
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD1
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD2
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD3
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD4
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD5
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD6
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD7
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD8
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xD9
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xDA
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xDB
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xDC
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xDD
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xDE
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xDF
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE0
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE1
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE2
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE3
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE4
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE5
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE6
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE7
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE8
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xE9
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xEA
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xEB
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xEC
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xED
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xEE
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xEF
    OpcodeInfo { mnemonic: "CREATE", is_assigned: true, stack_in: 3, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF0
    OpcodeInfo { mnemonic: "CALL", is_assigned: true, stack_in: 7, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF1
    OpcodeInfo { mnemonic: "CALLCODE", is_assigned: true, stack_in: 7, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF2
    OpcodeInfo { mnemonic: "RETURN", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: true, flags: OpcodeFlags::NONE }, // 0xF3
    OpcodeInfo { mnemonic: "DELEGATECALL", is_assigned: true, stack_in: 6, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF4
    OpcodeInfo { mnemonic: "CREATE2", is_assigned: true, stack_in: 4, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF5
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF6
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF7
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF8
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xF9
    OpcodeInfo { mnemonic: "STATICCALL", is_assigned: true, stack_in: 6, stack_out: 1, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xFA
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xFB
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xFC
    OpcodeInfo { mnemonic: "REVERT", is_assigned: true, stack_in: 2, stack_out: 0, immediate: 0, is_terminator: true, flags: OpcodeFlags::NONE }, // 0xFD
    OpcodeInfo { mnemonic: "<invalid>", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }, // 0xFE
    OpcodeInfo { mnemonic: "SELFDESTRUCT", is_assigned: true, stack_in: 1, stack_out: 0, immediate: 0, is_terminator: true, flags: OpcodeFlags::NONE }, // 0xFF
];

/// Assigned opcode bytes of the instruction set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Halts execution successfully.
    Stop = 0x00,
    /// Addition.
    Add = 0x01,
    /// Multiplication.
    Mul = 0x02,
    /// Subtraction.
    Sub = 0x03,
    /// Unsigned integer division.
    Div = 0x04,
    /// Signed integer division.
    Sdiv = 0x05,
    /// Unsigned modulo.
    Mod = 0x06,
    /// Signed modulo.
    Smod = 0x07,
    /// Modular addition.
    Addmod = 0x08,
    /// Modular multiplication.
    Mulmod = 0x09,
    /// Exponentiation.
    Exp = 0x0A,
    /// Sign extension from a byte width.
    Signextend = 0x0B,
    /// Unsigned less-than.
    Lt = 0x10,
    /// Unsigned greater-than.
    Gt = 0x11,
    /// Signed less-than.
    Slt = 0x12,
    /// Signed greater-than.
    Sgt = 0x13,
    /// Equality.
    Eq = 0x14,
    /// Zero test.
    Iszero = 0x15,
    /// Bitwise AND.
    And = 0x16,
    /// Bitwise OR.
    Or = 0x17,
    /// Bitwise XOR.
    Xor = 0x18,
    /// Bitwise NOT.
    Not = 0x19,
    /// Extracts a single byte.
    Byte = 0x1A,
    /// Shift left.
    Shl = 0x1B,
    /// Logical shift right.
    Shr = 0x1C,
    /// Arithmetic shift right.
    Sar = 0x1D,
    /// Keccak-256 hash of a memory range.
    Keccak256 = 0x20,
    /// Address of the executing account.
    Address = 0x30,
    /// Balance of an account.
    Balance = 0x31,
    /// Transaction origin.
    Origin = 0x32,
    /// Caller address.
    Caller = 0x33,
    /// Value sent with the call.
    Callvalue = 0x34,
    /// Loads a word of call data.
    Calldataload = 0x35,
    /// Size of the call data.
    Calldatasize = 0x36,
    /// Copies call data to memory.
    Calldatacopy = 0x37,
    /// Size of the executing code.
    Codesize = 0x38,
    /// Copies executing code to memory.
    Codecopy = 0x39,
    /// Gas price of the transaction.
    Gasprice = 0x3A,
    /// Code size of an account.
    Extcodesize = 0x3B,
    /// Copies an account's code to memory.
    Extcodecopy = 0x3C,
    /// Size of the last return data.
    Returndatasize = 0x3D,
    /// Copies the last return data to memory.
    Returndatacopy = 0x3E,
    /// Code hash of an account.
    Extcodehash = 0x3F,
    /// Hash of a recent block.
    Blockhash = 0x40,
    /// Block beneficiary address.
    Coinbase = 0x41,
    /// Block timestamp.
    Timestamp = 0x42,
    /// Block number.
    Number = 0x43,
    /// Previous block randomness beacon.
    Prevrandao = 0x44,
    /// Block gas limit.
    Gaslimit = 0x45,
    /// Chain identifier.
    Chainid = 0x46,
    /// Balance of the executing account.
    Selfbalance = 0x47,
    /// Block base fee.
    Basefee = 0x48,
    /// Versioned hash of a transaction blob.
    Blobhash = 0x49,
    /// Blob base fee.
    Blobbasefee = 0x4A,
    /// Removes the top stack item.
    Pop = 0x50,
    /// Loads a word from memory.
    Mload = 0x51,
    /// Stores a word to memory.
    Mstore = 0x52,
    /// Stores a byte to memory.
    Mstore8 = 0x53,
    /// Loads a word from storage.
    Sload = 0x54,
    /// Stores a word to storage.
    Sstore = 0x55,
    /// Jumps to the destination on top of the stack.
    Jump = 0x56,
    /// Jumps to the destination if the condition is non-zero.
    Jumpi = 0x57,
    /// Pushes the offset of this instruction.
    Pc = 0x58,
    /// Size of active memory.
    Msize = 0x59,
    /// Remaining gas.
    Gas = 0x5A,
    /// Marks a valid jump destination.
    Jumpdest = 0x5B,
    /// Loads a word from transient storage.
    Tload = 0x5C,
    /// Stores a word to transient storage.
    Tstore = 0x5D,
    /// Copies a memory range.
    Mcopy = 0x5E,
    /// Pushes the constant zero.
    Push0 = 0x5F,
    /// Pushes a 1-byte immediate.
    Push1 = 0x60,
    /// Pushes a 2-byte immediate.
    Push2 = 0x61,
    /// Pushes a 3-byte immediate.
    Push3 = 0x62,
    /// Pushes a 4-byte immediate.
    Push4 = 0x63,
    /// Pushes a 5-byte immediate.
    Push5 = 0x64,
    /// Pushes a 6-byte immediate.
    Push6 = 0x65,
    /// Pushes a 7-byte immediate.
    Push7 = 0x66,
    /// Pushes a 8-byte immediate.
    Push8 = 0x67,
    /// Pushes a 9-byte immediate.
    Push9 = 0x68,
    /// Pushes a 10-byte immediate.
    Push10 = 0x69,
    /// Pushes a 11-byte immediate.
    Push11 = 0x6A,
    /// Pushes a 12-byte immediate.
    Push12 = 0x6B,
    /// Pushes a 13-byte immediate.
    Push13 = 0x6C,
    /// Pushes a 14-byte immediate.
    Push14 = 0x6D,
    /// Pushes a 15-byte immediate.
    Push15 = 0x6E,
    /// Pushes a 16-byte immediate.
    Push16 = 0x6F,
    /// Pushes a 17-byte immediate.
    Push17 = 0x70,
    /// Pushes a 18-byte immediate.
    Push18 = 0x71,
    /// Pushes a 19-byte immediate.
    Push19 = 0x72,
    /// Pushes a 20-byte immediate.
    Push20 = 0x73,
    /// Pushes a 21-byte immediate.
    Push21 = 0x74,
    /// Pushes a 22-byte immediate.
    Push22 = 0x75,
    /// Pushes a 23-byte immediate.
    Push23 = 0x76,
    /// Pushes a 24-byte immediate.
    Push24 = 0x77,
    /// Pushes a 25-byte immediate.
    Push25 = 0x78,
    /// Pushes a 26-byte immediate.
    Push26 = 0x79,
    /// Pushes a 27-byte immediate.
    Push27 = 0x7A,
    /// Pushes a 28-byte immediate.
    Push28 = 0x7B,
    /// Pushes a 29-byte immediate.
    Push29 = 0x7C,
    /// Pushes a 30-byte immediate.
    Push30 = 0x7D,
    /// Pushes a 31-byte immediate.
    Push31 = 0x7E,
    /// Pushes a 32-byte immediate.
    Push32 = 0x7F,
    /// Duplicates stack item 1.
    Dup1 = 0x80,
    /// Duplicates stack item 2.
    Dup2 = 0x81,
    /// Duplicates stack item 3.
    Dup3 = 0x82,
    /// Duplicates stack item 4.
    Dup4 = 0x83,
    /// Duplicates stack item 5.
    Dup5 = 0x84,
    /// Duplicates stack item 6.
    Dup6 = 0x85,
    /// Duplicates stack item 7.
    Dup7 = 0x86,
    /// Duplicates stack item 8.
    Dup8 = 0x87,
    /// Duplicates stack item 9.
    Dup9 = 0x88,
    /// Duplicates stack item 10.
    Dup10 = 0x89,
    /// Duplicates stack item 11.
    Dup11 = 0x8A,
    /// Duplicates stack item 12.
    Dup12 = 0x8B,
    /// Duplicates stack item 13.
    Dup13 = 0x8C,
    /// Duplicates stack item 14.
    Dup14 = 0x8D,
    /// Duplicates stack item 15.
    Dup15 = 0x8E,
    /// Duplicates stack item 16.
    Dup16 = 0x8F,
    /// Exchanges the top stack item with item 2.
    Swap1 = 0x90,
    /// Exchanges the top stack item with item 3.
    Swap2 = 0x91,
    /// Exchanges the top stack item with item 4.
    Swap3 = 0x92,
    /// Exchanges the top stack item with item 5.
    Swap4 = 0x93,
    /// Exchanges the top stack item with item 6.
    Swap5 = 0x94,
    /// Exchanges the top stack item with item 7.
    Swap6 = 0x95,
    /// Exchanges the top stack item with item 8.
    Swap7 = 0x96,
    /// Exchanges the top stack item with item 9.
    Swap8 = 0x97,
    /// Exchanges the top stack item with item 10.
    Swap9 = 0x98,
    /// Exchanges the top stack item with item 11.
    Swap10 = 0x99,
    /// Exchanges the top stack item with item 12.
    Swap11 = 0x9A,
    /// Exchanges the top stack item with item 13.
    Swap12 = 0x9B,
    /// Exchanges the top stack item with item 14.
    Swap13 = 0x9C,
    /// Exchanges the top stack item with item 15.
    Swap14 = 0x9D,
    /// Exchanges the top stack item with item 16.
    Swap15 = 0x9E,
    /// Exchanges the top stack item with item 17.
    Swap16 = 0x9F,
    /// Appends a log record with 0 topics.
    Log0 = 0xA0,
    /// Appends a log record with 1 topics.
    Log1 = 0xA1,
    /// Appends a log record with 2 topics.
    Log2 = 0xA2,
    /// Appends a log record with 3 topics.
    Log3 = 0xA3,
    /// Appends a log record with 4 topics.
    Log4 = 0xA4,
    /// Creates a new account with code.
    Create = 0xF0,
    /// Message call into an account.
    Call = 0xF1,
    /// Message call with this account's storage.
    Callcode = 0xF2,
    /// Halts execution returning a memory range.
    Return = 0xF3,
    /// Message call keeping the caller and value.
    Delegatecall = 0xF4,
    /// Creates a new account at a salted address.
    Create2 = 0xF5,
    /// Message call that may not modify state.
    Staticcall = 0xFA,
    /// Halts execution reverting state changes.
    Revert = 0xFD,
    /// Halts execution and schedules the account for deletion.
    Selfdestruct = 0xFF,
}

impl Opcode {
    /// Decodes an opcode byte; `None` for unassigned bytes.
    #[must_use]
    pub fn from_u8(b: u8) -> Option<Self> {
        Some(match b {
            0x00 => Self::Stop,
            0x01 => Self::Add,
            0x02 => Self::Mul,
            0x03 => Self::Sub,
            0x04 => Self::Div,
            0x05 => Self::Sdiv,
            0x06 => Self::Mod,
            0x07 => Self::Smod,
            0x08 => Self::Addmod,
            0x09 => Self::Mulmod,
            0x0A => Self::Exp,
            0x0B => Self::Signextend,
            0x10 => Self::Lt,
            0x11 => Self::Gt,
            0x12 => Self::Slt,
            0x13 => Self::Sgt,
            0x14 => Self::Eq,
            0x15 => Self::Iszero,
            0x16 => Self::And,
            0x17 => Self::Or,
            0x18 => Self::Xor,
            0x19 => Self::Not,
            0x1A => Self::Byte,
            0x1B => Self::Shl,
            0x1C => Self::Shr,
            0x1D => Self::Sar,
            0x20 => Self::Keccak256,
            0x30 => Self::Address,
            0x31 => Self::Balance,
            0x32 => Self::Origin,
            0x33 => Self::Caller,
            0x34 => Self::Callvalue,
            0x35 => Self::Calldataload,
            0x36 => Self::Calldatasize,
            0x37 => Self::Calldatacopy,
            0x38 => Self::Codesize,
            0x39 => Self::Codecopy,
            0x3A => Self::Gasprice,
            0x3B => Self::Extcodesize,
            0x3C => Self::Extcodecopy,
            0x3D => Self::Returndatasize,
            0x3E => Self::Returndatacopy,
            0x3F => Self::Extcodehash,
            0x40 => Self::Blockhash,
            0x41 => Self::Coinbase,
            0x42 => Self::Timestamp,
            0x43 => Self::Number,
            0x44 => Self::Prevrandao,
            0x45 => Self::Gaslimit,
            0x46 => Self::Chainid,
            0x47 => Self::Selfbalance,
            0x48 => Self::Basefee,
            0x49 => Self::Blobhash,
            0x4A => Self::Blobbasefee,
            0x50 => Self::Pop,
            0x51 => Self::Mload,
            0x52 => Self::Mstore,
            0x53 => Self::Mstore8,
            0x54 => Self::Sload,
            0x55 => Self::Sstore,
            0x56 => Self::Jump,
            0x57 => Self::Jumpi,
            0x58 => Self::Pc,
            0x59 => Self::Msize,
            0x5A => Self::Gas,
            0x5B => Self::Jumpdest,
            0x5C => Self::Tload,
            0x5D => Self::Tstore,
            0x5E => Self::Mcopy,
            0x5F => Self::Push0,
            0x60 => Self::Push1,
            0x61 => Self::Push2,
            0x62 => Self::Push3,
            0x63 => Self::Push4,
            0x64 => Self::Push5,
            0x65 => Self::Push6,
            0x66 => Self::Push7,
            0x67 => Self::Push8,
            0x68 => Self::Push9,
            0x69 => Self::Push10,
            0x6A => Self::Push11,
            0x6B => Self::Push12,
            0x6C => Self::Push13,
            0x6D => Self::Push14,
            0x6E => Self::Push15,
            0x6F => Self::Push16,
            0x70 => Self::Push17,
            0x71 => Self::Push18,
            0x72 => Self::Push19,
            0x73 => Self::Push20,
            0x74 => Self::Push21,
            0x75 => Self::Push22,
            0x76 => Self::Push23,
            0x77 => Self::Push24,
            0x78 => Self::Push25,
            0x79 => Self::Push26,
            0x7A => Self::Push27,
            0x7B => Self::Push28,
            0x7C => Self::Push29,
            0x7D => Self::Push30,
            0x7E => Self::Push31,
            0x7F => Self::Push32,
            0x80 => Self::Dup1,
            0x81 => Self::Dup2,
            0x82 => Self::Dup3,
            0x83 => Self::Dup4,
            0x84 => Self::Dup5,
            0x85 => Self::Dup6,
            0x86 => Self::Dup7,
            0x87 => Self::Dup8,
            0x88 => Self::Dup9,
            0x89 => Self::Dup10,
            0x8A => Self::Dup11,
            0x8B => Self::Dup12,
            0x8C => Self::Dup13,
            0x8D => Self::Dup14,
            0x8E => Self::Dup15,
            0x8F => Self::Dup16,
            0x90 => Self::Swap1,
            0x91 => Self::Swap2,
            0x92 => Self::Swap3,
            0x93 => Self::Swap4,
            0x94 => Self::Swap5,
            0x95 => Self::Swap6,
            0x96 => Self::Swap7,
            0x97 => Self::Swap8,
            0x98 => Self::Swap9,
            0x99 => Self::Swap10,
            0x9A => Self::Swap11,
            0x9B => Self::Swap12,
            0x9C => Self::Swap13,
            0x9D => Self::Swap14,
            0x9E => Self::Swap15,
            0x9F => Self::Swap16,
            0xA0 => Self::Log0,
            0xA1 => Self::Log1,
            0xA2 => Self::Log2,
            0xA3 => Self::Log3,
            0xA4 => Self::Log4,
            0xF0 => Self::Create,
            0xF1 => Self::Call,
            0xF2 => Self::Callcode,
            0xF3 => Self::Return,
            0xF4 => Self::Delegatecall,
            0xF5 => Self::Create2,
            0xFA => Self::Staticcall,
            0xFD => Self::Revert,
            0xFF => Self::Selfdestruct,
            _ => return None,
        })
    }

    /// Returns opcode metadata for this opcode.
    #[must_use]
    pub fn info(self) -> &'static OpcodeInfo {
        &OPCODE_INFO_BY_BYTE[usize::from(self as u8)]
    }

    /// Stable, parseable opcode name.
    ///
    /// This string is used by the disassembler output.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    /// Returns `true` if this opcode halts execution successfully.
    #[must_use]
    pub fn is_terminator(self) -> bool {
        self.info().is_terminator
    }
}
