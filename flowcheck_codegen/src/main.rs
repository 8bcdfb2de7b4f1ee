// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![doc = "Code generator for `flowcheck` opcode tables.\n\n\
          This is a std-only build tool crate. It is not shipped as part of the verifier.\n"]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

#[derive(Deserialize, Clone)]
struct Spec {
    version: u32,
    opcodes: Vec<OpcodeSpec>,
}

#[derive(Deserialize, Clone)]
struct OpcodeSpec {
    name: String,
    mnemonic: String,
    byte: String,
    stack_in: u8,
    stack_out: u8,
    immediate: u8,
    terminator: bool,
    flags: Vec<String>,
    doc: Option<String>,
}

/// Flag names accepted in `opcodes.json`, in bit order.
const FLAG_NAMES: &[&str] = &["push", "dup", "swap", "pc", "jump", "jumpi", "jumpdest"];

/// Largest immediate a push-family opcode may carry (a full 256-bit word).
const MAX_IMMEDIATE: u8 = 32;

fn parse_u8_hex(s: &str) -> Result<u8> {
    let s = s.trim();
    let raw = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u8::from_str_radix(raw, 16).with_context(|| format!("invalid opcode byte '{s}'"))
}

fn fmt_hex_u8(b: u8) -> String {
    format!("0x{b:02X}")
}

fn sort_and_validate_ops(ops: &mut [(u8, OpcodeSpec)]) -> Result<()> {
    ops.sort_by(|(b0, o0), (b1, o1)| b0.cmp(b1).then_with(|| o0.name.cmp(&o1.name)));

    for w in ops.windows(2) {
        let (b0, o0) = &w[0];
        let (b1, o1) = &w[1];
        if b0 == b1 {
            bail!(
                "duplicate opcode byte {}: {} and {}",
                fmt_hex_u8(*b0),
                o0.name,
                o1.name
            );
        }
    }
    let mut names: Vec<&str> = ops.iter().map(|(_, o)| o.name.as_str()).collect();
    names.sort_unstable();
    for w in names.windows(2) {
        if w[0] == w[1] {
            bail!("duplicate opcode name '{}'", w[0]);
        }
    }
    Ok(())
}

fn validate_stack_effects(ops: &[(u8, OpcodeSpec)]) -> Result<()> {
    for (_b, op) in ops {
        for flag in &op.flags {
            if !FLAG_NAMES.contains(&flag.as_str()) {
                bail!("unknown flag '{}' for opcode {}", flag, op.name);
            }
        }
        let has = |f: &str| op.flags.iter().any(|x| x == f);
        if op.immediate > MAX_IMMEDIATE {
            bail!(
                "immediate width {} for opcode {} exceeds {MAX_IMMEDIATE}",
                op.immediate,
                op.name
            );
        }
        if op.immediate != 0 && !has("push") {
            bail!("opcode {} has an immediate but is not push-family", op.name);
        }
        if has("push") && (op.stack_in, op.stack_out) != (0, 1) {
            bail!("push-family opcode {} must remove 0 and add 1", op.name);
        }
        if has("dup") && u16::from(op.stack_out) != u16::from(op.stack_in) + 1 {
            bail!("dup opcode {} must add exactly one item", op.name);
        }
        if has("swap") && (op.stack_in != op.stack_out || op.stack_in < 2) {
            bail!("swap opcode {} must preserve depth", op.name);
        }
        if op.terminator && (has("jump") || has("jumpi")) {
            bail!("opcode {} cannot be both a jump and a terminator", op.name);
        }
    }
    Ok(())
}

fn flags_rust(flags: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for name in FLAG_NAMES {
        if flags.iter().any(|f| f == name) {
            parts.push(format!("OpcodeFlags::{}", name.to_uppercase()));
        }
    }
    if parts.is_empty() {
        "OpcodeFlags::NONE".to_string()
    } else {
        parts.join(".union(") + &")".repeat(parts.len() - 1)
    }
}

fn generate(spec: Spec, src: &Path) -> Result<String> {
    if spec.version != 1 {
        bail!("unsupported opcodes.json version {}", spec.version);
    }

    let mut ops: Vec<(u8, OpcodeSpec)> = Vec::with_capacity(spec.opcodes.len());
    for op in spec.opcodes {
        let b = parse_u8_hex(&op.byte)?;
        ops.push((b, op));
    }

    sort_and_validate_ops(&mut ops)?;
    validate_stack_effects(&ops)?;

    let mut out = String::new();
    out.push_str("// Copyright 2026 the Flowcheck Authors\n");
    out.push_str("// SPDX-License-Identifier: Apache-2.0 OR MIT\n\n");
    out.push_str("// @generated by flowcheck_codegen. Do not edit by hand.\n");
    let _ = src;
    out.push('\n');

    out.push_str("/// Optional per-opcode traits.\n");
    out.push_str("#[derive(Copy, Clone, Debug, PartialEq, Eq)]\n");
    out.push_str("#[repr(transparent)]\n");
    out.push_str("pub struct OpcodeFlags(u8);\n\n");

    out.push_str("impl OpcodeFlags {\n");
    out.push_str("    /// No flags set.\n");
    out.push_str("    pub const NONE: Self = Self(0);\n");
    out.push_str("    /// Push-family opcode (`PUSH0`..`PUSH32`); records a literal constant.\n");
    out.push_str("    pub const PUSH: Self = Self(1 << 0);\n");
    out.push_str("    /// `DUPn`; copies a slot together with its provenance.\n");
    out.push_str("    pub const DUP: Self = Self(1 << 1);\n");
    out.push_str("    /// `SWAPn`; exchanges two slots together with their provenance.\n");
    out.push_str("    pub const SWAP: Self = Self(1 << 2);\n");
    out.push_str("    /// `PC`; records the current offset as a constant.\n");
    out.push_str("    pub const PC: Self = Self(1 << 3);\n");
    out.push_str("    /// Unconditional jump.\n");
    out.push_str("    pub const JUMP: Self = Self(1 << 4);\n");
    out.push_str("    /// Conditional jump.\n");
    out.push_str("    pub const JUMPI: Self = Self(1 << 5);\n");
    out.push_str("    /// Jump destination marker.\n");
    out.push_str("    pub const JUMPDEST: Self = Self(1 << 6);\n");
    out.push_str("\n    /// Returns the union of `self` and `other`.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub const fn union(self, other: Self) -> Self {\n");
    out.push_str("        Self(self.0 | other.0)\n");
    out.push_str("    }\n");
    out.push_str("\n    /// Returns `true` if `other` is a subset of `self`.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub const fn contains(self, other: Self) -> bool {\n");
    out.push_str("        (self.0 & other.0) == other.0\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str("/// Per-opcode metadata used by decode, disasm, and verification.\n");
    out.push_str("#[derive(Copy, Clone, Debug, PartialEq, Eq)]\n");
    out.push_str("pub struct OpcodeInfo {\n");
    out.push_str("    /// Stable, parseable opcode name.\n");
    out.push_str("    pub mnemonic: &'static str,\n");
    out.push_str("    /// Whether this byte is an assigned opcode.\n");
    out.push_str("    pub is_assigned: bool,\n");
    out.push_str("    /// Number of stack items the opcode removes.\n");
    out.push_str("    pub stack_in: u8,\n");
    out.push_str("    /// Number of stack items the opcode adds.\n");
    out.push_str("    pub stack_out: u8,\n");
    out.push_str("    /// Number of immediate bytes following the opcode byte.\n");
    out.push_str("    pub immediate: u8,\n");
    out.push_str("    /// Whether this opcode halts execution successfully.\n");
    out.push_str("    pub is_terminator: bool,\n");
    out.push_str("    /// Optional per-opcode traits.\n");
    out.push_str("    pub flags: OpcodeFlags,\n");
    out.push_str("}\n\n");

    let mut by_byte: Vec<Option<&OpcodeSpec>> = vec![None; 256];
    for (b, op) in &ops {
        by_byte[usize::from(*b)] = Some(op);
    }

    out.push_str("/// Metadata indexed by opcode byte (all 256 byte values).\n");
    out.push_str("pub static OPCODE_INFO_BY_BYTE: [OpcodeInfo; 256] = [\n");
    for (i, op) in by_byte.iter().enumerate() {
        if let Some(op) = op {
            out.push_str(&format!(
                "    OpcodeInfo {{ mnemonic: \"{}\", is_assigned: true, stack_in: {}, stack_out: {}, immediate: {}, is_terminator: {}, flags: {} }}, // 0x{:02X}\n",
                op.mnemonic,
                op.stack_in,
                op.stack_out,
                op.immediate,
                op.terminator,
                flags_rust(&op.flags),
                i
            ));
        } else {
            out.push_str(&format!(
                "    OpcodeInfo {{ mnemonic: \"<invalid>\", is_assigned: false, stack_in: 0, stack_out: 0, immediate: 0, is_terminator: false, flags: OpcodeFlags::NONE }}, // 0x{:02X}\n",
                i
            ));
        }
    }
    out.push_str("];\n\n");

    out.push_str("/// Assigned opcode bytes of the instruction set.\n");
    out.push_str("#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]\n");
    out.push_str("#[repr(u8)]\n");
    out.push_str("pub enum Opcode {\n");
    for (b, op) in &ops {
        let doc = op
            .doc
            .as_deref()
            .with_context(|| format!("missing doc for opcode {}", op.name))?;
        for line in doc.lines() {
            out.push_str(&format!("    /// {line}\n"));
        }
        out.push_str(&format!("    {} = {},\n", op.name, fmt_hex_u8(*b)));
    }
    out.push_str("}\n\n");

    out.push_str("impl Opcode {\n");
    out.push_str("    /// Decodes an opcode byte; `None` for unassigned bytes.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn from_u8(b: u8) -> Option<Self> {\n");
    out.push_str("        Some(match b {\n");
    for (b, op) in &ops {
        out.push_str(&format!(
            "            {} => Self::{},\n",
            fmt_hex_u8(*b),
            op.name
        ));
    }
    out.push_str("            _ => return None,\n");
    out.push_str("        })\n");
    out.push_str("    }\n\n");

    out.push_str("    /// Returns opcode metadata for this opcode.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn info(self) -> &'static OpcodeInfo {\n");
    out.push_str("        &OPCODE_INFO_BY_BYTE[usize::from(self as u8)]\n");
    out.push_str("    }\n");

    out.push_str("\n    /// Stable, parseable opcode name.\n");
    out.push_str("    ///\n");
    out.push_str("    /// This string is used by the disassembler output.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn mnemonic(self) -> &'static str {\n");
    out.push_str("        self.info().mnemonic\n");
    out.push_str("    }\n");

    out.push_str("\n    /// Returns `true` if this opcode halts execution successfully.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn is_terminator(self) -> bool {\n");
    out.push_str("        self.info().is_terminator\n");
    out.push_str("    }\n");
    out.push_str("}\n");

    Ok(out)
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let spec_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("flowcheck/opcodes.json"));
    let opcode_out_path: PathBuf = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("flowcheck/src/opcodes_gen.rs"));
    if args.next().is_some() {
        bail!("usage: flowcheck_codegen [spec.json] [opcodes_out.rs]");
    }

    let json =
        fs::read_to_string(&spec_path).with_context(|| format!("read {}", spec_path.display()))?;
    let spec: Spec =
        serde_json::from_str(&json).with_context(|| format!("parse {}", spec_path.display()))?;

    let opcode_rendered = generate(spec, &spec_path)?;

    if let Some(parent) = opcode_out_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&opcode_out_path, opcode_rendered.as_bytes())
        .with_context(|| format!("write {}", opcode_out_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{OpcodeSpec, Spec, flags_rust, generate};
    use std::fs;
    use std::path::{Path, PathBuf};

    fn normalize_newlines(s: &str) -> String {
        // On Windows, git autocrlf can check in generated `.rs` files with `\r\n` line endings.
        // Normalize so the drift test validates content, not platform line terminators.
        s.replace("\r\n", "\n").replace('\r', "\n")
    }

    fn op(name: &str, byte: &str, flags: &[&str]) -> OpcodeSpec {
        OpcodeSpec {
            name: name.to_string(),
            mnemonic: name.to_uppercase(),
            byte: byte.to_string(),
            stack_in: 0,
            stack_out: 1,
            immediate: 0,
            terminator: false,
            flags: flags.iter().map(|f| (*f).to_string()).collect(),
            doc: Some("Test opcode.".to_string()),
        }
    }

    #[test]
    fn generated_file_is_up_to_date() {
        let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let workspace_root = workspace_root.parent().expect("workspace root");

        let spec_path = workspace_root.join("flowcheck/opcodes.json");
        let opcode_out_path = workspace_root.join("flowcheck/src/opcodes_gen.rs");

        let json = fs::read_to_string(&spec_path).expect("read opcodes.json");
        let spec: Spec = serde_json::from_str(&json).expect("parse opcodes.json");

        let rendered = generate(spec, &spec_path).expect("render opcodes_gen.rs");
        let existing = fs::read_to_string(&opcode_out_path).expect("read opcodes_gen.rs");

        assert_eq!(
            normalize_newlines(&rendered),
            normalize_newlines(&existing),
            "opcodes_gen.rs is out of date; re-run: cargo run -p flowcheck_codegen"
        );
    }

    #[test]
    fn flags_render_in_bit_order() {
        assert_eq!(flags_rust(&[]), "OpcodeFlags::NONE");
        assert_eq!(flags_rust(&["jump".to_string()]), "OpcodeFlags::JUMP");
        assert_eq!(
            flags_rust(&["jumpi".to_string(), "push".to_string()]),
            "OpcodeFlags::PUSH.union(OpcodeFlags::JUMPI)"
        );
    }

    #[test]
    fn rejects_duplicate_bytes() {
        let spec = Spec {
            version: 1,
            opcodes: vec![op("A", "0x01", &[]), op("B", "0x01", &[])],
        };
        let err = generate(spec, Path::new("test.json")).unwrap_err();
        assert!(err.to_string().contains("duplicate opcode byte"));
    }

    #[test]
    fn rejects_immediate_on_non_push() {
        let mut bad = op("A", "0x01", &[]);
        bad.immediate = 2;
        let spec = Spec {
            version: 1,
            opcodes: vec![bad],
        };
        let err = generate(spec, Path::new("test.json")).unwrap_err();
        assert!(err.to_string().contains("not push-family"));
    }

    #[test]
    fn rejects_unknown_flag() {
        let spec = Spec {
            version: 1,
            opcodes: vec![op("A", "0x01", &["call_like"])],
        };
        let err = generate(spec, Path::new("test.json")).unwrap_err();
        assert!(err.to_string().contains("unknown flag"));
    }
}
