// Copyright 2026 the Flowcheck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Code-structure analyses shared by the verifier and tooling.

pub(crate) mod bitset;
pub mod jumpdest;
