// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bash syntax tree, printer, and target.

pub mod ast;
pub mod print;
pub mod token;
mod target;

pub use target::Bash;
