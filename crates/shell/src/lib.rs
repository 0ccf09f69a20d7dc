// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shell syntax trees and printers for generated dispatcher scripts.
//!
//! Each target shell has its own tree (`ast`), operator table (`token`), and
//! printer (`print`). The [`Target`] trait ties a tree to the handful of
//! shapes a dispatcher needs, so one script builder can drive both shells.
//!
//! ```ignore
//! use aliax_shell::{Bash, Target};
//!
//! let mut stmts = Bash.prologue();
//! stmts.push(Bash.run_line("echo hello"));
//! print!("{}", Bash.render(stmts));
//! ```
//!
//! # Layout
//!
//! ```text
//! bash / powershell
//! ├── token   operators and literal kinds
//! ├── ast     Expr, Stmt, Block, IfStmt, ForStmt, SwitchStmt, File
//! └── print   print(&File), print_stmt(&Stmt), expr_string(&Expr)
//! ```

pub mod bash;
pub mod powershell;
mod target;

pub use bash::Bash;
pub use powershell::PowerShell;
pub use target::{
    Branch, FlagCase, FlagKind, Forward, Platform, Target, ARGS, BANNER, LOOP_INDEX,
    NON_MATCHED_ARGS,
};
