// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target shells and the lowering capability the script builder drives.
//!
//! The builder decides *what* a dispatcher script does; a [`Target`] decides
//! how each piece looks in its own syntax tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the live argument array in generated scripts.
pub const ARGS: &str = "args";
/// Collection of tokens the flag scan did not recognise.
pub const NON_MATCHED_ARGS: &str = "non_matched_args";
/// Loop index of the flag scan.
pub const LOOP_INDEX: &str = "i";
/// Banner written at the top of every generated script.
pub const BANNER: &str = "Code generated by aliax. DO NOT EDIT.";

/// A shell a script can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Bash,
    #[serde(alias = "pwsh")]
    PowerShell,
}

impl Platform {
    /// File extension of generated scripts, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Platform::Bash => "sh",
            Platform::PowerShell => "ps1",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Bash => write!(f, "bash"),
            Platform::PowerShell => write!(f, "powershell"),
        }
    }
}

/// Value type of a declared flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    /// Consumes the following token as its value.
    String,
    /// Switch; consumes nothing.
    #[default]
    Bool,
}

/// One arm of the flag scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagCase {
    /// Tokens that select this flag, already regex-escaped.
    pub aliases: Vec<String>,
    /// Scoped variable receiving the value.
    pub variable: String,
    pub kind: FlagKind,
}

/// One conditional branch of a dispatch chain.
#[derive(Debug, Clone)]
pub struct Branch<E, S> {
    pub cond: E,
    pub body: Vec<S>,
}

/// What an extension wrapper hands to the wrapped executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forward {
    /// The live argument array, untouched by flag handling.
    Args,
    /// Only the tokens the flag scan did not consume.
    NonMatched,
}

/// Lowering capability for one target shell.
///
/// Every method builds target nodes; none validates that the names it is
/// given exist. Implementations are stateless.
pub trait Target {
    type Expr: Clone + fmt::Debug;
    type Stmt: Clone + fmt::Debug;

    fn platform(&self) -> Platform;

    /// Header statements of every script.
    fn prologue(&self) -> Vec<Self::Stmt>;

    /// Copy the process arguments into the live argument array, if the
    /// target needs to.
    fn capture_args(&self) -> Option<Self::Stmt>;

    /// Render a complete script.
    fn render(&self, stmts: Vec<Self::Stmt>) -> String;

    /// `scratch = args`
    fn save_args(&self, scratch: &str) -> Self::Stmt;

    /// `args = scratch`
    fn restore_args(&self, scratch: &str) -> Self::Stmt;

    /// Default-initialised flag variable.
    fn declare_flag(&self, variable: &str, kind: FlagKind) -> Self::Stmt;

    /// Empty `non_matched_args` collection.
    fn init_non_matched(&self) -> Self::Stmt;

    /// Counted loop over the live arguments with one switch arm per flag and
    /// a default arm collecting unrecognised tokens.
    fn flag_scan(&self, cases: &[FlagCase]) -> Self::Stmt;

    /// Truthiness test for a flag variable.
    fn flag_is_set(&self, variable: &str, kind: FlagKind) -> Self::Expr;

    /// `left AND right`
    fn and(&self, left: Self::Expr, right: Self::Expr) -> Self::Expr;

    /// `if/elif/.../else`; branches are tested in the order given.
    fn if_chain(
        &self,
        first: Branch<Self::Expr, Self::Stmt>,
        rest: Vec<Branch<Self::Expr, Self::Stmt>>,
        otherwise: Option<Vec<Self::Stmt>>,
    ) -> Self::Stmt;

    /// One line of a user `run` body.
    fn run_line(&self, line: &str) -> Self::Stmt;

    fn exit(&self) -> Self::Stmt;

    /// Run `body` only when the first live argument is `name`, after shifting
    /// that argument off.
    fn subcommand_guard(&self, name: &str, body: Vec<Self::Stmt>) -> Self::Stmt;

    /// `variable = "path"`
    fn declare_executable(&self, variable: &str, path: &str) -> Self::Stmt;

    /// Call the stored executable with the chosen arguments.
    fn forward(&self, variable: &str, forward: Forward) -> Self::Stmt;

    /// Print `text` verbatim.
    fn help(&self, text: &str) -> Vec<Self::Stmt>;

    /// Expression text for the live argument at a 0-based index.
    fn positional_ref(&self, index: usize) -> String;

    /// Expression text for a scoped flag variable.
    fn flag_ref(&self, variable: &str) -> String;

    /// Expression text for an environment variable.
    fn env_ref(&self, name: &str) -> String;
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
