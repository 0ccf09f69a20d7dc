// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator and literal kinds for the PowerShell target.

use std::fmt;

/// Operators that appear in generated PowerShell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-and`
    And,
    /// `&`, the call operator
    Call,
    /// `-eq`
    Eq,
    /// `-ne`
    Ne,
    /// `-lt`
    Lt,
    /// `-gt`
    Gt,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `..`
    DoubleDot,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Add => "+",
            Token::Sub => "-",
            Token::Assign => "=",
            Token::AddAssign => "+=",
            Token::And => "-and",
            Token::Call => "&",
            Token::Eq => "-eq",
            Token::Ne => "-ne",
            Token::Lt => "-lt",
            Token::Gt => "-gt",
            Token::Inc => "++",
            Token::Dec => "--",
            Token::DoubleDot => "..",
        };
        f.write_str(s)
    }
}

/// Literal kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    /// Rendered double-quoted.
    String,
    /// Rendered verbatim.
    Number,
    /// Rendered verbatim.
    Bool,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Literal::String => "string",
            Literal::Number => "number",
            Literal::Bool => "bool",
        };
        f.write_str(s)
    }
}
