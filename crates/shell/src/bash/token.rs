// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator and literal kinds for the bash target.

use std::fmt;

/// Operators that appear in generated bash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `=`
    Assign,
    /// `&`
    BitAnd,
    /// `&&`
    And,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `..`
    DoubleDot,
}

impl Token {
    /// Whether the printer surrounds this operator with spaces.
    ///
    /// Test operators inside `[[ ]]` need whitespace; arithmetic inside
    /// `(( ))` reads best packed (`i<${#args[@]}`).
    pub fn is_spaced(self) -> bool {
        matches!(self, Token::And | Token::Eq | Token::Ne)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Add => "+",
            Token::Sub => "-",
            Token::Assign => "=",
            Token::BitAnd => "&",
            Token::And => "&&",
            Token::Eq => "==",
            Token::Ne => "!=",
            Token::Lt => "<",
            Token::Gt => ">",
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
    /// Rendered verbatim (`true` / `false`).
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
