// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bash syntax tree.
//!
//! Nodes hold only what the printer needs to regenerate source. Nothing here
//! checks that identifiers exist or that a tree makes sense as a program; the
//! script builder owns that.

use super::token::{Literal, Token};

/// Expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Bare name or raw text, printed verbatim.
    Ident(String),
    /// Variable reference: `$name` for a bare identifier, `${expr}` otherwise.
    Ref(Box<Expr>),
    /// `collection[key]`
    Index { collection: Box<Expr>, key: Box<Expr> },
    /// `target.member`
    Selector { target: Box<Expr>, member: Box<Expr> },
    /// `left op right`
    Binary {
        left: Box<Expr>,
        op: Token,
        right: Box<Expr>,
    },
    /// `target++` / `target--`
    IncDec { target: Box<Expr>, op: Token },
    /// String, number, or boolean literal.
    Basic { kind: Literal, value: String },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// Raw source text. Same node as [`Expr::ident`]; the name documents intent.
    pub fn raw(text: impl Into<String>) -> Self {
        Expr::Ident(text.into())
    }

    pub fn reference(inner: Expr) -> Self {
        Expr::Ref(Box::new(inner))
    }

    /// `$name`
    pub fn var(name: impl Into<String>) -> Self {
        Expr::reference(Expr::ident(name))
    }

    pub fn index(collection: Expr, key: Expr) -> Self {
        Expr::Index {
            collection: Box::new(collection),
            key: Box::new(key),
        }
    }

    pub fn selector(target: Expr, member: Expr) -> Self {
        Expr::Selector {
            target: Box::new(target),
            member: Box::new(member),
        }
    }

    pub fn binary(left: Expr, op: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn inc(target: Expr) -> Self {
        Expr::IncDec {
            target: Box::new(target),
            op: Token::Inc,
        }
    }

    pub fn dec(target: Expr) -> Self {
        Expr::IncDec {
            target: Box::new(target),
            op: Token::Dec,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Basic {
            kind: Literal::String,
            value: value.into(),
        }
    }

    pub fn number(value: i64) -> Self {
        Expr::Basic {
            kind: Literal::Number,
            value: value.to_string(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Basic {
            kind: Literal::Bool,
            value: value.to_string(),
        }
    }
}

/// Statement list; the printer indents it one level deeper than its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.stmts.push(stmt);
    }

    pub fn extend(&mut self, stmts: impl IntoIterator<Item = Stmt>) {
        self.stmts.extend(stmts);
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// `if [[ cond ]]; then ... fi`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub cond: Expr,
    pub body: Block,
    pub else_branch: Option<ElseBranch>,
}

/// What follows the body of an `if`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElseBranch {
    /// `elif`
    If(Box<IfStmt>),
    /// Terminal `else`.
    Block(Block),
}

/// `for ((init; cond; post)); do ... done`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForStmt {
    pub init: Expr,
    pub cond: Expr,
    pub post: Expr,
    pub body: Block,
}

/// One `pattern) ... ;;` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseClause {
    pub pattern: Expr,
    pub body: Block,
}

/// `case subject in ... esac`. Arms print in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchStmt {
    pub subject: Expr,
    pub cases: Vec<CaseClause>,
    pub default: Option<Block>,
}

/// Statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Block(Block),
    If(IfStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    /// `lhs=rhs`
    Assign { lhs: Expr, rhs: Expr },
    /// `func arg...`
    Call { func: Expr, args: Vec<Expr> },
    /// Expression on its own line.
    Expr(Expr),
    /// `#text`
    Comment(String),
}

impl Stmt {
    pub fn assign(lhs: Expr, rhs: Expr) -> Self {
        Stmt::Assign { lhs, rhs }
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Stmt::Call { func, args }
    }

    /// Call with raw text as the whole command line.
    pub fn call_raw(line: impl Into<String>) -> Self {
        Stmt::call(Expr::raw(line), Vec::new())
    }

    /// Raw text on its own line.
    pub fn raw(text: impl Into<String>) -> Self {
        Stmt::Expr(Expr::raw(text))
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Stmt::Comment(text.into())
    }
}

/// Root of a generated script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    pub stmts: Vec<Stmt>,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, stmts: impl IntoIterator<Item = Stmt>) {
        self.stmts.extend(stmts);
    }
}
