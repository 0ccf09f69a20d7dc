// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! PowerShell source printer.

use super::ast::{Block, ElseBranch, Expr, File, IfStmt, Stmt};
use super::token::{Literal, Token};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Render a whole script.
pub fn print(file: &File) -> String {
    let mut printer = Printer::default();
    for stmt in &file.stmts {
        printer.stmt(stmt, "");
    }
    printer.out
}

/// Render a single statement at the top indentation level.
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::default();
    printer.stmt(stmt, "");
    printer.out
}

/// Render an expression.
pub fn expr_string(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Ref(inner) => format!("${}", expr_string(inner)),
        Expr::Index { collection, key } => {
            format!("{}[{}]", expr_string(collection), expr_string(key))
        }
        Expr::Selector { target, member } => {
            format!("{}.{}", expr_string(target), expr_string(member))
        }
        Expr::Binary { left, op, right } => match op {
            Token::DoubleDot => format!("{}..{}", expr_string(left), expr_string(right)),
            _ => format!("{} {} {}", expr_string(left), op, expr_string(right)),
        },
        Expr::IncDec { target, op } => format!("{}{}", expr_string(target), op),
        Expr::Basic { kind, value } => match kind {
            Literal::String => format!("\"{value}\""),
            Literal::Number | Literal::Bool => value.clone(),
        },
    }
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn line(&mut self, indent: &str, text: &str) {
        let _ = writeln!(self.out, "{indent}{text}");
    }

    /// Statements of a braced block, one level deeper than `indent`.
    fn inner(&mut self, block: &Block, indent: &str) {
        let inner = format!("{indent}{INDENT}");
        for stmt in &block.stmts {
            self.stmt(stmt, &inner);
        }
    }

    fn stmt(&mut self, stmt: &Stmt, indent: &str) {
        match stmt {
            Stmt::Block(block) => self.inner(block, indent),
            Stmt::If(node) => self.if_chain(node, indent),
            Stmt::For(node) => {
                self.line(
                    indent,
                    &format!(
                        "for ({}; {}; {}) {{",
                        expr_string(&node.init),
                        expr_string(&node.cond),
                        expr_string(&node.post)
                    ),
                );
                self.inner(&node.body, indent);
                self.line(indent, "}");
            }
            Stmt::Switch(node) => {
                let head = match node.mode {
                    Some(mode) => format!("switch {} ({}) {{", mode.flag(), expr_string(&node.subject)),
                    None => format!("switch ({}) {{", expr_string(&node.subject)),
                };
                self.line(indent, &head);
                let arm = format!("{indent}{INDENT}");
                for case in &node.cases {
                    self.line(&arm, &format!("{} {{", expr_string(&case.pattern)));
                    self.inner(&case.body, &arm);
                    self.line(&arm, "}");
                }
                if let Some(default) = &node.default {
                    self.line(&arm, "default {");
                    self.inner(default, &arm);
                    self.line(&arm, "}");
                }
                self.line(indent, "}");
            }
            Stmt::Assign { lhs, rhs } => {
                self.line(indent, &format!("{} = {}", expr_string(lhs), expr_string(rhs)));
            }
            Stmt::Call { op, func, args } => {
                let mut text = match op {
                    Some(op) => format!("{} {}", op, expr_string(func)),
                    None => expr_string(func),
                };
                for arg in args {
                    text.push(' ');
                    text.push_str(&expr_string(arg));
                }
                self.line(indent, &text);
            }
            Stmt::Expr(expr) => self.line(indent, &expr_string(expr)),
            Stmt::Comment(text) => self.line(indent, &format!("# {text}")),
        }
    }

    fn if_chain(&mut self, node: &IfStmt, indent: &str) {
        self.line(indent, &format!("if ({}) {{", expr_string(&node.cond)));
        self.inner(&node.body, indent);

        let mut next = node.else_branch.as_ref();
        while let Some(branch) = next {
            match branch {
                ElseBranch::If(elif) => {
                    self.line(indent, &format!("}} elseif ({}) {{", expr_string(&elif.cond)));
                    self.inner(&elif.body, indent);
                    next = elif.else_branch.as_ref();
                }
                ElseBranch::Block(block) => {
                    self.line(indent, "} else {");
                    self.inner(block, indent);
                    next = None;
                }
            }
        }
        self.line(indent, "}");
    }
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
