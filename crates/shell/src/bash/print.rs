// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bash source printer.

use super::ast::{Block, ElseBranch, Expr, File, IfStmt, Stmt};
use super::token::Literal;
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
        Expr::Ref(inner) => match inner.as_ref() {
            Expr::Ident(name) => format!("${name}"),
            other => format!("${{{}}}", expr_string(other)),
        },
        Expr::Index { collection, key } => {
            format!("{}[{}]", expr_string(collection), expr_string(key))
        }
        Expr::Selector { target, member } => {
            format!("{}.{}", expr_string(target), expr_string(member))
        }
        Expr::Binary { left, op, right } => {
            if op.is_spaced() {
                format!("{} {} {}", expr_string(left), op, expr_string(right))
            } else {
                format!("{}{}{}", expr_string(left), op, expr_string(right))
            }
        }
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

    /// Body of a compound command. Bash rejects an empty `then`/`else`/`do`
    /// list, so an empty body prints the null command.
    fn body(&mut self, block: &Block, indent: &str) {
        if block.is_empty() {
            self.line(&format!("{indent}{INDENT}"), ":");
            return;
        }
        self.block(block, indent);
    }

    fn block(&mut self, block: &Block, indent: &str) {
        let inner = format!("{indent}{INDENT}");
        for stmt in &block.stmts {
            self.stmt(stmt, &inner);
        }
    }

    fn stmt(&mut self, stmt: &Stmt, indent: &str) {
        match stmt {
            Stmt::Block(block) => self.block(block, indent),
            Stmt::If(node) => self.if_chain(node, indent),
            Stmt::For(node) => {
                self.line(
                    indent,
                    &format!(
                        "for (({}; {}; {})); do",
                        expr_string(&node.init),
                        expr_string(&node.cond),
                        expr_string(&node.post)
                    ),
                );
                self.body(&node.body, indent);
                self.line(indent, "done");
            }
            Stmt::Switch(node) => {
                self.line(indent, &format!("case {} in", expr_string(&node.subject)));
                let arm = format!("{indent}{INDENT}");
                for case in &node.cases {
                    self.line(&arm, &format!("{})", expr_string(&case.pattern)));
                    self.block(&case.body, &arm);
                    self.line(&arm, &format!("{INDENT};;"));
                }
                if let Some(default) = &node.default {
                    self.line(&arm, "*)");
                    self.block(default, &arm);
                    self.line(&arm, &format!("{INDENT};;"));
                }
                self.line(indent, "esac");
            }
            Stmt::Assign { lhs, rhs } => {
                self.line(indent, &format!("{}={}", expr_string(lhs), expr_string(rhs)));
            }
            Stmt::Call { func, args } => {
                let mut text = expr_string(func);
                for arg in args {
                    text.push(' ');
                    text.push_str(&expr_string(arg));
                }
                self.line(indent, &text);
            }
            Stmt::Expr(expr) => self.line(indent, &expr_string(expr)),
            Stmt::Comment(text) => self.line(indent, &format!("#{text}")),
        }
    }

    fn if_chain(&mut self, node: &IfStmt, indent: &str) {
        self.line(indent, &format!("if [[ {} ]]; then", expr_string(&node.cond)));
        self.body(&node.body, indent);

        let mut next = node.else_branch.as_ref();
        while let Some(branch) = next {
            match branch {
                ElseBranch::If(elif) => {
                    self.line(indent, &format!("elif [[ {} ]]; then", expr_string(&elif.cond)));
                    self.body(&elif.body, indent);
                    next = elif.else_branch.as_ref();
                }
                ElseBranch::Block(block) => {
                    self.line(indent, "else");
                    self.body(block, indent);
                    next = None;
                }
            }
        }
        self.line(indent, "fi");
    }
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
