// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lowering into the bash tree.

use super::ast::{
    Block, CaseClause, ElseBranch, Expr, File, ForStmt, IfStmt, Stmt, SwitchStmt,
};
use super::print::print;
use super::token::Token;
use crate::target::{
    Branch, FlagCase, FlagKind, Forward, Platform, Target, ARGS, BANNER, LOOP_INDEX,
    NON_MATCHED_ARGS,
};

/// Bash target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bash;

/// `("${name[@]}")`
fn array_copy(name: &str) -> Expr {
    Expr::raw(format!("(\"${{{name}[@]}}\")"))
}

/// `${args[key]}`
fn arg_at(key: Expr) -> Expr {
    Expr::reference(Expr::index(Expr::ident(ARGS), key))
}

/// `i=$((i+1))`. A bare `((i++))` evaluates to zero on the first token and
/// trips `set -e`.
fn advance() -> Stmt {
    Stmt::assign(
        Expr::ident(LOOP_INDEX),
        Expr::raw(format!("$(({LOOP_INDEX}+1))")),
    )
}

fn flag_arm(case: &FlagCase) -> CaseClause {
    let variable = Expr::ident(&case.variable);
    let body = match case.kind {
        FlagKind::String => vec![
            Stmt::assign(
                variable,
                Expr::string(format!("${{{ARGS}[{LOOP_INDEX}+1]}}")),
            ),
            advance(),
        ],
        FlagKind::Bool => vec![Stmt::assign(variable, Expr::boolean(true))],
    };
    CaseClause {
        pattern: Expr::raw(case.aliases.join("|")),
        body: Block::new(body),
    }
}

impl Target for Bash {
    type Expr = Expr;
    type Stmt = Stmt;

    fn platform(&self) -> Platform {
        Platform::Bash
    }

    fn prologue(&self) -> Vec<Stmt> {
        vec![
            Stmt::comment("!/bin/bash"),
            Stmt::comment(format!(" {BANNER}")),
            Stmt::raw("set -e"),
        ]
    }

    fn capture_args(&self) -> Option<Stmt> {
        Some(Stmt::assign(Expr::ident(ARGS), Expr::raw("(\"$@\")")))
    }

    fn render(&self, stmts: Vec<Stmt>) -> String {
        let mut file = File::new();
        file.append(stmts);
        print(&file)
    }

    fn save_args(&self, scratch: &str) -> Stmt {
        Stmt::assign(Expr::ident(scratch), array_copy(ARGS))
    }

    fn restore_args(&self, scratch: &str) -> Stmt {
        Stmt::assign(Expr::ident(ARGS), array_copy(scratch))
    }

    fn declare_flag(&self, variable: &str, kind: FlagKind) -> Stmt {
        let init = match kind {
            FlagKind::String => Expr::string(""),
            FlagKind::Bool => Expr::boolean(false),
        };
        Stmt::assign(Expr::ident(variable), init)
    }

    fn init_non_matched(&self) -> Stmt {
        Stmt::assign(Expr::ident(NON_MATCHED_ARGS), Expr::raw("()"))
    }

    fn flag_scan(&self, cases: &[FlagCase]) -> Stmt {
        let switch = SwitchStmt {
            subject: Expr::string(format!("${{{ARGS}[{LOOP_INDEX}]}}")),
            cases: cases.iter().map(flag_arm).collect(),
            default: Some(Block::new(vec![Stmt::raw(format!(
                "{NON_MATCHED_ARGS}+=(\"${{{ARGS}[{LOOP_INDEX}]}}\")"
            ))])),
        };
        Stmt::For(ForStmt {
            init: Expr::binary(Expr::ident(LOOP_INDEX), Token::Assign, Expr::number(0)),
            cond: Expr::binary(
                Expr::ident(LOOP_INDEX),
                Token::Lt,
                Expr::raw(format!("${{#{ARGS}[@]}}")),
            ),
            post: Expr::inc(Expr::ident(LOOP_INDEX)),
            body: Block::new(vec![Stmt::Switch(switch)]),
        })
    }

    fn flag_is_set(&self, variable: &str, kind: FlagKind) -> Expr {
        match kind {
            FlagKind::String => Expr::raw(format!("-n \"${variable}\"")),
            FlagKind::Bool => Expr::binary(Expr::var(variable), Token::Eq, Expr::boolean(true)),
        }
    }

    fn and(&self, left: Expr, right: Expr) -> Expr {
        Expr::binary(left, Token::And, right)
    }

    fn if_chain(
        &self,
        first: Branch<Expr, Stmt>,
        rest: Vec<Branch<Expr, Stmt>>,
        otherwise: Option<Vec<Stmt>>,
    ) -> Stmt {
        let mut else_branch = otherwise.map(|body| ElseBranch::Block(Block::new(body)));
        for branch in rest.into_iter().rev() {
            else_branch = Some(ElseBranch::If(Box::new(IfStmt {
                cond: branch.cond,
                body: Block::new(branch.body),
                else_branch,
            })));
        }
        Stmt::If(IfStmt {
            cond: first.cond,
            body: Block::new(first.body),
            else_branch,
        })
    }

    fn run_line(&self, line: &str) -> Stmt {
        Stmt::call_raw(line)
    }

    fn exit(&self) -> Stmt {
        Stmt::call_raw("exit")
    }

    fn subcommand_guard(&self, name: &str, body: Vec<Stmt>) -> Stmt {
        let mut block = Block::new(vec![Stmt::assign(
            Expr::ident(ARGS),
            Expr::raw(format!("(\"${{{ARGS}[@]:1}}\")")),
        )]);
        block.extend(body);
        Stmt::If(IfStmt {
            cond: Expr::binary(arg_at(Expr::number(0)), Token::Eq, Expr::string(name)),
            body: block,
            else_branch: None,
        })
    }

    fn declare_executable(&self, variable: &str, path: &str) -> Stmt {
        Stmt::assign(Expr::ident(variable), Expr::string(path))
    }

    fn forward(&self, variable: &str, forward: Forward) -> Stmt {
        let source = match forward {
            Forward::Args => ARGS,
            Forward::NonMatched => NON_MATCHED_ARGS,
        };
        Stmt::call(
            Expr::string(format!("${variable}")),
            vec![Expr::string(format!("${{{source}[@]}}"))],
        )
    }

    fn help(&self, text: &str) -> Vec<Stmt> {
        vec![
            Stmt::call_raw(format!("cat <<'EOF'\n{}\nEOF", text.trim_end_matches('\n'))),
            self.exit(),
        ]
    }

    fn positional_ref(&self, index: usize) -> String {
        format!("\"${{{ARGS}[{index}]}}\"")
    }

    fn flag_ref(&self, variable: &str) -> String {
        format!("${{{variable}}}")
    }

    fn env_ref(&self, name: &str) -> String {
        format!("${name}")
    }
}
