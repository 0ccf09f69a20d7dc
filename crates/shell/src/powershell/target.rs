// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lowering into the PowerShell tree.

use super::ast::{
    Block, CaseClause, ElseBranch, Expr, File, ForStmt, IfStmt, MatchMode, Stmt, SwitchStmt,
};
use super::print::{expr_string, print};
use super::token::Token;
use crate::target::{
    Branch, FlagCase, FlagKind, Forward, Platform, Target, ARGS, BANNER, LOOP_INDEX,
    NON_MATCHED_ARGS,
};

/// PowerShell target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerShell;

/// `'text'` with embedded quotes doubled.
fn single_quoted(text: &str) -> Expr {
    Expr::raw(format!("'{}'", text.replace('\'', "''")))
}

/// `$args[key]`
fn arg_at(key: Expr) -> Expr {
    Expr::index(Expr::var(ARGS), key)
}

fn args_length() -> Expr {
    Expr::selector(Expr::var(ARGS), Expr::ident("Length"))
}

fn flag_arm(case: &FlagCase) -> CaseClause {
    let variable = Expr::var(&case.variable);
    let body = match case.kind {
        FlagKind::String => vec![
            Stmt::assign(
                variable,
                arg_at(Expr::binary(Expr::var(LOOP_INDEX), Token::Add, Expr::number(1))),
            ),
            Stmt::Expr(Expr::inc(Expr::var(LOOP_INDEX))),
        ],
        FlagKind::Bool => vec![Stmt::assign(variable, Expr::boolean(true))],
    };
    CaseClause {
        pattern: single_quoted(&format!("^(?:{})$", case.aliases.join("|"))),
        body: Block::new(body),
    }
}

impl Target for PowerShell {
    type Expr = Expr;
    type Stmt = Stmt;

    fn platform(&self) -> Platform {
        Platform::PowerShell
    }

    fn prologue(&self) -> Vec<Stmt> {
        vec![Stmt::comment(BANNER)]
    }

    fn capture_args(&self) -> Option<Stmt> {
        None
    }

    fn render(&self, stmts: Vec<Stmt>) -> String {
        let mut file = File::new();
        file.append(stmts);
        print(&file)
    }

    fn save_args(&self, scratch: &str) -> Stmt {
        Stmt::assign(Expr::var(scratch), Expr::var(ARGS))
    }

    fn restore_args(&self, scratch: &str) -> Stmt {
        Stmt::assign(Expr::var(ARGS), Expr::var(scratch))
    }

    fn declare_flag(&self, variable: &str, kind: FlagKind) -> Stmt {
        let init = match kind {
            FlagKind::String => Expr::null(),
            FlagKind::Bool => Expr::boolean(false),
        };
        Stmt::assign(Expr::var(variable), init)
    }

    fn init_non_matched(&self) -> Stmt {
        Stmt::assign(Expr::var(NON_MATCHED_ARGS), Expr::raw("@()"))
    }

    fn flag_scan(&self, cases: &[FlagCase]) -> Stmt {
        let switch = SwitchStmt {
            mode: Some(MatchMode::Regex),
            subject: arg_at(Expr::var(LOOP_INDEX)),
            cases: cases.iter().map(flag_arm).collect(),
            default: Some(Block::new(vec![Stmt::Expr(Expr::binary(
                Expr::var(NON_MATCHED_ARGS),
                Token::AddAssign,
                arg_at(Expr::var(LOOP_INDEX)),
            ))])),
        };
        Stmt::For(ForStmt {
            init: Expr::binary(Expr::var(LOOP_INDEX), Token::Assign, Expr::number(0)),
            cond: Expr::binary(Expr::var(LOOP_INDEX), Token::Lt, args_length()),
            post: Expr::inc(Expr::var(LOOP_INDEX)),
            body: Block::new(vec![Stmt::Switch(switch)]),
        })
    }

    fn flag_is_set(&self, variable: &str, kind: FlagKind) -> Expr {
        match kind {
            FlagKind::String => Expr::binary(Expr::null(), Token::Ne, Expr::var(variable)),
            FlagKind::Bool => {
                Expr::binary(Expr::var(variable), Token::Ne, Expr::boolean(false))
            }
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
        // @() keeps a single remaining argument an array.
        let rest = arg_at(Expr::binary(Expr::number(1), Token::DoubleDot, args_length()));
        let mut block = Block::new(vec![Stmt::assign(
            Expr::var(ARGS),
            Expr::raw(format!("@({})", expr_string(&rest))),
        )]);
        block.extend(body);
        Stmt::If(IfStmt {
            cond: Expr::binary(arg_at(Expr::number(0)), Token::Eq, Expr::string(name)),
            body: block,
            else_branch: None,
        })
    }

    fn declare_executable(&self, variable: &str, path: &str) -> Stmt {
        Stmt::assign(Expr::var(variable), Expr::string(path))
    }

    fn forward(&self, variable: &str, forward: Forward) -> Stmt {
        let source = match forward {
            Forward::Args => ARGS,
            Forward::NonMatched => NON_MATCHED_ARGS,
        };
        Stmt::invoke(Expr::var(variable), vec![Expr::var(source)])
    }

    fn help(&self, text: &str) -> Vec<Stmt> {
        vec![
            Stmt::call(
                Expr::ident("Write-Host"),
                vec![single_quoted(text.trim_end_matches('\n'))],
            ),
            self.exit(),
        ]
    }

    fn positional_ref(&self, index: usize) -> String {
        format!("\"$(${ARGS}[{index}])\"")
    }

    fn flag_ref(&self, variable: &str) -> String {
        format!("${variable}")
    }

    fn env_ref(&self, name: &str) -> String {
        format!("$env:{name}")
    }
}
