// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lowering a command tree into a dispatcher script.
//!
//! One builder serves every target: it decides the shape of the script and
//! asks the [`Target`] for each leaf node. The shape, per command node:
//!
//! ```text
//! <child guards>            save/restore args around each child
//! <flag declarations>       <ident>_<flag> = default
//! non_matched_args = ()
//! <flag scan loop>          only when flags exist
//! <dispatch chain>          weighted cases, heaviest first, default last
//! ```
//!
//! Child nodes are wrapped in a guard that tests and shifts `args[0]`.

use crate::generate::GenerateError;
use crate::resolver::{Resolvers, Scope};
use aliax_config::{identifier, Command, HELP_FLAG};
use aliax_shell::{Branch, FlagCase, Forward, Target};

/// How a root command is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode<'a> {
    /// Forward unhandled arguments to the executable at `bin`.
    Extension { bin: &'a str },
    /// Pure dispatch; prints help when nothing matches.
    Command,
}

/// Match case with its dispatch precedence.
struct Weighted<E, S> {
    weight: usize,
    cond: E,
    body: Vec<S>,
}

/// Builds one script for one target.
pub struct ScriptBuilder<'a, T: Target> {
    target: &'a T,
    resolvers: &'a Resolvers,
    executable: &'a str,
}

impl<'a, T: Target> ScriptBuilder<'a, T> {
    /// `executable` names the variable holding a wrapped binary's path.
    pub fn new(target: &'a T, resolvers: &'a Resolvers, executable: &'a str) -> Self {
        Self {
            target,
            resolvers,
            executable,
        }
    }

    /// Render the complete script for a root command.
    ///
    /// Commands are expected to be preloaded; an injected `help` flag gains
    /// its own dispatch branch.
    pub fn build(&self, cmd: &Command, mode: Mode<'_>) -> Result<String, GenerateError> {
        let target = self.target;
        tracing::debug!(
            command = %cmd.name,
            platform = %target.platform(),
            "building script"
        );

        let mut stmts = target.prologue();
        if let Mode::Extension { bin } = mode {
            stmts.push(target.declare_executable(self.executable, bin));
        }
        stmts.extend(target.capture_args());

        let help = match mode {
            Mode::Command if !cmd.disable_help => Some(cmd.help_text()),
            _ => None,
        };
        stmts.extend(self.lower(cmd, &identifier(&cmd.name), 0, help.as_deref())?);

        match mode {
            Mode::Extension { .. } => {
                let forward = if cmd.flags.is_empty() {
                    Forward::Args
                } else {
                    Forward::NonMatched
                };
                stmts.push(target.forward(self.executable, forward));
            }
            Mode::Command => {
                if let Some(text) = &help {
                    stmts.extend(target.help(text));
                }
            }
        }

        let script = target.render(stmts);
        tracing::trace!(command = %cmd.name, %script, "rendered script");
        Ok(script)
    }

    fn lower(
        &self,
        cmd: &Command,
        ident: &str,
        level: usize,
        help: Option<&str>,
    ) -> Result<Vec<T::Stmt>, GenerateError> {
        let target = self.target;
        tracing::debug!(command = %cmd.name, ident, level, "lowering command");
        let mut body = Vec::new();

        // 1-2. Children, each seeing the arguments this level received
        let mut children = Vec::with_capacity(cmd.children.len());
        for (name, child) in &cmd.children {
            let child_ident = format!("{ident}_{}", identifier(name));
            children.push(self.lower(child, &child_ident, level + 1, None)?);
        }
        if !children.is_empty() {
            let scratch = format!("temp_args_{ident}");
            body.push(target.save_args(&scratch));
            for (i, block) in children.into_iter().enumerate() {
                if i > 0 {
                    body.push(target.restore_args(&scratch));
                }
                body.extend(block);
            }
            body.push(target.restore_args(&scratch));
        }

        // 3. Flag declarations
        let mut scope = Scope::new(ident);
        let mut flag_cases = Vec::with_capacity(cmd.flags.len());
        for flag in &cmd.flags {
            let variable = scope.declare(&flag.name, flag.kind);
            body.push(target.declare_flag(&variable, flag.kind));
            flag_cases.push(FlagCase {
                aliases: flag.tokens().into_iter().map(regex::escape).collect(),
                variable,
                kind: flag.kind,
            });
        }

        // 4.
        body.push(target.init_non_matched());

        // 5-6. Flag scan and dispatch
        if flag_cases.is_empty() {
            for case in &cmd.cases {
                if !case.applies_to(target.platform()) {
                    continue;
                }
                if !case.is_default() {
                    tracing::debug!(command = %cmd.name, "skipping flag case on command without flags");
                    continue;
                }
                let lines = self.run_lines(&case.run, &scope);
                if !lines.is_empty() {
                    body.extend(lines);
                    body.push(target.exit());
                }
            }
        } else {
            body.push(target.flag_scan(&flag_cases));
            body.extend(self.dispatch(cmd, &scope, help)?);
        }

        // 7.
        if level > 0 {
            Ok(vec![target.subcommand_guard(&cmd.name, body)])
        } else {
            Ok(body)
        }
    }

    /// Weighted if/elif/else chain over this command's match cases.
    fn dispatch(
        &self,
        cmd: &Command,
        scope: &Scope,
        help: Option<&str>,
    ) -> Result<Vec<T::Stmt>, GenerateError> {
        let target = self.target;
        let mut weighted: Vec<Weighted<T::Expr, T::Stmt>> = Vec::new();
        let mut fallback: Option<Vec<T::Stmt>> = None;

        if let Some(text) = help {
            let overridden = cmd.cases.iter().any(|c| c.names().contains(&HELP_FLAG));
            if let (false, Some((variable, kind))) = (overridden, scope.lookup(HELP_FLAG)) {
                weighted.push(Weighted {
                    weight: 1,
                    cond: target.flag_is_set(&variable, kind),
                    body: target.help(text),
                });
            }
        }

        for case in cmd.cases.iter().filter(|c| c.applies_to(target.platform())) {
            let mut lines = self.run_lines(&case.run, scope);

            if case.is_default() {
                if fallback.is_some() {
                    tracing::warn!(command = %cmd.name, "ignoring extra default case");
                } else if !lines.is_empty() {
                    lines.push(target.exit());
                    fallback = Some(lines);
                }
                continue;
            }

            let names = case.names();
            let mut cond: Option<T::Expr> = None;
            for name in &names {
                let (variable, kind) =
                    scope
                        .lookup(name)
                        .ok_or_else(|| GenerateError::UnknownFlag {
                            command: display_name(cmd).to_string(),
                            flag: name.to_string(),
                        })?;
                let test = target.flag_is_set(&variable, kind);
                cond = Some(match cond {
                    Some(prev) => target.and(prev, test),
                    None => test,
                });
            }
            let Some(cond) = cond else { continue };
            lines.push(target.exit());
            weighted.push(Weighted {
                weight: names.len(),
                cond,
                body: lines,
            });
        }

        // Stable: equal weights keep declaration order.
        weighted.sort_by(|a, b| b.weight.cmp(&a.weight));

        let mut branches = weighted.into_iter().map(|w| Branch {
            cond: w.cond,
            body: w.body,
        });
        match branches.next() {
            Some(first) => Ok(vec![target.if_chain(first, branches.collect(), fallback)]),
            None => Ok(fallback.unwrap_or_default()),
        }
    }

    /// One statement per non-blank line of a resolved `run` body.
    fn run_lines(&self, run: &str, scope: &Scope) -> Vec<T::Stmt> {
        let resolved = self.resolvers.resolve(self.target, run, scope);
        resolved
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(|line| self.target.run_line(line))
            .collect()
    }
}

fn display_name(cmd: &Command) -> &str {
    if cmd.display_name.is_empty() {
        &cmd.name
    } else {
        &cmd.display_name
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
