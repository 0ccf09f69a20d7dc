// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder rewriting for `run` bodies.
//!
//! Three forms are recognised, and rewritten in this order:
//!
//! | Placeholder      | Meaning                              |
//! |------------------|--------------------------------------|
//! | `{{ $N }}`       | N-th live argument (1-based)         |
//! | `{{ .Name }}`    | value of the declared flag `Name`    |
//! | `{{ $env.VAR }}` | environment variable `VAR`           |
//!
//! Anything else between `{{ }}` is left as written.

use aliax_config::identifier;
use aliax_shell::{FlagKind, Target};
use indexmap::IndexMap;
use regex::{Captures, Regex};

/// Flag-type dictionary for one command scope.
///
/// Keys are scoped variables (`<ident>_<flag>`), so the same flag name at two
/// nesting levels maps to two distinct variables.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    ident: String,
    kinds: IndexMap<String, FlagKind>,
}

impl Scope {
    pub fn new(ident: &str) -> Self {
        Self {
            ident: ident.to_string(),
            kinds: IndexMap::new(),
        }
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Record a flag and return its scoped variable.
    pub fn declare(&mut self, name: &str, kind: FlagKind) -> String {
        let variable = self.variable_for(name);
        self.kinds.insert(variable.clone(), kind);
        variable
    }

    /// Scoped variable and type of a declared flag.
    pub fn lookup(&self, name: &str) -> Option<(String, FlagKind)> {
        let variable = self.variable_for(name);
        let kind = *self.kinds.get(&variable)?;
        Some((variable, kind))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    fn variable_for(&self, name: &str) -> String {
        format!("{}_{}", self.ident, identifier(name))
    }
}

/// Compiled placeholder patterns.
///
/// Built once and shared by reference across every build.
#[derive(Debug, Clone)]
pub struct Resolvers {
    positional: Regex,
    named: Regex,
    env: Regex,
    leftover: Regex,
}

impl Default for Resolvers {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolvers {
    // Allow expect here as the patterns are constant
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let compile = |pattern: &str| Regex::new(pattern).expect("constant regex pattern is valid");
        Self {
            positional: compile(r"\{\{\s*\$(\d+)\s*\}\}"),
            named: compile(r"\{\{\s*\.(\w+)\s*\}\}"),
            env: compile(r"\{\{\s*\$\w+\.(\w+)\s*\}\}"),
            leftover: compile(r"\{\{[^{}]*\}\}"),
        }
    }

    /// Rewrite every placeholder in `text` for `target`.
    ///
    /// Named references resolve only against flags declared in `scope`;
    /// `{{$0}}` and unknown names stay verbatim and are logged.
    pub fn resolve<T: Target>(&self, target: &T, text: &str, scope: &Scope) -> String {
        let text = self.positional.replace_all(text, |caps: &Captures<'_>| {
            match caps[1].parse::<usize>() {
                Ok(n) if n >= 1 => target.positional_ref(n - 1),
                _ => caps[0].to_string(),
            }
        });
        let text = self.named.replace_all(&text, |caps: &Captures<'_>| {
            match scope.lookup(&caps[1]) {
                Some((variable, _)) => target.flag_ref(&variable),
                None => caps[0].to_string(),
            }
        });
        let text = self.env.replace_all(&text, |caps: &Captures<'_>| target.env_ref(&caps[1]));

        for leftover in self.leftover.find_iter(&text) {
            tracing::warn!(
                scope = scope.ident(),
                platform = %target.platform(),
                placeholder = leftover.as_str(),
                "leaving unresolved placeholder"
            );
        }
        text.into_owned()
    }

    /// Rewrite only environment references (used for `bin` paths).
    pub fn resolve_env<T: Target>(&self, target: &T, text: &str) -> String {
        self.env
            .replace_all(text, |caps: &Captures<'_>| target.env_ref(&caps[1]))
            .into_owned()
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
