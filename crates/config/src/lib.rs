// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command tree configuration: parsing, validation, and help text

mod command;
mod find;
mod parser;
mod validate;

pub use aliax_shell::{FlagKind, Platform};
pub use command::{
    identifier, Command, Flag, MatchCase, Pattern, DEFAULT_PATTERN, HELP_ALIASES, HELP_FLAG,
};
pub use find::{find_config, DEFAULT_CONFIG, WORK_FILE};
pub use parser::{
    load_config, parse_config, parse_config_with_format, Aliax, ConfigError, Format,
    DEFAULT_EXECUTABLE, DEFAULT_RUN_PATH,
};
