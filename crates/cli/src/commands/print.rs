// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `aliax print`: render one script to stdout.

use aliax_codegen::Generator;
use aliax_config::Platform;
use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::Path;

#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Extension or command name
    pub name: String,

    /// Script flavour to render
    #[arg(short, long, value_enum, default_value_t)]
    pub target: TargetArg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    #[default]
    Bash,
    #[value(alias = "pwsh")]
    Powershell,
}

impl From<TargetArg> for Platform {
    fn from(target: TargetArg) -> Self {
        match target {
            TargetArg::Bash => Platform::Bash,
            TargetArg::Powershell => Platform::PowerShell,
        }
    }
}

pub fn handle(args: PrintArgs, config_path: &Path) -> Result<()> {
    let config = super::load(config_path)?;
    let script = Generator::new(&config).render(&args.name, args.target.into())?;
    print!("{script}");
    Ok(())
}
