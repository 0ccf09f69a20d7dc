// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Script generation: command trees to bash and PowerShell dispatchers

mod builder;
mod generate;
mod resolver;
pub mod store;

pub use builder::{Mode, ScriptBuilder};
pub use generate::{GenerateError, Generator, Report, LINK_DIR};
pub use resolver::{Resolvers, Scope};
pub use store::{FsStore, ScriptStore, StoreError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeStore, StoreCall};
