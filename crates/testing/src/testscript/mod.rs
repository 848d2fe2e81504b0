// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// This file includes and modifies code from the toydb project (https://github.com/erikgrinaker/toydb),
// originally licensed under the Apache License, Version 2.0.
// Original copyright:
//   Copyright (c) 2024 Erik Grinaker

//! Golden scripts: blocks of commands followed by a `---` line and the
//! output they are expected to produce.
//!
//! ```text
//! # comment
//! > {"rels": [...]}
//! ---
//! Root SELECT [table: 1]
//! ...
//!
//! !> {"rels": []}
//! ---
//! error[PLAN_002]: malformed plan: expected 4 relational stages, found 0
//! ```
//!
//! A leading `!` expects the command to fail and records its error. A `>`
//! takes the rest of the line, with `\` continuations, as the command name
//! verbatim. `(command)` silences output and `prefix: command` prefixes each
//! output line.

mod command;
mod parser;
mod runner;

pub use command::{Argument, Command};
pub use runner::{Runner, generate, run_path};
