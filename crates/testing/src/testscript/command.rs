// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// This file includes and modifies code from the toydb project (https://github.com/erikgrinaker/toydb),
// originally licensed under the Apache License, Version 2.0.
// Original copyright:
//   Copyright (c) 2024 Erik Grinaker

/// A block of commands sharing one expected output.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Block {
	/// The commands in the block.
	pub commands: Vec<Command>,
	/// The literal string of the input commands, including comments and
	/// blank lines. Kept verbatim when the output is regenerated.
	pub literal: String,
	/// The line number of the block's first line.
	pub line_number: u32,
}

/// A command passed to [`crate::testscript::Runner::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
	/// The command name. For `>` commands, the rest of the line.
	pub name: String,
	/// The command arguments.
	pub args: Vec<Argument>,
	/// The command prefix, if given.
	pub prefix: Option<String>,
	/// Silences the command's output.
	pub silent: bool,
	/// The command is expected to fail.
	pub fail: bool,
	/// The command's line number position in the script.
	pub line_number: u32,
}

/// A command argument, either `value` or `key=value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}
