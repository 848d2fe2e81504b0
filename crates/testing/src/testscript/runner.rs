// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// This file includes and modifies code from the toydb project (https://github.com/erikgrinaker/toydb),
// originally licensed under the Apache License, Version 2.0.
// Original copyright:
//   Copyright (c) 2024 Erik Grinaker

use std::{
	error::Error,
	io::{self, Write as _},
	panic,
	path::Path,
};

use crate::testscript::{Command, parser::parse};

/// Runs testscript commands, returning their output.
pub trait Runner {
	/// Runs a testscript command, returning its output, or an error if the
	/// command fails.
	///
	/// Error cases are tested by running the command with a `!` prefix,
	/// which records the error's `Display` as the command output.
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>>;

	/// Called at the start of a testscript. Can't return output, since it's
	/// not called in the context of a block.
	fn start_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called at the end of a testscript, e.g. for state assertions.
	fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
		Ok(())
	}

	/// Called at the start of a block. Any output is prepended to the
	/// block's output.
	fn start_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Called at the end of a block. Any output is appended to the block's
	/// output.
	fn end_block(&mut self) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Called at the start of a command. Any output is prepended to the
	/// command's output, and is subject to its prefix and silencing.
	#[allow(unused_variables)]
	fn start_command(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}

	/// Called at the end of a command. Any output is appended to the
	/// command's output, and is subject to its prefix and silencing.
	#[allow(unused_variables)]
	fn end_command(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		Ok(String::new())
	}
}

/// Runs a testscript at the given path.
///
/// Panics if the generated output differs from the file. Errors on IO,
/// parser, or runner failure. With `UPDATE_GOLDENFILES=1` set, the generated
/// output replaces the file instead. Files ending in `.skip` are ignored.
pub fn run_path<R: Runner, P: AsRef<Path>>(runner: &mut R, path: P) -> io::Result<()> {
	let path = path.as_ref();
	let (Some(dir), Some(filename)) = (path.parent(), path.file_name()) else {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, format!("invalid path '{}'", path.display())));
	};

	if filename.to_string_lossy().ends_with(".skip") {
		return Ok(());
	}

	let input = std::fs::read_to_string(path)?;
	let output = generate(runner, &input)?;

	goldenfile::Mint::new(dir).new_goldenfile(filename)?.write_all(output.as_bytes())
}

/// Generates output for a testscript input, without comparing them.
pub fn generate<R: Runner>(runner: &mut R, input: &str) -> io::Result<String> {
	// Common case: the output equals the input.
	let mut output = String::with_capacity(input.len());

	let eol = match input.find("\r\n") {
		Some(_) => "\r\n",
		None => "\n",
	};

	let blocks = parse(input).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

	runner.start_script().map_err(|e| io::Error::other(format!("start_script failed: {e}")))?;

	for (i, block) in blocks.iter().enumerate() {
		// A trailing block of bare comments keeps its literal contents.
		if block.commands.is_empty() {
			output.push_str(&block.literal);
			continue;
		}

		let mut block_output = ensure_eol(
			runner.start_block().map_err(|e| {
				io::Error::other(format!("start_block failed at line {}: {e}", block.line_number))
			})?,
			eol,
		);

		for command in &block.commands {
			let mut command_output = ensure_eol(
				runner.start_command(command).map_err(|e| {
					io::Error::other(format!("start_command failed at line {}: {e}", command.line_number))
				})?,
				eol,
			);

			// The runner is assumed to be unwind-safe.
			let run = panic::AssertUnwindSafe(|| runner.run(command));
			command_output.push_str(&match panic::catch_unwind(run) {
				Ok(Ok(output)) if command.fail => {
					return Err(io::Error::other(format!(
						"expected command '{}' to fail at line {}, succeeded with: {output}",
						command.name, command.line_number
					)));
				}

				Ok(Ok(output)) => output,

				Ok(Err(e)) if command.fail => format!("{e}"),

				Ok(Err(e)) => {
					return Err(io::Error::other(format!(
						"command '{}' failed at line {}: {e}",
						command.name, command.line_number
					)));
				}

				Err(payload) if command.fail => {
					let message = payload
						.downcast_ref::<&str>()
						.map(|s| s.to_string())
						.or_else(|| payload.downcast_ref::<String>().cloned())
						.unwrap_or_else(|| panic::resume_unwind(payload));
					format!("Panic: {message}")
				}

				Err(payload) => panic::resume_unwind(payload),
			});

			command_output = ensure_eol(command_output, eol);

			command_output.push_str(&ensure_eol(
				runner.end_command(command).map_err(|e| {
					io::Error::other(format!("end_command failed at line {}: {e}", command.line_number))
				})?,
				eol,
			));

			if command.silent {
				command_output.clear();
			}

			if let Some(prefix) = &command.prefix {
				if !command_output.is_empty() {
					command_output = format!(
						"{prefix}: {}{eol}",
						command_output
							.strip_suffix(eol)
							.unwrap_or(command_output.as_str())
							.replace('\n', &format!("\n{prefix}: "))
					);
				}
			}

			block_output.push_str(&command_output);
		}

		block_output.push_str(&ensure_eol(
			runner.end_block().map_err(|e| {
				io::Error::other(format!("end_block failed at line {}: {e}", block.line_number))
			})?,
			eol,
		));

		if block_output.is_empty() {
			block_output.push_str("ok");
			block_output.push_str(eol);
		}

		// Blank lines would end the block early when the script is parsed
		// again, so such output is quoted line by line with `> `.
		if block_output.starts_with('\n')
			|| block_output.starts_with("\r\n")
			|| block_output.contains("\n\n")
			|| block_output.contains("\n\r\n")
		{
			block_output = format!("> {}", block_output.replace('\n', "\n> "));
			// The output ends with a newline, so drop the dangling "> ".
			block_output.truncate(block_output.len() - 2);
		}

		output.push_str(&format!("{}---{eol}{}", block.literal, block_output));
		if i < blocks.len() - 1 {
			output.push_str(eol);
		}
	}

	runner.end_script().map_err(|e| io::Error::other(format!("end_script failed: {e}")))?;

	Ok(output)
}

/// Appends a newline if the string is not empty and doesn't already end in
/// one.
fn ensure_eol(mut s: String, eol: &str) -> String {
	if s.chars().next_back().is_some_and(|c| c != '\n') {
		s.push_str(eol);
	}
	s
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Counts how often each hook is called.
	#[derive(Default)]
	struct HookRunner {
		start_script_count: usize,
		end_script_count: usize,
		start_block_count: usize,
		end_block_count: usize,
		start_command_count: usize,
		end_command_count: usize,
	}

	impl Runner for HookRunner {
		fn run(&mut self, _: &Command) -> Result<String, Box<dyn Error>> {
			Ok(String::new())
		}

		fn start_script(&mut self) -> Result<(), Box<dyn Error>> {
			self.start_script_count += 1;
			Ok(())
		}

		fn end_script(&mut self) -> Result<(), Box<dyn Error>> {
			self.end_script_count += 1;
			Ok(())
		}

		fn start_block(&mut self) -> Result<String, Box<dyn Error>> {
			self.start_block_count += 1;
			Ok(String::new())
		}

		fn end_block(&mut self) -> Result<String, Box<dyn Error>> {
			self.end_block_count += 1;
			Ok(String::new())
		}

		fn start_command(&mut self, _: &Command) -> Result<String, Box<dyn Error>> {
			self.start_command_count += 1;
			Ok(String::new())
		}

		fn end_command(&mut self, _: &Command) -> Result<String, Box<dyn Error>> {
			self.end_command_count += 1;
			Ok(String::new())
		}
	}

	/// Echoes the command name, or fails with it when it starts with `err`.
	struct EchoRunner;

	impl Runner for EchoRunner {
		fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
			if command.name.starts_with("err") {
				return Err(command.name.clone().into());
			}
			Ok(command.name.clone())
		}
	}

	#[test]
	fn hooks() {
		let mut runner = HookRunner::default();
		generate(
			&mut runner,
			r#"
command
---

command
command
---
"#,
		)
		.unwrap();

		assert_eq!(runner.start_script_count, 1);
		assert_eq!(runner.end_script_count, 1);
		assert_eq!(runner.start_block_count, 2);
		assert_eq!(runner.end_block_count, 2);
		assert_eq!(runner.start_command_count, 3);
		assert_eq!(runner.end_command_count, 3);
	}

	#[test]
	fn test_output_replaces_stale_expectation() {
		let output = generate(&mut EchoRunner, "> hello world\n---\nstale\n").unwrap();
		assert_eq!(output, "> hello world\n---\nhello world\n");
	}

	#[test]
	fn test_empty_output_is_ok() {
		let output = generate(&mut HookRunner::default(), "command\n---\n").unwrap();
		assert_eq!(output, "command\n---\nok\n");
	}

	#[test]
	fn test_expected_failure_records_error() {
		let output = generate(&mut EchoRunner, "!> error one\n---\n").unwrap();
		assert_eq!(output, "!> error one\n---\nerror one\n");
	}

	#[test]
	fn test_unexpected_failure() {
		let err = generate(&mut EchoRunner, "\n> error one\n---\n").unwrap_err();
		assert_eq!(err.to_string(), "command 'error one' failed at line 2: error one");
	}

	#[test]
	fn test_unexpected_success() {
		let err = generate(&mut EchoRunner, "!> fine\n---\n").unwrap_err();
		assert_eq!(err.to_string(), "expected command 'fine' to fail at line 1, succeeded with: fine");
	}

	#[test]
	fn test_prefix_and_silence() {
		let output = generate(&mut EchoRunner, "out: > a\\\nb\n(> hidden)\n---\n").unwrap();
		assert_eq!(output, "out: > a\\\nb\n(> hidden)\n---\nout: ab\n");
	}

	#[test]
	fn test_parse_error_is_invalid_input() {
		let err = generate(&mut EchoRunner, "command\n").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
	}
}
