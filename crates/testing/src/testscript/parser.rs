// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

// This file includes and modifies code from the toydb project (https://github.com/erikgrinaker/toydb),
// originally licensed under the Apache License, Version 2.0.
// Original copyright:
//   Copyright (c) 2024 Erik Grinaker

use std::fmt;

use crate::testscript::command::{Argument, Block, Command};

/// A script syntax error, positioned at the offending character.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParseError {
	pub message: String,
	pub line: u32,
	pub column: usize,
	/// The full text of the offending line.
	pub code: String,
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"parse error at line {} column {}: {}\n{}\n{}^",
			self.line,
			self.column,
			self.message,
			self.code,
			" ".repeat(self.column.saturating_sub(1))
		)
	}
}

impl std::error::Error for ParseError {}

pub(crate) fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
	Parser::new(input).parse_blocks()
}

#[derive(Clone, Copy)]
struct Mark {
	pos: usize,
	line: u32,
	column: usize,
	line_start_pos: usize,
}

struct Parser<'a> {
	input: &'a str,
	pos: usize,
	line: u32,
	column: usize,
	line_start_pos: usize,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Parser {
			input,
			pos: 0,
			line: 1,
			column: 1,
			line_start_pos: 0,
		}
	}

	fn mark(&self) -> Mark {
		Mark {
			pos: self.pos,
			line: self.line,
			column: self.column,
			line_start_pos: self.line_start_pos,
		}
	}

	fn reset(&mut self, mark: Mark) {
		self.pos = mark.pos;
		self.line = mark.line;
		self.column = mark.column;
		self.line_start_pos = mark.line_start_pos;
	}

	fn peek_char(&self) -> Option<char> {
		self.input[self.pos..].chars().next()
	}

	/// Returns up to `n` bytes from the current position, never splitting a
	/// character. Only used to look for ASCII markers such as `---`.
	fn peek_str(&self, n: usize) -> &str {
		let mut end = (self.pos + n).min(self.input.len());
		while end > self.pos && !self.input.is_char_boundary(end) {
			end -= 1;
		}
		&self.input[self.pos..end]
	}

	fn advance(&mut self) -> Option<char> {
		let ch = self.peek_char()?;
		self.pos += ch.len_utf8();
		if ch == '\n' {
			self.line += 1;
			self.column = 1;
			self.line_start_pos = self.pos;
		} else {
			self.column += 1;
		}
		Some(ch)
	}

	fn skip_whitespace(&mut self) {
		while let Some(ch) = self.peek_char() {
			if !ch.is_whitespace() || ch == '\n' {
				break;
			}
			self.advance();
		}
	}

	fn skip_line(&mut self) {
		while let Some(ch) = self.advance() {
			if ch == '\n' {
				break;
			}
		}
	}

	fn is_at_end(&self) -> bool {
		self.pos >= self.input.len()
	}

	fn at_comment(&self) -> bool {
		self.peek_char() == Some('#') || self.peek_str(2) == "//"
	}

	fn error(&self, message: impl Into<String>) -> ParseError {
		let line_end = self.input[self.line_start_pos..]
			.find('\n')
			.map(|i| self.line_start_pos + i)
			.unwrap_or(self.input.len());

		ParseError {
			message: message.into(),
			line: self.line,
			column: self.column,
			code: self.input[self.line_start_pos..line_end].trim_end_matches('\r').to_string(),
		}
	}

	fn parse_blocks(&mut self) -> Result<Vec<Block>, ParseError> {
		let mut blocks = Vec::new();
		while !self.is_at_end() {
			if let Some(block) = self.parse_block()? {
				blocks.push(block);
			}
		}
		Ok(blocks)
	}

	fn parse_block(&mut self) -> Result<Option<Block>, ParseError> {
		let line_number = self.line;
		let literal_start = self.pos;

		let commands = self.parse_commands()?;
		let literal = self.input[literal_start..self.pos].to_string();

		// Trailing comments or blank lines at the end of the script.
		if commands.is_empty() {
			return Ok(self.is_at_end().then_some(Block {
				commands,
				literal,
				line_number,
			}));
		}

		if !self.parse_separator()? {
			return Err(self.error("expected --- separator"));
		}
		self.skip_output();

		Ok(Some(Block {
			commands,
			literal,
			line_number,
		}))
	}

	fn parse_commands(&mut self) -> Result<Vec<Command>, ParseError> {
		let mut commands = Vec::new();
		loop {
			if self.skip_empty_or_comment_line() {
				continue;
			}
			if self.is_at_end() {
				break;
			}
			if !commands.is_empty() && self.peek_str(3) == "---" {
				break;
			}
			if matches!(self.peek_char(), Some(ch) if ch.is_whitespace() && ch != '\n') {
				return Err(self.error("command cannot start with whitespace"));
			}
			commands.push(self.parse_command()?);
		}
		Ok(commands)
	}

	fn parse_command(&mut self) -> Result<Command, ParseError> {
		let line_number = self.line;

		let silent = self.peek_char() == Some('(');
		if silent {
			self.advance();
			self.skip_whitespace();
		}

		// An optional `prefix:`.
		let mut prefix = None;
		let mark = self.mark();
		if let Ok(s) = self.parse_string() {
			self.skip_whitespace();
			if self.peek_char() == Some(':') {
				self.advance();
				self.skip_whitespace();
				prefix = Some(s);
			}
		}
		if prefix.is_none() {
			self.reset(mark);
		}

		let fail = self.peek_char() == Some('!');
		if fail {
			self.advance();
			self.skip_whitespace();
		}

		if self.peek_char() == Some('>') {
			self.advance();
			self.skip_whitespace();
			let mut name = self.parse_line_continuation();
			if silent {
				match name.trim_end().strip_suffix(')') {
					Some(stripped) => name = stripped.trim_end().to_string(),
					None => return Err(self.error("expected closing ) for silent command")),
				}
			}
			return Ok(Command {
				name,
				args: Vec::new(),
				prefix,
				silent,
				fail,
				line_number,
			});
		}

		let name = self.parse_string().map_err(|_| self.error("expected command name"))?;

		let mut args = Vec::new();
		loop {
			self.skip_whitespace();
			if (silent && self.peek_char() == Some(')'))
				|| self.at_comment()
				|| self.peek_char() == Some('\n')
				|| self.is_at_end()
			{
				break;
			}
			let mark = self.mark();
			match self.parse_argument() {
				Ok(arg) => args.push(arg),
				Err(_) => {
					self.reset(mark);
					break;
				}
			}
		}

		if silent {
			self.skip_whitespace();
			if self.peek_char() != Some(')') {
				return Err(self.error("expected closing ) for silent command"));
			}
			self.advance();
		}

		self.skip_whitespace();
		if self.at_comment() {
			self.skip_line();
		} else if self.peek_char() == Some('\r') || self.peek_char() == Some('\n') {
			self.skip_line();
		} else if !self.is_at_end() {
			return Err(self.error("expected end of line"));
		}

		Ok(Command {
			name,
			args,
			prefix,
			silent,
			fail,
			line_number,
		})
	}

	fn parse_argument(&mut self) -> Result<Argument, ParseError> {
		let key = self.parse_string()?;
		if self.peek_char() != Some('=') {
			return Ok(Argument {
				key: None,
				value: key,
			});
		}
		self.advance();

		let value = match self.peek_char() {
			None | Some(')') => String::new(),
			Some(ch) if ch.is_whitespace() => String::new(),
			_ if self.at_comment() => String::new(),
			_ => self.parse_string().map_err(|_| self.error("expected argument value after ="))?,
		};
		Ok(Argument {
			key: Some(key),
			value,
		})
	}

	fn parse_string(&mut self) -> Result<String, ParseError> {
		match self.peek_char() {
			Some(quote @ ('\'' | '"')) => self.parse_quoted_string(quote),
			_ => self.parse_unquoted_string(),
		}
	}

	fn parse_unquoted_string(&mut self) -> Result<String, ParseError> {
		let mut result = String::new();
		match self.peek_char() {
			Some(ch) if ch.is_alphanumeric() || ch == '_' => {
				result.push(ch);
				self.advance();
			}
			_ => return Err(self.error("expected string")),
		}
		while let Some(ch) = self.peek_char() {
			if !(ch.is_alphanumeric() || "_-./@".contains(ch)) {
				break;
			}
			result.push(ch);
			self.advance();
		}
		Ok(result)
	}

	fn parse_quoted_string(&mut self, quote: char) -> Result<String, ParseError> {
		let mut result = String::new();
		self.advance();

		while let Some(ch) = self.advance() {
			match ch {
				ch if ch == quote => return Ok(result),
				'\n' => break,
				'\\' => {
					let escaped = match self.advance() {
						Some('\'') => '\'',
						Some('"') => '"',
						Some('\\') => '\\',
						Some('0') => '\0',
						Some('n') => '\n',
						Some('r') => '\r',
						Some('t') => '\t',
						_ => return Err(self.error("invalid escape sequence")),
					};
					result.push(escaped);
				}
				ch => result.push(ch),
			}
		}

		Err(self.error(format!("unterminated string (missing {})", quote)))
	}

	fn skip_empty_or_comment_line(&mut self) -> bool {
		let mark = self.mark();
		self.skip_whitespace();

		if self.at_comment() || self.peek_char() == Some('\r') || self.peek_char() == Some('\n') {
			self.skip_line();
			return true;
		}

		self.reset(mark);
		false
	}

	fn parse_separator(&mut self) -> Result<bool, ParseError> {
		if self.peek_str(3) != "---" {
			return Ok(false);
		}
		for _ in 0..3 {
			self.advance();
		}

		match self.peek_char() {
			Some('\r') | Some('\n') => {
				self.skip_line();
				Ok(true)
			}
			None => Ok(true),
			_ => Err(self.error("separator must be followed by newline or EOF")),
		}
	}

	/// Skips the expected output, which ends at a blank line or EOF. The
	/// output is regenerated by the runner and never inspected here.
	fn skip_output(&mut self) {
		// No output: the separator is directly followed by a blank line.
		if matches!(self.peek_char(), Some('\r') | Some('\n')) {
			self.skip_line();
			return;
		}

		let mut last_was_newline = false;
		while let Some(ch) = self.advance() {
			if ch == '\n' {
				if last_was_newline {
					break;
				}
				last_was_newline = true;
			} else if ch != '\r' {
				last_was_newline = false;
			}
		}
	}

	/// Reads the rest of the line, joining lines that end with `\`.
	fn parse_line_continuation(&mut self) -> String {
		let mut result = String::new();
		loop {
			while let Some(ch) = self.peek_char() {
				if ch == '\n' {
					break;
				}
				result.push(ch);
				self.advance();
			}
			if result.ends_with('\r') {
				result.pop();
			}
			let continues = result.ends_with('\\');
			if continues {
				result.pop();
			}
			self.advance();
			if !continues || self.is_at_end() {
				break;
			}
		}
		result
	}
}
