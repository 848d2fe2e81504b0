// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render_into(diagnostic, 0, &mut output);
		output
	}

	fn render_into(d: &Diagnostic, depth: usize, output: &mut String) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{}  = {}", indent, label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "\n{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "\n{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "\n{}caused by:", indent);
			Self::render_into(cause, depth + 1, output);
		}
	}
}
