// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub const DEFAULT_SCAN_OPERATOR: &str = "LogicalTableScan";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
	/// `relOp` value the scan stage must carry.
	pub scan_operator: String,
	/// Log the rendered plan at debug level after every translation.
	pub explain: bool,
}

impl Default for TranslatorConfig {
	fn default() -> Self {
		Self {
			scan_operator: DEFAULT_SCAN_OPERATOR.to_string(),
			explain: false,
		}
	}
}

impl TranslatorConfig {
	pub fn with_scan_operator(mut self, scan_operator: impl Into<String>) -> Self {
		self.scan_operator = scan_operator.into();
		self
	}

	pub fn with_explain(mut self, explain: bool) -> Self {
		self.explain = explain;
		self
	}
}
