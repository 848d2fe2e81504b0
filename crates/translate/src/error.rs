// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use relplan_plan::BinaryOperator;
use relplan_type::{Diagnostic, Error, IntoDiagnostic, Type};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
	Operator,
	Aggregate,
	Type,
}

impl Display for TokenKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TokenKind::Operator => f.write_str("operator"),
			TokenKind::Aggregate => f.write_str("aggregate function"),
			TokenKind::Type => f.write_str("type"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslateError {
	#[error("plan is not valid JSON: {message}")]
	MalformedJson {
		message: String,
	},

	#[error("malformed plan: {reason}")]
	MalformedPlanShape {
		reason: String,
	},

	#[error("expression node carries more than one of {}", .markers.join(", "))]
	AmbiguousExpression {
		markers: Vec<String>,
	},

	#[error("unsupported {kind} '{token}'")]
	UnsupportedToken {
		kind: TokenKind,
		token: String,
	},

	#[error("table '{name}' not found")]
	UnknownTable {
		name: String,
	},

	#[error("table '{table}' has no column at ordinal {ordinal}")]
	UnknownColumn {
		table: String,
		ordinal: i64,
	},

	#[error("operator expects {expected} operands, found {actual}")]
	OperandCountMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("group by position {index} is out of range for {bound} targets")]
	GroupByIndexOutOfRange {
		index: i64,
		bound: usize,
	},

	#[error("cannot compare {left} {operator} {right}")]
	IncompatibleOperands {
		operator: BinaryOperator,
		left: Type,
		right: Type,
	},
}

impl TranslateError {
	pub(crate) fn shape(reason: impl Into<String>) -> Self {
		TranslateError::MalformedPlanShape {
			reason: reason.into(),
		}
	}
}

impl IntoDiagnostic for TranslateError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TranslateError::MalformedJson {
				..
			} => Diagnostic {
				code: "PLAN_001".to_string(),
				message,
				label: None,
				help: Some("the plan must be a single JSON document with a top-level 'rels' array".to_string()),
				notes: vec![],
				cause: None,
			},
			TranslateError::MalformedPlanShape {
				..
			} => Diagnostic {
				code: "PLAN_002".to_string(),
				message,
				label: None,
				help: Some("a plan has exactly four stages: scan, filter, project, aggregate".to_string()),
				notes: vec![],
				cause: None,
			},
			TranslateError::AmbiguousExpression {
				..
			} => Diagnostic {
				code: "PLAN_003".to_string(),
				message,
				label: Some("cannot tell which kind of expression this is".to_string()),
				help: Some("an expression node carries exactly one of 'op', 'input' or 'agg'".to_string()),
				notes: vec![],
				cause: None,
			},
			TranslateError::UnsupportedToken {
				kind,
				..
			} => Diagnostic {
				code: "PLAN_004".to_string(),
				message,
				label: None,
				help: Some(format!("supported {}s: {}", kind, crate::token::supported(kind).join(", "))),
				notes: vec![],
				cause: None,
			},
			TranslateError::UnknownTable {
				..
			} => Diagnostic {
				code: "PLAN_005".to_string(),
				message,
				label: Some("unknown table".to_string()),
				help: Some("check that the table exists in the catalog".to_string()),
				notes: vec![],
				cause: None,
			},
			TranslateError::UnknownColumn {
				..
			} => Diagnostic {
				code: "PLAN_006".to_string(),
				message,
				label: Some("unknown column".to_string()),
				help: None,
				notes: vec!["column ordinals start at 0".to_string()],
				cause: None,
			},
			TranslateError::OperandCountMismatch {
				..
			} => Diagnostic {
				code: "PLAN_007".to_string(),
				message,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			TranslateError::GroupByIndexOutOfRange {
				bound,
				..
			} => Diagnostic {
				code: "PLAN_008".to_string(),
				message,
				label: None,
				help: Some(format!(
					"group by positions address the projection and aggregate targets, 0 to {}",
					bound.saturating_sub(1)
				)),
				notes: vec![],
				cause: None,
			},
			TranslateError::IncompatibleOperands {
				..
			} => Diagnostic {
				code: "PLAN_009".to_string(),
				message,
				label: Some("operand types have no common type".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<TranslateError> for Error {
	fn from(err: TranslateError) -> Self {
		Error::new(err.into_diagnostic())
	}
}
