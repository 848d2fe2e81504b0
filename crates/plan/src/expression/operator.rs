// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
	Equal,
	NotEqual,
	LessThan,
	LessThanEqual,
	GreaterThan,
	GreaterThanEqual,
}

impl BinaryOperator {
	/// The operator that gives the same result with the operands swapped.
	pub fn mirror(&self) -> Self {
		match self {
			BinaryOperator::Equal => BinaryOperator::Equal,
			BinaryOperator::NotEqual => BinaryOperator::NotEqual,
			BinaryOperator::LessThan => BinaryOperator::GreaterThan,
			BinaryOperator::LessThanEqual => BinaryOperator::GreaterThanEqual,
			BinaryOperator::GreaterThan => BinaryOperator::LessThan,
			BinaryOperator::GreaterThanEqual => BinaryOperator::LessThanEqual,
		}
	}
}

impl Display for BinaryOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			BinaryOperator::Equal => f.write_str("="),
			BinaryOperator::NotEqual => f.write_str("<>"),
			BinaryOperator::LessThan => f.write_str("<"),
			BinaryOperator::LessThanEqual => f.write_str("<="),
			BinaryOperator::GreaterThan => f.write_str(">"),
			BinaryOperator::GreaterThanEqual => f.write_str(">="),
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AggregateKind {
	Count,
}

impl Display for AggregateKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AggregateKind::Count => f.write_str("COUNT"),
		}
	}
}
