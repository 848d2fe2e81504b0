// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Maps the textual tokens of a plan onto engine enumerations.
//!
//! The accepted set is closed. A token outside of it fails the whole
//! translation instead of falling back to a default.

use relplan_plan::{AggregateKind, BinaryOperator};
use relplan_type::Type;

use crate::{
	Result,
	error::{TokenKind, TranslateError},
};

const OPERATORS: &[(&str, BinaryOperator)] = &[
	("=", BinaryOperator::Equal),
	("<>", BinaryOperator::NotEqual),
	("<", BinaryOperator::LessThan),
	("<=", BinaryOperator::LessThanEqual),
	(">", BinaryOperator::GreaterThan),
	(">=", BinaryOperator::GreaterThanEqual),
];

const AGGREGATES: &[(&str, AggregateKind)] = &[("COUNT", AggregateKind::Count)];

const TYPES: &[(&str, Type)] = &[("SMALLINT", Type::Int2), ("INTEGER", Type::Int4), ("BIGINT", Type::Int8)];

pub fn operator(token: &str) -> Result<BinaryOperator> {
	lookup(OPERATORS, TokenKind::Operator, token)
}

pub fn aggregate(token: &str) -> Result<AggregateKind> {
	lookup(AGGREGATES, TokenKind::Aggregate, token)
}

pub fn ty(token: &str) -> Result<Type> {
	lookup(TYPES, TokenKind::Type, token)
}

/// Tokens accepted for `kind`, in declaration order.
pub fn supported(kind: TokenKind) -> Vec<&'static str> {
	match kind {
		TokenKind::Operator => OPERATORS.iter().map(|(token, _)| *token).collect(),
		TokenKind::Aggregate => AGGREGATES.iter().map(|(token, _)| *token).collect(),
		TokenKind::Type => TYPES.iter().map(|(token, _)| *token).collect(),
	}
}

fn lookup<T: Copy>(table: &[(&str, T)], kind: TokenKind, token: &str) -> Result<T> {
	table.iter().find(|(candidate, _)| *candidate == token).map(|(_, value)| *value).ok_or_else(|| {
		TranslateError::UnsupportedToken {
			kind,
			token: token.to_string(),
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_operators() {
		assert_eq!(operator(">").unwrap(), BinaryOperator::GreaterThan);
		assert_eq!(operator("<>").unwrap(), BinaryOperator::NotEqual);
		assert_eq!(operator("<=").unwrap(), BinaryOperator::LessThanEqual);
	}

	#[test]
	fn test_unknown_operator() {
		assert_eq!(
			operator("LIKE"),
			Err(TranslateError::UnsupportedToken {
				kind: TokenKind::Operator,
				token: "LIKE".to_string(),
			})
		);
	}

	#[test]
	fn test_aggregates() {
		assert_eq!(aggregate("COUNT").unwrap(), AggregateKind::Count);
		for token in ["SUM", "count", "AVG"] {
			assert!(matches!(
				aggregate(token),
				Err(TranslateError::UnsupportedToken {
					kind: TokenKind::Aggregate,
					..
				})
			));
		}
	}

	#[test]
	fn test_types() {
		assert_eq!(ty("SMALLINT").unwrap(), Type::Int2);
		assert_eq!(ty("INTEGER").unwrap(), Type::Int4);
		assert_eq!(ty("BIGINT").unwrap(), Type::Int8);
		assert!(ty("VARCHAR").is_err());
	}

	#[test]
	fn test_supported() {
		assert_eq!(supported(TokenKind::Type), vec!["SMALLINT", "INTEGER", "BIGINT"]);
	}
}
