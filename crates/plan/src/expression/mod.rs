// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	sync::Arc,
};

use relplan_catalog::{ColumnIndex, TableId};
use relplan_type::{Type, TypeInfo, Value};

mod operator;

pub use operator::{AggregateKind, BinaryOperator};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Column(ColumnExpression),

	Constant(ConstantExpression),

	Cast(CastExpression),

	Binary(BinaryExpression),

	Aggregate(AggregateExpression),
}

/// A reference to a column of the scanned table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExpression {
	pub table: TableId,
	pub index: ColumnIndex,
	pub ty: TypeInfo,
	/// Scope nesting level; 0 is the outermost query.
	pub depth: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression {
	pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastExpression {
	pub expression: Arc<Expression>,
	pub to: TypeInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
	pub operator: BinaryOperator,
	pub left: Arc<Expression>,
	pub right: Arc<Expression>,
	/// Common type both operands have been coerced to.
	pub operand: Type,
	pub ty: TypeInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpression {
	pub kind: AggregateKind,
	pub argument: Option<Arc<Expression>>,
	pub distinct: bool,
	pub ty: TypeInfo,
}

impl Expression {
	pub fn ty(&self) -> TypeInfo {
		match self {
			Expression::Column(column) => column.ty,
			Expression::Constant(constant) => TypeInfo::not_null(constant.value.get_type()),
			Expression::Cast(cast) => cast.to,
			Expression::Binary(binary) => binary.ty,
			Expression::Aggregate(aggregate) => aggregate.ty,
		}
	}

	pub fn is_constant(&self) -> bool {
		matches!(self, Expression::Constant(_))
	}

	/// Copies the whole tree, allocating fresh nodes for every child, so
	/// the copy shares nothing with `self`.
	pub fn deep_copy(&self) -> Expression {
		match self {
			Expression::Column(column) => Expression::Column(column.clone()),
			Expression::Constant(constant) => Expression::Constant(constant.clone()),
			Expression::Cast(cast) => Expression::Cast(CastExpression {
				expression: Arc::new(cast.expression.deep_copy()),
				to: cast.to,
			}),
			Expression::Binary(binary) => Expression::Binary(BinaryExpression {
				operator: binary.operator,
				left: Arc::new(binary.left.deep_copy()),
				right: Arc::new(binary.right.deep_copy()),
				operand: binary.operand,
				ty: binary.ty,
			}),
			Expression::Aggregate(aggregate) => Expression::Aggregate(AggregateExpression {
				kind: aggregate.kind,
				argument: aggregate.argument.as_ref().map(|argument| Arc::new(argument.deep_copy())),
				distinct: aggregate.distinct,
				ty: aggregate.ty,
			}),
		}
	}
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Expression::Column(ColumnExpression {
				index,
				..
			}) => write!(f, "col({})", index),
			Expression::Constant(ConstantExpression {
				value,
			}) => write!(f, "{}", value),
			Expression::Cast(CastExpression {
				expression,
				to,
			}) => write!(f, "cast({} as {})", expression, to.ty),
			Expression::Binary(BinaryExpression {
				operator,
				left,
				right,
				..
			}) => write!(f, "({} {} {})", left, operator, right),
			Expression::Aggregate(aggregate) => write!(f, "{}", aggregate),
		}
	}
}

impl Display for AggregateExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match (&self.argument, self.distinct) {
			(None, _) => write!(f, "{}(*)", self.kind),
			(Some(argument), false) => write!(f, "{}({})", self.kind, argument),
			(Some(argument), true) => write!(f, "{}(DISTINCT {})", self.kind, argument),
		}
	}
}
