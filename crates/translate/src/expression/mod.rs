// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relplan_catalog::CatalogQuery;
use relplan_plan::{AggregateExpression, ColumnExpression, ConstantExpression, Expression};
use relplan_type::{TypeInfo, Value};

use crate::{Result, node::ExprNode, resolve::SchemaResolver, token};

mod normalize;

pub use normalize::normalize;

/// Builds a typed expression from a classified node. Every column the
/// expression references is recorded in `resolver`.
pub fn translate_expression<C: CatalogQuery>(
	node: &ExprNode,
	resolver: &mut SchemaResolver<'_, C>,
) -> Result<Expression> {
	match node {
		ExprNode::Binary {
			op,
			left,
			right,
		} => {
			let left = translate_expression(left, resolver)?;
			let right = translate_expression(right, resolver)?;
			let operator = token::operator(op)?;
			Ok(Expression::Binary(normalize(operator, left, right)?))
		}
		ExprNode::Column {
			ordinal,
		} => {
			let column = resolver.resolve_column(*ordinal)?;
			Ok(Expression::Column(ColumnExpression {
				table: resolver.table().id,
				index: column.index,
				ty: column.ty,
				depth: 0,
			}))
		}
		// The argument is never taken from the plan, so every aggregate
		// reads as `KIND(*)`.
		ExprNode::Aggregate {
			agg,
			ty,
		} => Ok(Expression::Aggregate(AggregateExpression {
			kind: token::aggregate(agg)?,
			argument: None,
			distinct: false,
			ty: TypeInfo::new(token::ty(&ty.name)?, ty.nullable),
		})),
		ExprNode::Literal(value) => Ok(Expression::Constant(ConstantExpression {
			value: Value::integer(*value),
		})),
	}
}
