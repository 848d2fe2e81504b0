// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use relplan_plan::{BinaryExpression, BinaryOperator, CastExpression, ConstantExpression, Expression};
use relplan_type::{Type, TypeInfo};

use crate::{Result, error::TranslateError};

/// Brings a comparison into canonical form.
///
/// Both operands are coerced to their common type: constants are
/// converted in place, anything else is wrapped in a cast. A constant on
/// the left of a non-constant is moved to the right and the operator is
/// mirrored, so `5 < col(0)` becomes `col(0) > 5`.
pub fn normalize(operator: BinaryOperator, left: Expression, right: Expression) -> Result<BinaryExpression> {
	let (left_ty, right_ty) = (left.ty(), right.ty());
	let incompatible = || TranslateError::IncompatibleOperands {
		operator,
		left: left_ty.ty,
		right: right_ty.ty,
	};

	let operand = Type::promote(left_ty.ty, right_ty.ty).ok_or_else(incompatible)?;
	let left = coerce(left, operand).ok_or_else(incompatible)?;
	let right = coerce(right, operand).ok_or_else(incompatible)?;

	let (operator, left, right) = if left.is_constant() && !right.is_constant() {
		(operator.mirror(), right, left)
	} else {
		(operator, left, right)
	};

	Ok(BinaryExpression {
		operator,
		left: Arc::new(left),
		right: Arc::new(right),
		operand,
		ty: TypeInfo::new(Type::Boolean, left_ty.nullable || right_ty.nullable),
	})
}

fn coerce(expression: Expression, target: Type) -> Option<Expression> {
	let ty = expression.ty();
	if ty.ty == target {
		return Some(expression);
	}

	match expression {
		Expression::Constant(constant) => Some(Expression::Constant(ConstantExpression {
			value: constant.value.cast(target)?,
		})),
		expression => Some(Expression::Cast(CastExpression {
			expression: Arc::new(expression),
			to: ty.with_type(target),
		})),
	}
}
