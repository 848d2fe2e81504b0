// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::Arc,
};

use crate::Expression;

/// One output column of a plan node.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetEntry {
	pub name: String,
	pub expression: Arc<Expression>,
	pub distinct: bool,
}

impl TargetEntry {
	pub fn new(name: impl Into<String>, expression: Arc<Expression>, distinct: bool) -> Self {
		Self {
			name: name.into(),
			expression,
			distinct,
		}
	}
}

impl Display for TargetEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.distinct {
			f.write_str("DISTINCT ")?;
		}
		write!(f, "{}: {}", self.expression, self.expression.ty())?;
		if !self.name.is_empty() {
			write!(f, " as {}", self.name)?;
		}
		Ok(())
	}
}
