// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{Expression, TargetEntry, node::Plan};

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateNode {
	pub targets: Vec<TargetEntry>,
	/// Grouping keys, in the order the engine groups by them. Each key is
	/// owned by this node and shares nothing with `targets`.
	pub group_by: Vec<Expression>,
	pub input: Box<Plan>,
}

impl AggregateNode {
	pub fn new(targets: Vec<TargetEntry>, group_by: Vec<Expression>, input: Plan) -> Self {
		Self {
			targets,
			group_by,
			input: Box::new(input),
		}
	}
}
