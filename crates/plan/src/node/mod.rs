// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use relplan_catalog::{ColumnIndex, TableId};

mod aggregate;
mod scan;

pub use aggregate::AggregateNode;
pub use scan::ScanNode;

#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
	Scan(ScanNode),
	Aggregate(AggregateNode),
}

impl Plan {
	pub fn input(&self) -> Option<&Plan> {
		match self {
			Plan::Scan(_) => None,
			Plan::Aggregate(node) => Some(node.input.as_ref()),
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatementKind {
	Select,
}

impl Display for StatementKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			StatementKind::Select => f.write_str("SELECT"),
		}
	}
}

/// Top of a plan tree, as handed to the execution engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RootPlan {
	pub kind: StatementKind,
	pub plan: Plan,
	/// Table the statement reads from.
	pub table: TableId,
	/// Target columns for statements that write a result table; empty for
	/// SELECT.
	pub result_columns: Vec<ColumnIndex>,
	pub limit: Option<u64>,
	pub offset: u64,
}

impl RootPlan {
	pub fn new(kind: StatementKind, plan: Plan, table: TableId, result_columns: Vec<ColumnIndex>) -> Self {
		Self {
			kind,
			plan,
			table,
			result_columns,
			limit: None,
			offset: 0,
		}
	}

	pub fn aggregate(&self) -> Option<&AggregateNode> {
		self.nodes().find_map(|plan| match plan {
			Plan::Aggregate(node) => Some(node),
			_ => None,
		})
	}

	pub fn scan(&self) -> Option<&ScanNode> {
		self.nodes().find_map(|plan| match plan {
			Plan::Scan(node) => Some(node),
			_ => None,
		})
	}

	/// Walks the plan chain from the top node down to the leaf.
	pub fn nodes(&self) -> impl Iterator<Item = &Plan> {
		std::iter::successors(Some(&self.plan), |plan| plan.input())
	}
}
