// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use relplan_catalog::{ColumnIndex, TableDef};
use relplan_plan::{AggregateNode, Expression, Plan, RootPlan, ScanNode, StatementKind};

use crate::target::TargetLists;

/// Wires the translated pieces into `Root -> Aggregate -> Scan`.
pub fn assemble(
	table: &TableDef,
	filter: Expression,
	targets: TargetLists,
	columns: Vec<ColumnIndex>,
	group_by: Vec<Expression>,
) -> RootPlan {
	let scan = ScanNode::new(table.id, targets.scan, vec![], vec![Arc::new(filter)], columns);
	let aggregate = AggregateNode::new(targets.aggregate, group_by, Plan::Scan(scan));
	RootPlan::new(StatementKind::Select, Plan::Aggregate(aggregate), table.id, vec![])
}
