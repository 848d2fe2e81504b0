// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Display;

use crate::{AggregateNode, Plan, RootPlan, ScanNode};

/// Renders a plan as an indented tree, one node or attribute per line.
pub fn explain_plan(root: &RootPlan) -> String {
	let mut output = String::new();

	output.push_str(&format!("Root {} [table: {}]", root.kind, root.table));
	if let Some(limit) = root.limit {
		output.push_str(&format!(" limit: {}", limit));
	}
	if root.offset > 0 {
		output.push_str(&format!(" offset: {}", root.offset));
	}
	output.push('\n');

	if !root.result_columns.is_empty() {
		output.push_str(&format!("├── result columns: {}\n", list(&root.result_columns)));
	}

	render_plan_inner(&root.plan, "", true, &mut output);
	output
}

fn render_plan_inner(plan: &Plan, prefix: &str, is_last: bool, output: &mut String) {
	let branch = if is_last {
		"└──"
	} else {
		"├──"
	};
	let child_prefix = format!(
		"{}{}",
		prefix,
		if is_last {
			"    "
		} else {
			"│   "
		}
	);

	match plan {
		Plan::Aggregate(AggregateNode {
			targets,
			group_by,
			input,
		}) => {
			output.push_str(&format!("{}{} Aggregate\n", prefix, branch));
			output.push_str(&format!("{}├── targets: {}\n", child_prefix, list(targets)));
			output.push_str(&format!("{}├── group by: {}\n", child_prefix, list(group_by)));
			render_plan_inner(input, &child_prefix, true, output);
		}
		Plan::Scan(ScanNode {
			table,
			targets,
			qualifiers,
			predicates,
			columns,
		}) => {
			output.push_str(&format!("{}{} Scan [table: {}]\n", prefix, branch, table));
			output.push_str(&format!("{}├── targets: {}\n", child_prefix, list(targets)));
			if !qualifiers.is_empty() {
				output.push_str(&format!("{}├── qualifiers: {}\n", child_prefix, list(qualifiers)));
			}
			output.push_str(&format!("{}├── predicates: {}\n", child_prefix, list(predicates)));
			output.push_str(&format!("{}└── columns: {}\n", child_prefix, list(columns)));
		}
	}
}

fn list<T: Display>(items: &[T]) -> String {
	let items: Vec<String> = items.iter().map(|item| item.to_string()).collect();
	format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use relplan_catalog::{ColumnIndex, TableId};
	use relplan_type::{Type, TypeInfo, Value};

	use super::*;
	use crate::{
		AggregateExpression, AggregateKind, BinaryExpression, BinaryOperator, ColumnExpression,
		ConstantExpression, Expression, StatementKind, TargetEntry,
	};

	fn column(index: u16, ty: TypeInfo) -> Expression {
		Expression::Column(ColumnExpression {
			table: TableId(1),
			index: ColumnIndex(index),
			ty,
			depth: 0,
		})
	}

	fn plan() -> RootPlan {
		let customer = Arc::new(column(1, TypeInfo::nullable(Type::Int4)));
		let count = Arc::new(Expression::Aggregate(AggregateExpression {
			kind: AggregateKind::Count,
			argument: None,
			distinct: false,
			ty: TypeInfo::not_null(Type::Int8),
		}));
		let filter = Arc::new(Expression::Binary(BinaryExpression {
			operator: BinaryOperator::GreaterThan,
			left: Arc::new(column(0, TypeInfo::not_null(Type::Int8))),
			right: Arc::new(Expression::Constant(ConstantExpression {
				value: Value::Int8(5),
			})),
			operand: Type::Int8,
			ty: TypeInfo::not_null(Type::Boolean),
		}));

		let scan = ScanNode::new(
			TableId(1),
			vec![TargetEntry::new("", customer.clone(), false)],
			vec![],
			vec![filter],
			vec![ColumnIndex(0), ColumnIndex(1)],
		);
		let aggregate = AggregateNode::new(
			vec![TargetEntry::new("", customer.clone(), false), TargetEntry::new("", count, false)],
			vec![customer.deep_copy()],
			Plan::Scan(scan),
		);

		RootPlan::new(StatementKind::Select, Plan::Aggregate(aggregate), TableId(1), vec![])
	}

	#[test]
	fn test_explain_aggregate_over_scan() {
		let expected = "\
Root SELECT [table: 1]
└── Aggregate
    ├── targets: [col(1): Int4?, COUNT(*): Int8]
    ├── group by: [col(1)]
    └── Scan [table: 1]
        ├── targets: [col(1): Int4?]
        ├── predicates: [(col(0) > 5)]
        └── columns: [0, 1]
";
		assert_eq!(explain_plan(&plan()), expected);
	}

	#[test]
	fn test_explain_limit_and_offset() {
		let mut root = plan();
		root.limit = Some(10);
		root.offset = 3;

		let explained = explain_plan(&root);
		assert_eq!(explained.lines().next(), Some("Root SELECT [table: 1] limit: 10 offset: 3"));
	}

	#[test]
	fn test_accessors_walk_the_chain() {
		let root = plan();
		assert_eq!(root.nodes().count(), 2);
		assert_eq!(root.aggregate().map(|node| node.group_by.len()), Some(1));
		assert_eq!(root.scan().map(|node| node.columns.len()), Some(2));
	}
}
