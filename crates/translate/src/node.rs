// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Classification of the raw JSON document into a typed, validated shape.
//!
//! Every node is inspected exactly once here. Later stages match on the
//! resulting enums and never look at JSON again.

use serde_json::{Map, Value as JsonValue};

use crate::{Result, error::TranslateError};

pub(crate) const STAGE_COUNT: usize = 4;

const MARKERS: [&str; 3] = ["op", "input", "agg"];

/// The four stages of a plan, in the fixed order they appear in `rels`.
#[derive(Debug, Clone, PartialEq)]
pub struct RelPlan {
	pub scan: ScanStage,
	pub filter: ExprNode,
	pub project: Vec<ExprNode>,
	pub aggregate: AggregateStage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanStage {
	pub rel_op: String,
	pub table: QualifiedName,
}

/// `[catalog, schema, table]`; only `table` is used for resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifiedName {
	pub catalog: String,
	pub schema: String,
	pub table: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateStage {
	pub aggs: Vec<ExprNode>,
	/// Positions into the combined projection and aggregate targets.
	pub group: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
	Binary {
		op: String,
		left: Box<ExprNode>,
		right: Box<ExprNode>,
	},
	Column {
		ordinal: i64,
	},
	Aggregate {
		agg: String,
		ty: TypeDescriptor,
	},
	Literal(i64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
	pub name: String,
	pub nullable: bool,
}

impl RelPlan {
	/// Parses and classifies `json`. The scan stage must carry
	/// `scan_operator` as its `relOp`.
	pub fn parse(json: &str, scan_operator: &str) -> Result<Self> {
		let document: JsonValue = serde_json::from_str(json).map_err(|err| TranslateError::MalformedJson {
			message: err.to_string(),
		})?;
		Self::classify(&document, scan_operator)
	}

	pub fn classify(document: &JsonValue, scan_operator: &str) -> Result<Self> {
		let rels = document
			.get("rels")
			.and_then(JsonValue::as_array)
			.ok_or_else(|| TranslateError::shape("expected an object with a 'rels' array"))?;

		if rels.len() != STAGE_COUNT {
			return Err(TranslateError::shape(format!(
				"expected {} relational stages, found {}",
				STAGE_COUNT,
				rels.len()
			)));
		}

		// The scan stage is checked before anything else is looked at.
		let scan = classify_scan(stage(&rels[0], "scan")?, scan_operator)?;
		let filter = stage(&rels[1], "filter")?;
		let project = stage(&rels[2], "project")?;
		let aggregate = stage(&rels[3], "aggregate")?;

		Ok(Self {
			scan,
			filter: ExprNode::classify(field(filter, "filter", "condition")?)?,
			project: classify_list(array(project, "project", "exprs")?)?,
			aggregate: classify_aggregate(aggregate)?,
		})
	}
}

impl ExprNode {
	pub fn classify(node: &JsonValue) -> Result<Self> {
		let object = match node {
			JsonValue::Number(number) => {
				return number
					.as_i64()
					.map(ExprNode::Literal)
					.ok_or_else(|| TranslateError::shape(format!("literal {} is not an integer", number)));
			}
			JsonValue::Object(object) => object,
			other => return Err(TranslateError::shape(format!("unexpected expression node {}", other))),
		};

		let markers: Vec<&str> = MARKERS.into_iter().filter(|marker| object.contains_key(*marker)).collect();
		match markers.as_slice() {
			["op"] => classify_binary(object),
			["input"] => classify_column(object),
			["agg"] => classify_aggregate_call(object),
			[] => Err(TranslateError::shape("expression node has none of 'op', 'input' or 'agg'")),
			_ => Err(TranslateError::AmbiguousExpression {
				markers: markers.into_iter().map(str::to_string).collect(),
			}),
		}
	}
}

fn stage<'a>(node: &'a JsonValue, name: &str) -> Result<&'a Map<String, JsonValue>> {
	node.as_object().ok_or_else(|| TranslateError::shape(format!("{} stage must be an object", name)))
}

fn field<'a>(stage: &'a Map<String, JsonValue>, name: &str, key: &str) -> Result<&'a JsonValue> {
	stage.get(key).ok_or_else(|| TranslateError::shape(format!("{} stage is missing '{}'", name, key)))
}

fn array<'a>(stage: &'a Map<String, JsonValue>, name: &str, key: &str) -> Result<&'a Vec<JsonValue>> {
	field(stage, name, key)?
		.as_array()
		.ok_or_else(|| TranslateError::shape(format!("'{}' of the {} stage must be an array", key, name)))
}

fn string<'a>(object: &'a Map<String, JsonValue>, key: &str) -> Result<&'a str> {
	object.get(key)
		.and_then(JsonValue::as_str)
		.ok_or_else(|| TranslateError::shape(format!("'{}' must be a string", key)))
}

fn classify_list(nodes: &[JsonValue]) -> Result<Vec<ExprNode>> {
	nodes.iter().map(ExprNode::classify).collect()
}

fn classify_scan(stage: &Map<String, JsonValue>, scan_operator: &str) -> Result<ScanStage> {
	let rel_op = field(stage, "scan", "relOp")?
		.as_str()
		.ok_or_else(|| TranslateError::shape("'relOp' must be a string"))?
		.to_string();
	if rel_op != scan_operator {
		return Err(TranslateError::shape(format!(
			"scan stage must be '{}', found '{}'",
			scan_operator, rel_op
		)));
	}

	let parts = array(stage, "scan", "table")?;
	let [catalog, schema, table] = parts.as_slice() else {
		return Err(TranslateError::shape("'table' must be an array of 3 strings"));
	};
	let (Some(catalog), Some(schema), Some(table)) = (catalog.as_str(), schema.as_str(), table.as_str()) else {
		return Err(TranslateError::shape("'table' must be an array of 3 strings"));
	};

	Ok(ScanStage {
		rel_op,
		table: QualifiedName {
			catalog: catalog.to_string(),
			schema: schema.to_string(),
			table: table.to_string(),
		},
	})
}

fn classify_aggregate(stage: &Map<String, JsonValue>) -> Result<AggregateStage> {
	let aggs = classify_list(array(stage, "aggregate", "aggs")?)?;
	let group = array(stage, "aggregate", "group")?
		.iter()
		.map(|position| {
			position.as_i64().ok_or_else(|| {
				TranslateError::shape(format!("group position {} is not an integer", position))
			})
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(AggregateStage {
		aggs,
		group,
	})
}

fn classify_binary(object: &Map<String, JsonValue>) -> Result<ExprNode> {
	let op = string(object, "op")?.to_string();
	let operands = object
		.get("operands")
		.and_then(JsonValue::as_array)
		.ok_or_else(|| TranslateError::shape(format!("operator '{}' is missing its 'operands' array", op)))?;

	let [left, right] = operands.as_slice() else {
		return Err(TranslateError::OperandCountMismatch {
			expected: 2,
			actual: operands.len(),
		});
	};

	Ok(ExprNode::Binary {
		op,
		left: Box::new(ExprNode::classify(left)?),
		right: Box::new(ExprNode::classify(right)?),
	})
}

fn classify_column(object: &Map<String, JsonValue>) -> Result<ExprNode> {
	let ordinal = object
		.get("input")
		.and_then(JsonValue::as_i64)
		.ok_or_else(|| TranslateError::shape("'input' must be an integer column ordinal"))?;

	Ok(ExprNode::Column {
		ordinal,
	})
}

fn classify_aggregate_call(object: &Map<String, JsonValue>) -> Result<ExprNode> {
	let agg = string(object, "agg")?.to_string();
	let descriptor = object
		.get("type")
		.and_then(JsonValue::as_object)
		.ok_or_else(|| TranslateError::shape(format!("aggregate '{}' is missing its 'type' descriptor", agg)))?;

	let name = string(descriptor, "type")?.to_string();
	let nullable = descriptor
		.get("nullable")
		.and_then(JsonValue::as_bool)
		.ok_or_else(|| TranslateError::shape("'nullable' must be a boolean"))?;

	Ok(ExprNode::Aggregate {
		agg,
		ty: TypeDescriptor {
			name,
			nullable,
		},
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	const SCAN: &str = "LogicalTableScan";

	fn plan(rels: JsonValue) -> JsonValue {
		json!({ "rels": rels })
	}

	fn valid_rels() -> JsonValue {
		json!([
			{"relOp": "LogicalTableScan", "table": ["db", "public", "orders"]},
			{"condition": {"op": ">", "operands": [{"input": 0}, 5]}},
			{"exprs": [{"input": 1}]},
			{"aggs": [{"agg": "COUNT", "type": {"type": "BIGINT", "nullable": false}}], "group": [0]}
		])
	}

	#[test]
	fn test_classify_plan() {
		let plan = RelPlan::classify(&plan(valid_rels()), SCAN).unwrap();

		assert_eq!(plan.scan.rel_op, "LogicalTableScan");
		assert_eq!(plan.scan.table.table, "orders");
		assert_eq!(plan.scan.table.schema, "public");
		assert_eq!(
			plan.filter,
			ExprNode::Binary {
				op: ">".to_string(),
				left: Box::new(ExprNode::Column {
					ordinal: 0
				}),
				right: Box::new(ExprNode::Literal(5)),
			}
		);
		assert_eq!(
			plan.project,
			vec![ExprNode::Column {
				ordinal: 1
			}]
		);
		assert_eq!(plan.aggregate.group, vec![0]);
		assert_eq!(
			plan.aggregate.aggs,
			vec![ExprNode::Aggregate {
				agg: "COUNT".to_string(),
				ty: TypeDescriptor {
					name: "BIGINT".to_string(),
					nullable: false,
				},
			}]
		);
	}

	#[test]
	fn test_stage_count() {
		let mut rels = valid_rels();
		rels.as_array_mut().unwrap().pop();

		let err = RelPlan::classify(&plan(rels), SCAN).unwrap_err();
		assert_eq!(err, TranslateError::shape("expected 4 relational stages, found 3"));
	}

	#[test]
	fn test_malformed_json() {
		assert!(matches!(RelPlan::parse("{\"rels\": [", SCAN), Err(TranslateError::MalformedJson { .. })));
	}

	#[test]
	fn test_missing_rels() {
		assert!(matches!(
			RelPlan::classify(&json!({"plan": []}), SCAN),
			Err(TranslateError::MalformedPlanShape { .. })
		));
	}

	#[test]
	fn test_stage_out_of_order() {
		let mut rels = valid_rels();
		rels.as_array_mut().unwrap().swap(1, 2);

		let err = RelPlan::classify(&plan(rels), SCAN).unwrap_err();
		assert_eq!(err, TranslateError::shape("filter stage is missing 'condition'"));
	}

	#[test]
	fn test_table_must_have_three_parts() {
		let mut rels = valid_rels();
		rels[0]["table"] = json!(["public", "orders"]);
		assert!(RelPlan::classify(&plan(rels.clone()), SCAN).is_err());

		rels[0]["table"] = json!(["db", "public", "orders", "extra"]);
		assert!(RelPlan::classify(&plan(rels.clone()), SCAN).is_err());

		rels[0]["table"] = json!(["db", 1, "orders"]);
		assert!(RelPlan::classify(&plan(rels), SCAN).is_err());
	}

	#[test]
	fn test_operand_count() {
		let node = json!({"op": ">", "operands": [{"input": 0}]});
		assert_eq!(
			ExprNode::classify(&node),
			Err(TranslateError::OperandCountMismatch {
				expected: 2,
				actual: 1
			})
		);

		let node = json!({"op": "=", "operands": [1, 2, 3]});
		assert_eq!(
			ExprNode::classify(&node),
			Err(TranslateError::OperandCountMismatch {
				expected: 2,
				actual: 3
			})
		);
	}

	#[test]
	fn test_multiple_markers_are_rejected() {
		let node = json!({"op": ">", "input": 1, "operands": [1, 2]});
		assert_eq!(
			ExprNode::classify(&node),
			Err(TranslateError::AmbiguousExpression {
				markers: vec!["op".to_string(), "input".to_string()],
			})
		);
	}

	#[test]
	fn test_literals() {
		assert_eq!(ExprNode::classify(&json!(-7)), Ok(ExprNode::Literal(-7)));
		assert!(ExprNode::classify(&json!(1.5)).is_err());
		assert!(ExprNode::classify(&json!("5")).is_err());
		assert!(ExprNode::classify(&json!({})).is_err());
	}

	#[test]
	fn test_group_positions_must_be_integers() {
		let mut rels = valid_rels();
		rels[3]["group"] = json!(["0"]);
		assert!(matches!(
			RelPlan::classify(&plan(rels), SCAN),
			Err(TranslateError::MalformedPlanShape { .. })
		));
	}
	#[test]
	fn test_scan_operator_is_checked_before_other_stages() {
		let mut rels = valid_rels();
		rels[0]["relOp"] = json!("LogicalProject");
		rels[1]["condition"] = json!({"op": ">", "agg": "COUNT", "operands": [1, 2]});
		rels[3] = json!("not a stage");

		assert_eq!(
			RelPlan::classify(&plan(rels), SCAN),
			Err(TranslateError::shape("scan stage must be 'LogicalTableScan', found 'LogicalProject'"))
		);
	}

	#[test]
	fn test_scan_operator_is_configurable() {
		let mut rels = valid_rels();
		rels[0]["relOp"] = json!("EnumerableTableScan");

		assert!(RelPlan::classify(&plan(rels.clone()), SCAN).is_err());
		let plan = RelPlan::classify(&plan(rels), "EnumerableTableScan").unwrap();
		assert_eq!(plan.scan.rel_op, "EnumerableTableScan");
	}
}
