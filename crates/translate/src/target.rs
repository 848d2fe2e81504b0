// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use relplan_catalog::CatalogQuery;
use relplan_plan::TargetEntry;
use tracing::{debug, instrument};

use crate::{Result, expression::translate_expression, node::ExprNode, resolve::SchemaResolver};

#[derive(Debug, Clone, PartialEq)]
pub struct TargetLists {
	pub scan: Vec<TargetEntry>,
	/// Projection entries first, then the aggregates. Group by positions
	/// index into this list.
	pub aggregate: Vec<TargetEntry>,
}

/// Translates each projection once and places the same expression in
/// both lists; aggregates only go to the aggregate list.
#[instrument(name = "translate::target::build", level = "debug", skip_all)]
pub fn build_targets<C: CatalogQuery>(
	project: &[ExprNode],
	aggs: &[ExprNode],
	resolver: &mut SchemaResolver<'_, C>,
) -> Result<TargetLists> {
	let mut scan = Vec::with_capacity(project.len());
	let mut aggregate = Vec::with_capacity(project.len() + aggs.len());

	for node in project {
		let expression = Arc::new(translate_expression(node, resolver)?);
		scan.push(TargetEntry::new("", expression.clone(), false));
		aggregate.push(TargetEntry::new("", expression, false));
	}

	for node in aggs {
		let expression = Arc::new(translate_expression(node, resolver)?);
		aggregate.push(TargetEntry::new("", expression, false));
	}

	debug!(scan = scan.len(), aggregate = aggregate.len(), "target lists built");
	Ok(TargetLists {
		scan,
		aggregate,
	})
}
