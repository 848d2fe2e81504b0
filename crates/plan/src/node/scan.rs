// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use relplan_catalog::{ColumnIndex, TableId};

use crate::{Expression, TargetEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct ScanNode {
	pub table: TableId,
	pub targets: Vec<TargetEntry>,
	/// Predicates simple enough to be pushed into the storage layer.
	pub qualifiers: Vec<Arc<Expression>>,
	/// Predicates evaluated on every row after it has been read.
	pub predicates: Vec<Arc<Expression>>,
	/// Columns the scan has to fetch, in ascending order.
	pub columns: Vec<ColumnIndex>,
}

impl ScanNode {
	pub fn new(
		table: TableId,
		targets: Vec<TargetEntry>,
		qualifiers: Vec<Arc<Expression>>,
		predicates: Vec<Arc<Expression>>,
		columns: Vec<ColumnIndex>,
	) -> Self {
		Self {
			table,
			targets,
			qualifiers,
			predicates,
			columns,
		}
	}
}
