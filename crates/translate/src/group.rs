// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relplan_plan::{Expression, TargetEntry};
use tracing::{debug, instrument};

use crate::{Result, error::TranslateError};

/// Looks up each position in `targets` and takes an independent copy of
/// the expression found there. Output order follows `positions`.
#[instrument(name = "translate::group::resolve", level = "debug", skip(targets))]
pub fn resolve_group_by(positions: &[i64], targets: &[TargetEntry]) -> Result<Vec<Expression>> {
	let group_by = positions
		.iter()
		.map(|&index| {
			usize::try_from(index)
				.ok()
				.and_then(|position| targets.get(position))
				.map(|target| target.expression.deep_copy())
				.ok_or(TranslateError::GroupByIndexOutOfRange {
					index,
					bound: targets.len(),
				})
		})
		.collect::<Result<Vec<_>>>()?;

	debug!(keys = group_by.len(), "group by resolved");
	Ok(group_by)
}
