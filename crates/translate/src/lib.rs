// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Translation of JSON relational-algebra plans into engine plans.
//!
//! A plan document has exactly four stages, `Scan`, `Filter`, `Project`
//! and `Aggregate`, and always becomes the chain
//! `RootPlan -> AggregateNode -> ScanNode` over a single table.

pub use config::TranslatorConfig;
pub use error::{TokenKind, TranslateError};
use relplan_catalog::CatalogQuery;
use relplan_plan::{RootPlan, explain::explain_plan};
use tracing::{debug, instrument};

use crate::{
	assemble::assemble,
	expression::translate_expression,
	group::resolve_group_by,
	node::RelPlan,
	resolve::{SchemaResolver, resolve_table},
	target::build_targets,
};

pub mod assemble;
pub mod config;
pub mod error;
pub mod expression;
pub mod group;
pub mod node;
pub mod resolve;
pub mod target;
pub mod token;

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Translates `json` against `catalog` with the default configuration.
pub fn translate<C: CatalogQuery>(json: &str, catalog: &C) -> Result<RootPlan> {
	Translator::default().translate(json, catalog)
}

#[derive(Debug, Clone, Default)]
pub struct Translator {
	config: TranslatorConfig,
}

impl Translator {
	pub fn new(config: TranslatorConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &TranslatorConfig {
		&self.config
	}

	#[instrument(name = "translate::plan::translate", level = "debug", skip_all)]
	pub fn translate<C: CatalogQuery>(&self, json: &str, catalog: &C) -> Result<RootPlan> {
		let plan = RelPlan::parse(json, &self.config.scan_operator)?;
		self.translate_plan(&plan, catalog)
	}

	/// Translates an already classified plan.
	pub fn translate_plan<C: CatalogQuery>(&self, plan: &RelPlan, catalog: &C) -> Result<RootPlan> {
		let table = resolve_table(catalog, &plan.scan.table)?;
		let mut resolver = SchemaResolver::new(catalog, table.clone());

		let filter = translate_expression(&plan.filter, &mut resolver)?;
		let targets = build_targets(&plan.project, &plan.aggregate.aggs, &mut resolver)?;
		let group_by = resolve_group_by(&plan.aggregate.group, &targets.aggregate)?;
		let columns = resolver.into_used_columns();

		let root = assemble(&table, filter, targets, columns, group_by);
		if self.config.explain {
			debug!(plan = %explain_plan(&root), "translated plan");
		}
		Ok(root)
	}
}
