// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	ops::Deref,
	sync::{Arc, atomic::AtomicU64},
};

use crossbeam_skiplist::SkipMap;
use tracing::instrument;

use crate::{CatalogQuery, ColumnDef, ColumnIndex, TableDef, TableId};

mod table;

/// An in-memory catalog holding table definitions.
/// Lookups are lock-free, so a single instance can be shared between
/// concurrent translations.
#[derive(Clone)]
pub struct MaterializedCatalog(Arc<MaterializedCatalogInner>);

pub struct MaterializedCatalogInner {
	/// Table definitions indexed by table ID
	pub(crate) tables: SkipMap<TableId, TableDef>,
	/// Index from table name to table ID for fast name lookups
	pub(crate) tables_by_name: SkipMap<String, TableId>,
	pub(crate) next_table_id: AtomicU64,
}

impl Deref for MaterializedCatalog {
	type Target = MaterializedCatalogInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for MaterializedCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl MaterializedCatalog {
	pub fn new() -> Self {
		Self(Arc::new(MaterializedCatalogInner {
			tables: SkipMap::new(),
			tables_by_name: SkipMap::new(),
			next_table_id: AtomicU64::new(1),
		}))
	}

	pub fn table_count(&self) -> usize {
		self.tables.len()
	}
}

impl CatalogQuery for MaterializedCatalog {
	#[instrument(name = "catalog::table::find_by_name", level = "trace", skip(self))]
	fn find_table_by_name(&self, name: &str) -> Option<TableDef> {
		MaterializedCatalog::find_table_by_name(self, name)
	}

	#[instrument(name = "catalog::column::find", level = "trace", skip(self))]
	fn find_column(&self, table: TableId, index: ColumnIndex) -> Option<ColumnDef> {
		MaterializedCatalog::find_column(self, table, index)
	}
}
