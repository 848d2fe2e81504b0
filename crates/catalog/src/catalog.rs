// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{ColumnDef, ColumnIndex, TableDef, TableId};

/// Read-only access to table and column metadata.
///
/// Implementations must be safe to read from several translations at
/// once; the translator never mutates the catalog.
pub trait CatalogQuery {
	fn find_table_by_name(&self, name: &str) -> Option<TableDef>;

	fn find_column(&self, table: TableId, index: ColumnIndex) -> Option<ColumnDef>;
}

impl<C: CatalogQuery + ?Sized> CatalogQuery for &C {
	fn find_table_by_name(&self, name: &str) -> Option<TableDef> {
		(**self).find_table_by_name(name)
	}

	fn find_column(&self, table: TableId, index: ColumnIndex) -> Option<ColumnDef> {
		(**self).find_column(table, index)
	}
}
