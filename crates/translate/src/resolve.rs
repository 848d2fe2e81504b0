// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::BTreeSet;

use relplan_catalog::{CatalogQuery, ColumnDef, ColumnIndex, TableDef};
use tracing::{debug, instrument, trace};

use crate::{Result, error::TranslateError, node::QualifiedName};

/// Resolves identifiers against the single table a plan scans, and
/// records every column the plan touches.
pub struct SchemaResolver<'a, C: CatalogQuery> {
	catalog: &'a C,
	table: TableDef,
	used: BTreeSet<ColumnIndex>,
}

#[instrument(name = "translate::resolve::table", level = "debug", skip(catalog), fields(table = %name.table))]
pub fn resolve_table<C: CatalogQuery>(catalog: &C, name: &QualifiedName) -> Result<TableDef> {
	let table = catalog.find_table_by_name(&name.table).ok_or_else(|| TranslateError::UnknownTable {
		name: name.table.clone(),
	})?;

	debug!(table_id = %table.id, columns = table.columns.len(), "table resolved");
	Ok(table)
}

impl<'a, C: CatalogQuery> SchemaResolver<'a, C> {
	pub fn new(catalog: &'a C, table: TableDef) -> Self {
		Self {
			catalog,
			table,
			used: BTreeSet::new(),
		}
	}

	pub fn table(&self) -> &TableDef {
		&self.table
	}

	#[instrument(name = "translate::resolve::column", level = "trace", skip(self))]
	pub fn resolve_column(&mut self, ordinal: i64) -> Result<ColumnDef> {
		let column = u16::try_from(ordinal)
			.ok()
			.and_then(|index| self.catalog.find_column(self.table.id, ColumnIndex(index)))
			.ok_or_else(|| TranslateError::UnknownColumn {
				table: self.table.name.clone(),
				ordinal,
			})?;

		if self.used.insert(column.index) {
			trace!(column = %column.name, index = %column.index, "column recorded as used");
		}
		Ok(column)
	}

	/// Hands over the used columns in ascending order.
	pub fn into_used_columns(self) -> Vec<ColumnIndex> {
		self.used.into_iter().collect()
	}
}

#[cfg(test)]
mod tests {
	use relplan_catalog::MaterializedCatalog;

	use super::*;
	use crate::tests::orders_catalog;

	fn orders(catalog: &MaterializedCatalog) -> TableDef {
		resolve_table(
			catalog,
			&QualifiedName {
				catalog: "db".to_string(),
				schema: "public".to_string(),
				table: "orders".to_string(),
			},
		)
		.unwrap()
	}

	#[test]
	fn test_resolve_table() {
		let catalog = orders_catalog();
		assert_eq!(orders(&catalog).name, "orders");
	}

	#[test]
	fn test_unknown_table() {
		let catalog = orders_catalog();
		let name = QualifiedName {
			catalog: "db".to_string(),
			schema: "public".to_string(),
			table: "customers".to_string(),
		};

		assert_eq!(
			resolve_table(&catalog, &name).err(),
			Some(TranslateError::UnknownTable {
				name: "customers".to_string()
			})
		);
	}

	#[test]
	fn test_repeated_column_is_recorded_once() {
		let catalog = orders_catalog();
		let mut resolver = SchemaResolver::new(&catalog, orders(&catalog));

		resolver.resolve_column(1).unwrap();
		resolver.resolve_column(1).unwrap();
		resolver.resolve_column(0).unwrap();

		assert_eq!(resolver.into_used_columns(), vec![ColumnIndex(0), ColumnIndex(1)]);
	}

	#[test]
	fn test_unknown_column() {
		let catalog = orders_catalog();
		let mut resolver = SchemaResolver::new(&catalog, orders(&catalog));

		for ordinal in [3, -1, 70_000] {
			assert_eq!(
				resolver.resolve_column(ordinal).err(),
				Some(TranslateError::UnknownColumn {
					table: "orders".to_string(),
					ordinal,
				})
			);
		}
		assert!(resolver.into_used_columns().is_empty());
	}
}
