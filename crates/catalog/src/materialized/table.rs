// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{MaterializedCatalog, TableDef, TableId};

impl MaterializedCatalog {
	/// Find a table by ID
	pub fn find_table(&self, table: TableId) -> Option<TableDef> {
		self.tables.get(&table).map(|entry| entry.value().clone())
	}

	/// Find a table by name
	pub fn find_table_by_name(&self, name: &str) -> Option<TableDef> {
		self.tables_by_name.get(name).and_then(|entry| {
			let table_id = *entry.value();
			self.find_table(table_id)
		})
	}

	pub(crate) fn set_table(&self, id: TableId, table: TableDef) {
		self.tables.insert(id, table);
	}
}

#[cfg(test)]
mod tests {
	use relplan_type::{Type, TypeInfo};

	use super::*;
	use crate::{ColumnDef, ColumnIndex};

	fn create_test_table(id: TableId, name: &str) -> TableDef {
		TableDef {
			id,
			name: name.to_string(),
			columns: vec![ColumnDef {
				index: ColumnIndex(0),
				name: "id".to_string(),
				ty: TypeInfo::not_null(Type::Int8),
			}],
		}
	}

	#[test]
	fn test_find_table_by_id() {
		let catalog = MaterializedCatalog::new();
		catalog.set_table(TableId(7), create_test_table(TableId(7), "orders"));

		let found = catalog.find_table(TableId(7)).unwrap();
		assert_eq!(found.name, "orders");
		assert!(catalog.find_table(TableId(8)).is_none());
	}

	#[test]
	fn test_name_without_table_is_not_found() {
		let catalog = MaterializedCatalog::new();
		catalog.tables_by_name.insert("ghost".to_string(), TableId(3));

		assert!(catalog.find_table_by_name("ghost").is_none());
	}
}
