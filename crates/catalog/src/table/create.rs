// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashSet, sync::atomic::Ordering};

use relplan_type::TypeInfo;
use tracing::{debug, instrument};

use crate::{
	CatalogError, MaterializedCatalog,
	column::{ColumnDef, ColumnIndex},
	table::{TableDef, TableId},
};

#[derive(Debug, Clone)]
pub struct ColumnToCreate {
	pub name: String,
	pub ty: TypeInfo,
}

#[derive(Debug, Clone)]
pub struct TableToCreate {
	pub name: String,
	pub columns: Vec<ColumnToCreate>,
}

impl MaterializedCatalog {
	#[instrument(
		name = "catalog::table::create",
		level = "debug",
		skip(self, to_create),
		fields(table = %to_create.name)
	)]
	pub fn create_table(&self, to_create: TableToCreate) -> crate::Result<TableDef> {
		let columns = Self::columns_to_create(&to_create)?;

		let id = TableId(self.next_table_id.fetch_add(1, Ordering::Relaxed));
		let entry = self.tables_by_name.get_or_insert(to_create.name.clone(), id);
		if *entry.value() != id {
			return Err(CatalogError::DuplicateTable {
				name: to_create.name,
			});
		}

		let table = TableDef {
			id,
			name: to_create.name,
			columns,
		};
		self.set_table(id, table.clone());

		debug!(table_id = %id, columns = table.columns.len(), "table created");
		Ok(table)
	}

	fn columns_to_create(to_create: &TableToCreate) -> crate::Result<Vec<ColumnDef>> {
		let mut seen = HashSet::new();
		let mut result = Vec::with_capacity(to_create.columns.len());

		for (position, column) in to_create.columns.iter().enumerate() {
			if !seen.insert(column.name.as_str()) {
				return Err(CatalogError::DuplicateColumn {
					table: to_create.name.clone(),
					column: column.name.clone(),
				});
			}

			let index = u16::try_from(position).map_err(|_| CatalogError::TooManyColumns {
				table: to_create.name.clone(),
			})?;

			result.push(ColumnDef {
				index: ColumnIndex(index),
				name: column.name.clone(),
				ty: column.ty,
			});
		}

		Ok(result)
	}
}

#[cfg(test)]
mod tests {
	use relplan_type::{Type, TypeInfo};

	use super::*;

	fn column(name: &str, ty: Type) -> ColumnToCreate {
		ColumnToCreate {
			name: name.to_string(),
			ty: TypeInfo::not_null(ty),
		}
	}

	#[test]
	fn test_create_table() {
		let catalog = MaterializedCatalog::new();
		let result = catalog
			.create_table(TableToCreate {
				name: "orders".to_string(),
				columns: vec![column("id", Type::Int8), column("amount", Type::Int4)],
			})
			.unwrap();

		assert_eq!(result.id, TableId(1));
		assert_eq!(result.name, "orders");
		assert_eq!(result.columns.len(), 2);
		assert_eq!(result.columns[0].index, ColumnIndex(0));
		assert_eq!(result.columns[1].index, ColumnIndex(1));
		assert_eq!(result.columns[1].name, "amount");

		assert_eq!(catalog.find_table_by_name("orders"), Some(result));
	}

	#[test]
	fn test_ids_are_sequential() {
		let catalog = MaterializedCatalog::new();
		let first = catalog
			.create_table(TableToCreate {
				name: "a".to_string(),
				columns: vec![],
			})
			.unwrap();
		let second = catalog
			.create_table(TableToCreate {
				name: "b".to_string(),
				columns: vec![],
			})
			.unwrap();

		assert_eq!(first.id, TableId(1));
		assert_eq!(second.id, TableId(2));
		assert_eq!(catalog.table_count(), 2);
	}

	#[test]
	fn test_duplicate_table() {
		let catalog = MaterializedCatalog::new();
		let to_create = TableToCreate {
			name: "orders".to_string(),
			columns: vec![column("id", Type::Int8)],
		};
		catalog.create_table(to_create.clone()).unwrap();

		let err = catalog.create_table(to_create).unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateTable { name } if name == "orders"));
		assert_eq!(catalog.table_count(), 1);
	}

	#[test]
	fn test_duplicate_column() {
		let catalog = MaterializedCatalog::new();
		let err = catalog
			.create_table(TableToCreate {
				name: "orders".to_string(),
				columns: vec![column("id", Type::Int8), column("id", Type::Int4)],
			})
			.unwrap_err();

		assert!(matches!(err, CatalogError::DuplicateColumn { column, .. } if column == "id"));
		assert!(catalog.find_table_by_name("orders").is_none());
	}
}
