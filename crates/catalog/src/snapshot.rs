// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! JSON description of a catalog, used to seed a [`MaterializedCatalog`]
//! outside of tests.
//!
//! ```json
//! {"tables": [{"name": "orders", "columns": [
//!     {"name": "id", "type": "int8", "nullable": false},
//!     {"name": "customer", "type": "int4", "nullable": true}
//! ]}]}
//! ```
//!
//! Tables receive ids in the order they appear, starting at 1. Column
//! ordinals follow the order of the `columns` array.

use relplan_type::{Type, TypeInfo};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{CatalogError, ColumnToCreate, MaterializedCatalog, TableToCreate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
	pub tables: Vec<TableSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
	pub name: String,
	#[serde(default)]
	pub columns: Vec<ColumnSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: String,
	#[serde(default)]
	pub nullable: bool,
}

impl CatalogSnapshot {
	pub fn parse(json: &str) -> crate::Result<Self> {
		serde_json::from_str(json).map_err(|err| CatalogError::Snapshot {
			message: err.to_string(),
		})
	}
}

impl TryFrom<&TableSnapshot> for TableToCreate {
	type Error = CatalogError;

	fn try_from(table: &TableSnapshot) -> Result<Self, Self::Error> {
		let mut columns = Vec::with_capacity(table.columns.len());
		for column in &table.columns {
			let ty: Type = column.ty.parse().map_err(|_| CatalogError::UnknownColumnType {
				name: column.ty.clone(),
			})?;
			columns.push(ColumnToCreate {
				name: column.name.clone(),
				ty: TypeInfo::new(ty, column.nullable),
			});
		}

		Ok(TableToCreate {
			name: table.name.clone(),
			columns,
		})
	}
}

impl MaterializedCatalog {
	#[instrument(name = "catalog::snapshot::load", level = "debug", skip(json))]
	pub fn from_snapshot(json: &str) -> crate::Result<Self> {
		let snapshot = CatalogSnapshot::parse(json)?;
		Self::from_catalog_snapshot(&snapshot)
	}

	pub fn from_catalog_snapshot(snapshot: &CatalogSnapshot) -> crate::Result<Self> {
		let catalog = MaterializedCatalog::new();
		for table in &snapshot.tables {
			catalog.create_table(TableToCreate::try_from(table)?)?;
		}
		debug!(tables = catalog.table_count(), "catalog snapshot loaded");
		Ok(catalog)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ColumnIndex, TableId};

	const SNAPSHOT: &str = r#"{
		"tables": [
			{"name": "orders", "columns": [
				{"name": "id", "type": "int8", "nullable": false},
				{"name": "customer", "type": "int4", "nullable": true}
			]},
			{"name": "empty"}
		]
	}"#;

	#[test]
	fn test_load_snapshot() {
		let catalog = MaterializedCatalog::from_snapshot(SNAPSHOT).unwrap();

		let orders = catalog.find_table_by_name("orders").unwrap();
		assert_eq!(orders.id, TableId(1));
		assert_eq!(orders.columns.len(), 2);
		assert_eq!(orders.columns[1].index, ColumnIndex(1));
		assert_eq!(orders.columns[1].ty, TypeInfo::nullable(Type::Int4));

		let empty = catalog.find_table_by_name("empty").unwrap();
		assert_eq!(empty.id, TableId(2));
		assert!(empty.columns.is_empty());
	}

	#[test]
	fn test_nullable_defaults_to_false() {
		let catalog = MaterializedCatalog::from_snapshot(
			r#"{"tables":[{"name":"t","columns":[{"name":"c","type":"int2"}]}]}"#,
		)
		.unwrap();

		let column = catalog.find_column(TableId(1), ColumnIndex(0)).unwrap();
		assert_eq!(column.ty, TypeInfo::not_null(Type::Int2));
	}

	#[test]
	fn test_unknown_column_type() {
		let err = MaterializedCatalog::from_snapshot(
			r#"{"tables":[{"name":"t","columns":[{"name":"c","type":"varchar"}]}]}"#,
		)
		.err()
		.unwrap();

		assert_eq!(
			err,
			CatalogError::UnknownColumnType {
				name: "varchar".to_string()
			}
		);
	}

	#[test]
	fn test_malformed_snapshot() {
		let err = MaterializedCatalog::from_snapshot(r#"{"tables": 3}"#).err().unwrap();
		assert!(matches!(err, CatalogError::Snapshot { .. }));
	}

	#[test]
	fn test_duplicate_table_in_snapshot() {
		let err = MaterializedCatalog::from_snapshot(r#"{"tables":[{"name":"t"},{"name":"t"}]}"#)
			.err()
			.unwrap();
		assert_eq!(
			err,
			CatalogError::DuplicateTable {
				name: "t".to_string()
			}
		);
	}
}
