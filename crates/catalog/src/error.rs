// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use relplan_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("table '{name}' already exists")]
	DuplicateTable {
		name: String,
	},

	#[error("column '{column}' is defined more than once in table '{table}'")]
	DuplicateColumn {
		table: String,
		column: String,
	},

	#[error("table '{table}' has more columns than a table can hold")]
	TooManyColumns {
		table: String,
	},

	#[error("unknown column type '{name}'")]
	UnknownColumnType {
		name: String,
	},

	#[error("invalid catalog snapshot: {message}")]
	Snapshot {
		message: String,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CatalogError::DuplicateTable {
				name,
			} => Diagnostic {
				code: "CATALOG_001".to_string(),
				message: format!("table '{}' already exists", name),
				label: Some("duplicate table definition".to_string()),
				help: Some("table names must be unique within a catalog".to_string()),
				notes: vec![],
				cause: None,
			},
			CatalogError::DuplicateColumn {
				table,
				column,
			} => Diagnostic {
				code: "CATALOG_002".to_string(),
				message: format!("column '{}' is defined more than once in table '{}'", column, table),
				label: Some("duplicate column definition".to_string()),
				help: Some("rename or remove one of the columns".to_string()),
				notes: vec![],
				cause: None,
			},
			CatalogError::TooManyColumns {
				table,
			} => Diagnostic {
				code: "CATALOG_003".to_string(),
				message: format!("table '{}' has too many columns", table),
				label: None,
				help: Some(format!("a table holds at most {} columns", u16::MAX as usize + 1)),
				notes: vec![],
				cause: None,
			},
			CatalogError::UnknownColumnType {
				name,
			} => Diagnostic {
				code: "CATALOG_004".to_string(),
				message: format!("unknown column type '{}'", name),
				label: Some("type not recognised".to_string()),
				help: Some("use one of: bool, int2, int4, int8, float8, utf8".to_string()),
				notes: vec![],
				cause: None,
			},
			CatalogError::Snapshot {
				message,
			} => Diagnostic {
				code: "CATALOG_005".to_string(),
				message: format!("invalid catalog snapshot: {}", message),
				label: None,
				help: Some(
					r#"a snapshot looks like {"tables":[{"name":"t","columns":[{"name":"c","type":"int8","nullable":false}]}]}"#
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error::new(err.into_diagnostic())
	}
}
