// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::CatalogQuery;
pub use column::{ColumnDef, ColumnIndex};
pub use error::CatalogError;
pub use materialized::MaterializedCatalog;
pub use snapshot::{CatalogSnapshot, ColumnSnapshot, TableSnapshot};
pub use table::{ColumnToCreate, TableDef, TableId, TableToCreate};

mod catalog;
pub mod column;
pub mod error;
pub mod materialized;
pub mod snapshot;
pub mod table;

pub type Result<T> = std::result::Result<T, CatalogError>;
