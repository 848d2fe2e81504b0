// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

pub use create::{ColumnToCreate, TableToCreate};
use serde::{Deserialize, Serialize};

use crate::column::{ColumnDef, ColumnIndex};

mod create;

#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
	pub id: TableId,
	pub name: String,
	pub columns: Vec<ColumnDef>,
}

impl TableDef {
	pub fn column(&self, index: ColumnIndex) -> Option<&ColumnDef> {
		self.columns.get(*index as usize)
	}
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub u64);

impl Display for TableId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Deref for TableId {
	type Target = u64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u64> for TableId {
	fn eq(&self, other: &u64) -> bool {
		self.0.eq(other)
	}
}

impl From<TableId> for u64 {
	fn from(value: TableId) -> Self {
		value.0
	}
}
