// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{ColumnDef, ColumnIndex, MaterializedCatalog, TableId};

impl MaterializedCatalog {
	pub fn find_column(&self, table: TableId, index: ColumnIndex) -> Option<ColumnDef> {
		let entry = self.tables.get(&table)?;
		entry.value().column(index).cloned()
	}
}
