// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fs, path::Path};

use relplan_catalog::MaterializedCatalog;
use relplan_plan::explain::explain_plan;
use relplan_translate::{Translator, TranslatorConfig};
use relplan_type::{Diagnostic, Error, error};
use tracing::info;

pub fn plan(catalog: &Path, plan: &Path) -> Result<(), Error> {
	let catalog = MaterializedCatalog::from_snapshot(&read(catalog)?)?;
	info!(tables = catalog.table_count(), "catalog loaded");

	let translator = Translator::new(TranslatorConfig::default().with_explain(true));
	let root = translator.translate(&read(plan)?, &catalog)?;

	print!("{}", explain_plan(&root));
	Ok(())
}

fn read(path: &Path) -> Result<String, Error> {
	fs::read_to_string(path).map_err(|err| {
		error!(Diagnostic {
			code: "IO_001".to_string(),
			message: format!("cannot read '{}': {}", path.display(), err),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		})
	})
}
