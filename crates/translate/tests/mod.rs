// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{error::Error, path::Path};

use relplan_catalog::MaterializedCatalog;
use relplan_plan::explain::explain_plan;
use relplan_testing::testscript::{self, Command, Runner};
use relplan_translate::translate;
use test_each_file::test_each_path;

test_each_path! { in "crates/translate/tests/scripts" as plans => test_plan }

const CATALOG: &str = r#"{
	"tables": [
		{
			"name": "orders",
			"columns": [
				{"name": "id", "type": "int8"},
				{"name": "customer", "type": "int4", "nullable": true},
				{"name": "amount", "type": "int2"}
			]
		},
		{
			"name": "readings",
			"columns": [
				{"name": "value", "type": "float8"}
			]
		}
	]
}"#;

fn test_plan(path: &Path) {
	let catalog = MaterializedCatalog::from_snapshot(CATALOG).unwrap();
	testscript::run_path(&mut PlanRunner::new(catalog), path).expect("test failed")
}

/// Translates `> <json plan>` commands against the test catalog. Output is
/// the explained plan, or the first line of the rendered diagnostic.
struct PlanRunner {
	catalog: MaterializedCatalog,
}

impl PlanRunner {
	fn new(catalog: MaterializedCatalog) -> Self {
		Self {
			catalog,
		}
	}
}

impl Runner for PlanRunner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		if !command.args.is_empty() {
			return Err(format!("plans are given as '> <json>', found arguments on line {}", command.line_number)
				.into());
		}

		match translate(&command.name, &self.catalog) {
			Ok(root) => Ok(explain_plan(&root)),
			Err(err) => {
				let rendered = relplan_type::Error::from(err).to_string();
				Err(rendered.lines().next().unwrap_or_default().to_string().into())
			}
		}
	}
}
