// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::{env, path::PathBuf, process::ExitCode};

use tracing_subscriber::EnvFilter;

mod explain;

const USAGE: &str = "usage: relplan <catalog.json> <plan.json>";

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let args: Vec<String> = env::args().skip(1).collect();
	let [catalog, plan] = args.as_slice() else {
		eprintln!("{}", USAGE);
		return ExitCode::from(2);
	};

	match explain::plan(&PathBuf::from(catalog), &PathBuf::from(plan)) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprint!("{}", err);
			ExitCode::FAILURE
		}
	}
}
