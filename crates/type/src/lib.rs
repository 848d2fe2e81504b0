// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{
	Error,
	diagnostic::{Diagnostic, IntoDiagnostic},
};
pub use value::{
	Value,
	r#type::{Type, TypeInfo, UnknownType},
};

pub type Result<T> = std::result::Result<T, Error>;
