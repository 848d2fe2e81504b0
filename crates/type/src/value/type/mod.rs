// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

mod promote;

/// Scalar types a plan expression can produce.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text.
	Utf8,
}

impl Type {
	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float8)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn size(&self) -> usize {
		match self {
			Type::Boolean => 1,
			Type::Int2 => 2,
			Type::Int4 => 4,
			Type::Int8 => 8,
			Type::Float8 => 8,
			Type::Utf8 => 8,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown type '{0}'")]
pub struct UnknownType(pub String);

impl FromStr for Type {
	type Err = UnknownType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_uppercase().as_str() {
			"BOOL" | "BOOLEAN" => Ok(Type::Boolean),
			"INT2" => Ok(Type::Int2),
			"INT4" => Ok(Type::Int4),
			"INT8" => Ok(Type::Int8),
			"FLOAT8" => Ok(Type::Float8),
			"UTF8" | "TEXT" => Ok(Type::Utf8),
			_ => Err(UnknownType(s.to_string())),
		}
	}
}

/// A type together with its nullability, as carried by columns and
/// expressions.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
	pub ty: Type,
	pub nullable: bool,
}

impl TypeInfo {
	pub fn new(ty: Type, nullable: bool) -> Self {
		Self {
			ty,
			nullable,
		}
	}

	pub fn not_null(ty: Type) -> Self {
		Self::new(ty, false)
	}

	pub fn nullable(ty: Type) -> Self {
		Self::new(ty, true)
	}

	pub fn with_type(self, ty: Type) -> Self {
		Self {
			ty,
			nullable: self.nullable,
		}
	}
}

impl Display for TypeInfo {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.nullable {
			write!(f, "{}?", self.ty)
		} else {
			Display::fmt(&self.ty, f)
		}
	}
}
