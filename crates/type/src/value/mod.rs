// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod r#type;

use r#type::Type;

/// A literal value carried by a constant expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// A boolean: true or false.
	Boolean(bool),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(f64),
}

impl Value {
	/// Wraps an integer in the narrowest of Int2, Int4 and Int8 that can
	/// hold it.
	pub fn integer(value: i64) -> Self {
		if let Ok(v) = i16::try_from(value) {
			Value::Int2(v)
		} else if let Ok(v) = i32::try_from(value) {
			Value::Int4(v)
		} else {
			Value::Int8(value)
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Boolean(_) => Type::Boolean,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
		}
	}

	fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Int2(v) => Some(*v as i64),
			Value::Int4(v) => Some(*v as i64),
			Value::Int8(v) => Some(*v),
			_ => None,
		}
	}

	/// Converts the value to `target`, or `None` if the conversion would
	/// lose information.
	pub fn cast(&self, target: Type) -> Option<Value> {
		if self.get_type() == target {
			return Some(self.clone());
		}

		let int = self.as_i64()?;
		match target {
			Type::Int2 => i16::try_from(int).ok().map(Value::Int2),
			Type::Int4 => i32::try_from(int).ok().map(Value::Int4),
			Type::Int8 => Some(Value::Int8(int)),
			Type::Float8 => {
				// Above 2^53 not every integer has an exact f64. Compared
				// as i128 since `as i64` saturates at i64::MAX.
				let float = int as f64;
				(float as i128 == int as i128).then_some(Value::Float8(float))
			}
			Type::Boolean | Type::Utf8 => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
		}
	}
}
