// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Type;

impl Type {
	/// Returns the type both operands of a binary operation are widened
	/// to, or `None` if the two types cannot meet.
	pub fn promote(left: Type, right: Type) -> Option<Type> {
		if left == right {
			return Some(left);
		}

		match (left, right) {
			(l, r) if l.is_integer() && r.is_integer() => {
				Some(if l.size() >= r.size() {
					l
				} else {
					r
				})
			}
			(l, r) if l.is_number() && r.is_number() => Some(Type::Float8),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::Type::{self, *};

	#[test]
	fn test_same_type() {
		for ty in [Boolean, Int2, Int4, Int8, Float8, Utf8] {
			assert_eq!(Type::promote(ty, ty), Some(ty));
		}
	}

	#[test]
	fn test_integers_widen() {
		assert_eq!(Type::promote(Int2, Int8), Some(Int8));
		assert_eq!(Type::promote(Int8, Int2), Some(Int8));
		assert_eq!(Type::promote(Int4, Int2), Some(Int4));
	}

	#[test]
	fn test_integer_and_float() {
		assert_eq!(Type::promote(Int4, Float8), Some(Float8));
		assert_eq!(Type::promote(Float8, Int2), Some(Float8));
	}

	#[test]
	fn test_incompatible() {
		assert_eq!(Type::promote(Boolean, Int4), None);
		assert_eq!(Type::promote(Utf8, Int8), None);
		assert_eq!(Type::promote(Utf8, Boolean), None);
	}
}
