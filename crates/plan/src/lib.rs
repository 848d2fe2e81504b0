// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Expression and plan nodes handed to the execution engine.
//!
//! A translated query is always the chain
//!
//! ```text
//! RootPlan
//!   └── AggregateNode
//!         └── ScanNode
//! ```
//!
//! Expressions are reference counted so that a single translated
//! expression can sit in several target lists at once.

pub mod explain;
pub mod expression;
pub mod node;
pub mod target;

pub use expression::{
	AggregateExpression, AggregateKind, BinaryExpression, BinaryOperator, CastExpression, ColumnExpression,
	ConstantExpression, Expression,
};
pub use node::{AggregateNode, Plan, RootPlan, ScanNode, StatementKind};
pub use target::TargetEntry;
