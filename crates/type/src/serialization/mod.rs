// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{fmt::Debug, sync::Arc};

use crate::{Result, value::column::ColumnData};

mod info;
mod io;
mod nested;
mod scalar;
mod sparse;

pub use info::{SerializationInfo, SerializationSettings};
pub use nested::NestedSerialization;
pub use scalar::ScalarSerialization;
pub use sparse::SparseSerialization;

/// Shared handle to a serialization strategy.
pub type SerializationRef = Arc<dyn Serialization>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SerializationKind {
	/// Dense per-value encoding of one scalar column.
	Scalar,
	/// Explicit rows only; implicit rows materialize as the default.
	Sparse,
	/// One child strategy per tuple element, in element order.
	Nested,
}

/// A pluggable column encoder/decoder, selected per column by the type
/// descriptor. Strategies are stateless; a column serialized by a strategy
/// round-trips through the same strategy.
pub trait Serialization: Debug + Send + Sync {
	fn kind(&self) -> SerializationKind;

	/// The element decomposition of this strategy, when it has one.
	fn children(&self) -> &[SerializationRef] {
		&[]
	}

	fn serialize_column(&self, column: &ColumnData, out: &mut Vec<u8>) -> Result<()>;

	/// Decode `rows` rows. The row count travels out of band, with the
	/// column metadata.
	fn deserialize_column(&self, input: &mut &[u8], rows: usize) -> Result<ColumnData>;
}
