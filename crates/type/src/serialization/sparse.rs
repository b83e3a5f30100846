// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::collections::HashMap;

use crate::{
	Result,
	error::TypeError,
	serialization::{
		Serialization, SerializationKind, SerializationRef,
		io::{read_u32, write_u32},
	},
	value::{column::ColumnData, r#type::TypeRef},
};

/// Sparse encoding for a mostly-default column: the indices of the explicit
/// rows, then those rows as a sub-column in the inner encoding. Every row
/// not listed materializes as the element type's default value. Undefined
/// rows are always explicit.
#[derive(Debug)]
pub struct SparseSerialization {
	ty: TypeRef,
	inner: [SerializationRef; 1],
}

impl SparseSerialization {
	pub fn new(ty: TypeRef, inner: SerializationRef) -> Self {
		Self {
			ty,
			inner: [inner],
		}
	}
}

impl Serialization for SparseSerialization {
	fn kind(&self) -> SerializationKind {
		SerializationKind::Sparse
	}

	fn children(&self) -> &[SerializationRef] {
		&self.inner
	}

	fn serialize_column(&self, column: &ColumnData, out: &mut Vec<u8>) -> Result<()> {
		self.ty.column_matches(column)?;

		let default = self.ty.default_value();
		let mut explicit = self.ty.create_column();
		let mut indices = Vec::new();
		for row in 0..column.len() {
			let value = column.get_value(row);
			if value != default {
				indices.push(row as u32);
				explicit.push_value(&value)?;
			}
		}

		tracing::trace!(
			rows = column.len(),
			explicit = indices.len(),
			"serializing sparse column"
		);

		write_u32(out, indices.len() as u32);
		for index in &indices {
			write_u32(out, *index);
		}
		self.inner[0].serialize_column(&explicit, out)
	}

	fn deserialize_column(&self, input: &mut &[u8], rows: usize) -> Result<ColumnData> {
		let count = read_u32(input)? as usize;
		let mut positions = HashMap::with_capacity(count);
		for position in 0..count {
			let index = read_u32(input)?;
			if index as usize >= rows {
				return Err(TypeError::InvalidSparseIndex {
					index: index as u64,
					rows,
				}
				.into());
			}
			positions.insert(index as usize, position);
		}

		let explicit = self.inner[0].deserialize_column(input, count)?;

		let default = self.ty.default_value();
		let mut column = self.ty.create_column();
		for row in 0..rows {
			match positions.get(&row) {
				Some(&position) => column.push_value(&explicit.get_value(position))?,
				None => column.push_value(&default)?,
			}
		}
		Ok(column)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::value::{Value, r#type::Type};

	fn sparse_int8() -> SparseSerialization {
		let ty = Arc::new(Type::Int8);
		let inner = ty.default_serialization();
		SparseSerialization::new(ty, inner)
	}

	#[test]
	fn test_roundtrip_mostly_defaults() {
		let ty = Type::Int8;
		let mut column = ty.create_column();
		for _ in 0..30 {
			ty.insert_default_into(&mut column).unwrap();
		}
		column.push_value(&Value::int8(42i64)).unwrap();
		column.push_value(&Value::Undefined).unwrap();

		let serialization = sparse_int8();
		let mut out = Vec::new();
		serialization.serialize_column(&column, &mut out).unwrap();

		let mut input = out.as_slice();
		let decoded = serialization.deserialize_column(&mut input, 32).unwrap();
		assert_eq!(decoded, column);
		assert!(input.is_empty());
	}

	#[test]
	fn test_all_default_column_encodes_indices_only() {
		let ty = Type::Int8;
		let mut column = ty.create_column();
		for _ in 0..100 {
			ty.insert_default_into(&mut column).unwrap();
		}

		let serialization = sparse_int8();
		let mut out = Vec::new();
		serialization.serialize_column(&column, &mut out).unwrap();

		// count + empty explicit sub-column
		assert_eq!(out.len(), 4);

		let mut input = out.as_slice();
		let decoded = serialization.deserialize_column(&mut input, 100).unwrap();
		assert_eq!(decoded, column);
	}

	#[test]
	fn test_corrupt_index_rejected() {
		let mut out = Vec::new();
		write_u32(&mut out, 1);
		write_u32(&mut out, 7);

		let serialization = sparse_int8();
		let mut input = out.as_slice();
		let err = serialization.deserialize_column(&mut input, 4).unwrap_err();
		assert_eq!(err.code(), "SERIAL_005");
	}
}
