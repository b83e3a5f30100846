// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

use crate::{
	Result,
	error::TypeError,
	value::{
		Value,
		container::{
			BlobContainer, BoolContainer, NumberContainer, TupleContainer, UndefinedContainer,
			Utf8Container,
		},
		r#type::TypeKind,
	},
};

/// Column data for one value type. Wrapper types (`Option`, `Dictionary`)
/// share the representation of their inner type; the definedness mask of
/// every container subsumes nullability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Bool(BoolContainer),
	Float4(NumberContainer<f32>),
	Float8(NumberContainer<f64>),
	Int1(NumberContainer<i8>),
	Int2(NumberContainer<i16>),
	Int4(NumberContainer<i32>),
	Int8(NumberContainer<i64>),
	Int16(NumberContainer<i128>),
	Uint1(NumberContainer<u8>),
	Uint2(NumberContainer<u16>),
	Uint4(NumberContainer<u32>),
	Uint8(NumberContainer<u64>),
	Uint16(NumberContainer<u128>),
	Utf8(Utf8Container),
	Blob(BlobContainer),
	Undefined(UndefinedContainer),
	Tuple(TupleContainer),
}

impl ColumnData {
	pub fn kind(&self) -> TypeKind {
		match self {
			ColumnData::Bool(_) => TypeKind::Boolean,
			ColumnData::Float4(_) => TypeKind::Float4,
			ColumnData::Float8(_) => TypeKind::Float8,
			ColumnData::Int1(_) => TypeKind::Int1,
			ColumnData::Int2(_) => TypeKind::Int2,
			ColumnData::Int4(_) => TypeKind::Int4,
			ColumnData::Int8(_) => TypeKind::Int8,
			ColumnData::Int16(_) => TypeKind::Int16,
			ColumnData::Uint1(_) => TypeKind::Uint1,
			ColumnData::Uint2(_) => TypeKind::Uint2,
			ColumnData::Uint4(_) => TypeKind::Uint4,
			ColumnData::Uint8(_) => TypeKind::Uint8,
			ColumnData::Uint16(_) => TypeKind::Uint16,
			ColumnData::Utf8(_) => TypeKind::Utf8,
			ColumnData::Blob(_) => TypeKind::Blob,
			ColumnData::Undefined(_) => TypeKind::Undefined,
			ColumnData::Tuple(_) => TypeKind::Tuple,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Bool(c) => c.len(),
			ColumnData::Float4(c) => c.len(),
			ColumnData::Float8(c) => c.len(),
			ColumnData::Int1(c) => c.len(),
			ColumnData::Int2(c) => c.len(),
			ColumnData::Int4(c) => c.len(),
			ColumnData::Int8(c) => c.len(),
			ColumnData::Int16(c) => c.len(),
			ColumnData::Uint1(c) => c.len(),
			ColumnData::Uint2(c) => c.len(),
			ColumnData::Uint4(c) => c.len(),
			ColumnData::Uint8(c) => c.len(),
			ColumnData::Uint16(c) => c.len(),
			ColumnData::Utf8(c) => c.len(),
			ColumnData::Blob(c) => c.len(),
			ColumnData::Undefined(c) => c.len(),
			ColumnData::Tuple(c) => c.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Whether `value` could be appended, without mutating anything.
	/// Recursive, so a failing tuple row is rejected before any sub-column
	/// is touched.
	pub(crate) fn check_value(&self, value: &Value) -> Result<()> {
		match (self, value) {
			(_, Value::Undefined) => Ok(()),
			(ColumnData::Tuple(c), Value::Tuple(values)) => {
				if values.len() != c.columns().len() {
					return Err(TypeError::ValueTypeMismatch {
						column: format!("{}-element Tuple", c.columns().len()),
						value: format!("{}-element Tuple", values.len()),
					}
					.into());
				}
				c.columns().iter().zip(values).try_for_each(|(sub, v)| sub.check_value(v))
			}
			(column, value) if column.kind() == TypeKind::from(value) => Ok(()),
			(column, value) => Err(TypeError::ValueTypeMismatch {
				column: column.kind().to_string(),
				value: TypeKind::from(value).to_string(),
			}
			.into()),
		}
	}

	/// Append one value. `Value::Undefined` is accepted by every column;
	/// anything else must match the column's kind.
	pub fn push_value(&mut self, value: &Value) -> Result<()> {
		match (self, value) {
			(column, Value::Undefined) => {
				column.push_undefined();
				Ok(())
			}
			(ColumnData::Bool(c), Value::Boolean(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Float4(c), Value::Float4(v)) => {
				c.push(v.value());
				Ok(())
			}
			(ColumnData::Float8(c), Value::Float8(v)) => {
				c.push(v.value());
				Ok(())
			}
			(ColumnData::Int1(c), Value::Int1(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Int2(c), Value::Int2(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Int4(c), Value::Int4(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Int8(c), Value::Int8(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Int16(c), Value::Int16(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Uint1(c), Value::Uint1(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Uint2(c), Value::Uint2(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Uint4(c), Value::Uint4(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Uint8(c), Value::Uint8(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Uint16(c), Value::Uint16(v)) => {
				c.push(*v);
				Ok(())
			}
			(ColumnData::Utf8(c), Value::Utf8(v)) => {
				c.push(v.clone());
				Ok(())
			}
			(ColumnData::Blob(c), Value::Blob(v)) => {
				c.push(v.clone());
				Ok(())
			}
			(ColumnData::Tuple(c), Value::Tuple(values)) => c.push_row(values),
			(column, value) => Err(TypeError::ValueTypeMismatch {
				column: column.kind().to_string(),
				value: TypeKind::from(value).to_string(),
			}
			.into()),
		}
	}

	pub fn push_undefined(&mut self) {
		match self {
			ColumnData::Bool(c) => c.push_undefined(),
			ColumnData::Float4(c) => c.push_undefined(),
			ColumnData::Float8(c) => c.push_undefined(),
			ColumnData::Int1(c) => c.push_undefined(),
			ColumnData::Int2(c) => c.push_undefined(),
			ColumnData::Int4(c) => c.push_undefined(),
			ColumnData::Int8(c) => c.push_undefined(),
			ColumnData::Int16(c) => c.push_undefined(),
			ColumnData::Uint1(c) => c.push_undefined(),
			ColumnData::Uint2(c) => c.push_undefined(),
			ColumnData::Uint4(c) => c.push_undefined(),
			ColumnData::Uint8(c) => c.push_undefined(),
			ColumnData::Uint16(c) => c.push_undefined(),
			ColumnData::Utf8(c) => c.push_undefined(),
			ColumnData::Blob(c) => c.push_undefined(),
			ColumnData::Undefined(c) => c.push_undefined(),
			ColumnData::Tuple(c) => c.push_undefined(),
		}
	}

	/// Read one row back. Out-of-range and undefined rows both read as
	/// `Value::Undefined`.
	pub fn get_value(&self, index: usize) -> Value {
		match self {
			ColumnData::Bool(c) => c.get(index).map(Value::Boolean).unwrap_or(Value::Undefined),
			ColumnData::Float4(c) => c.get(index).map(Value::float4).unwrap_or(Value::Undefined),
			ColumnData::Float8(c) => c.get(index).map(Value::float8).unwrap_or(Value::Undefined),
			ColumnData::Int1(c) => c.get(index).map(Value::Int1).unwrap_or(Value::Undefined),
			ColumnData::Int2(c) => c.get(index).map(Value::Int2).unwrap_or(Value::Undefined),
			ColumnData::Int4(c) => c.get(index).map(Value::Int4).unwrap_or(Value::Undefined),
			ColumnData::Int8(c) => c.get(index).map(Value::Int8).unwrap_or(Value::Undefined),
			ColumnData::Int16(c) => c.get(index).map(Value::Int16).unwrap_or(Value::Undefined),
			ColumnData::Uint1(c) => c.get(index).map(Value::Uint1).unwrap_or(Value::Undefined),
			ColumnData::Uint2(c) => c.get(index).map(Value::Uint2).unwrap_or(Value::Undefined),
			ColumnData::Uint4(c) => c.get(index).map(Value::Uint4).unwrap_or(Value::Undefined),
			ColumnData::Uint8(c) => c.get(index).map(Value::Uint8).unwrap_or(Value::Undefined),
			ColumnData::Uint16(c) => c.get(index).map(Value::Uint16).unwrap_or(Value::Undefined),
			ColumnData::Utf8(c) => {
				c.get(index).map(|v| Value::Utf8(v.to_string())).unwrap_or(Value::Undefined)
			}
			ColumnData::Blob(c) => {
				c.get(index).map(|v| Value::Blob(v.clone())).unwrap_or(Value::Undefined)
			}
			ColumnData::Undefined(_) => Value::Undefined,
			ColumnData::Tuple(c) => c.get_row(index),
		}
	}

	pub fn as_tuple(&self) -> Option<&TupleContainer> {
		match self {
			ColumnData::Tuple(c) => Some(c),
			_ => None,
		}
	}

	pub fn as_tuple_mut(&mut self) -> Option<&mut TupleContainer> {
		match self {
			ColumnData::Tuple(c) => Some(c),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push_and_read_back() {
		let mut column = ColumnData::Int8(NumberContainer::with_capacity(2));
		column.push_value(&Value::int8(42i64)).unwrap();
		column.push_value(&Value::Undefined).unwrap();

		assert_eq!(column.len(), 2);
		assert_eq!(column.get_value(0), Value::int8(42i64));
		assert_eq!(column.get_value(1), Value::Undefined);
		assert_eq!(column.get_value(7), Value::Undefined);
	}

	#[test]
	fn test_push_mismatched_value() {
		let mut column = ColumnData::Int8(NumberContainer::with_capacity(0));
		let err = column.push_value(&Value::utf8("x")).unwrap_err();
		assert_eq!(err.code(), "COLUMN_003");
	}
}
