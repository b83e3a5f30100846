// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod blob;
pub mod column;
pub mod container;
mod number;
mod ordered;
pub mod r#type;

pub use blob::Blob;
pub use column::ColumnData;
pub use number::IsNumber;
pub use ordered::{OrderedF32, OrderedF64, OrderedFloatError};
pub use r#type::{GetType, TupleType, Type, TypeKind, TypeRef, parse_type};

/// A single value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A binary large object (BLOB)
	Blob(Blob),
	/// An ordered collection of values, one per tuple element
	Tuple(Vec<Value>),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn int16(v: impl Into<i128>) -> Self {
		Value::Int16(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn uint16(v: impl Into<u128>) -> Self {
		Value::Uint16(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn blob(v: impl Into<Blob>) -> Self {
		Value::Blob(v.into())
	}

	pub fn tuple(values: impl Into<Vec<Value>>) -> Self {
		Value::Tuple(values.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("Undefined"),
			Value::Boolean(v) => Display::fmt(v, f),
			Value::Float4(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::Int1(v) => Display::fmt(v, f),
			Value::Int2(v) => Display::fmt(v, f),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Int16(v) => Display::fmt(v, f),
			Value::Uint1(v) => Display::fmt(v, f),
			Value::Uint2(v) => Display::fmt(v, f),
			Value::Uint4(v) => Display::fmt(v, f),
			Value::Uint8(v) => Display::fmt(v, f),
			Value::Uint16(v) => Display::fmt(v, f),
			Value::Utf8(v) => f.write_str(v),
			Value::Blob(v) => Display::fmt(v, f),
			Value::Tuple(values) => {
				f.write_str("(")?;
				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(value, f)?;
				}
				f.write_str(")")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_float_constructor_rejects_nan() {
		assert_eq!(Value::float4(f32::NAN), Value::Undefined);
		assert_eq!(Value::float8(f64::NAN), Value::Undefined);
	}

	#[test]
	fn test_tuple_display() {
		let value = Value::tuple([Value::int8(1i64), Value::utf8("a")]);
		assert_eq!(value.to_string(), "(1, a)");
	}

	#[test]
	fn test_value_eq_hash() {
		use std::collections::HashSet;

		let mut seen = HashSet::new();
		seen.insert(Value::float8(1.5f64));
		assert!(seen.contains(&Value::float8(1.5f64)));
		assert!(!seen.contains(&Value::float8(2.5f64)));
	}
}
