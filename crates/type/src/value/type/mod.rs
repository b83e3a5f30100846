// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
	sync::Arc,
};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::{
	Result,
	error::TypeError,
	serialization::{
		ScalarSerialization, Serialization, SerializationInfo, SerializationKind,
		SerializationRef, SerializationSettings, SparseSerialization,
	},
	value::{
		Value,
		column::ColumnData,
		container::{
			BlobContainer, BoolContainer, NumberContainer, UndefinedContainer, Utf8Container,
		},
	},
};

mod get;
mod parse;
mod tuple;

pub use get::GetType;
pub use parse::parse_type;
pub use tuple::TupleType;

/// Shared handle to a type descriptor. The same component type is
/// legitimately referenced by many composites at once.
pub type TypeRef = Arc<Type>;

/// The fixed tag identifying a type kind. Used for fast dispatch without
/// touching the descriptor itself.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TypeKind {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A UTF-8 encoded text
	Utf8,
	/// A binary large object (BLOB)
	Blob,
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A nullable wrapper around another type
	Optional,
	/// A low-cardinality (dictionary encoded) wrapper around another type
	Dictionary,
	/// An ordered composite of element types
	Tuple,
}

impl TypeKind {
	pub fn to_u8(&self) -> u8 {
		match self {
			TypeKind::Undefined => 0x00,
			TypeKind::Float4 => 0x01,
			TypeKind::Float8 => 0x02,
			TypeKind::Int1 => 0x03,
			TypeKind::Int2 => 0x04,
			TypeKind::Int4 => 0x05,
			TypeKind::Int8 => 0x06,
			TypeKind::Int16 => 0x07,
			TypeKind::Utf8 => 0x08,
			TypeKind::Uint1 => 0x09,
			TypeKind::Uint2 => 0x0A,
			TypeKind::Uint4 => 0x0B,
			TypeKind::Uint8 => 0x0C,
			TypeKind::Uint16 => 0x0D,
			TypeKind::Boolean => 0x0E,
			TypeKind::Blob => 0x16,
			TypeKind::Optional => 0x17,
			TypeKind::Dictionary => 0x18,
			TypeKind::Tuple => 0x19,
		}
	}

	pub fn from_u8(value: u8) -> Self {
		match value {
			0x00 => TypeKind::Undefined,
			0x01 => TypeKind::Float4,
			0x02 => TypeKind::Float8,
			0x03 => TypeKind::Int1,
			0x04 => TypeKind::Int2,
			0x05 => TypeKind::Int4,
			0x06 => TypeKind::Int8,
			0x07 => TypeKind::Int16,
			0x08 => TypeKind::Utf8,
			0x09 => TypeKind::Uint1,
			0x0A => TypeKind::Uint2,
			0x0B => TypeKind::Uint4,
			0x0C => TypeKind::Uint8,
			0x0D => TypeKind::Uint16,
			0x0E => TypeKind::Boolean,
			0x16 => TypeKind::Blob,
			0x17 => TypeKind::Optional,
			0x18 => TypeKind::Dictionary,
			0x19 => TypeKind::Tuple,
			_ => unreachable!(),
		}
	}

	pub fn is_scalar(&self) -> bool {
		!matches!(self, TypeKind::Optional | TypeKind::Dictionary | TypeKind::Tuple)
	}
}

impl Display for TypeKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			TypeKind::Boolean => f.write_str("Bool"),
			TypeKind::Float4 => f.write_str("Float4"),
			TypeKind::Float8 => f.write_str("Float8"),
			TypeKind::Int1 => f.write_str("Int1"),
			TypeKind::Int2 => f.write_str("Int2"),
			TypeKind::Int4 => f.write_str("Int4"),
			TypeKind::Int8 => f.write_str("Int8"),
			TypeKind::Int16 => f.write_str("Int16"),
			TypeKind::Uint1 => f.write_str("Uint1"),
			TypeKind::Uint2 => f.write_str("Uint2"),
			TypeKind::Uint4 => f.write_str("Uint4"),
			TypeKind::Uint8 => f.write_str("Uint8"),
			TypeKind::Uint16 => f.write_str("Uint16"),
			TypeKind::Utf8 => f.write_str("Utf8"),
			TypeKind::Blob => f.write_str("Blob"),
			TypeKind::Undefined => f.write_str("Undefined"),
			TypeKind::Optional => f.write_str("Option"),
			TypeKind::Dictionary => f.write_str("Dictionary"),
			TypeKind::Tuple => f.write_str("Tuple"),
		}
	}
}

impl FromStr for TypeKind {
	type Err = ();

	/// Scalar kinds only; the parametric kinds are handled structurally by
	/// the type-name parser.
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_uppercase().as_str() {
			"BOOL" => Ok(TypeKind::Boolean),
			"FLOAT4" => Ok(TypeKind::Float4),
			"FLOAT8" => Ok(TypeKind::Float8),
			"INT1" => Ok(TypeKind::Int1),
			"INT2" => Ok(TypeKind::Int2),
			"INT4" => Ok(TypeKind::Int4),
			"INT8" => Ok(TypeKind::Int8),
			"INT16" => Ok(TypeKind::Int16),
			"UINT1" => Ok(TypeKind::Uint1),
			"UINT2" => Ok(TypeKind::Uint2),
			"UINT4" => Ok(TypeKind::Uint4),
			"UINT8" => Ok(TypeKind::Uint8),
			"UINT16" => Ok(TypeKind::Uint16),
			"UTF8" | "TEXT" => Ok(TypeKind::Utf8),
			"BLOB" => Ok(TypeKind::Blob),
			"UNDEFINED" => Ok(TypeKind::Undefined),
			_ => Err(()),
		}
	}
}

impl From<&Value> for TypeKind {
	fn from(value: &Value) -> Self {
		match value {
			Value::Undefined => TypeKind::Undefined,
			Value::Boolean(_) => TypeKind::Boolean,
			Value::Float4(_) => TypeKind::Float4,
			Value::Float8(_) => TypeKind::Float8,
			Value::Int1(_) => TypeKind::Int1,
			Value::Int2(_) => TypeKind::Int2,
			Value::Int4(_) => TypeKind::Int4,
			Value::Int8(_) => TypeKind::Int8,
			Value::Int16(_) => TypeKind::Int16,
			Value::Uint1(_) => TypeKind::Uint1,
			Value::Uint2(_) => TypeKind::Uint2,
			Value::Uint4(_) => TypeKind::Uint4,
			Value::Uint8(_) => TypeKind::Uint8,
			Value::Uint16(_) => TypeKind::Uint16,
			Value::Utf8(_) => TypeKind::Utf8,
			Value::Blob(_) => TypeKind::Blob,
			Value::Tuple(_) => TypeKind::Tuple,
		}
	}
}

/// A value-type descriptor. Immutable after construction; share via
/// [`TypeRef`]. Equality and hashing are structural and, for tuples,
/// name-blind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Boolean,
	Float4,
	Float8,
	Int1,
	Int2,
	Int4,
	Int8,
	Int16,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	Uint16,
	Utf8,
	Blob,
	Undefined,
	Optional(TypeRef),
	Dictionary(TypeRef),
	Tuple(TupleType),
}

impl Type {
	pub fn kind(&self) -> TypeKind {
		match self {
			Type::Boolean => TypeKind::Boolean,
			Type::Float4 => TypeKind::Float4,
			Type::Float8 => TypeKind::Float8,
			Type::Int1 => TypeKind::Int1,
			Type::Int2 => TypeKind::Int2,
			Type::Int4 => TypeKind::Int4,
			Type::Int8 => TypeKind::Int8,
			Type::Int16 => TypeKind::Int16,
			Type::Uint1 => TypeKind::Uint1,
			Type::Uint2 => TypeKind::Uint2,
			Type::Uint4 => TypeKind::Uint4,
			Type::Uint8 => TypeKind::Uint8,
			Type::Uint16 => TypeKind::Uint16,
			Type::Utf8 => TypeKind::Utf8,
			Type::Blob => TypeKind::Blob,
			Type::Undefined => TypeKind::Undefined,
			Type::Optional(_) => TypeKind::Optional,
			Type::Dictionary(_) => TypeKind::Dictionary,
			Type::Tuple(_) => TypeKind::Tuple,
		}
	}

	/// The canonical, parseable name. `parse_type` round-trips it.
	pub fn name(&self) -> String {
		self.to_string()
	}

	/// Human-oriented multi-line rendering. `indent` is the nesting level
	/// the output starts at.
	pub fn pretty_name(&self, indent: usize) -> String {
		match self {
			Type::Optional(inner) => format!("Option({})", inner.pretty_name(indent)),
			Type::Dictionary(inner) => format!("Dictionary({})", inner.pretty_name(indent)),
			Type::Tuple(tuple) => tuple.pretty_name(indent),
			scalar => scalar.to_string(),
		}
	}

	pub fn as_tuple(&self) -> Option<&TupleType> {
		match self {
			Type::Tuple(tuple) => Some(tuple),
			_ => None,
		}
	}

	pub fn scalar(kind: TypeKind) -> Option<Type> {
		match kind {
			TypeKind::Boolean => Some(Type::Boolean),
			TypeKind::Float4 => Some(Type::Float4),
			TypeKind::Float8 => Some(Type::Float8),
			TypeKind::Int1 => Some(Type::Int1),
			TypeKind::Int2 => Some(Type::Int2),
			TypeKind::Int4 => Some(Type::Int4),
			TypeKind::Int8 => Some(Type::Int8),
			TypeKind::Int16 => Some(Type::Int16),
			TypeKind::Uint1 => Some(Type::Uint1),
			TypeKind::Uint2 => Some(Type::Uint2),
			TypeKind::Uint4 => Some(Type::Uint4),
			TypeKind::Uint8 => Some(Type::Uint8),
			TypeKind::Uint16 => Some(Type::Uint16),
			TypeKind::Utf8 => Some(Type::Utf8),
			TypeKind::Blob => Some(Type::Blob),
			TypeKind::Undefined => Some(Type::Undefined),
			TypeKind::Optional | TypeKind::Dictionary | TypeKind::Tuple => None,
		}
	}
}

impl Type {
	/// True iff values of this type have a total order.
	pub fn is_comparable(&self) -> bool {
		match self {
			Type::Undefined => false,
			Type::Optional(inner) | Type::Dictionary(inner) => inner.is_comparable(),
			Type::Tuple(tuple) => tuple.elements().iter().all(|e| e.is_comparable()),
			_ => true,
		}
	}

	/// True iff the textual form of every value is guaranteed valid UTF-8.
	pub fn text_can_contain_only_valid_utf8(&self) -> bool {
		match self {
			Type::Blob => false,
			Type::Optional(inner) | Type::Dictionary(inner) => {
				inner.text_can_contain_only_valid_utf8()
			}
			Type::Tuple(tuple) => {
				tuple.elements().iter().all(|e| e.text_can_contain_only_valid_utf8())
			}
			_ => true,
		}
	}

	pub fn have_maximum_size_of_value(&self) -> bool {
		self.maximum_size_of_value_in_memory().is_some()
	}

	/// Upper bound on the in-memory size of one value, when one exists.
	pub fn maximum_size_of_value_in_memory(&self) -> Option<usize> {
		match self {
			Type::Optional(inner) => Some(inner.maximum_size_of_value_in_memory()? + 1),
			Type::Dictionary(inner) => inner.maximum_size_of_value_in_memory(),
			Type::Tuple(tuple) => tuple.maximum_size_of_value_in_memory(),
			scalar => scalar.kind().fixed_size(),
		}
	}

	/// Exact in-memory size of one value, when the type is fixed-width.
	pub fn size_of_value_in_memory(&self) -> Option<usize> {
		match self {
			Type::Optional(inner) => Some(inner.size_of_value_in_memory()? + 1),
			Type::Dictionary(inner) => inner.size_of_value_in_memory(),
			Type::Tuple(tuple) => tuple.size_of_value_in_memory(),
			scalar => scalar.kind().fixed_size(),
		}
	}

	pub fn have_subtypes(&self) -> bool {
		match self {
			Type::Optional(_) | Type::Dictionary(_) => true,
			Type::Tuple(tuple) => !tuple.is_empty(),
			_ => false,
		}
	}

	/// Whether a column of this type may be encoded sparsely, either itself
	/// or by pushing sparsity down to its elements.
	pub fn supports_sparse_serialization(&self) -> bool {
		match self {
			Type::Optional(_) | Type::Dictionary(_) => false,
			_ => true,
		}
	}

	/// Whether a value of this type may be the element of a sparse column.
	/// Composites push sparsity down instead of being sparse themselves.
	pub fn can_be_inside_sparse_columns(&self) -> bool {
		match self {
			Type::Optional(_) | Type::Dictionary(_) | Type::Tuple(_) => false,
			_ => true,
		}
	}

	/// Invoke `callback` once per child type, in declaration order. Scalars
	/// have no children; generic passes recurse through this.
	pub fn for_each_child(&self, callback: &mut dyn FnMut(&TypeRef)) {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => callback(inner),
			Type::Tuple(tuple) => {
				for element in tuple.elements() {
					callback(element);
				}
			}
			_ => {}
		}
	}

	/// Strip the wrapper adornments that do not affect the storage shape,
	/// recursively.
	pub fn normalized(&self) -> Type {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => inner.normalized(),
			Type::Tuple(tuple) => Type::Tuple(tuple.normalized()),
			scalar => scalar.clone(),
		}
	}

	/// Feed this descriptor's identity into `hasher`. Pure function of the
	/// type structure; tuple field names never participate, matching
	/// equality exactly.
	pub fn update_hash(&self, hasher: &mut Xxh3) {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => {
				hasher.update(&[self.kind().to_u8()]);
				inner.update_hash(hasher);
			}
			Type::Tuple(tuple) => tuple.update_hash(hasher),
			scalar => hasher.update(&[scalar.kind().to_u8()]),
		}
	}
}

impl Type {
	/// The default value: zero for numerics, empty for texts and blobs,
	/// undefined for optionals, element-wise for tuples.
	pub fn default_value(&self) -> Value {
		match self {
			Type::Boolean => Value::Boolean(false),
			Type::Float4 => Value::float4(0.0f32),
			Type::Float8 => Value::float8(0.0f64),
			Type::Int1 => Value::Int1(0),
			Type::Int2 => Value::Int2(0),
			Type::Int4 => Value::Int4(0),
			Type::Int8 => Value::Int8(0),
			Type::Int16 => Value::Int16(0),
			Type::Uint1 => Value::Uint1(0),
			Type::Uint2 => Value::Uint2(0),
			Type::Uint4 => Value::Uint4(0),
			Type::Uint8 => Value::Uint8(0),
			Type::Uint16 => Value::Uint16(0),
			Type::Utf8 => Value::Utf8(String::new()),
			Type::Blob => Value::Blob(crate::value::Blob::empty()),
			Type::Undefined => Value::Undefined,
			Type::Optional(_) => Value::Undefined,
			Type::Dictionary(inner) => inner.default_value(),
			Type::Tuple(tuple) => tuple.default_value(),
		}
	}

	/// Build an empty mutable column matching this type's layout. Always a
	/// fresh allocation.
	pub fn create_column(&self) -> ColumnData {
		match self {
			Type::Boolean => ColumnData::Bool(BoolContainer::with_capacity(0)),
			Type::Float4 => ColumnData::Float4(NumberContainer::with_capacity(0)),
			Type::Float8 => ColumnData::Float8(NumberContainer::with_capacity(0)),
			Type::Int1 => ColumnData::Int1(NumberContainer::with_capacity(0)),
			Type::Int2 => ColumnData::Int2(NumberContainer::with_capacity(0)),
			Type::Int4 => ColumnData::Int4(NumberContainer::with_capacity(0)),
			Type::Int8 => ColumnData::Int8(NumberContainer::with_capacity(0)),
			Type::Int16 => ColumnData::Int16(NumberContainer::with_capacity(0)),
			Type::Uint1 => ColumnData::Uint1(NumberContainer::with_capacity(0)),
			Type::Uint2 => ColumnData::Uint2(NumberContainer::with_capacity(0)),
			Type::Uint4 => ColumnData::Uint4(NumberContainer::with_capacity(0)),
			Type::Uint8 => ColumnData::Uint8(NumberContainer::with_capacity(0)),
			Type::Uint16 => ColumnData::Uint16(NumberContainer::with_capacity(0)),
			Type::Utf8 => ColumnData::Utf8(Utf8Container::with_capacity(0)),
			Type::Blob => ColumnData::Blob(BlobContainer::with_capacity(0)),
			Type::Undefined => ColumnData::Undefined(UndefinedContainer::new(0)),
			Type::Optional(inner) | Type::Dictionary(inner) => inner.create_column(),
			Type::Tuple(tuple) => tuple.create_column(),
		}
	}

	/// Build an empty column whose sub-columns follow the given strategy's
	/// element decomposition.
	pub fn create_column_with(&self, serialization: &dyn Serialization) -> Result<ColumnData> {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => {
				inner.create_column_with(serialization)
			}
			Type::Tuple(tuple) => tuple.create_column_with(serialization),
			scalar => match serialization.kind() {
				SerializationKind::Scalar => Ok(scalar.create_column()),
				SerializationKind::Sparse => match serialization.children() {
					[inner] => scalar.create_column_with(inner.as_ref()),
					_ => Err(TypeError::SerializationShapeMismatch {
						ty: scalar.name(),
					}
					.into()),
				},
				SerializationKind::Nested => Err(TypeError::SerializationShapeMismatch {
					ty: scalar.name(),
				}
				.into()),
			},
		}
	}

	/// Verify that `column` has the layout this type materializes.
	pub fn column_matches(&self, column: &ColumnData) -> Result<()> {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => inner.column_matches(column),
			Type::Tuple(tuple) => tuple.column_matches(column),
			scalar => {
				if column.kind() == scalar.kind() {
					Ok(())
				} else {
					Err(TypeError::ColumnTypeMismatch {
						expected: scalar.name(),
						found: column.kind().to_string(),
					}
					.into())
				}
			}
		}
	}

	/// Append one default row onto `column`.
	pub fn insert_default_into(&self, column: &mut ColumnData) -> Result<()> {
		self.column_matches(column)?;
		column.push_value(&self.default_value())
	}
}

impl Type {
	/// The fallback strategy: every element serialized with its own default
	/// strategy, recursively, in element order.
	pub fn default_serialization(&self) -> SerializationRef {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => inner.default_serialization(),
			Type::Tuple(tuple) => tuple.default_serialization(),
			scalar => Arc::new(ScalarSerialization::new(scalar.kind())),
		}
	}

	/// Select a strategy from per-column statistics. Sparsity is decided per
	/// element; a composite is never sparse itself.
	pub fn serialization(&self, info: &SerializationInfo) -> Result<SerializationRef> {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => inner.serialization(info),
			Type::Tuple(tuple) => tuple.serialization(info),
			scalar => {
				if !info.children().is_empty() {
					return Err(TypeError::SerializationInfoShapeMismatch {
						ty: scalar.name(),
						children: info.children().len(),
					}
					.into());
				}
				if info.prefers_sparse() {
					tracing::debug!(
						ty = %scalar,
						ratio = info.ratio_of_defaults(),
						"selecting sparse serialization"
					);
					Ok(Arc::new(SparseSerialization::new(
						Arc::new(scalar.clone()),
						scalar.default_serialization(),
					)))
				} else {
					Ok(scalar.default_serialization())
				}
			}
		}
	}

	/// A fresh, empty statistics object mirroring this type's element shape,
	/// to be populated by a statistics-collection pass.
	pub fn create_serialization_info(&self, settings: SerializationSettings) -> SerializationInfo {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => {
				inner.create_serialization_info(settings)
			}
			Type::Tuple(tuple) => tuple.create_serialization_info(settings),
			_ => SerializationInfo::new(settings),
		}
	}

	/// Statistics describing an already-populated column of this type. The
	/// column is only read, never mutated.
	pub fn serialization_info_for(
		&self,
		column: &ColumnData,
		settings: SerializationSettings,
	) -> Result<SerializationInfo> {
		match self {
			Type::Optional(inner) | Type::Dictionary(inner) => {
				inner.serialization_info_for(column, settings)
			}
			Type::Tuple(tuple) => tuple.serialization_info_for(column, settings),
			scalar => {
				scalar.column_matches(column)?;
				let mut info = SerializationInfo::new(settings);
				let default = scalar.default_value();
				for row in 0..column.len() {
					info.record(column.get_value(row) == default);
				}
				Ok(info)
			}
		}
	}
}

impl TypeKind {
	/// In-memory width of one value, for the fixed-width kinds.
	pub fn fixed_size(&self) -> Option<usize> {
		match self {
			TypeKind::Boolean => Some(1),
			TypeKind::Float4 => Some(4),
			TypeKind::Float8 => Some(8),
			TypeKind::Int1 => Some(1),
			TypeKind::Int2 => Some(2),
			TypeKind::Int4 => Some(4),
			TypeKind::Int8 => Some(8),
			TypeKind::Int16 => Some(16),
			TypeKind::Uint1 => Some(1),
			TypeKind::Uint2 => Some(2),
			TypeKind::Uint4 => Some(4),
			TypeKind::Uint8 => Some(8),
			TypeKind::Uint16 => Some(16),
			TypeKind::Undefined => Some(0),
			TypeKind::Utf8 | TypeKind::Blob => None,
			TypeKind::Optional | TypeKind::Dictionary | TypeKind::Tuple => None,
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Optional(inner) => write!(f, "Option({})", inner),
			Type::Dictionary(inner) => write!(f, "Dictionary({})", inner),
			Type::Tuple(tuple) => Display::fmt(tuple, f),
			scalar => Display::fmt(&scalar.kind(), f),
		}
	}
}

impl FromStr for Type {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_type(s)
	}
}

impl From<&Value> for Type {
	fn from(value: &Value) -> Self {
		match value {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
			Value::Utf8(_) => Type::Utf8,
			Value::Blob(_) => Type::Blob,
			Value::Tuple(values) => Type::Tuple(TupleType::new(
				values.iter().map(|v| Arc::new(Type::from(v))).collect(),
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_tag_roundtrip() {
		for kind in [
			TypeKind::Boolean,
			TypeKind::Float4,
			TypeKind::Float8,
			TypeKind::Int1,
			TypeKind::Int16,
			TypeKind::Uint16,
			TypeKind::Utf8,
			TypeKind::Blob,
			TypeKind::Undefined,
			TypeKind::Optional,
			TypeKind::Dictionary,
			TypeKind::Tuple,
		] {
			assert_eq!(TypeKind::from_u8(kind.to_u8()), kind);
		}
	}

	#[test]
	fn test_normalized_strips_wrappers() {
		let ty = Type::Optional(Arc::new(Type::Dictionary(Arc::new(Type::Utf8))));
		assert_eq!(ty.normalized(), Type::Utf8);
	}

	#[test]
	fn test_optional_adds_null_flag_byte() {
		let ty = Type::Optional(Arc::new(Type::Int4));
		assert_eq!(ty.maximum_size_of_value_in_memory(), Some(5));
		assert_eq!(Type::Int4.maximum_size_of_value_in_memory(), Some(4));
	}

	#[test]
	fn test_utf8_has_no_maximum_size() {
		assert!(!Type::Utf8.have_maximum_size_of_value());
		assert!(Type::Int8.have_maximum_size_of_value());
	}

	#[test]
	fn test_undefined_is_not_comparable() {
		assert!(!Type::Undefined.is_comparable());
		assert!(Type::Int8.is_comparable());
	}

	#[test]
	fn test_blob_text_is_not_utf8_only() {
		assert!(!Type::Blob.text_can_contain_only_valid_utf8());
		assert!(Type::Utf8.text_can_contain_only_valid_utf8());
	}

	#[test]
	fn test_wrapper_names() {
		let ty = Type::Optional(Arc::new(Type::Int8));
		assert_eq!(ty.name(), "Option(Int8)");

		let ty = Type::Dictionary(Arc::new(Type::Utf8));
		assert_eq!(ty.name(), "Dictionary(Utf8)");
	}

	#[test]
	fn test_hash_distinguishes_wrappers() {
		let mut a = Xxh3::new();
		Type::Optional(Arc::new(Type::Int8)).update_hash(&mut a);

		let mut b = Xxh3::new();
		Type::Int8.update_hash(&mut b);

		assert_ne!(a.digest(), b.digest());
	}
}
