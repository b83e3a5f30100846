// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use crate::{
	Result,
	error::TypeError,
	serialization::{
		Serialization, SerializationKind,
		io::{read_bitvec, read_u32, take, write_bitvec, write_u32},
	},
	value::{
		Blob, IsNumber,
		column::ColumnData,
		container::{
			BlobContainer, BoolContainer, NumberContainer, UndefinedContainer, Utf8Container,
		},
		r#type::TypeKind,
	},
};

/// Dense encoding of one scalar column: the definedness bitmap, then the
/// defined values in row order. Numerics are fixed-width little-endian,
/// texts and blobs are length-prefixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarSerialization {
	ty: TypeKind,
}

impl ScalarSerialization {
	pub fn new(ty: TypeKind) -> Self {
		debug_assert!(ty.is_scalar());
		Self {
			ty,
		}
	}

	fn mismatch(&self) -> crate::Error {
		TypeError::SerializationShapeMismatch {
			ty: self.ty.to_string(),
		}
		.into()
	}
}

impl Serialization for ScalarSerialization {
	fn kind(&self) -> SerializationKind {
		SerializationKind::Scalar
	}

	fn serialize_column(&self, column: &ColumnData, out: &mut Vec<u8>) -> Result<()> {
		if column.kind() != self.ty {
			return Err(self.mismatch());
		}
		match column {
			ColumnData::Undefined(_) => Ok(()),
			ColumnData::Bool(c) => {
				write_bitvec(out, c.bitvec());
				for value in c.iter().flatten() {
					out.push(value as u8);
				}
				Ok(())
			}
			ColumnData::Float4(c) => encode_numbers(c, out),
			ColumnData::Float8(c) => encode_numbers(c, out),
			ColumnData::Int1(c) => encode_numbers(c, out),
			ColumnData::Int2(c) => encode_numbers(c, out),
			ColumnData::Int4(c) => encode_numbers(c, out),
			ColumnData::Int8(c) => encode_numbers(c, out),
			ColumnData::Int16(c) => encode_numbers(c, out),
			ColumnData::Uint1(c) => encode_numbers(c, out),
			ColumnData::Uint2(c) => encode_numbers(c, out),
			ColumnData::Uint4(c) => encode_numbers(c, out),
			ColumnData::Uint8(c) => encode_numbers(c, out),
			ColumnData::Uint16(c) => encode_numbers(c, out),
			ColumnData::Utf8(c) => {
				write_bitvec(out, c.bitvec());
				for value in c.iter().flatten() {
					write_u32(out, value.len() as u32);
					out.extend_from_slice(value.as_bytes());
				}
				Ok(())
			}
			ColumnData::Blob(c) => {
				write_bitvec(out, c.bitvec());
				for value in c.iter().flatten() {
					write_u32(out, value.len() as u32);
					out.extend_from_slice(value.as_bytes());
				}
				Ok(())
			}
			ColumnData::Tuple(_) => Err(self.mismatch()),
		}
	}

	fn deserialize_column(&self, input: &mut &[u8], rows: usize) -> Result<ColumnData> {
		match self.ty {
			TypeKind::Undefined => Ok(ColumnData::Undefined(UndefinedContainer::new(rows))),
			TypeKind::Boolean => {
				let bitvec = read_bitvec(input, rows)?;
				let mut container = BoolContainer::with_capacity(rows);
				for row in 0..rows {
					if bitvec.get(row) {
						container.push(take(input, 1)?[0] != 0);
					} else {
						container.push_undefined();
					}
				}
				Ok(ColumnData::Bool(container))
			}
			TypeKind::Float4 => Ok(ColumnData::Float4(decode_numbers(input, rows)?)),
			TypeKind::Float8 => Ok(ColumnData::Float8(decode_numbers(input, rows)?)),
			TypeKind::Int1 => Ok(ColumnData::Int1(decode_numbers(input, rows)?)),
			TypeKind::Int2 => Ok(ColumnData::Int2(decode_numbers(input, rows)?)),
			TypeKind::Int4 => Ok(ColumnData::Int4(decode_numbers(input, rows)?)),
			TypeKind::Int8 => Ok(ColumnData::Int8(decode_numbers(input, rows)?)),
			TypeKind::Int16 => Ok(ColumnData::Int16(decode_numbers(input, rows)?)),
			TypeKind::Uint1 => Ok(ColumnData::Uint1(decode_numbers(input, rows)?)),
			TypeKind::Uint2 => Ok(ColumnData::Uint2(decode_numbers(input, rows)?)),
			TypeKind::Uint4 => Ok(ColumnData::Uint4(decode_numbers(input, rows)?)),
			TypeKind::Uint8 => Ok(ColumnData::Uint8(decode_numbers(input, rows)?)),
			TypeKind::Uint16 => Ok(ColumnData::Uint16(decode_numbers(input, rows)?)),
			TypeKind::Utf8 => {
				let bitvec = read_bitvec(input, rows)?;
				let mut container = Utf8Container::with_capacity(rows);
				for row in 0..rows {
					if bitvec.get(row) {
						let len = read_u32(input)? as usize;
						let bytes = take(input, len)?;
						let text = String::from_utf8(bytes.to_vec())
							.map_err(|_| TypeError::InvalidUtf8Payload)?;
						container.push(text);
					} else {
						container.push_undefined();
					}
				}
				Ok(ColumnData::Utf8(container))
			}
			TypeKind::Blob => {
				let bitvec = read_bitvec(input, rows)?;
				let mut container = BlobContainer::with_capacity(rows);
				for row in 0..rows {
					if bitvec.get(row) {
						let len = read_u32(input)? as usize;
						container.push(Blob::from(take(input, len)?));
					} else {
						container.push_undefined();
					}
				}
				Ok(ColumnData::Blob(container))
			}
			TypeKind::Optional | TypeKind::Dictionary | TypeKind::Tuple => Err(self.mismatch()),
		}
	}
}

/// Fixed-width little-endian encoding for the native numeric types.
trait Le: Sized {
	fn write_le(&self, out: &mut Vec<u8>);
	fn read_le(input: &mut &[u8]) -> Result<Self>;
}

macro_rules! impl_le {
	($($ty:ty),*) => {
		$(
			impl Le for $ty {
				fn write_le(&self, out: &mut Vec<u8>) {
					out.extend_from_slice(&self.to_le_bytes());
				}

				fn read_le(input: &mut &[u8]) -> Result<Self> {
					let bytes = take(input, size_of::<$ty>())?;
					let mut buffer = [0u8; size_of::<$ty>()];
					buffer.copy_from_slice(bytes);
					Ok(<$ty>::from_le_bytes(buffer))
				}
			}
		)*
	};
}

impl_le!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

fn encode_numbers<T>(container: &NumberContainer<T>, out: &mut Vec<u8>) -> Result<()>
where
	T: IsNumber + Le,
{
	write_bitvec(out, container.bitvec());
	for row in 0..container.len() {
		if let Some(value) = container.get(row) {
			value.write_le(out);
		}
	}
	Ok(())
}

fn decode_numbers<T>(input: &mut &[u8], rows: usize) -> Result<NumberContainer<T>>
where
	T: IsNumber + Le,
{
	let bitvec = read_bitvec(input, rows)?;
	let mut container = NumberContainer::with_capacity(rows);
	for row in 0..rows {
		if bitvec.get(row) {
			container.push(T::read_le(input)?);
		} else {
			container.push_undefined();
		}
	}
	Ok(container)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Value;

	#[test]
	fn test_int8_roundtrip_with_undefined() {
		let mut column = ColumnData::Int8(NumberContainer::with_capacity(3));
		column.push_value(&Value::int8(-5i64)).unwrap();
		column.push_value(&Value::Undefined).unwrap();
		column.push_value(&Value::int8(7i64)).unwrap();

		let serialization = ScalarSerialization::new(TypeKind::Int8);
		let mut out = Vec::new();
		serialization.serialize_column(&column, &mut out).unwrap();

		let mut input = out.as_slice();
		let decoded = serialization.deserialize_column(&mut input, 3).unwrap();
		assert_eq!(decoded, column);
		assert!(input.is_empty());
	}

	#[test]
	fn test_utf8_roundtrip() {
		let mut column = ColumnData::Utf8(Utf8Container::with_capacity(2));
		column.push_value(&Value::utf8("hello")).unwrap();
		column.push_value(&Value::utf8("")).unwrap();

		let serialization = ScalarSerialization::new(TypeKind::Utf8);
		let mut out = Vec::new();
		serialization.serialize_column(&column, &mut out).unwrap();

		let mut input = out.as_slice();
		let decoded = serialization.deserialize_column(&mut input, 2).unwrap();
		assert_eq!(decoded, column);
	}

	#[test]
	fn test_wrong_column_kind() {
		let column = ColumnData::Utf8(Utf8Container::with_capacity(0));
		let serialization = ScalarSerialization::new(TypeKind::Int8);

		let err = serialization.serialize_column(&column, &mut Vec::new()).unwrap_err();
		assert_eq!(err.code(), "SERIAL_001");
	}

	#[test]
	fn test_truncated_input() {
		let serialization = ScalarSerialization::new(TypeKind::Int8);
		let mut input: &[u8] = &[0xFF];
		let err = serialization.deserialize_column(&mut input, 9).unwrap_err();
		assert_eq!(err.code(), "SERIAL_003");
	}

	#[test]
	fn test_invalid_utf8_payload() {
		let mut column = ColumnData::Blob(BlobContainer::with_capacity(1));
		column.push_value(&Value::blob(vec![0xFF, 0xFE])).unwrap();

		// Encode as blob, decode as text: the payload is not UTF-8.
		let mut out = Vec::new();
		ScalarSerialization::new(TypeKind::Blob).serialize_column(&column, &mut out).unwrap();

		let mut input = out.as_slice();
		let err = ScalarSerialization::new(TypeKind::Utf8)
			.deserialize_column(&mut input, 1)
			.unwrap_err();
		assert_eq!(err.code(), "SERIAL_004");
	}
}
