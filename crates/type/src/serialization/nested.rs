// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use crate::{
	Result,
	error::TypeError,
	serialization::{
		Serialization, SerializationKind, SerializationRef,
		io::{read_bitvec, write_bitvec},
	},
	value::{column::ColumnData, container::TupleContainer},
};

/// Tuple encoding: the row-level definedness bitmap, then each element's
/// sub-column through its own child strategy, in element order.
#[derive(Debug)]
pub struct NestedSerialization {
	children: Vec<SerializationRef>,
}

impl NestedSerialization {
	pub fn new(children: Vec<SerializationRef>) -> Self {
		Self {
			children,
		}
	}

	fn mismatch(&self) -> crate::Error {
		TypeError::SerializationShapeMismatch {
			ty: format!("{}-element Tuple", self.children.len()),
		}
		.into()
	}
}

impl Serialization for NestedSerialization {
	fn kind(&self) -> SerializationKind {
		SerializationKind::Nested
	}

	fn children(&self) -> &[SerializationRef] {
		&self.children
	}

	fn serialize_column(&self, column: &ColumnData, out: &mut Vec<u8>) -> Result<()> {
		let Some(container) = column.as_tuple() else {
			return Err(self.mismatch());
		};
		if container.columns().len() != self.children.len() {
			return Err(self.mismatch());
		}

		write_bitvec(out, container.bitvec());
		for (child, sub) in self.children.iter().zip(container.columns()) {
			child.serialize_column(sub, out)?;
		}
		Ok(())
	}

	fn deserialize_column(&self, input: &mut &[u8], rows: usize) -> Result<ColumnData> {
		let bitvec = read_bitvec(input, rows)?;
		let columns = self
			.children
			.iter()
			.map(|child| child.deserialize_column(input, rows))
			.collect::<Result<Vec<_>>>()?;
		Ok(ColumnData::Tuple(TupleContainer::from_parts(columns, bitvec)))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::value::{
		Value,
		r#type::{TupleType, Type},
	};

	fn point_type() -> Type {
		Type::Tuple(TupleType::new(vec![Arc::new(Type::Int8), Arc::new(Type::Utf8)]))
	}

	#[test]
	fn test_roundtrip() {
		let ty = point_type();
		let mut column = ty.create_column();
		column.push_value(&Value::tuple([Value::int8(1i64), Value::utf8("a")])).unwrap();
		column.push_value(&Value::Undefined).unwrap();
		column.push_value(&Value::tuple([Value::int8(2i64), Value::Undefined])).unwrap();

		let serialization = ty.default_serialization();
		let mut out = Vec::new();
		serialization.serialize_column(&column, &mut out).unwrap();

		let mut input = out.as_slice();
		let decoded = serialization.deserialize_column(&mut input, 3).unwrap();
		assert_eq!(decoded, column);
		assert!(input.is_empty());
	}

	#[test]
	fn test_arity_mismatch() {
		let ty = point_type();
		let column = ty.create_column();

		let one_child = NestedSerialization::new(vec![Type::Int8.default_serialization()]);
		let err = one_child.serialize_column(&column, &mut Vec::new()).unwrap_err();
		assert_eq!(err.code(), "SERIAL_001");
	}

	#[test]
	fn test_non_tuple_column() {
		let serialization = NestedSerialization::new(vec![Type::Int8.default_serialization()]);
		let column = Type::Int8.create_column();
		let err = serialization.serialize_column(&column, &mut Vec::new()).unwrap_err();
		assert_eq!(err.code(), "SERIAL_001");
	}
}
