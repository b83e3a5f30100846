// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

use crate::{
	Result,
	error::TypeError,
	util::BitVec,
	value::{Value, column::ColumnData},
};

/// Tuple column data: one sub-column per element, plus a row-level
/// definedness mask for rows where the tuple as a whole is undefined.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TupleContainer {
	columns: Vec<ColumnData>,
	bitvec: BitVec,
}

impl TupleContainer {
	pub fn new(columns: Vec<ColumnData>) -> Self {
		let len = columns.first().map_or(0, ColumnData::len);
		debug_assert!(columns.iter().all(|c| c.len() == len));
		Self {
			columns,
			bitvec: BitVec::repeat(len, true),
		}
	}

	/// Reassemble from decoded sub-columns and a row mask.
	pub fn from_parts(columns: Vec<ColumnData>, bitvec: BitVec) -> Self {
		debug_assert!(columns.iter().all(|c| c.len() == bitvec.len()));
		Self {
			columns,
			bitvec,
		}
	}

	pub fn len(&self) -> usize {
		self.bitvec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bitvec.is_empty()
	}

	pub fn columns(&self) -> &[ColumnData] {
		&self.columns
	}

	pub fn columns_mut(&mut self) -> &mut [ColumnData] {
		&mut self.columns
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	/// Append one row. `values` must carry exactly one value per sub-column.
	/// The row is validated up front, so nothing is appended on failure.
	pub fn push_row(&mut self, values: &[Value]) -> Result<()> {
		if values.len() != self.columns.len() {
			return Err(TypeError::ValueTypeMismatch {
				column: format!("{}-element Tuple", self.columns.len()),
				value: format!("{}-element Tuple", values.len()),
			}
			.into());
		}
		for (column, value) in self.columns.iter().zip(values) {
			column.check_value(value)?;
		}
		for (column, value) in self.columns.iter_mut().zip(values) {
			column.push_value(value)?;
		}
		self.bitvec.push(true);
		Ok(())
	}

	pub fn push_undefined(&mut self) {
		for column in &mut self.columns {
			column.push_undefined();
		}
		self.bitvec.push(false);
	}

	pub fn get_row(&self, index: usize) -> Value {
		if !self.is_defined(index) {
			return Value::Undefined;
		}
		Value::Tuple(self.columns.iter().map(|c| c.get_value(index)).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::container::{NumberContainer, Utf8Container};

	fn int8_utf8() -> TupleContainer {
		TupleContainer::new(vec![
			ColumnData::Int8(NumberContainer::with_capacity(0)),
			ColumnData::Utf8(Utf8Container::with_capacity(0)),
		])
	}

	#[test]
	fn test_push_row() {
		let mut container = int8_utf8();
		container.push_row(&[Value::int8(1i64), Value::utf8("a")]).unwrap();

		assert_eq!(container.len(), 1);
		assert_eq!(container.get_row(0), Value::tuple([Value::int8(1i64), Value::utf8("a")]));
	}

	#[test]
	fn test_push_row_wrong_arity() {
		let mut container = int8_utf8();
		let err = container.push_row(&[Value::int8(1i64)]).unwrap_err();
		assert_eq!(err.code(), "COLUMN_003");
	}

	#[test]
	fn test_push_undefined() {
		let mut container = int8_utf8();
		container.push_undefined();

		assert_eq!(container.len(), 1);
		assert_eq!(container.get_row(0), Value::Undefined);
		assert_eq!(container.columns()[0].len(), 1);
	}
}
