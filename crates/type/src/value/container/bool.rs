// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

use crate::util::BitVec;

/// Boolean column data. Values and the definedness mask are both packed bit
/// vectors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolContainer {
	data: BitVec,
	bitvec: BitVec,
}

impl BoolContainer {
	pub fn new(data: Vec<bool>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: BitVec::from_slice(&data),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: BitVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<bool>) -> Self {
		let len = data.len();
		Self {
			data: BitVec::from_slice(&data),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.data.len(), self.bitvec.len());
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn push(&mut self, value: bool) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(false);
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<bool> {
		if self.is_defined(index) {
			Some(self.data.get(index))
		} else {
			None
		}
	}

	pub fn is_defined(&self, index: usize) -> bool {
		index < self.len() && self.bitvec.get(index)
	}

	pub fn bitvec(&self) -> &BitVec {
		&self.bitvec
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<bool>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| defined.then_some(v))
	}
}
