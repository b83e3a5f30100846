// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

use crate::util::{BitVec, CowVec};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utf8Container {
	data: CowVec<String>,
	bitvec: BitVec,
}

impl Utf8Container {
	pub fn new(data: Vec<String>, bitvec: BitVec) -> Self {
		debug_assert_eq!(data.len(), bitvec.len());
		Self {
			data: CowVec::new(data),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			data: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(data: Vec<String>) -> Self {
		let len = data.len();
		Self {
			data: CowVec::new(data),
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

	pub fn push(&mut self, value: String) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(String::new());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		if self.is_defined(index) {
			self.data.get(index).map(String::as_str)
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

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
		self.data
			.iter()
			.zip(self.bitvec.iter())
			.map(|(v, defined)| defined.then_some(v.as_str()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push() {
		let mut container = Utf8Container::with_capacity(2);
		container.push("hello".to_string());
		container.push_undefined();

		assert_eq!(container.len(), 2);
		assert_eq!(container.get(0), Some("hello"));
		assert_eq!(container.get(1), None);
	}
}
