// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

use crate::{
	util::{BitVec, CowVec},
	value::Blob,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobContainer {
	data: CowVec<Blob>,
	bitvec: BitVec,
}

impl BlobContainer {
	pub fn new(data: Vec<Blob>, bitvec: BitVec) -> Self {
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

	pub fn from_vec(data: Vec<Blob>) -> Self {
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

	pub fn push(&mut self, value: Blob) {
		self.data.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.data.push(Blob::empty());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<&Blob> {
		if self.is_defined(index) {
			self.data.get(index)
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

	pub fn iter(&self) -> impl Iterator<Item = Option<&Blob>> + '_ {
		self.data.iter().zip(self.bitvec.iter()).map(|(v, defined)| defined.then_some(v))
	}
}
