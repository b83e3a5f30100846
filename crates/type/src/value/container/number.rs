// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

use crate::{
	util::{BitVec, CowVec},
	value::IsNumber,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberContainer<T>
where
	T: IsNumber,
{
	values: CowVec<T>,
	bitvec: BitVec,
}

impl<T> NumberContainer<T>
where
	T: IsNumber,
{
	pub fn new(values: Vec<T>, bitvec: BitVec) -> Self {
		debug_assert_eq!(values.len(), bitvec.len());
		Self {
			values: CowVec::new(values),
			bitvec,
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: CowVec::with_capacity(capacity),
			bitvec: BitVec::with_capacity(capacity),
		}
	}

	pub fn from_vec(values: Vec<T>) -> Self {
		let len = values.len();
		Self {
			values: CowVec::new(values),
			bitvec: BitVec::repeat(len, true),
		}
	}

	pub fn len(&self) -> usize {
		debug_assert_eq!(self.values.len(), self.bitvec.len());
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn push(&mut self, value: T) {
		self.values.push(value);
		self.bitvec.push(true);
	}

	pub fn push_undefined(&mut self) {
		self.values.push(T::default());
		self.bitvec.push(false);
	}

	pub fn get(&self, index: usize) -> Option<T> {
		if index < self.len() && self.bitvec.get(index) {
			self.values.get(index).copied()
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

	pub fn values(&self) -> &[T] {
		self.values.as_slice()
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<T>> + '_ {
		self.values.iter().zip(self.bitvec.iter()).map(|(&v, defined)| defined.then_some(v))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_push() {
		let mut container: NumberContainer<i64> = NumberContainer::with_capacity(2);
		container.push(7);
		container.push_undefined();

		assert_eq!(container.len(), 2);
		assert_eq!(container.get(0), Some(7));
		assert_eq!(container.get(1), None);
		assert!(!container.is_defined(1));
	}

	#[test]
	fn test_from_vec() {
		let container = NumberContainer::from_vec(vec![1i32, 2, 3]);
		assert_eq!(container.len(), 3);
		for i in 0..3 {
			assert!(container.is_defined(i));
		}
	}

	#[test]
	fn test_iter() {
		let mut container: NumberContainer<u8> = NumberContainer::with_capacity(3);
		container.push(1);
		container.push_undefined();
		container.push(3);

		let collected: Vec<Option<u8>> = container.iter().collect();
		assert_eq!(collected, vec![Some(1), None, Some(3)]);
	}
}
