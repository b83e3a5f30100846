// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{
	fmt::{self, Debug},
	ops::{Deref, Index},
	sync::Arc,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Arc-backed copy-on-write vector. Clones share the allocation until one
/// side mutates.
pub struct CowVec<T> {
	inner: Arc<Vec<T>>,
}

impl<T> CowVec<T> {
	pub fn new(values: Vec<T>) -> Self {
		Self {
			inner: Arc::new(values),
		}
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: Arc::new(Vec::with_capacity(capacity)),
		}
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity()
	}

	pub fn as_slice(&self) -> &[T] {
		self.inner.as_slice()
	}

	pub fn get(&self, index: usize) -> Option<&T> {
		self.inner.get(index)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.inner.iter()
	}

	/// Recover the inner vec without cloning. Fails when the allocation is
	/// still shared.
	pub fn try_into_vec(self) -> Result<Vec<T>, Self> {
		Arc::try_unwrap(self.inner).map_err(|inner| Self {
			inner,
		})
	}
}

impl<T: Clone> CowVec<T> {
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.inner)
	}

	pub fn push(&mut self, value: T) {
		self.make_mut().push(value);
	}

	pub fn clear(&mut self) {
		self.make_mut().clear();
	}

	pub fn extend(&mut self, values: impl IntoIterator<Item = T>) {
		self.make_mut().extend(values);
	}

	pub fn extend_from_slice(&mut self, values: &[T]) {
		self.make_mut().extend_from_slice(values);
	}
}

impl<T> Clone for CowVec<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		self.inner.as_slice()
	}
}

impl<T> Index<usize> for CowVec<T> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self.inner[index]
	}
}

impl<T: Debug> Debug for CowVec<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.inner.fmt(f)
	}
}

impl<T: PartialEq> PartialEq for CowVec<T> {
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T: Eq> Eq for CowVec<T> {}

impl<T> Default for CowVec<T> {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl<T> FromIterator<T> for CowVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<T: Serialize> Serialize for CowVec<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.inner.serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowVec<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(Self::new(Vec::deserialize(deserializer)?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clone_shares_until_mutated() {
		let mut a = CowVec::new(vec![1, 2, 3]);
		let b = a.clone();

		a.push(4);

		assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
		assert_eq!(b.as_slice(), &[1, 2, 3]);
	}

	#[test]
	fn test_try_into_vec() {
		let a = CowVec::new(vec![1, 2]);
		let b = a.clone();

		assert!(a.try_into_vec().is_err());
		assert_eq!(b.try_into_vec().unwrap(), vec![1, 2]);
	}

	#[test]
	fn test_extend() {
		let mut a = CowVec::with_capacity(4);
		a.extend([1, 2]);
		a.extend_from_slice(&[3]);
		assert_eq!(a.len(), 3);
		assert_eq!(a[2], 3);
	}
}
