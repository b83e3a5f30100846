// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{
	fmt::{self, Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// A binary large object. Arbitrary bytes, not guaranteed to be UTF-8.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob(Vec<u8>);

impl Blob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	pub fn empty() -> Self {
		Self(Vec::new())
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Deref for Blob {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self(bytes.to_vec())
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("0x")?;
		for byte in &self.0 {
			write!(f, "{:02X}", byte)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_hex() {
		let blob = Blob::new(vec![0x00, 0xAB, 0x10]);
		assert_eq!(blob.to_string(), "0x00AB10");
	}

	#[test]
	fn test_empty() {
		assert_eq!(Blob::empty().to_string(), "0x");
		assert!(Blob::empty().is_empty());
	}
}
