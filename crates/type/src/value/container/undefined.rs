// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

/// A column of the `Undefined` type: no data, only a row count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndefinedContainer {
	len: usize,
}

impl UndefinedContainer {
	pub fn new(len: usize) -> Self {
		Self {
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn push_undefined(&mut self) {
		self.len += 1;
	}
}
