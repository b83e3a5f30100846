// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use serde::{Deserialize, Serialize};

/// Knobs for serialization selection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerializationSettings {
	/// Minimum share of default values before a column is encoded sparsely.
	pub ratio_of_defaults_for_sparse: f64,
}

impl Default for SerializationSettings {
	fn default() -> Self {
		Self {
			ratio_of_defaults_for_sparse: 0.9375,
		}
	}
}

/// Per-column serialization statistics, shaped like the type that owns the
/// column: leaves for scalars, one child slot per tuple element.
///
/// A statistics-collection pass populates the counters via [`Self::record`];
/// the type descriptor then selects a strategy from the populated tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SerializationInfo {
	rows: u64,
	defaults: u64,
	settings: SerializationSettings,
	children: Vec<SerializationInfo>,
}

impl SerializationInfo {
	pub fn new(settings: SerializationSettings) -> Self {
		Self {
			rows: 0,
			defaults: 0,
			settings,
			children: Vec::new(),
		}
	}

	pub fn with_children(settings: SerializationSettings, children: Vec<SerializationInfo>) -> Self {
		Self {
			rows: 0,
			defaults: 0,
			settings,
			children,
		}
	}

	pub fn rows(&self) -> u64 {
		self.rows
	}

	pub fn defaults(&self) -> u64 {
		self.defaults
	}

	pub fn settings(&self) -> SerializationSettings {
		self.settings
	}

	pub fn children(&self) -> &[SerializationInfo] {
		&self.children
	}

	pub fn children_mut(&mut self) -> &mut [SerializationInfo] {
		&mut self.children
	}

	/// Account for one observed value.
	pub fn record(&mut self, is_default: bool) {
		self.rows += 1;
		if is_default {
			self.defaults += 1;
		}
	}

	pub fn ratio_of_defaults(&self) -> f64 {
		if self.rows == 0 {
			return 0.0;
		}
		self.defaults as f64 / self.rows as f64
	}

	pub fn prefers_sparse(&self) -> bool {
		self.rows > 0 && self.ratio_of_defaults() >= self.settings.ratio_of_defaults_for_sparse
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_info_is_dense() {
		let info = SerializationInfo::new(SerializationSettings::default());
		assert!(!info.prefers_sparse());
		assert_eq!(info.ratio_of_defaults(), 0.0);
	}

	#[test]
	fn test_ratio_threshold() {
		let mut info = SerializationInfo::new(SerializationSettings::default());
		for _ in 0..15 {
			info.record(true);
		}
		info.record(false);

		// 15/16 = 0.9375, exactly the default threshold
		assert!(info.prefers_sparse());

		info.record(false);
		assert!(!info.prefers_sparse());
	}

	#[test]
	fn test_custom_threshold() {
		let settings = SerializationSettings {
			ratio_of_defaults_for_sparse: 0.5,
		};
		let mut info = SerializationInfo::new(settings);
		info.record(true);
		info.record(false);

		assert!(info.prefers_sparse());
	}
}
