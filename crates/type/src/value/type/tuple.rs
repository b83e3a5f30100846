// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{
	collections::HashSet,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	sync::Arc,
};

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use crate::{
	Result,
	error::TypeError,
	serialization::{
		NestedSerialization, Serialization, SerializationInfo, SerializationKind,
		SerializationRef, SerializationSettings, SparseSerialization,
	},
	value::{
		Value,
		column::ColumnData,
		container::TupleContainer,
		r#type::{TypeKind, TypeRef},
	},
};

/// In-memory bookkeeping per tuple field, on top of the element sizes.
const PER_FIELD_OVERHEAD: usize = 1;

/// The composite (tuple/record) type descriptor: an ordered list of element
/// types, optionally with field names.
///
/// Unnamed elements are addressable through positional names "1", "2", "3",
/// ... corresponding to their 1-indexed position. Explicit names must be
/// unique and must not begin with a digit.
///
/// Tuples with the same element types are equal regardless of field names.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TupleType {
	elements: Vec<TypeRef>,
	names: Vec<String>,
	has_explicit_names: bool,
}

impl TupleType {
	/// An unnamed tuple. Fields answer to their positional names.
	pub fn new(elements: Vec<TypeRef>) -> Self {
		Self {
			elements,
			names: Vec::new(),
			has_explicit_names: false,
		}
	}

	/// A named tuple. Rejects name/element count mismatches, empty names,
	/// names starting with a digit and duplicate names; nothing is
	/// observable on failure.
	pub fn with_names(elements: Vec<TypeRef>, names: Vec<String>) -> Result<Self> {
		if names.len() != elements.len() {
			return Err(TypeError::FieldCountMismatch {
				elements: elements.len(),
				names: names.len(),
			}
			.into());
		}

		let mut seen = HashSet::with_capacity(names.len());
		for (position, name) in names.iter().enumerate() {
			if name.is_empty() {
				return Err(TypeError::EmptyFieldName {
					position,
				}
				.into());
			}
			if name.starts_with(|c: char| c.is_ascii_digit()) {
				return Err(TypeError::ReservedFieldName {
					name: name.clone(),
					position,
				}
				.into());
			}
			if !seen.insert(name.as_str()) {
				return Err(TypeError::DuplicateFieldName {
					name: name.clone(),
				}
				.into());
			}
		}

		Ok(Self {
			elements,
			names,
			has_explicit_names: true,
		})
	}

	pub fn elements(&self) -> &[TypeRef] {
		&self.elements
	}

	pub fn element(&self, index: usize) -> Option<&TypeRef> {
		self.elements.get(index)
	}

	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn has_explicit_names(&self) -> bool {
		self.has_explicit_names
	}

	pub fn len(&self) -> usize {
		self.elements.len()
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}
}

impl TupleType {
	/// The field name at `index`: the explicit name when present, otherwise
	/// the synthesized positional name.
	pub fn name_by_position(&self, index: usize) -> Result<String> {
		if index >= self.elements.len() {
			return Err(TypeError::PositionOutOfRange {
				position: index,
				elements: self.elements.len(),
			}
			.into());
		}
		if self.has_explicit_names {
			Ok(self.names[index].clone())
		} else {
			Ok((index + 1).to_string())
		}
	}

	/// 0-based index of the field with the given name.
	///
	/// Exact comparison runs first; the case-folded retry only happens when
	/// `case_insensitive` is set and nothing matched exactly. Names are
	/// unique under exact comparison, but two differently-cased names can
	/// collide under folding; the first match in declaration order wins.
	pub fn try_position_by_name(&self, name: &str, case_insensitive: bool) -> Option<usize> {
		if self.has_explicit_names {
			if let Some(index) = self.names.iter().position(|n| n == name) {
				return Some(index);
			}
			if case_insensitive {
				let folded = name.to_lowercase();
				return self.names.iter().position(|n| n.to_lowercase() == folded);
			}
			None
		} else {
			// Positional names are pure digit strings, so case folding
			// never changes the outcome.
			let position: usize = name.parse().ok()?;
			if position >= 1 && position <= self.elements.len() && name == position.to_string() {
				Some(position - 1)
			} else {
				None
			}
		}
	}

	/// Like [`Self::try_position_by_name`], failing with a diagnostic
	/// instead of `None`.
	pub fn position_by_name(&self, name: &str, case_insensitive: bool) -> Result<usize> {
		self.try_position_by_name(name, case_insensitive).ok_or_else(|| {
			TypeError::FieldNotFound {
				name: name.to_string(),
				case_insensitive,
			}
			.into()
		})
	}
}

impl TupleType {
	pub(crate) fn pretty_name(&self, indent: usize) -> String {
		if self.elements.is_empty() {
			return "Tuple()".to_string();
		}

		let field_pad = "    ".repeat(indent + 1);
		let close_pad = "    ".repeat(indent);

		let mut out = String::from("Tuple(\n");
		for (index, element) in self.elements.iter().enumerate() {
			out.push_str(&field_pad);
			if self.has_explicit_names {
				out.push_str(&self.names[index]);
				out.push(' ');
			}
			out.push_str(&element.pretty_name(indent + 1));
			if index + 1 < self.elements.len() {
				out.push(',');
			}
			out.push('\n');
		}
		out.push_str(&close_pad);
		out.push(')');
		out
	}

	/// Identity contribution: tag, element count, then each element, in
	/// order. Field names never participate, matching equality.
	pub fn update_hash(&self, hasher: &mut Xxh3) {
		hasher.update(&[TypeKind::Tuple.to_u8()]);
		hasher.update(&(self.elements.len() as u64).to_le_bytes());
		for element in &self.elements {
			element.update_hash(hasher);
		}
	}

	/// Element-wise normalization. Field names are kept so the normalized
	/// descriptor prints (and re-parses) with the same field shape.
	pub fn normalized(&self) -> TupleType {
		TupleType {
			elements: self.elements.iter().map(|e| Arc::new(e.normalized())).collect(),
			names: self.names.clone(),
			has_explicit_names: self.has_explicit_names,
		}
	}

	pub fn maximum_size_of_value_in_memory(&self) -> Option<usize> {
		let mut total = 0;
		for element in &self.elements {
			total += element.maximum_size_of_value_in_memory()? + PER_FIELD_OVERHEAD;
		}
		Some(total)
	}

	pub fn size_of_value_in_memory(&self) -> Option<usize> {
		let mut total = 0;
		for element in &self.elements {
			total += element.size_of_value_in_memory()? + PER_FIELD_OVERHEAD;
		}
		Some(total)
	}
}

impl TupleType {
	pub fn default_value(&self) -> Value {
		Value::Tuple(self.elements.iter().map(|e| e.default_value()).collect())
	}

	pub fn create_column(&self) -> ColumnData {
		ColumnData::Tuple(TupleContainer::new(
			self.elements.iter().map(|e| e.create_column()).collect(),
		))
	}

	pub fn create_column_with(&self, serialization: &dyn Serialization) -> Result<ColumnData> {
		let children = serialization.children();
		if serialization.kind() != SerializationKind::Nested
			|| children.len() != self.elements.len()
		{
			return Err(TypeError::SerializationShapeMismatch {
				ty: self.to_string(),
			}
			.into());
		}

		let columns = self
			.elements
			.iter()
			.zip(children)
			.map(|(element, child)| element.create_column_with(child.as_ref()))
			.collect::<Result<Vec<_>>>()?;
		Ok(ColumnData::Tuple(TupleContainer::new(columns)))
	}

	pub fn column_matches(&self, column: &ColumnData) -> Result<()> {
		let Some(container) = column.as_tuple() else {
			return Err(TypeError::ColumnTypeMismatch {
				expected: self.to_string(),
				found: column.kind().to_string(),
			}
			.into());
		};
		if container.columns().len() != self.elements.len() {
			return Err(TypeError::ColumnArityMismatch {
				elements: self.elements.len(),
				columns: container.columns().len(),
			}
			.into());
		}
		for (element, sub) in self.elements.iter().zip(container.columns()) {
			element.column_matches(sub)?;
		}
		Ok(())
	}
}

impl TupleType {
	pub fn default_serialization(&self) -> SerializationRef {
		Arc::new(NestedSerialization::new(
			self.elements.iter().map(|e| e.default_serialization()).collect(),
		))
	}

	/// Per element: sparse when the element's statistics cross the ratio
	/// threshold and the element may live inside a sparse column; its own
	/// statistics-driven choice otherwise. The composite itself is never
	/// sparse.
	pub fn serialization(&self, info: &SerializationInfo) -> Result<SerializationRef> {
		let children = info.children();
		if children.len() != self.elements.len() {
			return Err(TypeError::SerializationInfoShapeMismatch {
				ty: self.to_string(),
				children: children.len(),
			}
			.into());
		}

		let mut selected = Vec::with_capacity(self.elements.len());
		for (index, (element, child)) in self.elements.iter().zip(children).enumerate() {
			if child.prefers_sparse() && element.can_be_inside_sparse_columns() {
				tracing::debug!(
					element = index,
					ty = %element,
					ratio = child.ratio_of_defaults(),
					"selecting sparse serialization for tuple element"
				);
				selected.push(Arc::new(SparseSerialization::new(
					element.clone(),
					element.default_serialization(),
				)) as SerializationRef);
			} else {
				selected.push(element.serialization(child)?);
			}
		}
		Ok(Arc::new(NestedSerialization::new(selected)))
	}

	pub fn create_serialization_info(&self, settings: SerializationSettings) -> SerializationInfo {
		SerializationInfo::with_children(
			settings,
			self.elements.iter().map(|e| e.create_serialization_info(settings)).collect(),
		)
	}

	pub fn serialization_info_for(
		&self,
		column: &ColumnData,
		settings: SerializationSettings,
	) -> Result<SerializationInfo> {
		self.column_matches(column)?;
		let Some(container) = column.as_tuple() else {
			return Err(TypeError::ColumnTypeMismatch {
				expected: self.to_string(),
				found: column.kind().to_string(),
			}
			.into());
		};

		let children = self
			.elements
			.iter()
			.zip(container.columns())
			.map(|(element, sub)| element.serialization_info_for(sub, settings))
			.collect::<Result<Vec<_>>>()?;

		let mut info = SerializationInfo::with_children(settings, children);
		let default = self.default_value();
		for row in 0..container.len() {
			info.record(container.get_row(row) == default);
		}
		Ok(info)
	}
}

/// Equality is structural and position-wise over the element types. Field
/// names are not part of the identity.
impl PartialEq for TupleType {
	fn eq(&self, other: &Self) -> bool {
		self.elements == other.elements
	}
}

impl Eq for TupleType {}

impl Hash for TupleType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.elements.hash(state);
	}
}

impl Display for TupleType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("Tuple(")?;
		for (index, element) in self.elements.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			if self.has_explicit_names {
				write!(f, "{} {}", self.names[index], element)?;
			} else {
				Display::fmt(element, f)?;
			}
		}
		f.write_str(")")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::r#type::Type;

	fn int8() -> TypeRef {
		Arc::new(Type::Int8)
	}

	fn utf8() -> TypeRef {
		Arc::new(Type::Utf8)
	}

	#[test]
	fn test_unnamed_positional_names() {
		let tuple = TupleType::new(vec![int8(), utf8(), int8()]);

		assert!(!tuple.has_explicit_names());
		assert_eq!(tuple.name_by_position(0).unwrap(), "1");
		assert_eq!(tuple.name_by_position(1).unwrap(), "2");
		assert_eq!(tuple.name_by_position(2).unwrap(), "3");

		assert_eq!(tuple.position_by_name("2", false).unwrap(), 1);
		assert!(tuple.try_position_by_name("4", false).is_none());
		assert!(tuple.try_position_by_name("0", false).is_none());
		assert!(tuple.try_position_by_name("02", false).is_none());
		assert!(tuple.try_position_by_name("+1", false).is_none());
	}

	#[test]
	fn test_named_lookup() {
		let tuple = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["id".to_string(), "name".to_string()],
		)
		.unwrap();

		assert!(tuple.has_explicit_names());
		assert_eq!(tuple.position_by_name("id", false).unwrap(), 0);
		assert_eq!(tuple.position_by_name("name", false).unwrap(), 1);
		assert_eq!(tuple.name_by_position(1).unwrap(), "name");
	}

	#[test]
	fn test_name_by_position_out_of_range() {
		let tuple = TupleType::new(vec![int8()]);
		let err = tuple.name_by_position(1).unwrap_err();
		assert_eq!(err.code(), "TUPLE_006");
	}

	#[test]
	fn test_rejects_digit_leading_name() {
		let err = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["1".to_string(), "a".to_string()],
		)
		.unwrap_err();
		assert_eq!(err.code(), "TUPLE_003");
	}

	#[test]
	fn test_rejects_duplicate_name() {
		let err = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["x".to_string(), "x".to_string()],
		)
		.unwrap_err();
		assert_eq!(err.code(), "TUPLE_004");
	}

	#[test]
	fn test_rejects_count_mismatch() {
		let err = TupleType::with_names(vec![int8(), utf8()], vec!["x".to_string()]).unwrap_err();
		assert_eq!(err.code(), "TUPLE_001");
	}

	#[test]
	fn test_rejects_empty_name() {
		let err = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["x".to_string(), String::new()],
		)
		.unwrap_err();
		assert_eq!(err.code(), "TUPLE_002");
	}

	#[test]
	fn test_equality_ignores_names() {
		let named = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["x".to_string(), "y".to_string()],
		)
		.unwrap();
		let unnamed = TupleType::new(vec![int8(), utf8()]);

		assert_eq!(named, unnamed);

		let swapped = TupleType::new(vec![utf8(), int8()]);
		assert_ne!(named, swapped);
	}

	#[test]
	fn test_case_insensitive_lookup() {
		let tuple = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["Id".to_string(), "Name".to_string()],
		)
		.unwrap();

		assert_eq!(tuple.position_by_name("id", true).unwrap(), 0);

		let err = tuple.position_by_name("id", false).unwrap_err();
		assert_eq!(err.code(), "TUPLE_005");
	}

	#[test]
	fn test_case_insensitive_prefers_exact_then_declaration_order() {
		let tuple = TupleType::with_names(
			vec![int8(), utf8(), int8()],
			vec!["ID".to_string(), "Id".to_string(), "id".to_string()],
		)
		.unwrap();

		// Exact match wins outright.
		assert_eq!(tuple.position_by_name("Id", true).unwrap(), 1);
		// Case-folded ambiguity resolves to the first declared field.
		assert_eq!(tuple.position_by_name("iD", true).unwrap(), 0);
	}

	#[test]
	fn test_canonical_name() {
		let unnamed = TupleType::new(vec![int8(), utf8()]);
		assert_eq!(unnamed.to_string(), "Tuple(Int8, Utf8)");

		let named = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["id".to_string(), "name".to_string()],
		)
		.unwrap();
		assert_eq!(named.to_string(), "Tuple(id Int8, name Utf8)");

		assert_eq!(TupleType::new(vec![]).to_string(), "Tuple()");
	}

	#[test]
	fn test_pretty_name() {
		let named = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["id".to_string(), "name".to_string()],
		)
		.unwrap();

		assert_eq!(named.pretty_name(0), "Tuple(\n    id Int8,\n    name Utf8\n)");
		assert_eq!(named.pretty_name(1), "Tuple(\n        id Int8,\n        name Utf8\n    )");
		assert_eq!(TupleType::new(vec![]).pretty_name(0), "Tuple()");
	}

	#[test]
	fn test_hash_matches_equality() {
		let named = TupleType::with_names(
			vec![int8(), utf8()],
			vec!["x".to_string(), "y".to_string()],
		)
		.unwrap();
		let unnamed = TupleType::new(vec![int8(), utf8()]);

		let mut a = Xxh3::new();
		named.update_hash(&mut a);
		let mut b = Xxh3::new();
		unnamed.update_hash(&mut b);
		assert_eq!(a.digest(), b.digest());

		let swapped = TupleType::new(vec![utf8(), int8()]);
		let mut c = Xxh3::new();
		swapped.update_hash(&mut c);
		assert_ne!(a.digest(), c.digest());
	}

	#[test]
	fn test_sizes_sum_with_overhead() {
		let tuple = TupleType::new(vec![int8(), Arc::new(Type::Int4)]);
		assert_eq!(tuple.maximum_size_of_value_in_memory(), Some(8 + 4 + 2 * PER_FIELD_OVERHEAD));

		let with_text = TupleType::new(vec![int8(), utf8()]);
		assert_eq!(with_text.maximum_size_of_value_in_memory(), None);
	}

	#[test]
	fn test_default_value() {
		let tuple = TupleType::new(vec![int8(), utf8()]);
		assert_eq!(
			tuple.default_value(),
			Value::tuple([Value::Int8(0), Value::Utf8(String::new())])
		);
	}
}
