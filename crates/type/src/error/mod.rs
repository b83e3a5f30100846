// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::fmt::{self, Display, Formatter};

pub mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

/// Typed failure modes of the type layer. Rendering into a user-facing
/// [`Diagnostic`] happens in [`diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
	#[error("tuple has {elements} elements but {names} field names")]
	FieldCountMismatch {
		elements: usize,
		names: usize,
	},

	#[error("tuple field name at position {position} is empty")]
	EmptyFieldName {
		position: usize,
	},

	#[error("tuple field name '{name}' starts with a digit")]
	ReservedFieldName {
		name: String,
		position: usize,
	},

	#[error("duplicate tuple field name '{name}'")]
	DuplicateFieldName {
		name: String,
	},

	#[error("tuple has no field named '{name}'")]
	FieldNotFound {
		name: String,
		case_insensitive: bool,
	},

	#[error("tuple position {position} is out of range for {elements} elements")]
	PositionOutOfRange {
		position: usize,
		elements: usize,
	},

	#[error("column of type {found} does not match type {expected}")]
	ColumnTypeMismatch {
		expected: String,
		found: String,
	},

	#[error("tuple column has {columns} sub-columns but the type has {elements} elements")]
	ColumnArityMismatch {
		elements: usize,
		columns: usize,
	},

	#[error("value of type {value} cannot be pushed onto a {column} column")]
	ValueTypeMismatch {
		column: String,
		value: String,
	},

	#[error("serialization does not decompose like type {ty}")]
	SerializationShapeMismatch {
		ty: String,
	},

	#[error("serialization info does not mirror type {ty}")]
	SerializationInfoShapeMismatch {
		ty: String,
		children: usize,
	},

	#[error("unexpected end of input while decoding a column")]
	UnexpectedEndOfInput,

	#[error("decoded text column contains invalid UTF-8")]
	InvalidUtf8Payload,

	#[error("sparse row index {index} is out of range for {rows} rows")]
	InvalidSparseIndex {
		index: u64,
		rows: usize,
	},

	#[error("unknown type name '{name}'")]
	UnknownTypeName {
		name: String,
	},

	#[error("unexpected character '{found}' in type name")]
	UnexpectedCharacter {
		found: char,
		offset: usize,
	},

	#[error("unexpected end of type name")]
	UnexpectedEndOfTypeName,

	#[error("trailing characters after type name")]
	TrailingCharacters {
		offset: usize,
	},

	#[error("type {name} takes {expected} argument(s), found {found}")]
	WrongArgumentCount {
		name: String,
		expected: usize,
		found: usize,
	},

	#[error("tuple field names must be given for all fields or for none")]
	MixedFieldNaming,
}

/// The error type of this crate: a rendered diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn into_diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(err.into_diagnostic())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
