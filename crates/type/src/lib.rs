// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

//! Value types and type descriptors for BasaltDB.
//!
//! A [`Type`] describes one value kind and answers everything query
//! planning, execution and storage need from it: identity, canonical names,
//! structural equality and hashing, field resolution, column
//! materialization and serialization strategy selection. Descriptors are
//! immutable and shared via [`TypeRef`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod serialization;
pub mod util;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic, Result, TypeError};
pub use serialization::{
	NestedSerialization, ScalarSerialization, Serialization, SerializationInfo,
	SerializationKind, SerializationRef, SerializationSettings, SparseSerialization,
};
pub use util::{BitVec, CowVec};
pub use value::{
	Blob, ColumnData, GetType, IsNumber, OrderedF32, OrderedF64, OrderedFloatError, TupleType,
	Type, TypeKind, TypeRef, Value, parse_type,
};
