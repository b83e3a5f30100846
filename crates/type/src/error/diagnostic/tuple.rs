// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use super::Diagnostic;
use crate::error::TypeError;

pub(super) fn diagnostic(err: TypeError) -> Diagnostic {
	let message = err.to_string();
	match err {
		TypeError::FieldCountMismatch {
			elements,
			names,
		} => Diagnostic {
			code: "TUPLE_001".to_string(),
			message,
			fragment: None,
			label: Some(format!("expected {} field names, found {}", elements, names)),
			help: Some("provide exactly one name per tuple element, or no names at all".to_string()),
			notes: vec![
				"unnamed tuples address their fields with positional names '1', '2', ...".to_string(),
			],
		},

		TypeError::EmptyFieldName {
			position,
		} => Diagnostic {
			code: "TUPLE_002".to_string(),
			message,
			fragment: None,
			label: Some(format!("field {} has an empty name", position + 1)),
			help: Some("use a non-empty field name, or omit names entirely".to_string()),
			notes: vec![],
		},

		TypeError::ReservedFieldName {
			name,
			position,
		} => Diagnostic {
			code: "TUPLE_003".to_string(),
			message,
			fragment: Some(name),
			label: Some(format!("field {} uses a reserved name", position + 1)),
			help: Some("field names must not start with a digit".to_string()),
			notes: vec![
				"names starting with a digit are reserved for positional access ('1', '2', ...)"
					.to_string(),
			],
		},

		TypeError::DuplicateFieldName {
			name,
		} => Diagnostic {
			code: "TUPLE_004".to_string(),
			message,
			fragment: Some(name),
			label: Some("field name used more than once".to_string()),
			help: Some("every tuple field name must be unique (case-sensitive)".to_string()),
			notes: vec![],
		},

		TypeError::FieldNotFound {
			name,
			case_insensitive,
		} => Diagnostic {
			code: "TUPLE_005".to_string(),
			message,
			fragment: Some(name),
			label: Some("no such field".to_string()),
			help: Some(if case_insensitive {
				"check the field name for typos".to_string()
			} else {
				"check the field name for typos, or retry with case-insensitive lookup".to_string()
			}),
			notes: vec![],
		},

		TypeError::PositionOutOfRange {
			position,
			elements,
		} => Diagnostic {
			code: "TUPLE_006".to_string(),
			message,
			fragment: None,
			label: Some(format!("valid positions are 0..{}", elements)),
			help: Some(format!("the tuple has {} element(s), position {} does not exist", elements, position)),
			notes: vec![],
		},

		_ => unreachable!("not a tuple error"),
	}
}
