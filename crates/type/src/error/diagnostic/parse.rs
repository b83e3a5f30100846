// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use super::Diagnostic;
use crate::error::TypeError;

pub(super) fn diagnostic(err: TypeError) -> Diagnostic {
	let message = err.to_string();
	match err {
		TypeError::UnknownTypeName {
			name,
		} => Diagnostic {
			code: "TYPE_PARSE_001".to_string(),
			message,
			fragment: Some(name),
			label: Some("not a known type".to_string()),
			help: Some(
				"valid names are the scalar kinds (Int8, Utf8, ...), Option(T), Dictionary(T) and Tuple(...)"
					.to_string(),
			),
			notes: vec![],
		},

		TypeError::UnexpectedCharacter {
			found,
			offset,
		} => Diagnostic {
			code: "TYPE_PARSE_002".to_string(),
			message,
			fragment: Some(found.to_string()),
			label: Some(format!("at byte offset {}", offset)),
			help: Some("type names consist of identifiers, parentheses, commas and spaces".to_string()),
			notes: vec![],
		},

		TypeError::UnexpectedEndOfTypeName => Diagnostic {
			code: "TYPE_PARSE_003".to_string(),
			message,
			fragment: None,
			label: Some("the type name ends mid-expression".to_string()),
			help: Some("check for a missing closing parenthesis".to_string()),
			notes: vec![],
		},

		TypeError::TrailingCharacters {
			offset,
		} => Diagnostic {
			code: "TYPE_PARSE_004".to_string(),
			message,
			fragment: None,
			label: Some(format!("at byte offset {}", offset)),
			help: Some("remove the extra input after the complete type name".to_string()),
			notes: vec![],
		},

		TypeError::WrongArgumentCount {
			name,
			expected,
			found,
		} => Diagnostic {
			code: "TYPE_PARSE_005".to_string(),
			message,
			fragment: Some(name.clone()),
			label: Some(format!("{} takes {} argument(s), found {}", name, expected, found)),
			help: match name.as_str() {
				"Option" | "Dictionary" => Some(format!("write {}(T) with exactly one inner type", name)),
				_ => Some(format!("{} does not take type arguments", name)),
			},
			notes: vec![],
		},

		TypeError::MixedFieldNaming => Diagnostic {
			code: "TYPE_PARSE_006".to_string(),
			message,
			fragment: None,
			label: Some("some fields are named, some are not".to_string()),
			help: Some("name every field or none: Tuple(a Int8, b Utf8) or Tuple(Int8, Utf8)".to_string()),
			notes: vec![],
		},

		_ => unreachable!("not a parse error"),
	}
}
