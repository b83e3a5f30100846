// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use super::Diagnostic;
use crate::error::TypeError;

pub(super) fn diagnostic(err: TypeError) -> Diagnostic {
	let message = err.to_string();
	match err {
		TypeError::SerializationShapeMismatch {
			ty,
		} => Diagnostic {
			code: "SERIAL_001".to_string(),
			message,
			fragment: Some(ty),
			label: Some("strategy and type decompose differently".to_string()),
			help: Some(
				"obtain the strategy from the same type descriptor the column was created for".to_string(),
			),
			notes: vec![],
		},

		TypeError::SerializationInfoShapeMismatch {
			ty,
			children,
		} => Diagnostic {
			code: "SERIAL_002".to_string(),
			message,
			fragment: Some(ty),
			label: Some(format!("info carries {} child slot(s)", children)),
			help: Some("build the info object via the type's own statistics factory".to_string()),
			notes: vec![],
		},

		TypeError::UnexpectedEndOfInput => Diagnostic {
			code: "SERIAL_003".to_string(),
			message,
			fragment: None,
			label: Some("input ended mid-column".to_string()),
			help: Some("the byte stream is truncated or was written by a different strategy".to_string()),
			notes: vec![],
		},

		TypeError::InvalidUtf8Payload => Diagnostic {
			code: "SERIAL_004".to_string(),
			message,
			fragment: None,
			label: Some("text payload is not valid UTF-8".to_string()),
			help: Some("text columns only round-trip valid UTF-8; use a Blob column for raw bytes".to_string()),
			notes: vec![],
		},

		TypeError::InvalidSparseIndex {
			index,
			rows,
		} => Diagnostic {
			code: "SERIAL_005".to_string(),
			message,
			fragment: None,
			label: Some(format!("row index {} exceeds the column's {} rows", index, rows)),
			help: Some("the sparse payload disagrees with the declared row count".to_string()),
			notes: vec![],
		},

		_ => unreachable!("not a serialization error"),
	}
}
