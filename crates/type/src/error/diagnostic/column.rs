// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use super::Diagnostic;
use crate::error::TypeError;

pub(super) fn diagnostic(err: TypeError) -> Diagnostic {
	let message = err.to_string();
	match err {
		TypeError::ColumnTypeMismatch {
			expected,
			found,
		} => Diagnostic {
			code: "COLUMN_001".to_string(),
			message,
			fragment: Some(found),
			label: Some(format!("the type expects a {} column", expected)),
			help: Some("create the column via the same type descriptor that writes into it".to_string()),
			notes: vec![],
		},

		TypeError::ColumnArityMismatch {
			elements,
			columns,
		} => Diagnostic {
			code: "COLUMN_002".to_string(),
			message,
			fragment: None,
			label: Some(format!("expected {} sub-columns, found {}", elements, columns)),
			help: Some("tuple columns carry exactly one sub-column per element".to_string()),
			notes: vec![],
		},

		TypeError::ValueTypeMismatch {
			column,
			value,
		} => Diagnostic {
			code: "COLUMN_003".to_string(),
			message,
			fragment: Some(value),
			label: Some(format!("column holds {} values", column)),
			help: Some("cast the value to the column's type before appending".to_string()),
			notes: vec![],
		},

		_ => unreachable!("not a column error"),
	}
}
