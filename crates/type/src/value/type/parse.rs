// SPDX-License-Identifier: MIT
// Copyright (c) 2025 BasaltDB

use std::{str::FromStr, sync::Arc};

use crate::{
	Result,
	error::TypeError,
	value::r#type::{TupleType, Type, TypeKind},
};

/// Parse a canonical type name back into a descriptor.
///
/// Accepts everything [`Type::name`] emits: scalar names, `Option(T)`,
/// `Dictionary(T)` and `Tuple(...)` with either all fields named or none.
/// Named-tuple construction runs through the same validation as direct
/// construction, so a parsed descriptor obeys every naming invariant.
pub fn parse_type(input: &str) -> Result<Type> {
	tracing::trace!(input, "parsing type name");
	let mut parser = Parser {
		input,
		offset: 0,
	};
	let ty = parser.parse()?;
	parser.skip_whitespace();
	if parser.offset < parser.input.len() {
		return Err(TypeError::TrailingCharacters {
			offset: parser.offset,
		}
		.into());
	}
	Ok(ty)
}

struct Parser<'a> {
	input: &'a str,
	offset: usize,
}

impl<'a> Parser<'a> {
	fn parse(&mut self) -> Result<Type> {
		let name = self.identifier()?;
		self.parse_with_name(name)
	}

	fn parse_with_name(&mut self, name: String) -> Result<Type> {
		match name.as_str() {
			"Tuple" => self.tuple(),
			"Option" => Ok(Type::Optional(Arc::new(self.single_argument(&name)?))),
			"Dictionary" => Ok(Type::Dictionary(Arc::new(self.single_argument(&name)?))),
			_ => {
				let Ok(kind) = TypeKind::from_str(&name) else {
					return Err(TypeError::UnknownTypeName {
						name,
					}
					.into());
				};
				if self.peek() == Some('(') {
					let found = self.argument_list()?.len();
					return Err(TypeError::WrongArgumentCount {
						name,
						expected: 0,
						found,
					}
					.into());
				}
				// from_str only produces scalar kinds, so this cannot miss.
				Type::scalar(kind).ok_or_else(|| {
					TypeError::UnknownTypeName {
						name,
					}
					.into()
				})
			}
		}
	}

	fn single_argument(&mut self, name: &str) -> Result<Type> {
		let mut arguments = self.argument_list()?;
		if arguments.len() != 1 {
			return Err(TypeError::WrongArgumentCount {
				name: name.to_string(),
				expected: 1,
				found: arguments.len(),
			}
			.into());
		}
		Ok(arguments.remove(0))
	}

	fn argument_list(&mut self) -> Result<Vec<Type>> {
		self.expect('(')?;
		let mut arguments = Vec::new();
		if self.peek() == Some(')') {
			self.advance();
			return Ok(arguments);
		}
		loop {
			arguments.push(self.parse()?);
			match self.peek() {
				Some(',') => self.advance(),
				Some(')') => {
					self.advance();
					return Ok(arguments);
				}
				Some(found) => {
					return Err(TypeError::UnexpectedCharacter {
						found,
						offset: self.offset,
					}
					.into());
				}
				None => return Err(TypeError::UnexpectedEndOfTypeName.into()),
			}
		}
	}

	fn tuple(&mut self) -> Result<Type> {
		self.expect('(')?;

		let mut elements: Vec<Arc<Type>> = Vec::new();
		let mut names: Vec<Option<String>> = Vec::new();

		if self.peek() == Some(')') {
			self.advance();
			return Ok(Type::Tuple(TupleType::new(elements)));
		}

		loop {
			let first = self.identifier()?;
			// `name Type` when another identifier follows, a bare type
			// otherwise.
			if self.peek().is_some_and(|c| c.is_alphabetic() || c == '_') {
				let element = self.parse()?;
				names.push(Some(first));
				elements.push(Arc::new(element));
			} else {
				let element = self.parse_with_name(first)?;
				names.push(None);
				elements.push(Arc::new(element));
			}

			match self.peek() {
				Some(',') => self.advance(),
				Some(')') => {
					self.advance();
					break;
				}
				Some(found) => {
					return Err(TypeError::UnexpectedCharacter {
						found,
						offset: self.offset,
					}
					.into());
				}
				None => return Err(TypeError::UnexpectedEndOfTypeName.into()),
			}
		}

		if names.iter().all(Option::is_none) {
			Ok(Type::Tuple(TupleType::new(elements)))
		} else if names.iter().all(Option::is_some) {
			let names = names.into_iter().flatten().collect();
			Ok(Type::Tuple(TupleType::with_names(elements, names)?))
		} else {
			Err(TypeError::MixedFieldNaming.into())
		}
	}

	fn identifier(&mut self) -> Result<String> {
		self.skip_whitespace();
		let rest = &self.input[self.offset..];
		let mut chars = rest.chars();
		match chars.next() {
			None => Err(TypeError::UnexpectedEndOfTypeName.into()),
			Some(c) if c.is_alphabetic() || c == '_' => {
				let end = rest
					.char_indices()
					.find(|(_, c)| !c.is_alphanumeric() && *c != '_')
					.map_or(rest.len(), |(i, _)| i);
				self.offset += end;
				Ok(rest[..end].to_string())
			}
			Some(found) => Err(TypeError::UnexpectedCharacter {
				found,
				offset: self.offset,
			}
			.into()),
		}
	}

	fn expect(&mut self, expected: char) -> Result<()> {
		match self.peek() {
			Some(c) if c == expected => {
				self.advance();
				Ok(())
			}
			Some(found) => Err(TypeError::UnexpectedCharacter {
				found,
				offset: self.offset,
			}
			.into()),
			None => Err(TypeError::UnexpectedEndOfTypeName.into()),
		}
	}

	/// Next significant character, without consuming it.
	fn peek(&mut self) -> Option<char> {
		self.skip_whitespace();
		self.input[self.offset..].chars().next()
	}

	fn advance(&mut self) {
		if let Some(c) = self.input[self.offset..].chars().next() {
			self.offset += c.len_utf8();
		}
	}

	fn skip_whitespace(&mut self) {
		let rest = &self.input[self.offset..];
		let trimmed = rest.trim_start();
		self.offset += rest.len() - trimmed.len();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn roundtrip(name: &str) {
		let ty = parse_type(name).unwrap();
		assert_eq!(ty.name(), name);
		assert_eq!(parse_type(&ty.name()).unwrap(), ty);
	}

	#[test]
	fn test_scalars() {
		for name in ["Bool", "Float4", "Float8", "Int1", "Int16", "Uint8", "Utf8", "Blob"] {
			roundtrip(name);
		}
	}

	#[test]
	fn test_scalar_names_are_case_insensitive() {
		assert_eq!(parse_type("int8").unwrap(), Type::Int8);
		assert_eq!(parse_type("TEXT").unwrap(), Type::Utf8);
	}

	#[test]
	fn test_wrappers() {
		roundtrip("Option(Int8)");
		roundtrip("Dictionary(Utf8)");
		roundtrip("Option(Dictionary(Utf8))");
	}

	#[test]
	fn test_tuples() {
		roundtrip("Tuple()");
		roundtrip("Tuple(Int8, Utf8)");
		roundtrip("Tuple(id Int8, name Utf8)");
		roundtrip("Tuple(point Tuple(x Float8, y Float8), label Option(Utf8))");
	}

	#[test]
	fn test_whitespace_is_insignificant() {
		let ty = parse_type(" Tuple( id  Int8 , name Utf8 ) ").unwrap();
		assert_eq!(ty.name(), "Tuple(id Int8, name Utf8)");
	}

	#[test]
	fn test_unknown_name() {
		let err = parse_type("Rectangle").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_001");
	}

	#[test]
	fn test_trailing_characters() {
		let err = parse_type("Int8)").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_004");
	}

	#[test]
	fn test_unbalanced() {
		let err = parse_type("Tuple(Int8").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_003");
	}

	#[test]
	fn test_scalar_with_arguments() {
		let err = parse_type("Int8(3)").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_002");

		let err = parse_type("Int8(Utf8)").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_005");
	}

	#[test]
	fn test_option_argument_count() {
		let err = parse_type("Option(Int8, Utf8)").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_005");

		let err = parse_type("Option()").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_005");
	}

	#[test]
	fn test_mixed_naming_rejected() {
		let err = parse_type("Tuple(id Int8, Utf8)").unwrap_err();
		assert_eq!(err.code(), "TYPE_PARSE_006");
	}

	#[test]
	fn test_parsed_names_are_validated() {
		let err = parse_type("Tuple(x Int8, x Utf8)").unwrap_err();
		assert_eq!(err.code(), "TUPLE_004");
	}
}
