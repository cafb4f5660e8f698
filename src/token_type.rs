use std::fmt;

/// A single classified unit of the input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'de> {
	/// holds the characters as &str
	pub origin: &'de str,
	/// byte offset of the first character of `origin`
	pub offset: usize,
	/// holds the type
	pub kind: TokenType,
}

/// The `TokenType` enum represents the different types of tokens that can be recognized by the lexer.
/// Only `INTEGER` carries a payload, so the kind alone decides whether a value is present.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
	// Literals.
	INTEGER(i64),

	// Operators.
	PLUS,
	MINUS,
	STAR,
	SLASH,

	EOF,
}

impl TokenType {
	/// maps an operator character to its token type
	pub fn operator(c: char) -> Option<Self> {
		match c {
			'+' => Some(TokenType::PLUS),
			'-' => Some(TokenType::MINUS),
			'*' => Some(TokenType::STAR),
			'/' => Some(TokenType::SLASH),
			_ => None,
		}
	}

	/// the payload of an `INTEGER`, `None` for everything else
	pub fn value(&self) -> Option<i64> {
		match self {
			TokenType::INTEGER(n) => Some(*n),
			_ => None,
		}
	}
}

/// Short name used in diagnostics, e.g. `expected INTEGER, found EOF`.
impl fmt::Display for TokenType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			TokenType::INTEGER(_) => "INTEGER",
			TokenType::PLUS => "PLUS",
			TokenType::MINUS => "MINUS",
			TokenType::STAR => "STAR",
			TokenType::SLASH => "SLASH",
			TokenType::EOF => "EOF",
		};
		f.write_str(name)
	}
}

impl fmt::Display for Token<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let origin = self.origin;
		match self.kind {
			TokenType::INTEGER(n) => write!(f, "INTEGER {origin} {n}"),

			TokenType::PLUS => write!(f, "PLUS {origin} null"),
			TokenType::MINUS => write!(f, "MINUS {origin} null"),
			TokenType::STAR => write!(f, "STAR {origin} null"),
			TokenType::SLASH => write!(f, "SLASH {origin} null"),

			// End-of-input token.
			TokenType::EOF => write!(f, "EOF  null"),
		}
	}
}
