//! in src/error.rs
//!
//! Everything that can go wrong while turning a line into a number.
//! Each failure keeps a copy of the line and a span so it can be rendered with miette.

use crate::token_type::TokenType;
use miette::{Diagnostic, SourceSpan};
use std::fmt;
use thiserror::Error;

/// A character outside the alphabet: not whitespace, not a digit, not one of `+ - * /`.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
#[error("Unexpected character: {character}")]
pub struct LexError {
	#[source_code]
	src: String,
	#[label("this character")]
	err_span: SourceSpan,
	/// the offending character
	pub character: char,
}

impl LexError {
	pub(crate) fn new(src: &str, position: usize, character: char) -> Self {
		Self {
			src: src.to_string(),
			err_span: SourceSpan::from(position..position + character.len_utf8()),
			character,
		}
	}

	/// byte offset of the offending character
	pub fn position(&self) -> usize {
		self.err_span.offset()
	}

	/// 1-based column, counted in characters
	pub fn column(&self) -> usize {
		self.src[..self.position()].chars().count() + 1
	}
}

/// What the evaluator was looking for when the grammar did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
	Integer,
	Operator,
}

impl fmt::Display for Expected {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Expected::Integer => write!(f, "INTEGER"),
			Expected::Operator => write!(f, "an operator"),
		}
	}
}

/// The token stream does not follow `INTEGER (operator INTEGER)*`.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
#[error("Expected {expected}, found {found}")]
pub struct ParseError {
	#[source_code]
	src: String,
	#[label("here")]
	err_span: SourceSpan,
	pub expected: Expected,
	pub found: TokenType,
}

impl ParseError {
	pub(crate) fn new(src: &str, position: usize, len: usize, expected: Expected, found: TokenType) -> Self {
		Self { src: src.to_string(), err_span: SourceSpan::from(position..position + len), expected, found }
	}

	/// byte offset of the token that did not fit
	pub fn position(&self) -> usize {
		self.err_span.offset()
	}
}

/// The right operand of a `/` was zero.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
#[error("Division by zero")]
#[diagnostic(help("the right-hand side of `/` must not be 0"))]
pub struct DivisionByZero {
	#[source_code]
	src: String,
	#[label("this operand is zero")]
	err_span: SourceSpan,
}

impl DivisionByZero {
	pub(crate) fn new(src: &str, position: usize, len: usize) -> Self {
		Self { src: src.to_string(), err_span: SourceSpan::from(position..position + len) }
	}

	pub fn position(&self) -> usize {
		self.err_span.offset()
	}
}

/// An integer literal, or an integer-only intermediate result, does not fit in an `i64`.
///
/// Integers are limited to `i64::MAX` (9223372036854775807): a longer literal such as
/// `99999999999999999999` is rejected with this error rather than evaluated. Once a `/` has
/// made the result real, later steps are done in `f64` and never overflow.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
#[error("Integer overflow")]
pub struct Overflow {
	#[source_code]
	src: String,
	#[label("does not fit in a 64-bit integer")]
	err_span: SourceSpan,
}

impl Overflow {
	pub(crate) fn new(src: &str, position: usize, len: usize) -> Self {
		Self { src: src.to_string(), err_span: SourceSpan::from(position..position + len) }
	}

	pub fn position(&self) -> usize {
		self.err_span.offset()
	}
}

/// Any failure of a single evaluation. Callers can match on the variant.
#[derive(Diagnostic, Debug, Error, Clone, PartialEq)]
pub enum Error {
	#[error(transparent)]
	#[diagnostic(transparent)]
	Lex(#[from] LexError),

	#[error(transparent)]
	#[diagnostic(transparent)]
	Parse(#[from] ParseError),

	#[error(transparent)]
	#[diagnostic(transparent)]
	DivisionByZero(#[from] DivisionByZero),

	#[error(transparent)]
	#[diagnostic(transparent)]
	Overflow(#[from] Overflow),
}

impl Error {
	/// byte offset into the line where the failure was detected
	pub fn position(&self) -> usize {
		match self {
			Error::Lex(e) => e.position(),
			Error::Parse(e) => e.position(),
			Error::DivisionByZero(e) => e.position(),
			Error::Overflow(e) => e.position(),
		}
	}
}
