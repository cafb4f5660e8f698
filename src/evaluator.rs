//! in src/evaluator.rs
//!
//! Contains the logic for the evaluator.
//!
//! The grammar is `INTEGER (operator INTEGER)*` and operators are applied strictly in the
//! order they are read: `2+3*4` is `(2+3)*4 = 20`. `*` and `/` do not bind tighter than
//! `+` and `-`.

use crate::{
	error::{DivisionByZero, Error, Expected, Overflow},
	lexer::Lexer,
	number::Number,
	token_type::{Token, TokenType},
};
use std::fmt;

/// The four binary operators of the fold.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
	PLUS,
	MINUS,
	STAR,
	SLASH,
}

impl Op {
	pub fn from_token_type(kind: TokenType) -> Option<Op> {
		match kind {
			TokenType::PLUS => Some(Op::PLUS),
			TokenType::MINUS => Some(Op::MINUS),
			TokenType::STAR => Some(Op::STAR),
			TokenType::SLASH => Some(Op::SLASH),
			TokenType::INTEGER(_) | TokenType::EOF => None,
		}
	}
}

impl fmt::Display for Op {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}",
			match self {
				Op::PLUS => "+",
				Op::MINUS => "-",
				Op::STAR => "*",
				Op::SLASH => "/",
			}
		)
	}
}

/// Drives a [`Lexer`] over one line and folds the tokens into a [`Number`].
///
/// All state (cursor and running result) lives in this value, so evaluations never
/// share anything with each other.
pub struct Evaluator<'de> {
	/// contains the input string
	whole: &'de str,
	/// holds the lexer::Lexer
	lexer: Lexer<'de>,
}

impl<'de> Evaluator<'de> {
	pub fn new(input: &'de str) -> Self {
		Self { whole: input, lexer: Lexer::new(input) }
	}

	/// how far the lexer has scanned, as a byte offset
	pub fn position(&self) -> usize {
		self.lexer.position()
	}

	/// Folds the whole line left to right.
	///
	/// The first failure aborts the evaluation and is returned as is.
	pub fn evaluate(&mut self) -> Result<Number, Error> {
		let (first, _) = self.lexer.expect_integer()?;

		let mut result = Number::from(first);

		loop {
			if let Ok(Token { kind: TokenType::EOF, .. }) = self.lexer.peek() {
				break;
			}

			let (op, _) = self.lexer.expect_where(|token| Op::from_token_type(token.kind), Expected::Operator)?;

			let (operand, operand_token) = self.lexer.expect_integer()?;

			result = self.apply(op, result, operand, &operand_token)?;

			log::debug!("{op} {operand} => {result}");
		}

		Ok(result)
	}

	fn apply(&self, op: Op, lhs: Number, rhs: i64, rhs_token: &Token<'de>) -> Result<Number, Error> {
		let rhs_end = rhs_token.offset + rhs_token.origin.len();
		// the span covers everything folded so far
		let overflow = || Error::from(Overflow::new(self.whole, 0, rhs_end));

		let value = match (op, lhs) {
			(Op::SLASH, _) if rhs == 0 => {
				return Err(DivisionByZero::new(self.whole, rhs_token.offset, rhs_token.origin.len()).into());
			},

			(Op::PLUS, Number::Integer(l)) => Number::Integer(l.checked_add(rhs).ok_or_else(overflow)?),
			(Op::MINUS, Number::Integer(l)) => Number::Integer(l.checked_sub(rhs).ok_or_else(overflow)?),
			(Op::STAR, Number::Integer(l)) => Number::Integer(l.checked_mul(rhs).ok_or_else(overflow)?),

			(Op::PLUS, Number::Real(l)) => Number::Real(l + rhs as f64),
			(Op::MINUS, Number::Real(l)) => Number::Real(l - rhs as f64),
			(Op::STAR, Number::Real(l)) => Number::Real(l * rhs as f64),

			// true division, never truncated
			(Op::SLASH, lhs) => Number::Real(lhs.as_f64() / rhs as f64),
		};

		Ok(value)
	}
}

/// Evaluates one line of text.
///
/// ```
/// use calc::{evaluate, Number};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), Number::Integer(20));
/// assert_eq!(evaluate("7/2").unwrap(), Number::Real(3.5));
/// assert!(evaluate("6/0").is_err());
/// ```
pub fn evaluate(text: &str) -> Result<Number, Error> {
	Evaluator::new(text).evaluate().inspect_err(|e| log::debug!("{text:?} failed: {e}"))
}
