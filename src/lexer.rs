use crate::error::{Error, Expected, LexError, Overflow, ParseError};
use crate::token_type::{Token, TokenType};

/// The `Lexer` struct is responsible for tokenizing one line of input.
/// It holds the entire input string, the remaining unprocessed part of the string,
/// and the current byte index for tracking the position in the string.
///
/// Tokens are handed out one at a time by [`Lexer::next_token`]. Once the input is
/// exhausted every further call returns `EOF` again. The `Iterator` impl yields the
/// tokens before `EOF` and stops there, which is what the tokenizer wants.
#[derive(Debug)]
pub struct Lexer<'de> {
	/// holds the entire String
	whole: &'de str,
	/// holds the remainder of the String
	rest: &'de str,
	/// to keep track of the index we're at, never moves backwards
	byte: usize,
	/// holds the peeked token -- used for lookahead
	peeked: Option<Result<Token<'de>, Error>>,
	/// iterator side only: set after `EOF` has been seen
	done: bool,
}

impl<'de> Lexer<'de> {
	/// Creates a new `Lexer` positioned at the start of `input`.
	pub fn new(input: &'de str) -> Self {
		Self { whole: input, rest: input, byte: 0, peeked: None, done: false }
	}

	/// current cursor, as a byte offset into the line
	pub fn position(&self) -> usize {
		self.byte
	}

	/// Produces the next token.
	///
	/// Leading whitespace is skipped. At the end of the input this returns `EOF`, as often
	/// as it is asked. An unrecognized character fails with [`LexError`] and leaves the
	/// cursor on that character.
	pub fn next_token(&mut self) -> Result<Token<'de>, Error> {
		if let Some(next) = self.peeked.take() {
			return next;
		}

		self.scan()
	}

	fn scan(&mut self) -> Result<Token<'de>, Error> {
		let trimmed = self.rest.trim_start();
		self.byte += self.rest.len() - trimmed.len();
		self.rest = trimmed;

		// `at` represents the byte-index where this token begins in the string
		let c_at = self.byte;
		let c_onwards = self.rest;

		let Some(c) = c_onwards.chars().next() else {
			return Ok(Token { kind: TokenType::EOF, offset: c_at, origin: c_onwards });
		};

		let token = match c {
			'0'..='9' => {
				let first_non_digit = c_onwards.find(|c: char| !c.is_ascii_digit()).unwrap_or(c_onwards.len());

				let literal = &c_onwards[..first_non_digit];

				let n = literal
					.bytes()
					.try_fold(0i64, |acc, digit| acc.checked_mul(10)?.checked_add(i64::from(digit - b'0')))
					.ok_or_else(|| Overflow::new(self.whole, c_at, literal.len()))?;

				Token { kind: TokenType::INTEGER(n), offset: c_at, origin: literal }
			},
			c => match TokenType::operator(c) {
				Some(kind) => Token { kind, offset: c_at, origin: &c_onwards[..c.len_utf8()] },
				None => return Err(LexError::new(self.whole, c_at, c).into()),
			},
		};

		self.advance(token.origin.len());

		log::trace!("token {:?} at {}", token.kind, token.offset);

		Ok(token)
	}
}

// This one defines helper functions for parsing
impl<'de> Lexer<'de> {
	/// helper function for unexpected token errors
	///
	/// pulls the next token and hands it to `check`; a `None` from `check` becomes a
	/// [`ParseError`] pointing at that token
	pub fn expect_where<T>(
		&mut self,
		check: impl FnOnce(&Token<'de>) -> Option<T>,
		expected: Expected,
	) -> Result<(T, Token<'de>), Error> {
		let token = self.next_token()?;

		match check(&token) {
			Some(value) => Ok((value, token)),
			None => {
				Err(ParseError::new(self.whole, token.offset, token.origin.len(), expected, token.kind).into())
			},
		}
	}

	/// helper function for the common case: an `INTEGER` and its value
	pub fn expect_integer(&mut self) -> Result<(i64, Token<'de>), Error> {
		self.expect_where(|token| token.kind.value(), Expected::Integer)
	}

	/// helper function for peeking into the Lexer tokens
	///
	/// peeks one Token not a character
	pub fn peek(&mut self) -> &Result<Token<'de>, Error> {
		let next = match self.peeked.take() {
			Some(next) => next,
			None => self.scan(),
		};

		self.peeked.insert(next)
	}

	fn advance(&mut self, len: usize) {
		self.byte += len;
		self.rest = &self.rest[len..];
	}

	/// moves the cursor past whatever `error` was reported for, so scanning can go on
	fn skip_over(&mut self, error: &Error) {
		match error {
			Error::Lex(unk) => self.advance(unk.character.len_utf8()),
			Error::Overflow(_) => {
				let digits = self.rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(self.rest.len());
				self.advance(digits);
			},
			Error::Parse(_) | Error::DivisionByZero(_) => self.done = true,
		}
	}
}

impl<'de> Iterator for Lexer<'de> {
	type Item = Result<Token<'de>, Error>;

	/// After an `Err` the iterator carries on behind the offending input, unlike
	/// [`Lexer::next_token`] which stays put.
	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		match self.next_token() {
			Ok(Token { kind: TokenType::EOF, .. }) => {
				self.done = true;
				None
			},
			Ok(token) => Some(Ok(token)),
			Err(e) => {
				self.skip_over(&e);
				Some(Err(e))
			},
		}
	}
}
