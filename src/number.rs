//! in src/number.rs
//!
//! The running result of an evaluation.

use std::fmt;

/// Integral until the first `/` is folded in, real from then on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
	Integer(i64),
	Real(f64),
}

impl Number {
	pub fn as_f64(self) -> f64 {
		match self {
			Number::Integer(n) => n as f64,
			Number::Real(n) => n,
		}
	}
}

impl From<i64> for Number {
	fn from(n: i64) -> Self {
		Number::Integer(n)
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Number::Integer(n) => write!(f, "{n}"),
			Number::Real(n) => {
				if n.is_finite() && *n == n.trunc() {
					write!(f, "{n}.0")
				} else {
					write!(f, "{n}")
				}
			},
		}
	}
}
