//! in src/repl.rs
//!
//! The line-driven front end: prompt, read a line, print the result or the error, repeat.

use crate::evaluator::evaluate;
use miette::Report;
use std::io::{self, BufRead, Write};

pub const DEFAULT_PROMPT: &str = "calc> ";

/// What happened over one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
	pub evaluated: usize,
	pub failed: usize,
}

pub struct Repl {
	prompt: String,
}

impl Default for Repl {
	fn default() -> Self {
		Self::new(DEFAULT_PROMPT)
	}
}

impl Repl {
	pub fn new(prompt: impl Into<String>) -> Self {
		Self { prompt: prompt.into() }
	}

	/// Runs until `input` is exhausted.
	///
	/// Empty lines are skipped. Results go to `out`, rendered diagnostics to `err`. A bad
	/// line is reported and the loop carries on; only I/O failures end it early.
	pub fn run<R, W, E>(&self, mut input: R, mut out: W, mut err: E) -> io::Result<Summary>
	where
		R: BufRead,
		W: Write,
		E: Write,
	{
		let mut summary = Summary::default();
		let mut buf = Vec::new();

		loop {
			write!(out, "{}", self.prompt)?;
			out.flush()?;

			buf.clear();
			if input.read_until(b'\n', &mut buf)? == 0 {
				break;
			}

			// bytes that are not UTF-8 become U+FFFD, which the lexer rejects like any other character
			let line = String::from_utf8_lossy(trim_newline(&buf));

			if line.is_empty() {
				continue;
			}

			summary.evaluated += 1;

			match evaluate(&line) {
				Ok(result) => writeln!(out, "{result}")?,
				Err(e) => {
					summary.failed += 1;
					log::debug!("expression {} failed at byte {}", summary.evaluated, e.position());
					writeln!(err, "{:?}", Report::new(e))?;
				},
			}
		}

		// leave the terminal on a fresh line after the last prompt
		writeln!(out)?;

		Ok(summary)
	}
}

fn trim_newline(line: &[u8]) -> &[u8] {
	let line = line.strip_suffix(b"\n").unwrap_or(line);
	line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn session(input: &str) -> (String, String, Summary) {
		let mut out = Vec::new();
		let mut err = Vec::new();
		let summary = Repl::default().run(input.as_bytes(), &mut out, &mut err).unwrap();
		(String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap(), summary)
	}

	#[test]
	fn prints_results() {
		let (out, err, summary) = session("3+5\n7/2\n");
		assert_eq!(out, "calc> 8\ncalc> 3.5\ncalc> \n");
		assert!(err.is_empty());
		assert_eq!(summary, Summary { evaluated: 2, failed: 0 });
	}

	#[test]
	fn skips_empty_lines() {
		let (out, _, summary) = session("\n\n2*3\n");
		assert_eq!(out, "calc> calc> calc> 6\ncalc> \n");
		assert_eq!(summary.evaluated, 1);
	}

	#[test]
	fn keeps_going_after_errors() {
		let (out, err, summary) = session("6/0\na+1\n1 +\n2+3*4\n");
		assert!(out.ends_with("calc> 20\ncalc> \n"), "{out}");
		assert!(err.contains("Division by zero"), "{err}");
		assert!(err.contains("Unexpected character: a"), "{err}");
		assert!(err.contains("Expected INTEGER, found EOF"), "{err}");
		assert_eq!(summary, Summary { evaluated: 4, failed: 3 });
	}

	#[test]
	fn last_line_without_newline() {
		let (out, _, _) = session("1+1");
		assert_eq!(out, "calc> 2\ncalc> \n");
	}

	#[test]
	fn crlf_lines() {
		let (out, err, _) = session("1+1\r\n");
		assert_eq!(out, "calc> 2\ncalc> \n");
		assert!(err.is_empty());
	}

	#[test]
	fn invalid_utf8_line_is_reported_and_skipped() {
		let mut out = Vec::new();
		let mut err = Vec::new();
		let summary = Repl::default().run(&b"1+1\n\xff\xfe\n2+2\n"[..], &mut out, &mut err).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "calc> 2\ncalc> calc> 4\ncalc> \n");
		assert!(String::from_utf8(err).unwrap().contains("Unexpected character: \u{fffd}"));
		assert_eq!(summary, Summary { evaluated: 3, failed: 1 });
	}

	#[test]
	fn custom_prompt() {
		let mut out = Vec::new();
		Repl::new("> ").run("4-1\n".as_bytes(), &mut out, io::sink()).unwrap();
		assert_eq!(String::from_utf8(out).unwrap(), "> 3\n> \n");
	}

	#[test]
	fn empty_input() {
		let (out, err, summary) = session("");
		assert_eq!(out, "calc> \n");
		assert!(err.is_empty());
		assert_eq!(summary, Summary::default());
	}
}
