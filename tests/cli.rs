use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

fn calc() -> Command {
	Command::cargo_bin("calc").unwrap()
}

#[test]
fn repl_is_the_default() {
	calc()
		.write_stdin("3+5\n\n2+3*4\n")
		.assert()
		.success()
		.stdout("calc> 8\ncalc> calc> 20\ncalc> \n");
}

#[test]
fn repl_survives_bad_lines() {
	calc()
		.arg("repl")
		.write_stdin("6/0\nx\n7-3-1\n")
		.assert()
		.success()
		.stdout("calc> calc> calc> 3\ncalc> \n")
		.stderr(predicate::str::contains("Division by zero").and(predicate::str::contains("Unexpected character: x")));
}

#[test]
fn repl_custom_prompt() {
	calc().args(["repl", "--prompt", ">> "]).write_stdin("7/2\n").assert().success().stdout(">> 3.5\n>> \n");
}

#[test]
fn eval_prints_result() {
	calc().args(["eval", " 3 + 4 "]).assert().success().stdout("7\n");
	calc().args(["eval", "6/3"]).assert().success().stdout("2.0\n");
}

#[test]
fn eval_reports_errors() {
	calc()
		.args(["eval", "6/0"])
		.assert()
		.code(65)
		.stdout("")
		.stderr(predicate::str::contains("Division by zero"));

	calc()
		.args(["eval", "-1"])
		.assert()
		.code(65)
		.stderr(predicate::str::contains("Expected INTEGER, found MINUS"));
}

#[test]
fn tokenize_file() {
	let mut file = tempfile("tokens.calc");
	writeln!(file.1, "12+7\n 3 * 4 / 2").unwrap();

	calc()
		.arg("tokenize")
		.arg(&file.0)
		.assert()
		.success()
		.stdout(
			"INTEGER 12 12\nPLUS + null\nINTEGER 7 7\n\
			 INTEGER 3 3\nSTAR * null\nINTEGER 4 4\nSLASH / null\nINTEGER 2 2\n\
			 EOF  null\n",
		);
}

#[test]
fn tokenize_reports_bad_characters() {
	let mut file = tempfile("bad.calc");
	writeln!(file.1, "1 + 2\n3 $ 4\n5").unwrap();

	calc()
		.arg("tokenize")
		.arg(&file.0)
		.assert()
		.code(65)
		.stdout("INTEGER 1 1\nPLUS + null\nINTEGER 2 2\nINTEGER 3 3\nINTEGER 4 4\nINTEGER 5 5\nEOF  null\n")
		.stderr(predicate::str::contains("[line 2] Error: Unexpected character: $"));
}

#[test]
fn scratch_files_are_removed() {
	let path = {
		let file = tempfile("dropped.calc");
		assert!(file.0.exists());
		file.0.clone()
	};
	assert!(!path.exists());
}

#[test]
fn tokenize_missing_file() {
	calc()
		.args(["tokenize", "does/not/exist.calc"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("reading does/not/exist.calc file failed!"));
}

/// scratch input file, deleted again when dropped
struct TempFile(PathBuf, File);

impl Drop for TempFile {
	fn drop(&mut self) {
		let _ = fs::remove_file(&self.0);
	}
}

fn tempfile(name: &str) -> TempFile {
	let path = std::env::temp_dir().join(format!("calc-cli-{}-{name}", std::process::id()));
	let file = File::create(&path).unwrap();
	TempFile(path, file)
}
