use calc::{evaluate, repl::DEFAULT_PROMPT, Error, Lexer, Repl};
use clap::{Parser, Subcommand}; // command line argument parser
use miette::{IntoDiagnostic, Report, WrapErr};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// type to help us parse the command line arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
	#[command(subcommand)]
	command: Option<Commands>,
}

/// holds the Command types argument type
#[derive(Debug, Subcommand)]
enum Commands {
	/// reads expressions from stdin, one per line (the default)
	Repl {
		#[arg(long, default_value = DEFAULT_PROMPT)]
		prompt: String,
	},
	/// evaluates a single expression
	Eval {
		#[arg(allow_hyphen_values = true)]
		expression: String,
	},
	/// takes a file path for tokenization
	Tokenize { filename: PathBuf },
}

/// exit status for malformed input
const DATA_ERR: u8 = 65;

fn main() -> miette::Result<ExitCode> {
	env_logger::Builder::from_env(env_logger::Env::new().filter_or("CALC_LOG", "warn")).init();

	let args = Args::parse();

	match args.command.unwrap_or(Commands::Repl { prompt: DEFAULT_PROMPT.to_string() }) {
		Commands::Repl { prompt } => {
			let summary = Repl::new(prompt)
				.run(io::stdin().lock(), io::stdout().lock(), io::stderr().lock())
				.into_diagnostic()
				.wrap_err("reading from stdin failed!")?;

			log::info!("evaluated {} lines, {} failed", summary.evaluated, summary.failed);

			Ok(ExitCode::SUCCESS)
		},
		Commands::Eval { expression } => match evaluate(&expression) {
			Ok(result) => {
				println!("{result}");
				Ok(ExitCode::SUCCESS)
			},
			Err(e) => {
				eprintln!("{:?}", Report::new(e));
				Ok(ExitCode::from(DATA_ERR))
			},
		},
		Commands::Tokenize { filename } => tokenize(&filename),
	}
}

fn tokenize(filename: &Path) -> miette::Result<ExitCode> {
	let file_contents = fs::read_to_string(filename)
		.into_diagnostic()
		.wrap_err_with(|| format!("reading {} file failed!", filename.display()))?;

	let mut erry = false;

	// every line gets a fresh lexer, just like an evaluation would
	for (number, line) in file_contents.lines().enumerate() {
		for token in Lexer::new(line) {
			match token {
				Ok(token) => println!("{token}"),
				Err(Error::Lex(unk)) => {
					erry = true;
					eprintln!("[line {}] Error: Unexpected character: {}", number + 1, unk.character);
				},
				Err(e) => {
					erry = true;
					eprintln!("[line {}] Error: {e}", number + 1);
				},
			}
		}
	}

	println!("EOF  null");

	Ok(if erry { ExitCode::from(DATA_ERR) } else { ExitCode::SUCCESS })
}
