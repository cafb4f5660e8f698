pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod number;
pub mod repl;
pub mod token_type;

pub use error::Error;
pub use evaluator::{evaluate, Evaluator};
pub use lexer::Lexer;
pub use number::Number;
pub use repl::Repl;
