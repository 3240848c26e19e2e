pub mod ast;
pub mod builtins;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;

pub use builtins::Builtins;
pub use environment::Environment;
pub use evaluator::Evaluator;
pub use lexer::Lexer;
pub use parser::Parser;
