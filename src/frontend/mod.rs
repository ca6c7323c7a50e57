pub mod ast;
pub mod constants;
pub mod cursor;
pub mod errors;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod span;
pub mod token;

pub use errors::ParserError;
pub use lexer::Lexer;
pub use parser::Parser;
