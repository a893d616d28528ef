pub mod lexer;
pub mod parser;
pub mod expression;
pub mod environment;
pub mod analyzer;
pub mod eval;
pub mod primitives;
pub mod interpreter;
pub mod utils;
