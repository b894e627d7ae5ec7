pub mod batch;
pub mod diagnostic;
pub mod lexer;
pub mod position;
pub mod token;
pub mod token_type;
