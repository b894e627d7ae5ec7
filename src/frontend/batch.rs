//! Parallel tokenization of independent source buffers.
//!
//! Each buffer gets its own lexer with no shared mutable state, so the
//! fan-out is a plain data-parallel map. Result order matches input
//! order.

use rayon::prelude::*;

use crate::frontend::diagnostic::LexError;
use crate::frontend::lexer::{Lexer, LexerWarning};
use crate::frontend::token::Token;

/// One source buffer queued for tokenization.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// The outcome of tokenizing one buffer.
#[derive(Debug)]
pub struct FileTokens {
    pub name: String,
    pub tokens: Result<Vec<Token>, LexError>,
    pub warnings: Vec<LexerWarning>,
}

/// Tokenize every buffer, fanning out across the rayon thread pool.
pub fn tokenize_sources(sources: Vec<SourceFile>) -> Vec<FileTokens> {
    sources
        .into_par_iter()
        .map(|source| {
            let mut lexer = Lexer::new(source.text, source.name.clone());
            let tokens = lexer.tokenize();
            FileTokens {
                name: source.name,
                tokens,
                warnings: lexer.warnings().to_vec(),
            }
        })
        .collect()
}
