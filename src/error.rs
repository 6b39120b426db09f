use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("alphabet is missing required characters: {missing:?}")]
    IncompleteAlphabet { missing: String },

    #[error("line {line}, column {column}: {ch:?} is not in the alphabet")]
    UnknownCharacter { line: usize, column: usize, ch: char },

    #[error("IO error")]
    Io(#[from] io::Error),
}
