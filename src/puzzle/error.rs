//! Errors for puzzle construction and parsing

use std::io;

use thiserror::Error;

/// A puzzle definition that violates the cage or grid rules
#[derive(Error, Debug)]
#[error("invalid puzzle: {msg}")]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum ParsePuzzleError {
    #[error("error parsing puzzle JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}
