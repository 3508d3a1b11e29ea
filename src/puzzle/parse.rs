//! Parse puzzles from JSON
//!
//! The format mirrors the common published form of these puzzles:
//!
//! ```json
//! {
//!     "size": 4,
//!     "cages": [
//!         {"cells": [[1, 1], [1, 2]], "result": 1, "operation": "-"},
//!         {"cells": [[2, 1]], "result": 3}
//!     ]
//! }
//! ```
//!
//! Cells are 1-indexed `[row, column]` pairs. `operation` is omitted for
//! single-cell cages.

use serde::Deserialize;

use crate::collections::square::Coord;
use crate::puzzle::error::{InvalidPuzzle, ParsePuzzleError};
use crate::puzzle::{Cage, CellId, Operator, Puzzle, Value};

#[derive(Deserialize)]
struct PuzzleFile {
    size: usize,
    cages: Vec<CageFile>,
}

#[derive(Deserialize)]
struct CageFile {
    cells: Vec<[usize; 2]>,
    result: Value,
    #[serde(default)]
    operation: Option<String>,
}

pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let PuzzleFile { size, cages } = serde_json::from_str(s)?;
    if size == 0 {
        return Err(InvalidPuzzle::new("size must be at least 1".into()).into());
    }
    let cages = cages
        .into_iter()
        .enumerate()
        .map(|(i, cage)| convert_cage(i, cage, size))
        .collect::<Result<Vec<_>, _>>()?;
    let puzzle = Puzzle::new(size, cages)?;
    Ok(puzzle)
}

fn convert_cage(i: usize, cage: CageFile, size: usize) -> Result<Cage, InvalidPuzzle> {
    let cells = cage
        .cells
        .iter()
        .map(|&[row, col]| -> Result<CellId, InvalidPuzzle> {
            if row < 1 || row > size || col < 1 || col > size {
                return Err(InvalidPuzzle::new(format!(
                    "cage {}: cell ({}, {}) is outside the grid",
                    i, row, col
                )));
            }
            Ok(Coord::new(row - 1, col - 1).as_index(size))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let operator = match cage.operation.as_deref() {
        None => Operator::Nop,
        Some(s) => parse_operator(s)
            .ok_or_else(|| InvalidPuzzle::new(format!("cage {}: unrecognized operation \"{}\"", i, s)))?,
    };
    Ok(Cage::new(cage.result, operator, cells))
}

fn parse_operator(s: &str) -> Option<Operator> {
    let mut chars = s.chars();
    let operator = Operator::from_symbol(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some(operator)
}
