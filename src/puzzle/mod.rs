//! KenKen puzzles

pub use self::cage::{Cage, Operator};

pub mod error;

mod cage;
mod parse;

use std::fs;
use std::path::Path;

use crate::collections::square::{Coord, Square};
use crate::puzzle::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};

/// The position of a cell in a puzzle, row-major
pub type CellId = usize;
pub type Value = i32;

/// A solved puzzle grid
pub type Solution = Square<Value>;

/// An unsolved KenKen puzzle
///
/// A `Puzzle` is validated on construction and immutable afterwards, so the
/// solver may assume the cages partition the grid and satisfy the arity
/// rules.
pub struct Puzzle {
    /// the width and height of the puzzle
    size: usize,
    /// all cages in the puzzle
    cages: Vec<Cage>,
}

impl Puzzle {
    /// Creates a puzzle with a specified size and set of cages
    pub fn new(size: usize, cages: Vec<Cage>) -> Result<Self, InvalidPuzzle> {
        validate(size, &cages)?;
        Ok(Self { size, cages })
    }

    /// Reads a puzzle from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleFromFileError> {
        let text = fs::read_to_string(path)?;
        let puzzle = Self::from_json(&text)?;
        Ok(puzzle)
    }

    /// Parses a puzzle from its JSON representation
    pub fn from_json(s: &str) -> Result<Self, ParsePuzzleError> {
        parse::parse_puzzle(s)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size.pow(2)
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// Checks that every row and column of `solution` is a permutation of
    /// `1..=size` and that every cage relation holds
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.width() != self.size {
            return false;
        }
        self.verify_vectors(solution) && self.verify_cages(solution)
    }

    fn verify_vectors(&self, solution: &Solution) -> bool {
        solution.vectors().all(|vector| {
            let mut seen = vec![false; self.size];
            solution.vector(vector).all(|&value| {
                value >= 1
                    && value <= self.size as Value
                    && !std::mem::replace(&mut seen[value as usize - 1], true)
            })
        })
    }

    fn verify_cages(&self, solution: &Solution) -> bool {
        self.cages.iter().all(|cage| {
            let values: Vec<Value> = cage.cells().iter().map(|&id| solution[id]).collect();
            cage.satisfied_by(&values)
        })
    }
}

fn validate(size: usize, cages: &[Cage]) -> Result<(), InvalidPuzzle> {
    if size == 0 {
        return Err(InvalidPuzzle::new("size must be at least 1".into()));
    }
    let mut caged = vec![false; size.pow(2)];
    for (i, cage) in cages.iter().enumerate() {
        validate_cage(size, i, cage)?;
        for &cell in cage.cells() {
            if cell >= size.pow(2) {
                return Err(InvalidPuzzle::new(format!(
                    "cage {}: cell {} is outside the grid",
                    i, cell
                )));
            }
            if std::mem::replace(&mut caged[cell], true) {
                return Err(InvalidPuzzle::new(format!(
                    "cell {:?} is in more than one cage",
                    Coord::from_index(cell, size)
                )));
            }
        }
    }
    if let Some(cell) = caged.iter().position(|&c| !c) {
        return Err(InvalidPuzzle::new(format!(
            "cell {:?} is not in any cage",
            Coord::from_index(cell, size)
        )));
    }
    Ok(())
}

fn validate_cage(size: usize, i: usize, cage: &Cage) -> Result<(), InvalidPuzzle> {
    let cell_count = cage.cells().len();
    if cell_count == 0 {
        return Err(InvalidPuzzle::new(format!("cage {} has no cells", i)));
    }
    let size = size as Value;
    match cage.operator() {
        Operator::Nop => {
            if cell_count > 1 {
                return Err(InvalidPuzzle::new(format!(
                    "cage {} has {} cells and no operator",
                    i, cell_count
                )));
            }
            if cage.target() < 1 || cage.target() > size {
                return Err(InvalidPuzzle::new(format!(
                    "cage {}: target {} is out of range",
                    i,
                    cage.target()
                )));
            }
        }
        Operator::Add | Operator::Multiply => {
            if cell_count == 1 {
                return Err(InvalidPuzzle::new(format!(
                    "cage {} has one cell and operator {}",
                    i,
                    cage.operator().symbol().unwrap()
                )));
            }
            if cage.target() < 1 {
                return Err(InvalidPuzzle::new(format!(
                    "cage {}: target {} is out of range",
                    i,
                    cage.target()
                )));
            }
        }
        Operator::Subtract | Operator::Divide => {
            if cell_count != 2 {
                return Err(InvalidPuzzle::new(format!(
                    "cage {} has operator {} and {} cells, expected 2",
                    i,
                    cage.operator().symbol().unwrap(),
                    cell_count
                )));
            }
            let max = match cage.operator() {
                Operator::Subtract => size - 1,
                _ => size,
            };
            if cage.target() < 1 || cage.target() > max {
                return Err(InvalidPuzzle::new(format!(
                    "cage {}: target {} is out of range",
                    i,
                    cage.target()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Cage, Operator, Puzzle};

    fn singleton(target: i32, cell: usize) -> Cage {
        Cage::new(target, Operator::Nop, vec![cell])
    }

    #[test]
    fn valid_puzzle() {
        let cages = vec![
            Cage::new(1, Operator::Subtract, vec![0, 1]),
            Cage::new(2, Operator::Divide, vec![2, 3]),
        ];
        assert!(Puzzle::new(2, cages).is_ok());
    }

    #[test]
    fn rejects_incomplete_partition() {
        let cages = vec![singleton(1, 0), singleton(2, 1), singleton(2, 2)];
        assert!(Puzzle::new(2, cages).is_err());
    }

    #[test]
    fn rejects_overlapping_cages() {
        let cages = vec![
            Cage::new(3, Operator::Add, vec![0, 1]),
            Cage::new(3, Operator::Add, vec![1, 2]),
            singleton(1, 3),
        ];
        assert!(Puzzle::new(2, cages).is_err());
    }

    #[test]
    fn rejects_subtract_arity() {
        let cages = vec![
            Cage::new(1, Operator::Subtract, vec![0, 1, 2]),
            singleton(1, 3),
        ];
        assert!(Puzzle::new(2, cages).is_err());
    }

    #[test]
    fn rejects_singleton_with_operator() {
        let cages = vec![
            Cage::new(2, Operator::Add, vec![0]),
            singleton(1, 1),
            singleton(1, 2),
            singleton(2, 3),
        ];
        assert!(Puzzle::new(2, cages).is_err());
    }

    #[test]
    fn verify_solution() {
        let cages = vec![
            Cage::new(3, Operator::Add, vec![0, 1]),
            Cage::new(3, Operator::Add, vec![2, 3]),
        ];
        let puzzle = Puzzle::new(2, cages).unwrap();
        let mut solution = crate::collections::square::Square::with_width_and_value(2, 0);
        for (i, &v) in [1, 2, 2, 1].iter().enumerate() {
            solution[i] = v;
        }
        assert!(puzzle.verify_solution(&solution));
        solution[0] = 2;
        assert!(!puzzle.verify_solution(&solution));
    }
}
