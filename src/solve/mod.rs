//! Puzzle solving with constraint propagation and backtracking search

pub use self::candidates::Candidates;

pub(crate) use self::value_set::ValueSet;

use self::cage_combos::CageComboCache;
use self::candidates::CandidateGrid;
use self::propagate::{propagate, PropagateResult};
use self::search::{search_solution, SearchResult};
use crate::puzzle::{Puzzle, Solution};

mod cage_combos;
mod candidates;
mod propagate;
mod reduce_cage;
mod search;
mod value_set;
mod vector_elimination;

/// A contradiction found while propagating constraints
#[derive(Debug)]
pub(crate) struct Conflict;

#[derive(Debug, PartialEq)]
pub enum SolveResult {
    /// The puzzle has no solution; carries the candidates that remained
    /// when the contradiction was found
    Unsolvable(Candidates),
    Solved(SolvedData),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            SolveResult::Unsolvable(_) => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct SolvedData {
    pub solution: Solution,
    /// false if constraint propagation alone solved the puzzle
    pub used_search: bool,
}

pub struct PuzzleSolver<'a> {
    puzzle: &'a Puzzle,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self { puzzle }
    }

    /// Solves the puzzle, first by propagation alone and then, if the grid
    /// stalls, by backtracking search. Returns the first solution found.
    pub fn solve(&self) -> SolveResult {
        let mut grid = CandidateGrid::new(self.puzzle.size());
        let mut cache = CageComboCache::new();
        match propagate(self.puzzle, &mut grid, &mut cache) {
            PropagateResult::Solved(solution) => SolveResult::Solved(SolvedData {
                solution,
                used_search: false,
            }),
            PropagateResult::Invalid => SolveResult::Unsolvable(grid.snapshot()),
            PropagateResult::Stalled => {
                info!("constraint propagation stalled, starting search");
                debug!("stalled candidates:\n{}", grid.snapshot());
                match search_solution(self.puzzle, &grid, &mut cache) {
                    SearchResult::Solved(solution) => SolveResult::Solved(SolvedData {
                        solution,
                        used_search: true,
                    }),
                    SearchResult::Exhausted => SolveResult::Unsolvable(grid.snapshot()),
                }
            }
        }
    }
}
