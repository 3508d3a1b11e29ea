use std::fmt;

use itertools::Itertools;

use crate::collections::square::{Coord, Square, Vector};
use crate::puzzle::{CellId, Solution, Value};
use crate::solve::ValueSet;

/// The set of still-possible values for every cell of a puzzle
///
/// Candidate sets only shrink while propagating. The search engine clones
/// the whole grid before trying a value, so sibling branches never share
/// mutable state.
#[derive(Clone, PartialEq)]
pub(crate) struct CandidateGrid {
    cells: Square<ValueSet>,
}

impl CandidateGrid {
    /// Creates a grid with every cell holding the full set `1..=size`
    pub fn new(size: usize) -> Self {
        Self {
            cells: Square::with_width_and_value(size, ValueSet::with_all(size)),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn cell(&self, id: CellId) -> &ValueSet {
        &self.cells[id]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut ValueSet {
        &mut self.cells[id]
    }

    /// Replaces a cell's candidates with a subset of its current candidates
    pub fn set_cell(&mut self, id: CellId, set: ValueSet) {
        debug_assert!(set.is_subset(&self.cells[id]));
        self.cells[id] = set;
    }

    /// Fixes a cell to a single value, beginning a new search branch
    pub fn solve_cell(&mut self, id: CellId, value: Value) {
        self.cells[id] = ValueSet::single(self.width(), value);
    }

    pub fn coord(&self, id: CellId) -> Coord {
        self.cells.coord_at(id)
    }

    pub fn vectors(&self) -> impl Iterator<Item = Vector> {
        self.cells.vectors()
    }

    pub fn vector_cells(&self, vector: Vector) -> impl Iterator<Item = CellId> {
        vector.indices(self.width())
    }

    /// The total candidate count over all cells, the measure that must
    /// strictly decrease for propagation to keep looping
    pub fn candidate_count(&self) -> usize {
        self.cells.iter().map(ValueSet::len).sum()
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(ValueSet::is_empty)
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|set| set.len() == 1)
    }

    /// Extracts the solution from a fully determined grid
    pub fn solved_values(&self) -> Option<Solution> {
        let mut solution = Square::with_width_and_value(self.width(), 0);
        for id in 0..self.cells.len() {
            solution[id] = self.cells[id].single_value()?;
        }
        Some(solution)
    }

    pub fn snapshot(&self) -> Candidates {
        let mut cells = Square::with_width_and_value(self.width(), Vec::new());
        for id in 0..self.cells.len() {
            cells[id] = self.cells[id].iter().collect();
        }
        Candidates(cells)
    }
}

/// The candidate values remaining in each cell, captured when a puzzle
/// cannot be solved so the dead end can be inspected
#[derive(Clone, Debug, PartialEq)]
pub struct Candidates(Square<Vec<Value>>);

impl fmt::Display for Candidates {
    /// Writes one aligned row per grid row; an emptied cell shows as `-`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|values| {
                if values.is_empty() {
                    "-".to_string()
                } else {
                    values.iter().join("")
                }
            })
            .collect();
        let cell_width = rendered.iter().map(String::len).max().unwrap_or(0);
        for row in rendered.chunks(self.0.width()) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", cell, width = cell_width)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
