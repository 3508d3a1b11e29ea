use std::fmt;
use std::fmt::Debug;

/// Coordinates of an element in a `Square`, zero-based
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coord([usize; 2]);

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self([row, col])
    }

    pub fn row(self) -> usize {
        self.0[0]
    }

    pub fn col(self) -> usize {
        self.0[1]
    }

    pub fn as_index(self, width: usize) -> usize {
        self.row() * width + self.col()
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self([index / width, index % width])
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
