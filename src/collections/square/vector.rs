//! Rows and columns of a `Square`

use self::Dimension::{Col, Row};
use std::fmt;
use std::fmt::Debug;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Row,
    Col,
}

/// A row or column and its index
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector(usize);

impl Vector {
    /// Creates a row Vector
    pub fn row(index: usize) -> Vector {
        Vector(index * 2)
    }

    /// Creates a column Vector
    pub fn col(index: usize) -> Vector {
        Vector(index * 2 + 1)
    }

    pub fn dimension(self) -> Dimension {
        if self.0 % 2 == 0 {
            Row
        } else {
            Col
        }
    }

    /// The index of the vector in its respective dimension
    pub fn index(self) -> usize {
        self.0 / 2
    }

    /// Iterates over the cell indices of this vector in a square of the
    /// given width
    pub fn indices(self, width: usize) -> impl Iterator<Item = usize> {
        let (start, step) = match self.dimension() {
            Row => (self.index() * width, 1),
            Col => (self.index(), width),
        };
        (0..width).map(move |i| start + i * step)
    }

    /// The row or column shared by two cells, if any
    pub fn shared(a: usize, b: usize, width: usize) -> Option<Vector> {
        if a / width == b / width {
            Some(Vector::row(a / width))
        } else if a % width == b % width {
            Some(Vector::col(a % width))
        } else {
            None
        }
    }

    /// All vectors of a square of the given width, rows first
    pub fn all(width: usize) -> impl Iterator<Item = Vector> {
        (0..width)
            .map(Vector::row)
            .chain((0..width).map(Vector::col))
    }
}

impl Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.dimension() {
            Row => "Row",
            Col => "Col",
        };
        write!(f, "{} {}", label, self.index())
    }
}
