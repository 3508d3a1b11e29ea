//! A square grid of elements

mod coord;
mod vector;

pub use self::coord::Coord;
pub use self::vector::Dimension;
pub use self::vector::Vector;

use std::fmt;
use std::ops::{Index, IndexMut};

/// A container of elements represented in a square grid
#[derive(Clone, Debug, PartialEq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a new `Square` of a specified width, filled with a value
    pub fn with_width_and_value(width: usize, value: T) -> Square<T>
    where
        T: Clone,
    {
        Square {
            width,
            elements: vec![value; width.pow(2)],
        }
    }

    /// The width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        Coord::from_index(index, self.width)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Iterates over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Iterates over the elements of a row or column
    pub fn vector(&self, vector: Vector) -> impl Iterator<Item = &T> {
        vector.indices(self.width).map(move |i| &self.elements[i])
    }

    /// All vectors of this square, rows first
    pub fn vectors(&self) -> impl Iterator<Item = Vector> {
        Vector::all(self.width)
    }
}

impl<T: fmt::Display> fmt::Display for Square<T> {
    /// Writes the grid as aligned rows, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.elements.iter().map(T::to_string).collect();
        let cell_width = cells.iter().map(String::len).max().unwrap_or(0);
        for row in cells.chunks(self.width) {
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

impl<T> Index<usize> for Square<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Square<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.elements[coord.as_index(self.width)]
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        let index = coord.as_index(self.width);
        &mut self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Square, Vector};

    #[test]
    fn index_by_coord() {
        let mut square = Square::with_width_and_value(3, 0);
        square[Coord::new(1, 2)] = 7;
        assert_eq!(7, square[5]);
    }

    #[test]
    fn display_aligns_cells() {
        let mut square = Square::with_width_and_value(2, 0);
        for i in 0..4 {
            square[i] = i as i32 + 9;
        }
        assert_eq!(" 9 10\n11 12\n", square.to_string());
    }

    #[test]
    fn vector_elements() {
        let mut square = Square::with_width_and_value(3, 0);
        for i in 0..9 {
            square[i] = i;
        }
        let col: Vec<_> = square.vector(Vector::col(1)).copied().collect();
        assert_eq!(vec![1, 4, 7], col);
    }
}
