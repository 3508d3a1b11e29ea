use crate::puzzle::{CellId, Value};

/// The possible math operators on a cage
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Nop,
}

impl Operator {
    /// The character representation of the operator
    pub fn symbol(self) -> Option<char> {
        let symbol = match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Nop => return None,
        };
        Some(symbol)
    }

    /// Retrieves an `Operator` from its corresponding symbol
    pub fn from_symbol(c: char) -> Option<Operator> {
        let operator = match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            _ => return None,
        };
        Some(operator)
    }
}

/// A cage in a puzzle
///
/// Every cell belongs to exactly one cage. The values in a cage must produce
/// the target number with the cage's operator. A single-cell cage has no
/// operator and simply fixes its cell to the target.
///
/// Cages compare and hash by value so cage combinations can be memoized per
/// (cage, puzzle size).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cage {
    target: Value,
    operator: Operator,
    cells: Vec<CellId>,
}

impl Cage {
    pub fn new(target: Value, operator: Operator, cells: Vec<CellId>) -> Self {
        Self {
            target,
            operator,
            cells,
        }
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.target
    }

    /// The math operator on the cage
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The IDs of the cells in the cage
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Checks whether the given values, in cell order, satisfy the cage's
    /// arithmetic relation
    pub fn satisfied_by(&self, values: &[Value]) -> bool {
        debug_assert_eq!(self.cells.len(), values.len());
        match self.operator {
            Operator::Add => values.iter().sum::<Value>() == self.target,
            Operator::Multiply => values.iter().product::<Value>() == self.target,
            Operator::Subtract => (values[0] - values[1]).abs() == self.target,
            Operator::Divide => {
                self.target * values[0] == values[1] || self.target * values[1] == values[0]
            }
            Operator::Nop => values[0] == self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Cage, Operator};

    #[test]
    fn symbol_round_trip() {
        for &symbol in &['+', '-', '*', '/'] {
            let operator = Operator::from_symbol(symbol).unwrap();
            assert_eq!(Some(symbol), operator.symbol());
        }
        assert_eq!(None, Operator::from_symbol('x'));
        assert_eq!(None, Operator::Nop.symbol());
    }

    #[test]
    fn satisfied_by() {
        assert!(Cage::new(7, Operator::Add, vec![0, 1, 2]).satisfied_by(&[1, 2, 4]));
        assert!(Cage::new(12, Operator::Multiply, vec![0, 1]).satisfied_by(&[3, 4]));
        assert!(Cage::new(2, Operator::Subtract, vec![0, 1]).satisfied_by(&[1, 3]));
        assert!(Cage::new(2, Operator::Subtract, vec![0, 1]).satisfied_by(&[3, 1]));
        assert!(Cage::new(3, Operator::Divide, vec![0, 1]).satisfied_by(&[6, 2]));
        assert!(Cage::new(3, Operator::Divide, vec![0, 1]).satisfied_by(&[2, 6]));
        assert!(Cage::new(4, Operator::Nop, vec![0]).satisfied_by(&[4]));
        assert!(!Cage::new(4, Operator::Nop, vec![0]).satisfied_by(&[3]));
    }
}
