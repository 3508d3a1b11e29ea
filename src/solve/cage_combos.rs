use std::rc::Rc;

use itertools::Itertools;

use crate::collections::square::Vector;
use crate::puzzle::{Cage, Value};
use crate::HashMap;

/// All value assignments satisfying one cage, each aligned with the cage's
/// cell order
pub(crate) type CageCombos = Vec<Vec<Value>>;

/// Memoizes cage combinations by (cage, puzzle size)
///
/// Cages compare by value and never change during a solve, so the cache is
/// shared by every search branch; an entry is immutable once computed.
pub(crate) struct CageComboCache {
    map: HashMap<ComboKey, Rc<CageCombos>>,
}

#[derive(PartialEq, Eq, Hash)]
struct ComboKey {
    cage: Cage,
    size: usize,
}

impl CageComboCache {
    pub fn new() -> Self {
        Self {
            map: HashMap::default(),
        }
    }

    pub fn combos(&mut self, cage: &Cage, size: usize) -> Rc<CageCombos> {
        let key = ComboKey {
            cage: cage.clone(),
            size,
        };
        let combos = self
            .map
            .entry(key)
            .or_insert_with(|| Rc::new(enumerate_combos(cage, size)));
        Rc::clone(combos)
    }
}

/// Enumerates every assignment of values to the cage's cells that satisfies
/// the cage's arithmetic relation and repeats no value within a row or
/// column of the cage
fn enumerate_combos(cage: &Cage, size: usize) -> CageCombos {
    if cage.cells().len() == 1 {
        return vec![vec![cage.target()]];
    }
    (0..cage.cells().len())
        .map(|_| 1..=size as Value)
        .multi_cartesian_product()
        .filter(|values| no_vector_duplicates(cage, values, size) && cage.satisfied_by(values))
        .collect()
}

fn no_vector_duplicates(cage: &Cage, values: &[Value], size: usize) -> bool {
    (0..cage.cells().len()).tuple_combinations().all(|(a, b)| {
        values[a] != values[b] || Vector::shared(cage.cells()[a], cage.cells()[b], size).is_none()
    })
}
