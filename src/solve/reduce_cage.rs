use crate::puzzle::{Cage, Puzzle, Value};
use crate::solve::cage_combos::CageComboCache;
use crate::solve::candidates::CandidateGrid;
use crate::solve::ValueSet;

/// Runs cage reduction over every cage in the puzzle
pub(crate) fn reduce_cages(puzzle: &Puzzle, grid: &mut CandidateGrid, cache: &mut CageComboCache) {
    for cage in puzzle.cages() {
        reduce_cage(cage, grid, cache);
    }
}

/// Discards cage combinations that use an excluded candidate anywhere, then
/// narrows each cage cell to the union of values it takes across the
/// surviving combinations
///
/// A cage with no surviving combinations empties all of its cells; the
/// propagation driver detects the conflict.
fn reduce_cage(cage: &Cage, grid: &mut CandidateGrid, cache: &mut CageComboCache) {
    let size = grid.width();
    let combos = cache.combos(cage, size);
    let survivors: Vec<&Vec<Value>> = combos
        .iter()
        .filter(|combo| {
            combo
                .iter()
                .zip(cage.cells())
                .all(|(&value, &id)| grid.cell(id).contains(value))
        })
        .collect();
    for (i, &id) in cage.cells().iter().enumerate() {
        let mut union = ValueSet::new(size);
        union.extend(survivors.iter().map(|combo| combo[i]));
        grid.set_cell(id, union);
    }
}
