use crate::puzzle::{CellId, Puzzle, Solution};
use crate::solve::cage_combos::CageComboCache;
use crate::solve::candidates::CandidateGrid;
use crate::solve::propagate::{propagate, PropagateResult};

/// The outcome of exhaustively searching a stalled grid
pub(crate) enum SearchResult {
    Solved(Solution),
    /// Every branch ended in a contradiction
    Exhausted,
}

/// Backtracking search over a stalled candidate grid
///
/// Branches on the unsolved cell with the fewest candidates, trying values in
/// ascending order, and re-propagates after each guess. Each branch works on
/// its own clone of the grid, so backtracking is just dropping the clone.
pub(crate) fn search_solution(
    puzzle: &Puzzle,
    grid: &CandidateGrid,
    cache: &mut CageComboCache,
) -> SearchResult {
    search_next(1, puzzle, grid, cache)
}

fn search_next(
    depth: usize,
    puzzle: &Puzzle,
    grid: &CandidateGrid,
    cache: &mut CageComboCache,
) -> SearchResult {
    let id = most_constrained_cell(grid);
    for value in grid.cell(id) {
        debug!(
            "guess {} at {:?} (depth {})",
            value,
            grid.coord(id),
            depth
        );
        let mut branch = grid.clone();
        branch.solve_cell(id, value);
        match propagate(puzzle, &mut branch, cache) {
            PropagateResult::Solved(solution) => return SearchResult::Solved(solution),
            PropagateResult::Invalid => (),
            PropagateResult::Stalled => {
                if let SearchResult::Solved(solution) =
                    search_next(depth + 1, puzzle, &branch, cache)
                {
                    return SearchResult::Solved(solution);
                }
            }
        }
    }
    SearchResult::Exhausted
}

/// The first unsolved cell, in row-major order, with the smallest candidate
/// set. The caller guarantees at least one unsolved cell.
fn most_constrained_cell(grid: &CandidateGrid) -> CellId {
    let cell_count = grid.width() * grid.width();
    (0..cell_count)
        .filter(|&id| grid.cell(id).len() > 1)
        .min_by_key(|&id| grid.cell(id).len())
        .expect("no unsolved cells")
}

#[cfg(test)]
mod tests {
    use super::most_constrained_cell;
    use crate::solve::candidates::CandidateGrid;

    #[test]
    fn picks_smallest_unsolved_cell() {
        let mut grid = CandidateGrid::new(4);
        grid.solve_cell(0, 1);
        grid.cell_mut(3).remove(4);
        grid.cell_mut(7).remove(3);
        grid.cell_mut(7).remove(4);
        assert_eq!(7, most_constrained_cell(&grid));
    }

    #[test]
    fn ties_break_in_row_major_order() {
        let mut grid = CandidateGrid::new(4);
        grid.cell_mut(5).remove(1);
        grid.cell_mut(5).remove(2);
        grid.cell_mut(9).remove(3);
        grid.cell_mut(9).remove(4);
        assert_eq!(5, most_constrained_cell(&grid));
    }
}
