use crate::puzzle::{Puzzle, Solution};
use crate::solve::cage_combos::CageComboCache;
use crate::solve::candidates::CandidateGrid;
use crate::solve::reduce_cage::reduce_cages;
use crate::solve::vector_elimination::eliminate_in_vector;

/// The outcome of propagating constraints until nothing more can be deduced
pub(crate) enum PropagateResult {
    /// Every cell reached one candidate and the grid satisfies the puzzle
    Solved(Solution),
    /// No contradiction, but some cells still hold multiple candidates
    Stalled,
    /// The grid cannot be completed to a solution
    Invalid,
}

/// Alternates cage reduction and line elimination until the grid is solved,
/// contradictory, or a full pass removes no candidate
///
/// Every rule only removes candidates, so the total candidate count strictly
/// decreases on each productive pass and the loop terminates.
pub(crate) fn propagate(
    puzzle: &Puzzle,
    grid: &mut CandidateGrid,
    cache: &mut CageComboCache,
) -> PropagateResult {
    loop {
        let before = grid.candidate_count();
        reduce_cages(puzzle, grid, cache);
        if grid.has_empty_cell() {
            return PropagateResult::Invalid;
        }
        let vectors: Vec<_> = grid.vectors().collect();
        for vector in vectors {
            if eliminate_in_vector(grid, vector).is_err() {
                return PropagateResult::Invalid;
            }
        }
        if grid.has_empty_cell() {
            return PropagateResult::Invalid;
        }
        if grid.is_solved() {
            return match grid.solved_values() {
                Some(solution) if puzzle.verify_solution(&solution) => {
                    PropagateResult::Solved(solution)
                }
                _ => PropagateResult::Invalid,
            };
        }
        let after = grid.candidate_count();
        if after == before {
            return PropagateResult::Stalled;
        }
        debug!("propagation pass removed {} candidates", before - after);
    }
}

#[cfg(test)]
mod tests {
    use super::{propagate, PropagateResult};
    use crate::puzzle::{Cage, Operator, Puzzle};
    use crate::solve::cage_combos::CageComboCache;
    use crate::solve::candidates::CandidateGrid;

    fn singleton_puzzle(size: usize, values: &[i32]) -> Puzzle {
        let cages = values
            .iter()
            .enumerate()
            .map(|(id, &value)| Cage::new(value, Operator::Nop, vec![id]))
            .collect();
        Puzzle::new(size, cages).unwrap()
    }

    #[test]
    fn solves_fully_determined_grid() {
        let puzzle = singleton_puzzle(2, &[1, 2, 2, 1]);
        let mut grid = CandidateGrid::new(2);
        let mut cache = CageComboCache::new();
        match propagate(&puzzle, &mut grid, &mut cache) {
            PropagateResult::Solved(solution) => {
                assert!(puzzle.verify_solution(&solution));
                assert_eq!(vec![1, 2], solution.rows().next().unwrap().to_vec());
            }
            _ => panic!("expected a solution"),
        }
    }

    #[test]
    fn detects_contradictory_grid() {
        // both cells of the first row are fixed to 1
        let puzzle = singleton_puzzle(2, &[1, 1, 2, 2]);
        let mut grid = CandidateGrid::new(2);
        let mut cache = CageComboCache::new();
        assert!(matches!(
            propagate(&puzzle, &mut grid, &mut cache),
            PropagateResult::Invalid
        ));
    }

    #[test]
    fn stall_is_a_fixpoint() {
        // two solutions remain, so propagation must stall
        let cages = vec![
            Cage::new(3, Operator::Add, vec![0, 1]),
            Cage::new(3, Operator::Add, vec![2, 3]),
        ];
        let puzzle = Puzzle::new(2, cages).unwrap();
        let mut grid = CandidateGrid::new(2);
        let mut cache = CageComboCache::new();
        assert!(matches!(
            propagate(&puzzle, &mut grid, &mut cache),
            PropagateResult::Stalled
        ));
        let stalled = grid.clone();
        assert!(matches!(
            propagate(&puzzle, &mut grid, &mut cache),
            PropagateResult::Stalled
        ));
        assert!(grid == stalled);
    }
}
