use std::path::Path;

use calcudoku::collections::square::Square;
use calcudoku::puzzle::{Cage, Operator, Puzzle, Solution, Value};
use calcudoku::solve::{PuzzleSolver, SolveResult};

#[test]
fn solve_4x4_by_deduction() {
    let puzzle = load_puzzle("4x4-deduction.json");
    let result = PuzzleSolver::new(&puzzle).solve();
    let data = result.solved().expect("puzzle should be solvable");
    assert!(!data.used_search);
    let expected = vec![
        vec![3, 2, 4, 1],
        vec![2, 4, 1, 3],
        vec![1, 3, 2, 4],
        vec![4, 1, 3, 2],
    ];
    assert_eq!(expected, solution_rows(&data.solution));
}

#[test]
fn solve_6x6_with_search() {
    let puzzle = load_puzzle("6x6-search.json");
    let result = PuzzleSolver::new(&puzzle).solve();
    let data = result.solved().expect("puzzle should be solvable");
    assert!(data.used_search);
    assert!(puzzle.verify_solution(&data.solution));
    // the puzzle's unique solution, reached after one guess
    let expected = vec![
        vec![1, 3, 2, 4, 5, 6],
        vec![3, 2, 1, 5, 6, 4],
        vec![2, 1, 3, 6, 4, 5],
        vec![4, 5, 6, 1, 2, 3],
        vec![5, 6, 4, 2, 3, 1],
        vec![6, 4, 5, 3, 1, 2],
    ];
    assert_eq!(expected, solution_rows(&data.solution));
}

#[test]
fn six_by_six_rejects_relabeled_block() {
    // swapping 1 and 3 within the top-left block keeps every row and column
    // a permutation, so only the + cage rules this grid out
    let puzzle = load_puzzle("6x6-search.json");
    let rows = vec![
        vec![3, 1, 2, 4, 5, 6],
        vec![1, 2, 3, 5, 6, 4],
        vec![2, 3, 1, 6, 4, 5],
        vec![4, 5, 6, 1, 2, 3],
        vec![5, 6, 4, 2, 3, 1],
        vec![6, 4, 5, 3, 1, 2],
    ];
    assert!(!puzzle.verify_solution(&solution_from_rows(&rows)));
}

#[test]
fn unsolvable_puzzle() {
    let puzzle = load_puzzle("4x4-unsolvable.json");
    let result = PuzzleSolver::new(&puzzle).solve();
    assert!(!result.is_solved());
    match result {
        SolveResult::Unsolvable(candidates) => {
            // the duplicated 2 in the first row leaves emptied cells behind
            assert!(candidates.to_string().contains('-'));
        }
        SolveResult::Solved(_) => panic!("puzzle should not be solvable"),
    }
}

#[test]
fn all_singleton_puzzle_returns_its_grid() {
    let rows: Vec<Vec<Value>> = (0..5)
        .map(|r| (0..5).map(|c| ((r + c) % 5 + 1) as Value).collect())
        .collect();
    let cages = rows
        .iter()
        .flatten()
        .enumerate()
        .map(|(id, &value)| Cage::new(value, Operator::Nop, vec![id]))
        .collect();
    let puzzle = Puzzle::new(5, cages).unwrap();
    let result = PuzzleSolver::new(&puzzle).solve();
    let data = result.solved().expect("puzzle should be solvable");
    assert!(!data.used_search);
    assert_eq!(rows, solution_rows(&data.solution));
}

fn load_puzzle(name: &str) -> Puzzle {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("res/test/puzzles")
        .join(name);
    Puzzle::from_file(&path).unwrap()
}

fn solution_rows(solution: &Solution) -> Vec<Vec<Value>> {
    solution.rows().map(<[Value]>::to_vec).collect()
}

fn solution_from_rows(rows: &[Vec<Value>]) -> Solution {
    let mut solution = Square::with_width_and_value(rows.len(), 0);
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            solution[r * rows.len() + c] = value;
        }
    }
    solution
}
