#![warn(rust_2018_idioms)]

use anyhow::Result;

use calcudoku::puzzle::Puzzle;
use calcudoku::solve::{PuzzleSolver, SolveResult};

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    println!("Reading puzzle from \"{}\"", options.input().display());
    let puzzle = Puzzle::from_file(options.input())?;
    match PuzzleSolver::new(&puzzle).solve() {
        SolveResult::Unsolvable(candidates) => {
            println!("Puzzle is not solvable");
            if options.show_candidates() {
                print!("{}", candidates);
            }
        }
        SolveResult::Solved(data) => {
            if data.used_search {
                println!("Puzzle solved with backtracking search");
            } else {
                println!("Puzzle solved by deduction alone");
            }
            print!("{}", data.solution);
        }
    }
    Ok(())
}
