//! Solve KenKen (Calcudoku) puzzles
//!
//! A puzzle is a square grid partitioned into cages, each cage binding its
//! cells to an arithmetic target, while every row and column must contain
//! each value exactly once. The solver works by constraint propagation
//! (cage combination reduction and row/column group elimination) and falls
//! back to depth-first search when deduction stalls.

#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod puzzle;
pub mod solve;

pub(crate) type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
