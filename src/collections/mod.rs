//! Collection types used by the solver

pub mod square;

pub(crate) mod range_set;
