//! Generate complete Sudoku-style boards.
//!
//! A board is an `n × n` grid tiled by `b × b` boxes, filled from the
//! alphabet `1..=m` so that no value repeats within a row, column or box.
//! The alphabet may be larger than the grid width, in which case rows need
//! not use every value.
//!
//! Two engines walk the same solution space: [`generate::BoardGenerator`]
//! drains it lazily from start to finish, while [`search::BoardSearch`]
//! produces one board per call under a time budget, resuming where it left
//! off.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod generate;
pub mod geometry;
pub mod search;

mod candidates;

pub use crate::collections::square::Square;

/// A cell value; `0` marks an unassigned cell.
pub type Value = i32;

/// A working or completed grid of cell values.
pub type Board = Square<Value>;
