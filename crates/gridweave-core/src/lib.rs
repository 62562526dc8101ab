//! Core data structures for block-structured number-place puzzles.
//!
//! This crate provides the puzzle model consumed by the rendering and CLI
//! layers: board storage with configurable block dimensions, candidate
//! computation for empty cells, and pairwise conflict detection.
//!
//! # Overview
//!
//! - [`position`]: zero-based `(x, y)` board coordinates
//! - [`value_set`]: ordered sets of cell values backed by a bitmask
//! - [`board`]: the N×N board itself, with puzzle string encode/decode
//! - [`candidates`]: legal-value computation for a single cell
//! - [`conflict`]: detection of cell pairs violating the placement rules
//!
//! # Examples
//!
//! ```
//! use gridweave_core::{Board, Position, candidates_of};
//!
//! let mut board = Board::new(3, 3)?;
//! board.set(Position::new(0, 0), 5)?;
//!
//! // 5 is no longer a candidate anywhere in the first row
//! let candidates = candidates_of(&board, Position::new(8, 0));
//! assert!(!candidates.contains(5));
//! # Ok::<_, gridweave_core::BoardError>(())
//! ```

pub mod board;
pub mod candidates;
pub mod conflict;
pub mod position;
pub mod value_set;

pub use self::{
    board::{Board, BoardError},
    candidates::candidates_of,
    conflict::{Conflict, find_conflicts},
    position::Position,
    value_set::ValueSet,
};
