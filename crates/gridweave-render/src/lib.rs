//! Styled terminal rendering for block-structured number-place boards.
//!
//! This crate turns an N×N board into a box-drawn text table annotated with
//! `[tag]…[/tag]` style markup, ready for a markup-aware terminal printer.
//! Cell content is composited from an ordered list of [`CellContent`]
//! providers (current values, conflict highlights, ad hoc overlays); the
//! first provider answering for a cell wins, with synthesized candidate
//! text as the fallback for empty cells.
//!
//! Style markup occupies no columns on screen, so every piece of content
//! travels as a [`Fragment`] pairing the raw string with its visible width,
//! and all column sizing works on visible widths.
//!
//! # Examples
//!
//! ```
//! use gridweave_core::Board;
//! use gridweave_render::{FilledValues, RenderOptions, render};
//!
//! let board = Board::decode("1000 0000 0000 0000", 2, 2)?;
//! let filled = FilledValues::new(&board);
//! let table = render(&board, &[&filled], &RenderOptions::default())?;
//! assert!(table.starts_with('['));
//! assert!(table.contains('┏'));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod border;
mod compose;
pub mod error;
pub mod fragment;
mod layout;
pub mod options;
pub mod provider;
pub mod puzzle;
mod table;

pub use self::{
    error::RenderError,
    fragment::Fragment,
    options::{Align, RenderOptions},
    provider::{CellContent, ConflictHighlight, FilledValues, TextOverlay},
    puzzle::Puzzle,
    table::render,
};
