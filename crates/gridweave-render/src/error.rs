//! Configuration errors raised before rendering begins.

use gridweave_core::ValueSet;

/// Errors detected while validating render inputs.
///
/// A render either produces a complete, aligned table or fails with one of
/// these before any output is assembled; there is no partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RenderError {
    /// A block dimension is zero.
    #[display("block dimensions must be nonzero, got {block_width}x{block_height}")]
    EmptyBlock {
        /// Reported block width.
        block_width: u8,
        /// Reported block height.
        block_height: u8,
    },
    /// The block dimensions do not partition the board.
    #[display(
        "block dimensions {block_width}x{block_height} do not partition a {size}x{size} board"
    )]
    BlockShape {
        /// Reported block width.
        block_width: u8,
        /// Reported block height.
        block_height: u8,
        /// Reported board size.
        size: u8,
    },
    /// The board alphabet exceeds the supported value range.
    #[display(
        "board size {size} exceeds the supported maximum {}",
        ValueSet::MAX_VALUE
    )]
    SizeOverflow {
        /// Reported board size.
        size: u8,
    },
}
