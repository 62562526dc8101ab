//! Candidate computation for empty cells.

use crate::{Board, Position, ValueSet};

/// Values still legal at `pos`: the board alphabet minus every value held
/// by a peer in the same row, column, or block.
///
/// The cell's own value is not considered, so the result is meaningful for
/// filled cells too, though callers normally only consult empty ones.
///
/// # Panics
///
/// Panics if `pos` lies outside the board.
///
/// # Examples
///
/// ```
/// use gridweave_core::{Board, Position, candidates_of};
///
/// let board = Board::decode("1234 3412 2143 0321", 2, 2)?;
/// let candidates = candidates_of(&board, Position::new(0, 3));
/// assert_eq!(candidates.iter().collect::<Vec<_>>(), vec![4]);
/// # Ok::<_, gridweave_core::BoardError>(())
/// ```
#[must_use]
pub fn candidates_of(board: &Board, pos: Position) -> ValueSet {
    let size = board.size();
    let mut candidates = ValueSet::full(size);

    let mut exclude = |peer: Position| {
        if peer != pos {
            let value = board.get(peer);
            if value != 0 {
                candidates.remove(value);
            }
        }
    };

    for i in 0..size {
        exclude(Position::new(i, pos.y()));
        exclude(Position::new(pos.x(), i));
    }

    let block_x = pos.x() - pos.x() % board.block_width();
    let block_y = pos.y() - pos.y() % board.block_height();
    for dy in 0..board.block_height() {
        for dx in 0..board.block_width() {
            exclude(Position::new(block_x + dx, block_y + dy));
        }
    }

    candidates
}
