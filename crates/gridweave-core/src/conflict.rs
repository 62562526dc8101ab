//! Pairwise conflict detection.

use crate::{Board, Position};

/// Two cells in the same row, column, or block holding the same non-zero
/// value.
///
/// `a` always precedes `b` in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// The earlier cell of the pair.
    pub a: Position,
    /// The later cell of the pair.
    pub b: Position,
    /// The duplicated value.
    pub value: u8,
}

/// Finds every conflicting cell pair on the board.
///
/// Each unordered pair is reported exactly once, even when the two cells
/// share both a row (or column) and a block. The result is sorted
/// row-major by `a`, then by `b`.
///
/// # Examples
///
/// ```
/// use gridweave_core::{Board, Position, find_conflicts};
///
/// let board = Board::decode("4400 0000 0000 0000", 2, 2)?;
/// let conflicts = find_conflicts(&board);
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].a, Position::new(0, 0));
/// assert_eq!(conflicts[0].b, Position::new(1, 0));
/// # Ok::<_, gridweave_core::BoardError>(())
/// ```
#[must_use]
pub fn find_conflicts(board: &Board) -> Vec<Conflict> {
    let size = board.size();
    let mut conflicts = Vec::new();

    for pos in board.positions() {
        let value = board.get(pos);
        if value == 0 {
            continue;
        }
        let mut check = |peer: Position| {
            if board.get(peer) == value {
                conflicts.push(Conflict {
                    a: pos,
                    b: peer,
                    value,
                });
            }
        };

        // Peers after `pos` in its row and column.
        for x in pos.x() + 1..size {
            check(Position::new(x, pos.y()));
        }
        for y in pos.y() + 1..size {
            check(Position::new(pos.x(), y));
        }

        // Remaining block peers below `pos`, skipping its row and column
        // (those pairs are already covered above).
        let block_x = pos.x() - pos.x() % board.block_width();
        for y in pos.y() + 1..board.block_height() * (pos.y() / board.block_height() + 1) {
            for x in block_x..block_x + board.block_width() {
                if x != pos.x() {
                    check(Position::new(x, y));
                }
            }
        }
    }

    conflicts.sort_unstable_by_key(|conflict| (conflict.a, conflict.b));
    conflicts
}
