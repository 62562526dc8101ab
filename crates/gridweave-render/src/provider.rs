//! Cell content providers and their composition contract.

use std::collections::{HashMap, HashSet};

use gridweave_core::{Conflict, Position};

use crate::{
    fragment::Fragment,
    puzzle::{Puzzle, positions},
};

/// A source of per-cell display content.
///
/// Providers are consulted in list order during composition; the first one
/// returning content for a cell wins. Every method must be a pure function
/// of the provider's captured state and the coordinate: callable any number
/// of times, in any order, with no side effects.
///
/// # Contract
///
/// [`display_len`] must equal the visible width of whatever [`get`] returns
/// at the same coordinate (0 when `get` returns `None`), and
/// [`max_display_len`] must be the maximum of `display_len` over every
/// coordinate the provider answers for. The renderer does not verify this
/// at runtime; a violation shows up as misaligned output, so provider
/// implementations must cover it in their tests.
///
/// [`get`]: CellContent::get
/// [`display_len`]: CellContent::display_len
/// [`max_display_len`]: CellContent::max_display_len
pub trait CellContent {
    /// Content for `pos`, or `None` to defer to the next provider.
    fn get(&self, pos: Position) -> Option<Fragment>;

    /// Visible width of the fragment [`get`](CellContent::get) would return
    /// at `pos` (0 when it would return `None`).
    fn display_len(&self, pos: Position) -> usize;

    /// Maximum [`display_len`](CellContent::display_len) over every
    /// coordinate this provider answers for.
    fn max_display_len(&self) -> usize;
}

/// Visible width of a value rendered in decimal.
fn decimal_width(value: u8) -> usize {
    if value >= 100 {
        3
    } else if value >= 10 {
        2
    } else {
        1
    }
}

/// Renders the filled (non-zero) cells of a puzzle.
///
/// Answers only for cells holding a value; the value is rendered in
/// decimal, wrapped in the configured style tag if one is set.
pub struct FilledValues<'a> {
    puzzle: &'a dyn Puzzle,
    style: Option<String>,
}

impl<'a> FilledValues<'a> {
    /// Provider over `puzzle`'s filled cells, unstyled.
    #[must_use]
    pub fn new(puzzle: &'a dyn Puzzle) -> Self {
        Self {
            puzzle,
            style: None,
        }
    }

    /// Provider over `puzzle`'s filled cells, each wrapped in `tag`.
    #[must_use]
    pub fn styled(puzzle: &'a dyn Puzzle, tag: impl Into<String>) -> Self {
        Self {
            puzzle,
            style: Some(tag.into()),
        }
    }
}

impl CellContent for FilledValues<'_> {
    fn get(&self, pos: Position) -> Option<Fragment> {
        match self.puzzle.value(pos) {
            0 => None,
            value => Some(Fragment::maybe_styled(
                &value.to_string(),
                self.style.as_deref(),
            )),
        }
    }

    fn display_len(&self, pos: Position) -> usize {
        match self.puzzle.value(pos) {
            0 => 0,
            value => decimal_width(value),
        }
    }

    fn max_display_len(&self) -> usize {
        positions(self.puzzle.size())
            .map(|pos| self.display_len(pos))
            .max()
            .unwrap_or(0)
    }
}

/// Highlights cells participating in at least one conflict.
///
/// The flagged coordinate set is derived from the conflict sequence exactly
/// once, at construction, and never refreshed: if the underlying puzzle
/// changes afterwards, the highlight is stale until a new provider is
/// built. Flagged cells render their current board value in the conflict
/// style; a flagged cell that has since been cleared renders nothing.
pub struct ConflictHighlight<'a> {
    puzzle: &'a dyn Puzzle,
    flagged: HashSet<Position>,
    style: String,
}

impl<'a> ConflictHighlight<'a> {
    /// Style tag used by [`ConflictHighlight::new`].
    pub const DEFAULT_STYLE: &'static str = "bold red";

    /// Provider flagging every cell named in `conflicts`, in the default
    /// style.
    #[must_use]
    pub fn new(puzzle: &'a dyn Puzzle, conflicts: impl IntoIterator<Item = Conflict>) -> Self {
        Self::styled(puzzle, conflicts, Self::DEFAULT_STYLE)
    }

    /// Provider flagging every cell named in `conflicts`, wrapped in `tag`.
    #[must_use]
    pub fn styled(
        puzzle: &'a dyn Puzzle,
        conflicts: impl IntoIterator<Item = Conflict>,
        tag: impl Into<String>,
    ) -> Self {
        let mut flagged = HashSet::new();
        for conflict in conflicts {
            flagged.insert(conflict.a);
            flagged.insert(conflict.b);
        }
        Self {
            puzzle,
            flagged,
            style: tag.into(),
        }
    }
}

impl CellContent for ConflictHighlight<'_> {
    fn get(&self, pos: Position) -> Option<Fragment> {
        if !self.flagged.contains(&pos) {
            return None;
        }
        match self.puzzle.value(pos) {
            0 => None,
            value => Some(Fragment::styled(&value.to_string(), &self.style)),
        }
    }

    fn display_len(&self, pos: Position) -> usize {
        if !self.flagged.contains(&pos) {
            return 0;
        }
        match self.puzzle.value(pos) {
            0 => 0,
            value => decimal_width(value),
        }
    }

    fn max_display_len(&self) -> usize {
        self.flagged
            .iter()
            .map(|&pos| self.display_len(pos))
            .max()
            .unwrap_or(0)
    }
}

/// Arbitrary keyed text at arbitrary positions.
///
/// A generic overlay for ad hoc annotations: answers only for positions
/// present in the map.
#[derive(Debug, Clone, Default)]
pub struct TextOverlay {
    entries: HashMap<Position, Fragment>,
}

impl TextOverlay {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content shown at `pos`.
    pub fn insert(&mut self, pos: Position, fragment: Fragment) {
        self.entries.insert(pos, fragment);
    }
}

impl FromIterator<(Position, Fragment)> for TextOverlay {
    fn from_iter<T: IntoIterator<Item = (Position, Fragment)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl CellContent for TextOverlay {
    fn get(&self, pos: Position) -> Option<Fragment> {
        self.entries.get(&pos).cloned()
    }

    fn display_len(&self, pos: Position) -> usize {
        self.entries.get(&pos).map_or(0, Fragment::width)
    }

    fn max_display_len(&self) -> usize {
        self.entries.values().map(Fragment::width).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use gridweave_core::{Board, find_conflicts};

    use super::*;
    use crate::puzzle::positions;

    /// Checks the display-length half of the provider contract.
    fn assert_consistent_lengths(provider: &dyn CellContent, size: u8) {
        let mut max = 0;
        for pos in positions(size) {
            let reported = provider.display_len(pos);
            let actual = provider.get(pos).map_or(0, |fragment| fragment.width());
            assert_eq!(reported, actual, "display_len mismatch at {pos}");
            max = max.max(reported);
        }
        assert_eq!(provider.max_display_len(), max);
    }

    #[test]
    fn test_filled_values_answers_filled_cells_only() {
        let board = Board::decode("0090 0000 0000 1000", 2, 2).unwrap();
        let provider = FilledValues::new(&board);

        assert_eq!(provider.get(Position::new(0, 0)), None);
        assert_eq!(
            provider.get(Position::new(2, 0)),
            Some(Fragment::plain("9"))
        );
        assert_eq!(
            provider.get(Position::new(0, 3)),
            Some(Fragment::plain("1"))
        );
        assert_consistent_lengths(&provider, 4);
    }

    #[test]
    fn test_filled_values_styled() {
        let board = Board::decode("5000 0000 0000 0000", 2, 2).unwrap();
        let provider = FilledValues::styled(&board, "bold");
        assert_eq!(
            provider.get(Position::new(0, 0)),
            Some(Fragment::styled("5", "bold"))
        );
        assert_eq!(provider.display_len(Position::new(0, 0)), 1);
        assert_consistent_lengths(&provider, 4);
    }

    #[test]
    fn test_filled_values_max_spans_two_digit_values() {
        let mut board = Board::new(4, 4).unwrap();
        board.set(Position::new(0, 0), 7).unwrap();
        board.set(Position::new(5, 5), 12).unwrap();
        let provider = FilledValues::new(&board);
        assert_eq!(provider.max_display_len(), 2);
        assert_consistent_lengths(&provider, 16);
    }

    #[test]
    fn test_empty_board_max_is_zero() {
        let board = Board::new(3, 3).unwrap();
        let provider = FilledValues::new(&board);
        assert_eq!(provider.max_display_len(), 0);
    }

    #[test]
    fn test_conflict_highlight_flags_both_cells() {
        let board = Board::decode("4400 0000 0000 0000", 2, 2).unwrap();
        let provider = ConflictHighlight::new(&board, find_conflicts(&board));

        assert_eq!(
            provider.get(Position::new(0, 0)),
            Some(Fragment::styled("4", "bold red"))
        );
        assert_eq!(
            provider.get(Position::new(1, 0)),
            Some(Fragment::styled("4", "bold red"))
        );
        assert_eq!(provider.get(Position::new(2, 0)), None);
        assert_consistent_lengths(&provider, 4);
    }

    #[test]
    fn test_conflict_highlight_is_not_refreshed() {
        let mut board = Board::decode("4400 0000 0000 0000", 2, 2).unwrap();
        let conflicts = find_conflicts(&board);
        board.set(Position::new(1, 0), 0).unwrap();

        // The flag set was captured before the clear; the cleared cell is
        // still flagged but now renders nothing.
        let provider = ConflictHighlight::new(&board, conflicts);
        assert_eq!(
            provider.get(Position::new(0, 0)),
            Some(Fragment::styled("4", "bold red"))
        );
        assert_eq!(provider.get(Position::new(1, 0)), None);
        assert_consistent_lengths(&provider, 4);
    }

    #[test]
    fn test_text_overlay() {
        let overlay: TextOverlay = [
            (Position::new(1, 1), Fragment::plain("note")),
            (Position::new(2, 2), Fragment::styled("!", "red")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            overlay.get(Position::new(1, 1)),
            Some(Fragment::plain("note"))
        );
        assert_eq!(overlay.get(Position::new(0, 0)), None);
        assert_eq!(overlay.max_display_len(), 4);
        assert_consistent_lengths(&overlay, 4);
    }
}
