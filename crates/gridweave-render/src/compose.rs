//! First-match composition of cell content.

use gridweave_core::{Position, ValueSet};

use crate::{fragment::Fragment, options::RenderOptions, provider::CellContent, puzzle::Puzzle};

/// Separator between candidate values: empty while every value in the
/// alphabet is a single digit, a comma once values reach two digits.
pub(crate) fn value_separator(size: u8) -> &'static str {
    if size > 9 { "," } else { "" }
}

/// Candidate text for one cell: prefix, then the values ascending.
pub(crate) fn candidate_text(candidates: ValueSet, prefix: &str, separator: &str) -> String {
    let mut text = String::from(prefix);
    for (i, value) in candidates.iter().enumerate() {
        if i > 0 {
            text.push_str(separator);
        }
        text.push_str(&value.to_string());
    }
    text
}

/// Resolves the content of one cell.
///
/// Providers are consulted in list order and the first answer wins; the
/// rest are not consulted. With no answer, an empty cell gets synthesized
/// candidate text when enabled, and everything else renders blank.
pub(crate) fn cell_fragment(
    puzzle: &dyn Puzzle,
    providers: &[&dyn CellContent],
    options: &RenderOptions,
    separator: &str,
    pos: Position,
) -> Fragment {
    for provider in providers {
        if let Some(fragment) = provider.get(pos) {
            return fragment;
        }
    }
    if options.include_candidates && puzzle.value(pos) == 0 {
        let text = candidate_text(puzzle.candidates(pos), &options.candidate_prefix, separator);
        return Fragment::maybe_styled(&text, options.candidate_style.as_deref());
    }
    Fragment::plain("")
}

#[cfg(test)]
mod tests {
    use gridweave_core::Board;

    use super::*;
    use crate::provider::{FilledValues, TextOverlay};

    #[test]
    fn test_value_separator_tracks_alphabet_width() {
        assert_eq!(value_separator(9), "");
        assert_eq!(value_separator(10), ",");
        assert_eq!(value_separator(16), ",");
    }

    #[test]
    fn test_candidate_text() {
        let candidates = ValueSet::from_iter([9, 1, 3]);
        assert_eq!(candidate_text(candidates, "*", ""), "*139");
        assert_eq!(candidate_text(candidates, ">", ","), ">1,3,9");
        assert_eq!(candidate_text(ValueSet::EMPTY, "*", ""), "*");
    }

    #[test]
    fn test_first_provider_wins() {
        let board = Board::decode("1000 0000 0000 0000", 2, 2).unwrap();
        let overlay: TextOverlay = [(Position::new(0, 0), Fragment::plain("X"))]
            .into_iter()
            .collect();
        let filled = FilledValues::new(&board);

        let fragment = cell_fragment(
            &board,
            &[&overlay, &filled],
            &RenderOptions::default(),
            "",
            Position::new(0, 0),
        );
        assert_eq!(fragment, Fragment::plain("X"));

        // Reversed priority flips the winner.
        let fragment = cell_fragment(
            &board,
            &[&filled, &overlay],
            &RenderOptions::default(),
            "",
            Position::new(0, 0),
        );
        assert_eq!(fragment, Fragment::plain("1"));
    }

    #[test]
    fn test_candidate_fallback_for_empty_cells() {
        let board = Board::decode("1234 3412 2143 0321", 2, 2).unwrap();
        let filled = FilledValues::new(&board);
        let options = RenderOptions {
            include_candidates: true,
            ..RenderOptions::default()
        };

        let fragment = cell_fragment(&board, &[&filled], &options, "", Position::new(0, 3));
        assert_eq!(fragment, Fragment::plain("*4"));
    }

    #[test]
    fn test_candidate_fallback_styled() {
        let board = Board::new(2, 2).unwrap();
        let options = RenderOptions {
            include_candidates: true,
            candidate_style: Some("green not bold".into()),
            ..RenderOptions::default()
        };

        let fragment = cell_fragment(&board, &[], &options, "", Position::new(0, 0));
        assert_eq!(fragment, Fragment::styled("*1234", "green not bold"));
    }

    #[test]
    fn test_blank_without_candidates() {
        let board = Board::new(2, 2).unwrap();
        let fragment = cell_fragment(
            &board,
            &[],
            &RenderOptions::default(),
            "",
            Position::new(0, 0),
        );
        assert_eq!(fragment, Fragment::plain(""));
    }
}
