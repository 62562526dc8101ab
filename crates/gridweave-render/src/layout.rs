//! Field width computation and justification.

use unicode_width::UnicodeWidthStr;

use crate::{
    compose,
    fragment::Fragment,
    options::{Align, RenderOptions},
    provider::CellContent,
    puzzle::{Puzzle, positions},
};

/// The uniform column width, in visible characters, for one render call.
///
/// Wide enough that no provider's content and no synthesized candidate
/// text is ever truncated, and at least 1 so empty boards still render a
/// grid.
pub(crate) fn field_width(
    puzzle: &dyn Puzzle,
    providers: &[&dyn CellContent],
    options: &RenderOptions,
) -> usize {
    let mut field = providers
        .iter()
        .map(|provider| provider.max_display_len())
        .max()
        .unwrap_or(0);

    if options.include_candidates {
        let separator = compose::value_separator(puzzle.size());
        for pos in positions(puzzle.size()) {
            if puzzle.value(pos) == 0 {
                let text = compose::candidate_text(
                    puzzle.candidates(pos),
                    &options.candidate_prefix,
                    separator,
                );
                field = field.max(text.width());
            }
        }
    }

    field.max(1)
}

/// Pads a fragment's raw text to `field` visible columns.
///
/// The padding is computed from the fragment's reported width, never from
/// the raw string length, so embedded markup does not distort alignment.
/// Content wider than the field is left untouched.
pub(crate) fn justify(fragment: &Fragment, field: usize, align: Align) -> String {
    let padding = " ".repeat(field.saturating_sub(fragment.width()));
    match align {
        Align::Left => format!("{}{padding}", fragment.text()),
        Align::Right => format!("{padding}{}", fragment.text()),
    }
}

/// Centers plain `text` of visible width `width` in `field` columns.
pub(crate) fn center(text: &str, width: usize, field: usize) -> String {
    let padding = field.saturating_sub(width);
    let left = padding / 2;
    format!(
        "{}{text}{}",
        " ".repeat(left),
        " ".repeat(padding - left)
    )
}
