//! Table assembly: the render entry point.

use gridweave_core::{Position, ValueSet};

use crate::{
    border, compose,
    error::RenderError,
    fragment, layout,
    options::RenderOptions,
    provider::CellContent,
    puzzle::Puzzle,
};

/// Renders a puzzle as a box-drawn, markup-annotated table.
///
/// Providers are consulted in list order for every cell; the first answer
/// wins. Empty cells no provider claims render synthesized candidate text
/// when [`RenderOptions::include_candidates`] is set, and blank otherwise.
/// The table carries a styled index header row, a left-hand index gutter,
/// and heavy rules on block boundaries; identical inputs always produce
/// byte-identical output, without a trailing newline.
///
/// # Errors
///
/// Returns a [`RenderError`] describing the problem if the puzzle reports
/// unusable geometry. Validation happens before any output is assembled.
///
/// # Examples
///
/// ```
/// use gridweave_core::Board;
/// use gridweave_render::{FilledValues, RenderOptions, render};
///
/// let board = Board::decode("12 34 34 12 21 43 43 21", 2, 2)?;
/// let filled = FilledValues::new(&board);
/// let table = render(&board, &[&filled], &RenderOptions::default())?;
/// assert_eq!(table.lines().count(), 2 + 4 + 3 + 1);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
pub fn render(
    puzzle: &dyn Puzzle,
    providers: &[&dyn CellContent],
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let block_width = puzzle.block_width();
    let block_height = puzzle.block_height();
    let size = puzzle.size();

    if block_width == 0 || block_height == 0 {
        return Err(RenderError::EmptyBlock {
            block_width,
            block_height,
        });
    }
    if u16::from(block_width) * u16::from(block_height) != u16::from(size) {
        return Err(RenderError::BlockShape {
            block_width,
            block_height,
            size,
        });
    }
    if size > ValueSet::MAX_VALUE {
        return Err(RenderError::SizeOverflow { size });
    }

    let field = layout::field_width(puzzle, providers, options);
    log::debug!("rendering {size}x{size} board, field width {field}");

    let separator = compose::value_separator(size);
    let rules = border::rules(size, block_width, field);
    let gutter = size.to_string().len();
    let indent = " ".repeat(gutter + 1);

    let mut lines = Vec::with_capacity(2 * usize::from(size) + 2);
    lines.push(header_row(size, field, gutter, options));
    lines.push(format!("{indent}{}", rules.top));
    for y in 0..size {
        lines.push(data_row(puzzle, providers, options, separator, field, gutter, y));
        if y + 1 < size {
            let rule = if (y + 1) % block_height == 0 {
                &rules.thick
            } else {
                &rules.thin
            };
            lines.push(format!("{indent}{rule}"));
        }
    }
    lines.push(format!("{indent}{}", rules.bottom));

    Ok(lines.join("\n"))
}

/// Column index labels, centered over their cells.
fn header_row(size: u8, field: usize, gutter: usize, options: &RenderOptions) -> String {
    let mut row = " ".repeat(gutter + 2);
    for col in 0..size {
        let label = (col + 1).to_string();
        row.push_str(&layout::center(&label, label.len(), field + 2));
        row.push(' ');
    }
    let row = row.trim_end().to_string();
    match options.index_style.as_deref() {
        Some(tag) => fragment::wrap(tag, &row),
        None => row,
    }
}

/// One board row: gutter label, then composited cells and separators.
fn data_row(
    puzzle: &dyn Puzzle,
    providers: &[&dyn CellContent],
    options: &RenderOptions,
    separator: &str,
    field: usize,
    gutter: usize,
    y: u8,
) -> String {
    let label = (y + 1).to_string();
    let mut row = " ".repeat(gutter - label.len());
    match options.index_style.as_deref() {
        Some(tag) => row.push_str(&fragment::wrap(tag, &label)),
        None => row.push_str(&label),
    }
    row.push(' ');
    row.push('┃');
    for x in 0..puzzle.size() {
        let fragment = compose::cell_fragment(puzzle, providers, options, separator, Position::new(x, y));
        row.push(' ');
        row.push_str(&layout::justify(&fragment, field, options.align));
        row.push(' ');
        row.push(border::column_separator(x, puzzle.block_width()));
    }
    row
}
