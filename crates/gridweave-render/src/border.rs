//! Box-drawing rule synthesis.
//!
//! Border structure is fully determined by the block shape and the field
//! width; cell content never changes it. Block boundaries get heavy
//! strokes, interior boundaries light ones.

/// Character set for one horizontal rule.
struct RuleParts {
    left: char,
    line: char,
    thin_join: char,
    block_join: char,
    right: char,
}

const TOP: RuleParts = RuleParts {
    left: '┏',
    line: '━',
    thin_join: '┯',
    block_join: '┳',
    right: '┓',
};

const THICK: RuleParts = RuleParts {
    left: '┣',
    line: '━',
    thin_join: '┿',
    block_join: '╋',
    right: '┫',
};

const THIN: RuleParts = RuleParts {
    left: '┠',
    line: '─',
    thin_join: '┼',
    block_join: '╂',
    right: '┨',
};

const BOTTOM: RuleParts = RuleParts {
    left: '┗',
    line: '━',
    thin_join: '┷',
    block_join: '┻',
    right: '┛',
};

/// The four horizontal rules of one table.
pub(crate) struct Rules {
    /// Outer frame above the first row.
    pub(crate) top: String,
    /// Separator between block rows.
    pub(crate) thick: String,
    /// Separator between rows within a block.
    pub(crate) thin: String,
    /// Outer frame below the last row.
    pub(crate) bottom: String,
}

/// Builds the horizontal rules for a board of `size` columns in blocks of
/// `block_width`, with `field`-wide cells.
pub(crate) fn rules(size: u8, block_width: u8, field: usize) -> Rules {
    let build = |parts: &RuleParts| {
        let mut rule = String::new();
        rule.push(parts.left);
        for col in 0..size {
            for _ in 0..field + 2 {
                rule.push(parts.line);
            }
            if col + 1 < size {
                rule.push(if (col + 1) % block_width == 0 {
                    parts.block_join
                } else {
                    parts.thin_join
                });
            }
        }
        rule.push(parts.right);
        rule
    };
    Rules {
        top: build(&TOP),
        thick: build(&THICK),
        thin: build(&THIN),
        bottom: build(&BOTTOM),
    }
}

/// Vertical separator drawn after `col`: heavy at block boundaries
/// (including the closing edge), light elsewhere.
pub(crate) fn column_separator(col: u8, block_width: u8) -> char {
    if (col + 1) % block_width == 0 { '┃' } else { '│' }
}
