//! Styled text fragments with tracked display width.

use unicode_width::UnicodeWidthStr;

/// A piece of cell content: the raw string plus its visible width.
///
/// Style tags are embedded as `[tag]…[/tag]` markup that occupies no
/// columns on screen, so the raw string's length says nothing about how
/// wide the fragment renders. The visible width is fixed when the fragment
/// is built and carried alongside the text; nothing downstream re-derives
/// it by parsing markup.
///
/// # Examples
///
/// ```
/// use gridweave_render::Fragment;
///
/// let plain = Fragment::plain("42");
/// assert_eq!(plain.width(), 2);
///
/// let styled = Fragment::styled("42", "bold red");
/// assert_eq!(styled.text(), "[bold red]42[/bold red]");
/// assert_eq!(styled.width(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text: String,
    width: usize,
}

impl Fragment {
    /// Creates an unstyled fragment, measuring the width from the text.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.width();
        Self { text, width }
    }

    /// Creates a fragment of `text` wrapped in a `[tag]…[/tag]` pair.
    ///
    /// The visible width is that of the unstyled text.
    #[must_use]
    pub fn styled(text: &str, tag: &str) -> Self {
        Self {
            text: wrap(tag, text),
            width: text.width(),
        }
    }

    /// Creates a styled fragment if `tag` is given, a plain one otherwise.
    #[must_use]
    pub fn maybe_styled(text: &str, tag: Option<&str>) -> Self {
        match tag {
            Some(tag) => Self::styled(text, tag),
            None => Self::plain(text),
        }
    }

    /// The raw string, markup included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Visible width in terminal columns.
    #[must_use]
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }
}

/// Wraps `text` in a `[tag]…[/tag]` markup pair.
#[must_use]
pub fn wrap(tag: &str, text: &str) -> String {
    format!("[{tag}]{text}[/{tag}]")
}
