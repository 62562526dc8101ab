//! Render configuration.

/// Horizontal alignment of cell content within its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    #[default]
    Right,
}

/// Configuration for one render call.
///
/// All fields have defaults; a default-constructed value renders filled
/// values only, right-aligned, with yellow index labels.
///
/// # Examples
///
/// ```
/// use gridweave_render::RenderOptions;
///
/// let options = RenderOptions {
///     include_candidates: true,
///     candidate_style: Some("green not bold".into()),
///     ..RenderOptions::default()
/// };
/// assert_eq!(options.candidate_prefix, "*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Synthesize candidate text for empty cells no provider answered.
    pub include_candidates: bool,
    /// Prefix marking a field as candidate text.
    pub candidate_prefix: String,
    /// Cell content alignment.
    pub align: Align,
    /// Style tag applied to synthesized candidate text.
    pub candidate_style: Option<String>,
    /// Style tag applied to the index header and row labels.
    pub index_style: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_candidates: false,
            candidate_prefix: "*".into(),
            align: Align::Right,
            candidate_style: None,
            index_style: Some("yellow not b".into()),
        }
    }
}
