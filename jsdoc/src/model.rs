//! Data model for a parsed JSDoc block — format-agnostic.

/// One extracted `/** ... */` span and the code line that follows it.
#[derive(Debug)]
pub struct CommentBlock {
    /// Raw comment text, delimiters included.
    pub raw: String,
    /// First non-blank, non-`//` line after the comment. Empty if none.
    pub code_line: String,
}

/// A single comment block classified into tag buckets, ready to render.
#[derive(Debug, Default)]
pub struct DocEntry {
    /// Inferred name, or the positional `Function N` placeholder.
    pub name: String,
    /// Free-text description lines (blank lines preserved; the renderer
    /// collapses them).
    pub description: Vec<String>,
    /// Raw `@param` tag lines.
    pub params: Vec<String>,
    /// Raw `@returns` tag lines.
    pub returns: Vec<String>,
    /// Raw `@throws` tag lines.
    pub throws: Vec<String>,
    /// Captured `@example` lines, verbatim.
    pub example: Vec<String>,
    /// Normalized type payload from `@type` (single- or double-brace form).
    /// `None` when no usable type was found; may be multi-line.
    pub const_type: Option<String>,
    /// Raw `@property` tag lines.
    pub properties: Vec<String>,
    /// Unrecognized tag lines, passed through as-is.
    pub other_tags: Vec<String>,
}
