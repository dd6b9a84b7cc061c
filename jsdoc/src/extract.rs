//! JSDoc block extraction — finds `/** ... */` spans and the declaration
//! line that follows each one.

use crate::model::CommentBlock;
use regex::Regex;
use std::sync::LazyLock;

// Matches JSDoc blocks (/** ... */) including multiline, non-greedy.
static RE_JSDOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*[\s\S]*?\*/").unwrap());

/// Extract all JSDoc blocks from a source file, paired with the nearest
/// following non-blank, non-`//` line (used only for name inference).
///
/// Returns blocks in file order. No matches means an empty vec — the caller
/// skips the file.
pub fn extract_blocks(content: &str) -> Vec<CommentBlock> {
    let mut blocks = Vec::new();
    for m in RE_JSDOC_BLOCK.find_iter(content) {
        let code_line = following_code_line(&content[m.end()..]);
        blocks.push(CommentBlock {
            raw: m.as_str().to_string(),
            code_line,
        });
    }
    blocks
}

/// First non-empty line after the comment that isn't a `//` comment.
fn following_code_line(rest: &str) -> String {
    for line in rest.lines() {
        let stripped = line.trim();
        if !stripped.is_empty() && !stripped.starts_with("//") {
            return stripped.to_string();
        }
    }
    String::new()
}
