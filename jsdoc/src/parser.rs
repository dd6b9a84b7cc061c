//! Tag classifier — turns one raw JSDoc block into a [`DocEntry`].
//!
//! Every comment line lands in exactly one bucket, keyed by its leading tag.
//! The tag vocabulary is fixed and small, so this is a plain dispatch by
//! prefix rather than anything open-ended.

use crate::model::{CommentBlock, DocEntry};
use regex::Regex;
use std::sync::LazyLock;

// Multi-line @type {{ ... }} — extracted before line classification.
static RE_MULTI_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@type\s+\{\{([\s\S]*?)\}\}").unwrap());

// Single-line @type {T}
static RE_SINGLE_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@type\s+\{([^}]+)\}").unwrap());

// Leading "* " decoration inside a multi-line type payload.
static RE_STAR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*\s*").unwrap());

// Name inference chain. Priority order is fixed — changing it would shift
// which name wins when several patterns match.
static RE_AT_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@function\s+(\w+)").unwrap());

static RE_FUNCTION_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+(\w+)").unwrap());

static RE_CONST_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const\s+(\w+)\s*=").unwrap());

static RE_EXPORT_CONST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"export\s+const\s+(\w+)").unwrap());

static RE_ARROW_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*=\s*\(.*\)\s*=>").unwrap());

static RE_EXPORTS_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"exports\.(\w+)\s*=").unwrap());

/// Classify one comment block into a [`DocEntry`].
///
/// `index` is the 1-based position of the block within its file, used for
/// the `Function N` name fallback.
pub fn classify(block: &CommentBlock, index: usize) -> DocEntry {
    // Pre-pass: pull out a multi-line @type {{...}} so its body doesn't get
    // classified line-by-line.
    let mut raw = block.raw.clone();
    let mut extracted_type: Option<String> = None;
    if let Some(caps) = RE_MULTI_TYPE.captures(&raw) {
        extracted_type = Some(caps[1].to_string());
        let whole = caps[0].to_string();
        raw = raw.replace(&whole, "");
    }

    let mut entry = DocEntry::default();
    let mut type_line: Option<String> = None;
    let mut in_example = false;

    for line in raw.lines() {
        let line = line.trim();
        if line.starts_with("/**") || line.starts_with("*/") {
            continue;
        }
        let line = line.trim_start_matches('*').trim();
        if line.starts_with('@') {
            in_example = false;
            if line.starts_with("@param") {
                entry.params.push(line.to_string());
            } else if line.starts_with("@returns") {
                entry.returns.push(line.to_string());
            } else if line.starts_with("@throws") {
                entry.throws.push(line.to_string());
            } else if line.starts_with("@example") {
                entry.example.push(line["@example".len()..].trim().to_string());
                in_example = true;
            } else if line.starts_with("@type") {
                type_line = Some(line.to_string());
            } else if line.starts_with("@property") {
                entry.properties.push(line.to_string());
            } else {
                entry.other_tags.push(line.to_string());
            }
        } else if in_example {
            entry.example.push(line.to_string());
        } else {
            entry.description.push(line.to_string());
        }
    }

    // Resolve the type payload. A single-line @type wins over the extracted
    // multi-line form; an unusable one (e.g. a swallowed @typedef) yields an
    // empty payload the renderer drops.
    entry.const_type = match (&type_line, &extracted_type) {
        (None, Some(multi)) => {
            let cleaned: Vec<String> = multi
                .lines()
                .map(|l| RE_STAR_PREFIX.replace(l, "").trim().to_string())
                .filter(|l| !l.is_empty())
                .collect();
            Some(cleaned.join("\n"))
        }
        (Some(line), _) => Some(
            RE_SINGLE_TYPE
                .captures(line)
                .map(|caps| caps[1].trim().to_string())
                .unwrap_or_default(),
        ),
        (None, None) => None,
    };

    entry.name = infer_name(&raw, &block.code_line, index);
    entry
}

/// Best-effort name inference: explicit annotation first, then the common
/// declaration shapes on the following code line, positional fallback last.
fn infer_name(block: &str, code_line: &str, index: usize) -> String {
    let candidates: [(&Regex, &str); 6] = [
        (&RE_AT_FUNCTION, block),
        (&RE_FUNCTION_DECL, code_line),
        (&RE_CONST_ASSIGN, code_line),
        (&RE_EXPORT_CONST, code_line),
        (&RE_ARROW_ASSIGN, code_line),
        (&RE_EXPORTS_ASSIGN, code_line),
    ];
    for (re, haystack) in candidates {
        if let Some(caps) = re.captures(haystack) {
            return caps[1].to_string();
        }
    }
    format!("Function {}", index)
}
