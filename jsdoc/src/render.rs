//! Markdown rendering for classified JSDoc entries.
//!
//! Layout per block: heading, description, parameters table, returns table,
//! throws table, type block, properties table, raw passthrough tags, example
//! block. Tag lines that don't match the expected `{type} name - description`
//! shape render as raw fallback rows — information is preserved over strict
//! formatting.

use crate::model::DocEntry;
use regex::Regex;
use std::sync::LazyLock;

// Well-formed @param: `{type} name - desc`, tolerating `[name=default]`
// optional-parameter syntax and one level of nested braces in the type.
static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@param\s+(\{(?:[^{}]|\{[^{}]*\})+\})\s+(?:\[?(\w+)(?:=[^\]]+)?\]?)(?:\s*-\s*(.*))?")
        .unwrap()
});

static RE_RETURNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@returns\s+(\{(?:[^{}]|\{[^{}]*\})+\})\s*(?:-?\s*(.*))?").unwrap()
});

static RE_THROWS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@throws\s+(\{(?:[^{}]|\{[^{}]*\})+\})\s*(?:-?\s*(.*))?").unwrap()
});

static RE_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@property\s+\{([^}]+)\}\s+(\w+)\s*-\s*(.*)").unwrap());

static RE_BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Post-process a type string: a doubly-braced expression collapses to a
/// single-braced one, and pipes are escaped so Markdown table cells survive.
pub fn clean_type(type_str: &str) -> String {
    let collapsed = match type_str
        .strip_prefix("{{")
        .and_then(|s| s.strip_suffix("}}"))
    {
        Some(inner) => format!("{{{}}}", inner.trim()),
        None => type_str.to_string(),
    };
    collapsed.replace('|', r"\|")
}

/// Collapse runs of three or more newlines to exactly two.
fn collapse_blank_lines(text: &str) -> String {
    RE_BLANK_RUN.replace_all(text, "\n\n").to_string()
}

/// Render one classified entry as a Markdown section.
pub fn render_entry(entry: &DocEntry) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", entry.name));

    if !entry.description.is_empty() {
        lines.push(entry.description.join("\n"));
        lines.push(String::new());
    }

    if !entry.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        lines.push("| Parameter | Type | Description |".to_string());
        lines.push("| --- | --- | --- |".to_string());
        for tag in &entry.params {
            match RE_PARAM.captures(tag) {
                Some(caps) => {
                    let param_type = clean_type(&caps[1]);
                    let name = &caps[2];
                    let desc = caps.get(3).map(|m| m.as_str()).unwrap_or("");
                    lines.push(format!("| {} | `{}` | {} |", name, param_type, desc));
                }
                None => lines.push(format!("| {} |  |  |", tag)),
            }
        }
        lines.push(String::new());
    }

    render_two_column(&mut lines, "Returns", &entry.returns, &RE_RETURNS);
    render_two_column(&mut lines, "Throws", &entry.throws, &RE_THROWS);

    if let Some(const_type) = entry.const_type.as_deref() {
        if !const_type.is_empty() {
            lines.push("#### Type\n".to_string());
            lines.push("```JS".to_string());
            lines.push(format!("{{ {} }}", const_type));
            lines.push("```".to_string());
            lines.push(String::new());
        }
    }

    if !entry.properties.is_empty() {
        lines.push("#### Properties\n".to_string());
        lines.push("| Property | Type | Description |".to_string());
        lines.push("| --- | --- | --- |".to_string());
        for prop in &entry.properties {
            match RE_PROPERTY.captures(prop) {
                Some(caps) => lines.push(format!(
                    "| {} | `{{ {} }}` | {} |",
                    caps[2].trim(),
                    caps[1].trim(),
                    caps[3].trim()
                )),
                None => lines.push(format!("| {} |  |  |", prop)),
            }
        }
        lines.push(String::new());
    }

    if !entry.other_tags.is_empty() {
        lines.push(entry.other_tags.join("\n"));
        lines.push(String::new());
    }

    if !entry.example.is_empty() {
        lines.push("#### Example\n".to_string());
        lines.push("```JS".to_string());
        lines.extend(entry.example.iter().cloned());
        lines.push("```".to_string());
        lines.push(String::new());
    }

    collapse_blank_lines(&lines.join("\n"))
}

/// Shared shape for the Returns and Throws tables.
fn render_two_column(lines: &mut Vec<String>, title: &str, tags: &[String], re: &Regex) {
    if tags.is_empty() {
        return;
    }
    lines.push(format!("#### {}\n", title));
    lines.push("| Type | Description |".to_string());
    lines.push("| --- | --- |".to_string());
    for tag in tags {
        match re.captures(tag) {
            Some(caps) => {
                let tag_type = clean_type(&caps[1]);
                let desc = caps.get(2).map(|m| m.as_str()).unwrap_or("");
                lines.push(format!("| `{}` | {} |", tag_type, desc));
            }
            None => lines.push(format!("| {} |  |", tag)),
        }
    }
    lines.push(String::new());
}

/// Render all of a file's entries under a `## <file name>` heading.
pub fn render_file(file_name: &str, entries: &[DocEntry]) -> String {
    let mut sections = vec![format!("## {}\n", file_name)];
    for entry in entries {
        sections.push(render_entry(entry));
    }
    collapse_blank_lines(&sections.join("\n"))
}

/// Title line for a per-folder output file, e.g. `# Utility Functions – Utils`.
pub fn folder_title(folder_name: &str) -> String {
    format!("# Utility Functions – {}\n\n", title_case(folder_name))
}

/// Uppercase the first letter of each word, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
