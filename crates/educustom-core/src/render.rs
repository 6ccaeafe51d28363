//! Lesson-plan document renderer.
//!
//! Turns the model's markdown-flavored output into an ordered sequence of
//! typed blocks ready for visual layout. The model applies markdown
//! conventions loosely, so this is a line classifier over a small subset,
//! not a markdown parser:
//!
//! - `# Heading` → [`Block::Heading1`]
//! - `## Heading` → [`Block::Heading2`]
//! - `### Heading`, or a short line wrapped entirely in `**` →
//!   [`Block::EmphasisHeading`]
//! - `* item` / `- item` → [`Block::Bullet`]
//! - `12. item` → [`Block::Numbered`]
//! - blank line → [`Block::Spacer`]
//! - everything else → [`Block::Paragraph`]
//!
//! Every input line maps to exactly one block, in input order, and no
//! input ever fails: stray or unclosed markers degrade to plain text with
//! the markers scrubbed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Characters scrubbed from plain inline fragments.
const STRAY_MARKERS: [char; 5] = ['*', '#', '_', '~', '`'];

/// Knobs for [`render_with`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// A line that starts and ends with `**` and is shorter than this
    /// many characters is promoted to an [`Block::EmphasisHeading`].
    pub emphasis_heading_max_len: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            emphasis_heading_max_len: 100,
        }
    }
}

/// One classified, renderable unit derived from a single source line.
///
/// `raw` is always the trimmed source line including its markers, so
/// concatenating `raw` over a render reproduces the trimmed non-empty
/// input lines in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Block {
    Heading1 { raw: String, spans: Vec<InlineSpan> },
    Heading2 { raw: String, spans: Vec<InlineSpan> },
    /// An explicit `###` heading, or a short all-bold line treated as a
    /// visual sub-heading. Bold markers are deleted outright rather than
    /// converted to emphasis spans.
    EmphasisHeading { raw: String, text: String },
    Bullet { raw: String, spans: Vec<InlineSpan> },
    /// An ordered-list item with its `N. ` prefix stripped. Display
    /// numbering is the layout layer's concern.
    Numbered { raw: String, spans: Vec<InlineSpan> },
    Paragraph { raw: String, spans: Vec<InlineSpan> },
    Spacer,
}

impl Block {
    /// The trimmed source line this block was derived from.
    /// `None` for spacers.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Block::Heading1 { raw, .. }
            | Block::Heading2 { raw, .. }
            | Block::EmphasisHeading { raw, .. }
            | Block::Bullet { raw, .. }
            | Block::Numbered { raw, .. }
            | Block::Paragraph { raw, .. } => Some(raw),
            Block::Spacer => None,
        }
    }
}

/// A contiguous run of plain or bold text within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
#[ts(export)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
}

/// Render a document with default options.
pub fn render(text: &str) -> Vec<Block> {
    render_with(text, &RenderOptions::default())
}

/// Render a document: one block per input line, in input order.
///
/// Splits on `\n` rather than `str::lines` so the empty string is one
/// empty line (one spacer), matching one-block-per-line exactly.
pub fn render_with(text: &str, options: &RenderOptions) -> Vec<Block> {
    text.split('\n')
        .map(|line| classify_line(line, options))
        .collect()
}

fn classify_line(line: &str, options: &RenderOptions) -> Block {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Block::Spacer;
    }

    if let Some(rest) = trimmed.strip_prefix("# ") {
        return Block::Heading1 {
            raw: trimmed.to_string(),
            spans: parse_inline_spans(rest),
        };
    }

    if let Some(rest) = trimmed.strip_prefix("## ") {
        return Block::Heading2 {
            raw: trimmed.to_string(),
            spans: parse_inline_spans(rest),
        };
    }

    // A short line wrapped entirely in ** reads as a sub-heading in
    // generated prose even without an explicit ### marker.
    let short_bold = trimmed.starts_with("**")
        && trimmed.ends_with("**")
        && trimmed.chars().count() < options.emphasis_heading_max_len;
    if trimmed.starts_with("### ") || short_bold {
        let text = trimmed
            .strip_prefix("### ")
            .unwrap_or(trimmed)
            .replace("**", "");
        return Block::EmphasisHeading {
            raw: trimmed.to_string(),
            text,
        };
    }

    if let Some(rest) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        return Block::Bullet {
            raw: trimmed.to_string(),
            spans: parse_inline_spans(rest),
        };
    }

    if let Some(rest) = strip_numbered_prefix(trimmed) {
        return Block::Numbered {
            raw: trimmed.to_string(),
            spans: parse_inline_spans(rest),
        };
    }

    Block::Paragraph {
        raw: trimmed.to_string(),
        spans: parse_inline_spans(trimmed),
    }
}

/// Strip a leading `digits '.' whitespace` ordered-list prefix.
/// Returns the remainder, or `None` if the line has no such prefix.
fn strip_numbered_prefix(line: &str) -> Option<&str> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let rest = line[digits_end..].strip_prefix('.')?;
    let mut chars = rest.chars();
    if chars.next()?.is_whitespace() {
        Some(chars.as_str())
    } else {
        None
    }
}

/// Split a line into plain and bold spans.
///
/// Scans left to right for `**…**` pairs. A paired run becomes an
/// [`InlineSpan::Bold`] with the interior text; everything else becomes
/// an [`InlineSpan::Plain`] with
/// stray markdown characters removed. An unpaired `**` is never bold —
/// it stays in a plain fragment and gets scrubbed like any other stray
/// marker. Italics, nesting, and escapes are out of scope and degrade to
/// plain text.
pub fn parse_inline_spans(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_open = &remaining[start + 2..];
        let Some(close) = after_open.find("**") else {
            // No closing pair: the rest, opener included, is plain.
            break;
        };
        push_plain(&mut spans, &remaining[..start]);
        spans.push(InlineSpan::Bold(after_open[..close].to_string()));
        remaining = &after_open[close + 2..];
    }

    push_plain(&mut spans, remaining);
    spans
}

fn push_plain(spans: &mut Vec<InlineSpan>, fragment: &str) {
    let cleaned: String = fragment
        .chars()
        .filter(|c| !STRAY_MARKERS.contains(c))
        .collect();
    if !cleaned.is_empty() {
        spans.push(InlineSpan::Plain(cleaned));
    }
}

/// Remove all markdown control characters, for contexts that need plain
/// text (titles, filenames).
///
/// Removes `**…**` and `*…*` wrappers keeping the interior text, stray
/// backtick/tilde/underscore characters, and `#`-runs followed by one
/// whitespace character, then trims. Idempotent: applying it twice
/// yields the same result as once. The stray-character pass runs before
/// the heading pass so that deleting a stray character can never expose
/// a fresh heading marker to a later application.
pub fn strip_formatting(text: &str) -> String {
    let unbolded = remove_wrapped(text, "**");
    let unitalicized = remove_wrapped(&unbolded, "*");
    let scrubbed: String = unitalicized
        .chars()
        .filter(|c| !matches!(c, '`' | '~' | '_'))
        .collect();
    remove_heading_markers(&scrubbed).trim().to_string()
}

/// Remove `delim…delim` wrappers, keeping the interior. An opener with
/// no closing delimiter stays literal.
fn remove_wrapped(text: &str, delim: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut remaining = text;

    while let Some(start) = remaining.find(delim) {
        let after_open = &remaining[start + delim.len()..];
        let Some(close) = after_open.find(delim) else {
            break;
        };
        out.push_str(&remaining[..start]);
        out.push_str(&after_open[..close]);
        remaining = &after_open[close + delim.len()..];
    }

    out.push_str(remaining);
    out
}

/// Remove every run of `#` characters that is followed by one whitespace
/// character (the whitespace goes too). A `#`-run with no trailing
/// whitespace stays literal.
fn remove_heading_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '#' {
            out.push(c);
            continue;
        }
        let mut run = 1usize;
        while chars.peek() == Some(&'#') {
            run += 1;
            chars.next();
        }
        match chars.peek() {
            Some(w) if w.is_whitespace() => {
                chars.next();
            }
            _ => {
                for _ in 0..run {
                    out.push('#');
                }
            }
        }
    }

    out
}
