//! Block-tree layout as simple print-friendly HTML.

use educustom_core::render::{Block, InlineSpan};

/// Lay out rendered blocks as the document body.
///
/// One element per block, in block order. Numbered items are renumbered
/// per consecutive run, restarting after any other block kind.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut html = String::new();
    let mut ordinal = 0u32;

    for block in blocks {
        if !matches!(block, Block::Numbered { .. }) {
            ordinal = 0;
        }
        match block {
            Block::Heading1 { spans, .. } => push_tag(&mut html, "h1", &spans_to_html(spans)),
            Block::Heading2 { spans, .. } => push_tag(&mut html, "h2", &spans_to_html(spans)),
            Block::EmphasisHeading { text, .. } => push_tag(&mut html, "h3", &escape(text)),
            Block::Bullet { spans, .. } => {
                html.push_str("<p class=\"bullet\">\u{2022} ");
                html.push_str(&spans_to_html(spans));
                html.push_str("</p>\n");
            }
            Block::Numbered { spans, .. } => {
                ordinal += 1;
                html.push_str(&format!("<p class=\"numbered\">{ordinal}. "));
                html.push_str(&spans_to_html(spans));
                html.push_str("</p>\n");
            }
            Block::Paragraph { spans, .. } => push_tag(&mut html, "p", &spans_to_html(spans)),
            Block::Spacer => html.push_str("<div class=\"spacer\"></div>\n"),
        }
    }

    html
}

fn push_tag(html: &mut String, tag: &str, inner: &str) {
    html.push_str(&format!("<{tag}>{inner}</{tag}>\n"));
}

fn spans_to_html(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            InlineSpan::Plain(text) => out.push_str(&escape(text)),
            InlineSpan::Bold(text) => {
                out.push_str("<strong>");
                out.push_str(&escape(text));
                out.push_str("</strong>");
            }
        }
    }
    out
}

/// Minimal HTML escaping for text content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
