//! Line-by-line highlighting of scenario documents.
//!
//! [`render`] is the structured form consumed by terminal front ends;
//! [`render_html`] produces the `<div>`-per-line markup used by web views.

use super::tokenize::{LineToken, Segment, tokenize};

/// Text shown for an empty line so it keeps its vertical space.
pub const EMPTY_LINE_PLACEHOLDER: &str = "\u{a0}";

/// CSS class for keyword spans in [`render_html`] output.
pub const KEYWORD_CLASS: &str = "keyword";

/// CSS class for quoted literal spans in [`render_html`] output.
pub const LITERAL_CLASS: &str = "literal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Keyword,
    Literal,
    Plain,
    /// Stand-in for an empty line.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan<'a> {
    pub style: SpanStyle,
    pub text: &'a str,
}

/// Rendering instructions for one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFragment<'a> {
    pub spans: Vec<StyledSpan<'a>>,
}

impl LineFragment<'_> {
    pub fn is_keyword_line(&self) -> bool {
        self.spans
            .first()
            .is_some_and(|s| s.style == SpanStyle::Keyword)
    }

    /// Concatenated display text of every span.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text).collect()
    }
}

/// Renders every line of `document`, in order.
///
/// Lines are split on `'\n'` only, so a CRLF document keeps a trailing
/// `'\r'` in each line's last span. An empty document has no lines.
pub fn render(document: &str) -> Vec<LineFragment<'_>> {
    if document.is_empty() {
        return Vec::new();
    }
    document.split('\n').map(render_line).collect()
}

/// Renders a single line.
pub fn render_line(line: &str) -> LineFragment<'_> {
    let spans = match tokenize(line) {
        LineToken::Keyword {
            keyword,
            spacing,
            remainder,
        } => {
            let mut spans = Vec::with_capacity(remainder.len() + 2);
            spans.push(StyledSpan {
                style: SpanStyle::Keyword,
                text: keyword.as_str(),
            });
            spans.push(StyledSpan {
                style: SpanStyle::Plain,
                text: spacing,
            });
            spans.extend(remainder.into_iter().map(|seg| match seg {
                Segment::Text(text) => StyledSpan {
                    style: SpanStyle::Plain,
                    text,
                },
                Segment::Literal(text) => StyledSpan {
                    style: SpanStyle::Literal,
                    text,
                },
            }));
            spans
        }
        LineToken::Plain { text } if text.is_empty() => vec![StyledSpan {
            style: SpanStyle::Placeholder,
            text: EMPTY_LINE_PLACEHOLDER,
        }],
        LineToken::Plain { text } => vec![StyledSpan {
            style: SpanStyle::Plain,
            text,
        }],
    };
    LineFragment { spans }
}

/// Renders `document` as HTML, one `<div>` per line.
///
/// All source text is escaped; empty lines become `&nbsp;`.
pub fn render_html(document: &str) -> String {
    let mut out = String::new();
    for fragment in render(document) {
        out.push_str("<div>");
        for span in &fragment.spans {
            match span.style {
                SpanStyle::Keyword => push_classed(&mut out, KEYWORD_CLASS, span.text),
                SpanStyle::Literal => push_classed(&mut out, LITERAL_CLASS, span.text),
                SpanStyle::Plain => out.push_str(&html_escape::encode_text(span.text)),
                SpanStyle::Placeholder => out.push_str("&nbsp;"),
            }
        }
        out.push_str("</div>");
    }
    out
}

fn push_classed(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&html_escape::encode_text(text));
    out.push_str("</span>");
}
