use super::{cursor::Cursor, keyword::Keyword, span::Span};

/// Double-quoted literal inside a keyword line's remainder.
///
/// Literals are non-greedy and have no escape syntax: the first quote opens,
/// the next quote closes. A quote with no partner is left as plain text.
pub struct QuotedLiteral;

impl QuotedLiteral {
    /// The quote character that delimits literals.
    pub const QUOTE: u8 = b'"';
}

/// One line, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineToken<'a> {
    /// The line starts with a keyword followed by whitespace.
    Keyword {
        keyword: Keyword,
        /// The whitespace run after the keyword, verbatim.
        spacing: &'a str,
        /// Everything after the whitespace, split into text and literals.
        remainder: Vec<Segment<'a>>,
    },
    /// Anything else. The text is the input line, untouched.
    Plain { text: &'a str },
}

/// A piece of a keyword line's remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    /// A quoted literal, quotes included.
    Literal(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Text(s) | Segment::Literal(s) => s,
        }
    }
}

impl LineToken<'_> {
    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            LineToken::Keyword { keyword, .. } => Some(*keyword),
            LineToken::Plain { .. } => None,
        }
    }

    /// Rebuilds the line with the keyword in canonical case.
    pub fn to_canonical_string(&self) -> String {
        match self {
            LineToken::Keyword {
                keyword,
                spacing,
                remainder,
            } => {
                let mut out = String::from(keyword.as_str());
                out.push_str(spacing);
                for seg in remainder {
                    out.push_str(seg.as_str());
                }
                out
            }
            LineToken::Plain { text } => (*text).to_string(),
        }
    }
}

/// Classifies a single line.
///
/// A keyword line is one keyword token (any ASCII case) at the very start,
/// then at least one whitespace character, then the remainder. `Giveninvalid`
/// and `Given` alone are plain lines.
pub fn tokenize(line: &str) -> LineToken<'_> {
    match split_keyword(line) {
        Some((keyword, spacing, rest)) => LineToken::Keyword {
            keyword,
            spacing,
            remainder: segment_literals(rest),
        },
        None => LineToken::Plain { text: line },
    }
}

/// Splits `line` into `(keyword, spacing, rest)` if it is a keyword line.
pub fn split_keyword(line: &str) -> Option<(Keyword, &str, &str)> {
    Keyword::ALL.iter().find_map(|&keyword| {
        let after = keyword.strip_token(line)?;
        let spacing_len = after.len() - after.trim_start().len();
        if spacing_len == 0 {
            return None;
        }
        Some((keyword, &after[..spacing_len], &after[spacing_len..]))
    })
}

/// Finds every closed quoted literal in `s`.
pub fn literal_spans(s: &str) -> Vec<Span> {
    let mut cur = Cursor::new(s);
    let mut spans = vec![];

    while cur.seek(QuotedLiteral::QUOTE) {
        let start = cur.pos();
        cur.bump(); // opening "
        if !cur.seek(QuotedLiteral::QUOTE) {
            break;
        }
        cur.bump(); // closing "
        spans.push(Span {
            start,
            end: cur.pos(),
        });
    }

    spans
}

/// Splits `s` into alternating text and literal segments covering all of it.
pub fn segment_literals(s: &str) -> Vec<Segment<'_>> {
    let mut out = vec![];
    let mut text_start = 0;

    for span in literal_spans(s) {
        if span.start > text_start {
            out.push(Segment::Text(&s[text_start..span.start]));
        }
        out.push(Segment::Literal(span.slice(s)));
        text_start = span.end;
    }
    if s.len() > text_start {
        out.push(Segment::Text(&s[text_start..]));
    }

    out
}
