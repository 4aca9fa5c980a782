//! Pure text processing over scenario documents.
//!
//! Nothing in here does I/O or holds state between calls.

pub mod cursor;
pub mod highlight;
pub mod keyword;
pub mod scenario;
pub mod span;
pub mod steps;
pub mod suggest;
pub mod tokenize;

pub use highlight::{LineFragment, SpanStyle, StyledSpan, render, render_html, render_line};
pub use keyword::Keyword;
pub use scenario::{FALLBACK_TITLE, extract_title, extract_title_or, split_scenarios};
pub use span::Span;
pub use steps::extract_steps;
pub use suggest::{best_suggestion, current_fragment, match_prefix, suggestions};
pub use tokenize::{LineToken, Segment, tokenize};
