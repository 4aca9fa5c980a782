use gherkin_pad_engine::{LineFragment, SpanStyle};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn style_for(style: SpanStyle) -> Style {
    match style {
        SpanStyle::Keyword => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        SpanStyle::Literal => Style::default().fg(Color::Blue),
        SpanStyle::Plain | SpanStyle::Placeholder => Style::default(),
    }
}

/// Converts one highlighted line into a terminal line.
pub fn to_line(fragment: &LineFragment<'_>) -> Line<'static> {
    let spans: Vec<Span<'static>> = fragment
        .spans
        .iter()
        .map(|s| Span::styled(s.text.trim_end_matches('\r').to_string(), style_for(s.style)))
        .collect();
    Line::from(spans)
}

/// Highlights a whole document for a terminal paragraph.
pub fn document_lines(document: &str) -> Vec<Line<'static>> {
    gherkin_pad_engine::render(document)
        .iter()
        .map(to_line)
        .collect()
}
