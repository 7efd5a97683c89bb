//! Search input and match highlighting shared by every list page

use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_search_bar(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    focused: bool,
    result_count: usize,
    palette: &Palette,
) {
    let (text, style) = if query.is_empty() {
        (
            "Type to search...".to_string(),
            Style::default().fg(palette.muted),
        )
    } else {
        (query.to_string(), Style::default().fg(palette.fg))
    };

    let border_color = if focused { palette.accent } else { palette.muted };

    let mut spans = vec![
        Span::styled("/ ", Style::default().fg(palette.accent)),
        Span::styled(text, style),
    ];
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let title = if query.is_empty() {
        " Search ".to_string()
    } else {
        format!(" Search ({result_count}) ")
    };

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(palette.fg)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(paragraph, area);
}

/// Highlight case-insensitive query matches inside a list row
pub fn highlight_matches(text: &str, query: &str) -> Vec<Span<'static>> {
    if query.is_empty() {
        return vec![Span::raw(text.to_string())];
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (idx, matched) in text_lower.match_indices(&query_lower) {
        if idx < last_end || !text.is_char_boundary(idx) {
            continue;
        }
        let match_end = idx + matched.len();
        if !text.is_char_boundary(match_end) {
            continue;
        }
        if idx > last_end {
            spans.push(Span::raw(text[last_end..idx].to_string()));
        }
        spans.push(Span::styled(
            text[idx..match_end].to_string(),
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
        last_end = match_end;
    }

    if last_end < text.len() {
        spans.push(Span::raw(text[last_end..].to_string()));
    }

    if spans.is_empty() {
        vec![Span::raw(text.to_string())]
    } else {
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_single_span() {
        let spans = highlight_matches("hello world", "");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn single_match_splits_into_two_spans() {
        let spans = highlight_matches("hello world", "world");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn multiple_matches_alternate_spans() {
        let spans = highlight_matches("test test test", "test");
        assert_eq!(spans.len(), 5);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let spans = highlight_matches("Hello World", "WORLD");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].content, "World");
    }

    #[test]
    fn no_match_returns_original() {
        let spans = highlight_matches("hello world", "xyz");
        assert_eq!(spans.len(), 1);
    }
}
