//! Navigation sidebar with the signed-in user header

use crate::theme::Palette;
use deskboard_core::nav::{self, BOTTOM_ITEMS, NAV_ITEMS};
use deskboard_core::UserProfile;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_path: &str,
    user: Option<&UserProfile>,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(BOTTOM_ITEMS.len() as u16 + 2),
        ])
        .split(inner);

    // user header
    let mut header = vec![Line::from(Span::styled(
        " deskboard",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(user) = user {
        header.push(Line::from(Span::styled(
            format!(" {}", user.name),
            Style::default().fg(palette.fg),
        )));
        header.push(Line::from(Span::styled(
            format!(" {}", user.role),
            Style::default().fg(palette.muted),
        )));
    }
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let main: Vec<Line> = NAV_ITEMS
        .iter()
        .map(|item| nav_line(item.title, item.path, item.shortcut, current_path, palette))
        .collect();
    frame.render_widget(Paragraph::new(main), chunks[1]);

    let mut bottom: Vec<Line> = BOTTOM_ITEMS
        .iter()
        .map(|item| nav_line(item.title, item.path, item.shortcut, current_path, palette))
        .collect();
    bottom.push(Line::from(Span::styled(
        " [l] Log out",
        Style::default().fg(palette.muted),
    )));
    frame.render_widget(Paragraph::new(bottom), chunks[2]);
}

fn nav_line<'a>(
    title: &'a str,
    path: &str,
    shortcut: char,
    current_path: &str,
    palette: &Palette,
) -> Line<'a> {
    let active = nav::is_active(current_path, path);
    let style = if active {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.fg)
    };
    let marker = if active { "▸" } else { " " };
    Line::from(vec![
        Span::styled(format!("{marker} "), style),
        Span::styled(format!("[{shortcut}] "), Style::default().fg(palette.muted)),
        Span::styled(title, style),
    ])
}
