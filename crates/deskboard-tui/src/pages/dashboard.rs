//! Dashboard: headline counts aggregated from every collection

use crate::theme::Palette;
use deskboard_core::UserProfile;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Snapshot computed by the app from the live collections
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardStats {
    pub active_projects: usize,
    pub total_projects: usize,
    pub open_tasks: usize,
    pub total_tasks: usize,
    pub team_size: usize,
    pub events_today: usize,
    pub outstanding_invoices: usize,
    pub outstanding_total: f64,
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    stats: &DashboardStats,
    user: Option<&UserProfile>,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let greeting = match user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            greeting,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    stat_card(
        frame,
        top[0],
        " Projects ",
        &format!("{} active", stats.active_projects),
        &format!("{} total", stats.total_projects),
        palette.accent,
        palette,
    );
    stat_card(
        frame,
        top[1],
        " Tasks ",
        &format!("{} open", stats.open_tasks),
        &format!("{} total", stats.total_tasks),
        palette.warning,
        palette,
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[2]);
    stat_card(
        frame,
        bottom[0],
        " Team ",
        &format!("{} members", stats.team_size),
        "",
        palette.success,
        palette,
    );
    stat_card(
        frame,
        bottom[1],
        " Today ",
        &format!("{} events", stats.events_today),
        "",
        palette.accent,
        palette,
    );
    stat_card(
        frame,
        bottom[2],
        " Outstanding ",
        &format!("${:.2}", stats.outstanding_total),
        &format!("{} invoices", stats.outstanding_invoices),
        palette.error,
        palette,
    );
}

fn stat_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    headline: &str,
    detail: &str,
    color: Color,
    palette: &Palette,
) {
    let lines = vec![
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(palette.muted),
        )),
    ];
    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(Span::styled(
                title.to_string(),
                Style::default().fg(palette.fg),
            )),
    );
    frame.render_widget(card, area);
}
