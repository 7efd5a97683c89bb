//! Project detail view, reached by Enter on the projects list

use crate::theme::Palette;
use deskboard_core::models::project::ProjectPage;
use deskboard_core::models::task::Task;
use deskboard_core::page::PageContainer;
use deskboard_core::RecordId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    id: RecordId,
    projects: &PageContainer<ProjectPage>,
    tasks: &[Task],
    palette: &Palette,
) {
    let Some(project) = projects.get(id) else {
        // stale route, e.g. the project was deleted while its detail was open
        let missing = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Project {id} no longer exists"),
                Style::default().fg(palette.error),
            )),
            Line::from(Span::styled(
                "[b] back to projects",
                Style::default().fg(palette.muted),
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(missing, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(palette.muted)),
            Span::styled(value, Style::default().fg(palette.fg)),
        ])
    };

    let overview = Paragraph::new(vec![
        Line::from(Span::styled(
            project.name.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        field("Status", format!("{} · {} priority", project.status, project.priority)),
        field("Client", project.client.clone()),
        field("Budget", project.budget.clone()),
        field("Due", project.due_date.format("%Y-%m-%d").to_string()),
        field("Team", project.team_members.join(", ")),
        field("About", project.description.clone()),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Project "));
    frame.render_widget(overview, chunks[0]);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(palette.accent))
        .percent(u16::from(project.progress.min(100)));
    frame.render_widget(progress, chunks[1]);

    render_related_tasks(frame, chunks[2], &project.name, tasks, palette);
}

fn render_related_tasks(
    frame: &mut Frame,
    area: Rect,
    project_name: &str,
    tasks: &[Task],
    palette: &Palette,
) {
    let related: Vec<&Task> = tasks.iter().filter(|t| t.project == project_name).collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tasks ({}) ", related.len()));

    if related.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks for this project",
            Style::default().fg(palette.muted),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = related
        .iter()
        .map(|task| {
            Line::from(vec![
                Span::styled(task.title.clone(), Style::default().fg(palette.fg)),
                Span::styled(
                    format!("  {} · {} · {}", task.status, task.priority, task.assignee),
                    Style::default().fg(palette.muted),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
