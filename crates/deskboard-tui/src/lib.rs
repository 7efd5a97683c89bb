//! deskboard-tui - terminal frontend for deskboard using Ratatui

pub mod app;
pub mod components;
pub mod pages;
pub mod theme;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use crate::components::toast::Toast;
use deskboard_core::{Preferences, UserProfile};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::oneshot;

/// Run the TUI application
pub async fn run(state_dir: PathBuf, preferences: Preferences) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // App starts behind the session gate in loading mode
    let mut app = App::new(state_dir, preferences);
    let mut ui = ui::Ui::new();

    // Simulated async session check; there is no restored session to find
    let (gate_tx, mut gate_rx) = oneshot::channel::<Option<UserProfile>>();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(400)).await;
        let _ = gate_tx.send(None);
    });

    let result = run_loop(&mut terminal, &mut app, &mut ui, &mut gate_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ui: &mut ui::Ui,
    gate_rx: &mut oneshot::Receiver<Option<UserProfile>>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        if let Ok(restored) = gate_rx.try_recv() {
            app.gate.resolve(restored);
        }

        terminal.draw(|f| ui.render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Ctrl+C quits from anywhere, including the login form
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        app.should_quit = true;
                    } else {
                        handle_key(key.code, app, ui);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(key: KeyCode, app: &mut App, ui: &mut ui::Ui) {
    // the confirm overlay swallows everything while visible
    if app.confirm.is_visible() {
        if let Some(result) = app.confirm.handle_key(key) {
            app.apply_confirm(result);
        }
        return;
    }

    if app.gate.is_loading() {
        if key == KeyCode::Char('q') {
            app.should_quit = true;
        }
        return;
    }

    if app.gate.user().is_none() {
        if let Some((email, password)) = ui.login.handle_key(key) {
            match app.gate.login(&email, &password) {
                Ok(user) => {
                    app.toasts.push(Toast::success(format!("Welcome, {}", user.name)));
                    ui.login.error = None;
                }
                Err(err) => {
                    ui.login.error = Some(err.to_string());
                    ui.login.clear_password();
                }
            }
        }
        return;
    }

    if !ui.input_active(app) {
        match key {
            KeyCode::Tab => {
                app.nav.next_section();
                return;
            }
            KeyCode::BackTab => {
                app.nav.prev_section();
                return;
            }
            KeyCode::Char(c) => {
                if app.handle_global_key(c) {
                    return;
                }
            }
            _ => {}
        }
    }

    ui.handle_route_key(key, app);
}
