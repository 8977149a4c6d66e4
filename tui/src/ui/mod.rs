//! Rendering with Ratatui.
//!
//! Each screen draws into the body area between a one-line header and the
//! key-binding footer; nothing here mutates the [`App`].
mod board;
mod footer;
mod menu;
mod scores;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, MAIN_MENU_ITEMS, Screen};
use vimsweep_core::{Mode, ScoreStore};

pub const TITLE: &str = "vimsweep";

pub fn render<S: ScoreStore>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app.screen());

    let body = chunks[1];
    match app.screen() {
        Screen::MainMenu { selected } => {
            menu::render_list(frame, body, "Main menu", &MAIN_MENU_ITEMS, *selected);
        }
        Screen::PlayMenu { selected } => {
            let modes = Mode::ALL.map(Mode::name);
            menu::render_list(frame, body, "Choose a mode", &modes, *selected);
        }
        Screen::Instructions => menu::render_instructions(frame, body),
        Screen::Game(session) => board::render(frame, body, session),
        Screen::SaveScore(form) => menu::render_save_form(frame, body, form),
        Screen::Scores(board) => scores::render(frame, body, board),
    }

    footer::render(frame, chunks[2], app.screen().kind(), app.message());
}

fn render_header(frame: &mut Frame, area: Rect, screen: &Screen) {
    let subtitle = match screen {
        Screen::MainMenu { .. } => "welcome",
        Screen::PlayMenu { .. } => "new game",
        Screen::Instructions => "how to play",
        Screen::Game(_) => "sweeping",
        Screen::SaveScore(_) => "save score",
        Screen::Scores(_) => "scores",
    };
    let line = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" · "),
        Span::raw(subtitle),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Bordered block with a title, shared by every body panel.
fn panel(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}
