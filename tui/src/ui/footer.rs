//! Footer widget displaying context-sensitive key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::ScreenKind;

fn bindings(screen: ScreenKind) -> &'static str {
    match screen {
        ScreenKind::MainMenu => "[j/k] move | [enter] select | [q] quit",
        ScreenKind::PlayMenu => "[j/k] move | [enter] start | [b] back | [q] quit",
        ScreenKind::Instructions => "[b] back | [q] quit",
        ScreenKind::Game => {
            "[hjkl] move | [x] reveal | [d] chord | [f] flag | [r] reset | [s] save | [b] menu | [q] quit"
        }
        ScreenKind::SaveScore => "[h/l] slot | [j/k] letter | [y] save | [n] discard | [q] quit",
        ScreenKind::Scores => "[j/k] move | [b] back | [q] quit",
    }
}

/// Key bindings, or the pending error message when there is one.
pub fn render(frame: &mut Frame, area: Rect, screen: ScreenKind, message: Option<&str>) {
    let line = match message {
        Some(message) => Line::from(Span::styled(
            message.to_owned(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(bindings(screen)),
    };
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
