//! Board panel: status line plus the cell grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vimsweep_core::{BoardSession, CellView, Status, format_elapsed};

use super::{panel, theme};

pub fn render(frame: &mut Frame, area: Rect, session: &BoardSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    frame.render_widget(Paragraph::new(status_lines(session)), chunks[0]);

    let (_, height) = session.size();
    let rows: Vec<Line> = (0..height)
        .map(|y| Line::from(session.row(y).map(cell_span).collect::<Vec<_>>()))
        .collect();
    let board = Paragraph::new(rows).block(panel(session.mode().name()));
    frame.render_widget(board, chunks[1]);
}

fn status_lines(session: &BoardSession) -> Vec<Line<'static>> {
    let status_style = match session.status() {
        Status::Won => Style::default().fg(Color::Green),
        Status::Lost => Style::default().fg(Color::Red),
        Status::Pending | Status::Playable => Style::default(),
    }
    .add_modifier(Modifier::BOLD);

    let mut first = vec![
        Span::raw("status: "),
        Span::styled(session.status().name(), status_style),
        Span::raw(format!("   time: {}", format_elapsed(session.elapsed()))),
        Span::raw(format!("   mines: {}", session.flags_left())),
    ];
    if session.status() == Status::Won {
        first.push(Span::raw("   press 's' to save your time"));
    }
    vec![Line::from(first), Line::default()]
}

fn cell_span(view: CellView) -> Span<'static> {
    let appearance = view.appearance();
    Span::styled(format!(" {} ", appearance.glyph), theme::cell_style(appearance))
}

#[cfg(test)]
mod tests {
    use super::super::tests::draw;
    use crate::app::App;
    use crate::input::KeyAction;
    use vimsweep_core::MemoryScoreStore;

    #[test]
    fn board_shows_status_line_and_mode() {
        let mut app = App::new(MemoryScoreStore::new(), Some(3));
        app.handle(KeyAction::Select);
        app.handle(KeyAction::Select);
        let screen = draw(&app);

        assert!(screen.contains("status: playable"));
        assert!(screen.contains("mines: 10"));
        assert!(screen.contains("beginner"));
        assert!(screen.contains("[x] reveal"));
    }

    #[test]
    fn flag_glyph_and_counter_follow_the_flag() {
        let mut app = App::new(MemoryScoreStore::new(), Some(3));
        app.handle(KeyAction::Select);
        app.handle(KeyAction::Select);
        app.handle(KeyAction::Flag);
        let screen = draw(&app);

        assert!(screen.contains('⚑'));
        assert!(screen.contains("mines: 9"));
    }
}
