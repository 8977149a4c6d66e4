//! Leaderboard table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Row, Table, TableState},
};
use vimsweep_core::format_elapsed;

use super::panel;
use crate::app::ScoreBoard;

pub fn render(frame: &mut Frame, area: Rect, board: &ScoreBoard) {
    if board.records.is_empty() {
        let empty = Paragraph::new("No scores yet. Win a game and save your time!")
            .block(panel("Scores"));
        frame.render_widget(empty, area);
        return;
    }

    let rows = board.records.iter().enumerate().map(|(index, record)| {
        Row::new(vec![
            (index + 1).to_string(),
            record.mode.to_string(),
            format_elapsed(record.elapsed),
            record.initials.to_string(),
        ])
    });
    let widths = [
        Constraint::Length(6),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Rank", "Mode", "Time", "Player"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(panel("Scores"))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(board.selected);
    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::super::tests::draw;
    use crate::app::App;
    use crate::input::KeyAction;
    use core::time::Duration;
    use vimsweep_core::{Direction, MemoryScoreStore, Mode, ScoreRecord, ScoreStore};

    fn open_scores(store: MemoryScoreStore) -> String {
        let mut app = App::new(store, None);
        app.handle(KeyAction::Move(Direction::Down));
        app.handle(KeyAction::Move(Direction::Down));
        app.handle(KeyAction::Select);
        draw(&app)
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let screen = open_scores(MemoryScoreStore::new());

        assert!(screen.contains("No scores yet"));
    }

    #[test]
    fn records_are_ranked_fastest_first() {
        let mut store = MemoryScoreStore::new();
        for (initials, secs, mode) in [("SLO", 300, Mode::Expert), ("FST", 42, Mode::Beginner)] {
            let record = ScoreRecord::new(initials.parse().unwrap(), Duration::from_secs(secs), mode);
            store.append(&record).unwrap();
        }
        let screen = open_scores(store);

        assert!(screen.contains("Rank"));
        assert!(screen.contains("Player"));
        let fast = screen.find("FST").unwrap();
        let slow = screen.find("SLO").unwrap();
        assert!(fast < slow);
        assert!(screen.contains("42.0s"));
        assert!(screen.contains("5m00.0s"));
    }
}
