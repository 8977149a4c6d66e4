//! Menus, the instruction page and the initials editor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use vimsweep_core::{Initials, format_elapsed};

use super::panel;
use crate::app::SaveForm;

const INSTRUCTIONS: &[&str] = &[
    "This is vimsweep, a small terminal game for practising vim motions.",
    "Reveal every cell of the grid that does not hide a mine.",
    "",
    "There are no arrow keys in the game, on purpose.",
    "Move the cursor with 'h', 'j', 'k' and 'l' instead.",
    "",
    "Press 'x' to reveal the cell under the cursor, like deleting a character.",
    "Press 'd' on a revealed number to reveal all of its unflagged neighbours,",
    "  like deleting a word. Its flags must match the number.",
    "Press 'q' anywhere to quit.",
    "",
    "A few keys have nothing to do with vim:",
    "'f' toggles a flag on a hidden cell,",
    "'r' starts the board over,",
    "'s' saves your time after a win.",
    "",
    "Now press 'b' to go back to the main menu and get sweeping!",
];

pub fn render_list(frame: &mut Frame, area: Rect, title: &str, items: &[&str], selected: usize) {
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if index == selected {
                Line::from(Span::styled(
                    format!("[>] {item}"),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("[ ] {item}"))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

pub fn render_instructions(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = INSTRUCTIONS.iter().map(|&line| Line::from(line)).collect();
    let paragraph = Paragraph::new(lines)
        .block(panel("How to play"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_save_form(frame: &mut Frame, area: Rect, form: &SaveForm) {
    let mut letters = Vec::with_capacity(Initials::LEN * 2);
    for (slot, letter) in form.initials.as_str().chars().enumerate() {
        let style = if slot == form.slot {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        letters.push(Span::styled(letter.to_string(), style));
        letters.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(format!(
            "You cleared {} in {}.",
            form.mode,
            format_elapsed(form.elapsed)
        )),
        Line::default(),
        Line::from("Enter your initials:"),
        Line::from(letters),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Save score")), area);
}
