//! Keyboard-to-command mapping.
//!
//! The rest of the application only sees [`KeyAction`]s, never raw
//! `crossterm` events. Movement is vim-style `h`/`j`/`k`/`l` only; there are
//! deliberately no arrow keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vimsweep_core::Direction;

use crate::app::ScreenKind;

/// High-level outcome of processing a keyboard event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// `h`/`j`/`k`/`l`.
    Move(Direction),
    /// Pick the highlighted menu entry.
    Select,
    /// Return to the main menu.
    Back,
    Reveal,
    Chord,
    Flag,
    Reset,
    /// Open the save-score form after a win.
    SaveScore,
    /// Accept the save-score form.
    Confirm,
    /// Discard the save-score form.
    Cancel,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a command for the active screen.
pub fn handle_key(key: KeyEvent, screen: ScreenKind) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    let KeyCode::Char(c) = key.code else {
        return match key.code {
            KeyCode::Enter if screen.is_menu() => KeyAction::Select,
            _ => KeyAction::None,
        };
    };

    match c {
        'q' => KeyAction::Quit,
        'h' => KeyAction::Move(Direction::Left),
        'j' => KeyAction::Move(Direction::Down),
        'k' => KeyAction::Move(Direction::Up),
        'l' => KeyAction::Move(Direction::Right),
        _ => match screen {
            ScreenKind::Game => handle_game_key(c),
            ScreenKind::SaveScore => handle_save_key(c),
            ScreenKind::MainMenu => KeyAction::None,
            ScreenKind::PlayMenu | ScreenKind::Instructions | ScreenKind::Scores => match c {
                'b' => KeyAction::Back,
                _ => KeyAction::None,
            },
        },
    }
}

fn handle_game_key(c: char) -> KeyAction {
    match c {
        'x' => KeyAction::Reveal,
        'd' => KeyAction::Chord,
        'f' => KeyAction::Flag,
        'r' => KeyAction::Reset,
        's' => KeyAction::SaveScore,
        'b' => KeyAction::Back,
        _ => KeyAction::None,
    }
}

fn handle_save_key(c: char) -> KeyAction {
    match c {
        'y' => KeyAction::Confirm,
        'n' => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_keys_move_everywhere() {
        for screen in [ScreenKind::Game, ScreenKind::MainMenu, ScreenKind::SaveScore] {
            assert_eq!(
                handle_key(key(KeyCode::Char('h')), screen),
                KeyAction::Move(Direction::Left)
            );
            assert_eq!(
                handle_key(key(KeyCode::Char('j')), screen),
                KeyAction::Move(Direction::Down)
            );
        }
    }

    #[test]
    fn arrow_keys_are_not_bound() {
        assert_eq!(handle_key(key(KeyCode::Left), ScreenKind::Game), KeyAction::None);
        assert_eq!(handle_key(key(KeyCode::Down), ScreenKind::MainMenu), KeyAction::None);
    }

    #[test]
    fn game_keys() {
        let game = ScreenKind::Game;
        assert_eq!(handle_key(key(KeyCode::Char('x')), game), KeyAction::Reveal);
        assert_eq!(handle_key(key(KeyCode::Char('d')), game), KeyAction::Chord);
        assert_eq!(handle_key(key(KeyCode::Char('f')), game), KeyAction::Flag);
        assert_eq!(handle_key(key(KeyCode::Char('r')), game), KeyAction::Reset);
        assert_eq!(handle_key(key(KeyCode::Enter), game), KeyAction::None);
    }

    #[test]
    fn save_form_keys() {
        let save = ScreenKind::SaveScore;
        assert_eq!(handle_key(key(KeyCode::Char('y')), save), KeyAction::Confirm);
        assert_eq!(handle_key(key(KeyCode::Char('n')), save), KeyAction::Cancel);
        assert_eq!(handle_key(key(KeyCode::Char('x')), save), KeyAction::None);
    }

    #[test]
    fn enter_selects_only_in_menus() {
        assert_eq!(handle_key(key(KeyCode::Enter), ScreenKind::MainMenu), KeyAction::Select);
        assert_eq!(handle_key(key(KeyCode::Enter), ScreenKind::PlayMenu), KeyAction::Select);
        assert_eq!(handle_key(key(KeyCode::Enter), ScreenKind::Scores), KeyAction::None);
    }

    #[test]
    fn quit_from_anywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, ScreenKind::Game), KeyAction::Quit);
        assert_eq!(handle_key(key(KeyCode::Char('q')), ScreenKind::SaveScore), KeyAction::Quit);
    }
}
