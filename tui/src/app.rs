//! Screen state machine for the terminal shell.
//!
//! Every screen is a variant of [`Screen`]; [`App::handle`] consumes one
//! [`KeyAction`] and swaps the active variant when a screen hands off to
//! another. The engine never learns which screen is showing.

use std::time::Duration;

use vimsweep_core::{
    BoardSession, Direction, Initials, MarkOutcome, Mode, RevealOutcome, ScoreRecord, ScoreStore,
    Status, Timer, latest_index, leaderboard,
};

use crate::input::KeyAction;

pub const MAIN_MENU_ITEMS: [&str; 3] = ["Play", "How to play", "Scores"];

/// Discriminant of [`Screen`], used by key mapping and the footer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    MainMenu,
    PlayMenu,
    Instructions,
    Game,
    SaveScore,
    Scores,
}

impl ScreenKind {
    /// Screens where `enter` picks the highlighted entry.
    pub const fn is_menu(self) -> bool {
        matches!(self, Self::MainMenu | Self::PlayMenu)
    }
}

/// Initials editor shown after a won match.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveForm {
    pub initials: Initials,
    pub slot: usize,
    pub mode: Mode,
    pub elapsed: Duration,
}

impl SaveForm {
    pub fn new(mode: Mode, elapsed: Duration) -> Self {
        Self {
            initials: Initials::default(),
            slot: 0,
            mode,
            elapsed,
        }
    }

    fn handle(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.slot = self.slot.saturating_sub(1),
            Direction::Right => self.slot = (self.slot + 1).min(Initials::LEN - 1),
            Direction::Down => self.initials.increment(self.slot),
            Direction::Up => self.initials.decrement(self.slot),
        }
    }
}

/// Ranked records plus the highlighted row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScoreBoard {
    pub records: Vec<ScoreRecord>,
    pub selected: Option<usize>,
}

impl ScoreBoard {
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        let records = leaderboard(records);
        let selected = latest_index(&records);
        Self { records, selected }
    }

    fn select_next(&mut self) {
        let Some(last) = self.records.len().checked_sub(1) else {
            return;
        };
        self.selected = Some(self.selected.map_or(0, |index| (index + 1).min(last)));
    }

    fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |index| index.saturating_sub(1)));
    }
}

#[derive(Debug)]
pub enum Screen {
    MainMenu { selected: usize },
    PlayMenu { selected: usize },
    Instructions,
    Game(Box<BoardSession>),
    SaveScore(SaveForm),
    Scores(ScoreBoard),
}

impl Screen {
    pub const fn main_menu() -> Self {
        Self::MainMenu { selected: 0 }
    }

    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::MainMenu { .. } => ScreenKind::MainMenu,
            Self::PlayMenu { .. } => ScreenKind::PlayMenu,
            Self::Instructions => ScreenKind::Instructions,
            Self::Game(_) => ScreenKind::Game,
            Self::SaveScore(_) => ScreenKind::SaveScore,
            Self::Scores(_) => ScreenKind::Scores,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

enum Transition {
    Stay,
    To(Screen),
    StartGame(Mode),
    OpenScores,
}

pub struct App<S> {
    screen: Screen,
    store: S,
    seed: Option<u64>,
    message: Option<String>,
}

impl<S: ScoreStore> App<S> {
    pub fn new(store: S, seed: Option<u64>) -> Self {
        Self {
            screen: Screen::main_menu(),
            store,
            seed,
            message: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Last error worth showing to the player, cleared by the next key.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the elapsed time on screen is still moving.
    pub fn needs_tick(&self) -> bool {
        match &self.screen {
            Screen::Game(session) => session.timer().is_running(),
            _ => false,
        }
    }

    pub fn handle(&mut self, action: KeyAction) -> Control {
        match action {
            KeyAction::Quit => return Control::Quit,
            KeyAction::None => return Control::Continue,
            _ => self.message = None,
        }

        let transition = match &mut self.screen {
            Screen::MainMenu { selected } => match action {
                KeyAction::Move(Direction::Down) => {
                    *selected = (*selected + 1).min(MAIN_MENU_ITEMS.len() - 1);
                    Transition::Stay
                }
                KeyAction::Move(Direction::Up) => {
                    *selected = selected.saturating_sub(1);
                    Transition::Stay
                }
                KeyAction::Select => match *selected {
                    0 => Transition::To(Screen::PlayMenu { selected: 0 }),
                    1 => Transition::To(Screen::Instructions),
                    _ => Transition::OpenScores,
                },
                _ => Transition::Stay,
            },
            Screen::PlayMenu { selected } => match action {
                KeyAction::Move(Direction::Down) => {
                    *selected = (*selected + 1).min(Mode::ALL.len() - 1);
                    Transition::Stay
                }
                KeyAction::Move(Direction::Up) => {
                    *selected = selected.saturating_sub(1);
                    Transition::Stay
                }
                KeyAction::Select => Transition::StartGame(Mode::ALL[*selected]),
                KeyAction::Back => Transition::To(Screen::main_menu()),
                _ => Transition::Stay,
            },
            Screen::Instructions => match action {
                KeyAction::Back => Transition::To(Screen::main_menu()),
                _ => Transition::Stay,
            },
            Screen::Game(session) => match action {
                KeyAction::Move(direction) => {
                    session.move_cursor(direction);
                    Transition::Stay
                }
                KeyAction::Reveal => {
                    let outcome = session.reveal_at();
                    log_reveal(session, outcome);
                    Transition::Stay
                }
                KeyAction::Chord => {
                    let outcome = session.chord_at();
                    log_reveal(session, outcome);
                    Transition::Stay
                }
                KeyAction::Flag => {
                    if session.toggle_flag() == MarkOutcome::Changed {
                        tracing::debug!(cursor = ?session.cursor(), "Flag toggled");
                    }
                    Transition::Stay
                }
                KeyAction::Reset => {
                    if let Err(err) = session.reset() {
                        tracing::error!("Failed to reset board: {err}");
                        self.message = Some(format!("Could not reset: {err}"));
                    }
                    Transition::Stay
                }
                KeyAction::SaveScore if session.status() == Status::Won => Transition::To(
                    Screen::SaveScore(SaveForm::new(session.mode(), session.elapsed())),
                ),
                KeyAction::Back => {
                    tracing::info!(status = %session.status(), "Left the board");
                    Transition::To(Screen::main_menu())
                }
                _ => Transition::Stay,
            },
            Screen::SaveScore(form) => match action {
                KeyAction::Move(direction) => {
                    form.handle(direction);
                    Transition::Stay
                }
                KeyAction::Confirm => {
                    let record = ScoreRecord::new(form.initials, form.elapsed, form.mode);
                    match self.store.append(&record) {
                        Ok(()) => {
                            tracing::info!(
                                initials = %record.initials,
                                mode = %record.mode,
                                "Score saved"
                            );
                            Transition::OpenScores
                        }
                        Err(err) => {
                            tracing::error!("Failed to save score: {err}");
                            self.message = Some(format!("Could not save score: {err}"));
                            Transition::Stay
                        }
                    }
                }
                KeyAction::Cancel => Transition::To(Screen::main_menu()),
                _ => Transition::Stay,
            },
            Screen::Scores(board) => match action {
                KeyAction::Move(Direction::Down) => {
                    board.select_next();
                    Transition::Stay
                }
                KeyAction::Move(Direction::Up) => {
                    board.select_previous();
                    Transition::Stay
                }
                KeyAction::Back => Transition::To(Screen::main_menu()),
                _ => Transition::Stay,
            },
        };

        match transition {
            Transition::Stay => {}
            Transition::To(screen) => self.screen = screen,
            Transition::StartGame(mode) => self.start_game(mode),
            Transition::OpenScores => self.open_scores(),
        }
        Control::Continue
    }

    /// Starts a fresh match in `mode` and switches to the board.
    pub fn start_game(&mut self, mode: Mode) {
        let session = match self.seed {
            Some(seed) => BoardSession::seeded(mode, seed),
            None => BoardSession::new(mode),
        };
        match session {
            Ok(mut session) => {
                session.start();
                tracing::info!(%mode, seed = ?self.seed, "New match");
                self.screen = Screen::Game(Box::new(session));
            }
            Err(err) => {
                tracing::error!("Failed to create {mode} board: {err}");
                self.message = Some(format!("Could not start game: {err}"));
            }
        }
    }

    fn open_scores(&mut self) {
        let records = self.store.load().unwrap_or_else(|err| {
            tracing::error!("Failed to load scores: {err}");
            self.message = Some(format!("Could not load scores: {err}"));
            Vec::new()
        });
        self.screen = Screen::Scores(ScoreBoard::new(records));
    }
}

fn log_reveal(session: &BoardSession, outcome: RevealOutcome) {
    match outcome {
        RevealOutcome::NoChange => {}
        RevealOutcome::Revealed => tracing::trace!(cursor = ?session.cursor(), "Revealed"),
        RevealOutcome::HitMine => tracing::info!(cursor = ?session.cursor(), "Hit a mine"),
        RevealOutcome::Won => tracing::info!(elapsed = ?session.elapsed(), "Board cleared"),
    }
}
