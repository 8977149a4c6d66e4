use core::time::Duration;
use ndarray::Array2;

use crate::*;

/// Cursor movement, one cell at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// One player's match on one of the [`Mode`] presets.
///
/// The session owns the grid, the visibility of every cell, the cursor and
/// the flag counter, and is the only thing that mutates them. Once the status
/// is [`Status::Won`] or [`Status::Lost`] reveal and flag actions are ignored
/// until [`BoardSession::reset`] swaps in a fresh grid.
#[derive(Clone, Debug)]
pub struct BoardSession<G = RandomGridGenerator, T = Stopwatch> {
    mode: Mode,
    generator: G,
    timer: T,
    grid: Grid,
    visibility: VisibilityBoard,
    cursor: Coord2,
    flags_left: isize,
    status: Status,
}

impl BoardSession {
    /// New match with wall-clock seeded mine placement.
    pub fn new(mode: Mode) -> Result<Self> {
        Self::with_parts(mode, RandomGridGenerator::from_clock(), Stopwatch::new())
    }

    /// New match whose mine placement is reproducible from `seed`.
    pub fn seeded(mode: Mode, seed: u64) -> Result<Self> {
        Self::with_parts(mode, RandomGridGenerator::new(seed), Stopwatch::new())
    }
}

/// Flag counter for a fresh grid: one flag per mine.
fn initial_flags(grid: &Grid) -> isize {
    grid.mine_count() as isize
}

impl<G: GridGenerator, T: Timer> BoardSession<G, T> {
    /// Builds the first grid for `mode`. The timer is left reset and stopped;
    /// call [`BoardSession::start`] once the board is on screen.
    pub fn with_parts(mode: Mode, mut generator: G, mut timer: T) -> Result<Self> {
        let grid = generator.generate(mode.config())?;
        let visibility = Array2::default(grid.size().to_nd_index());
        timer.reset();

        let mut session = Self {
            mode,
            generator,
            timer,
            flags_left: initial_flags(&grid),
            grid,
            visibility,
            cursor: (0, 0),
            status: Status::Pending,
        };
        session.update_status();
        log::debug!(
            "New {} session, {} mines, status: {}",
            mode,
            session.grid.mine_count(),
            session.status
        );
        Ok(session)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    /// Mines minus placed flags. Goes negative when the player over-flags.
    pub fn flags_left(&self) -> isize {
        self.flags_left
    }

    pub fn visibility_at(&self, coords: Coord2) -> Visibility {
        self.visibility[coords.to_nd_index()]
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        CellView {
            coords,
            value: self.grid.value(coords),
            visibility: self.visibility_at(coords),
            is_cursor: coords == self.cursor,
        }
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: Coord) -> impl Iterator<Item = CellView> + '_ {
        (0..self.grid.width()).map(move |x| self.cell_view((x, y)))
    }

    /// Starts the clock unless the match is already decided.
    pub fn start(&mut self) {
        if !self.status.is_finished() {
            self.timer.start();
        }
    }

    /// Moves the cursor one cell, staying put at the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        use Direction::*;

        let (x, y) = self.cursor;
        let (width, height) = self.grid.size();
        self.cursor = match direction {
            Left => (x.saturating_sub(1), y),
            Up => (x, y.saturating_sub(1)),
            Right if x + 1 < width => (x + 1, y),
            Down if y + 1 < height => (x, y + 1),
            Right | Down => (x, y),
        };
    }

    /// Reveals the cell under the cursor.
    ///
    /// Revealed and flagged cells are left untouched, a flag has to be
    /// removed before the cell underneath can be opened.
    pub fn reveal_at(&mut self) -> RevealOutcome {
        if self.status.is_finished() {
            return RevealOutcome::NoChange;
        }

        let coords = self.cursor;
        match self.visibility_at(coords) {
            Visibility::Hidden => {
                reveal(&self.grid, &mut self.visibility, coords);
                self.update_status()
            }
            Visibility::Revealed | Visibility::Flagged => RevealOutcome::NoChange,
        }
    }

    /// Reveals every hidden neighbour of the numbered cell under the cursor,
    /// provided exactly that many neighbours are flagged.
    pub fn chord_at(&mut self) -> RevealOutcome {
        if self.status.is_finished() {
            return RevealOutcome::NoChange;
        }

        let coords = self.cursor;
        if !self.can_chord_at(coords) {
            return RevealOutcome::NoChange;
        }

        log::debug!("Chord at {:?}", coords);
        for pos in self.grid.iter_neighbors(coords) {
            // an earlier flood may already have opened this neighbour
            if self.visibility_at(pos) == Visibility::Hidden {
                reveal(&self.grid, &mut self.visibility, pos);
            }
        }
        self.update_status()
    }

    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        let value = self.grid.value(coords);
        self.visibility_at(coords).is_revealed()
            && value > 0
            && self.count_flagged_neighbors(coords) == value as usize
            && self
                .grid
                .iter_neighbors(coords)
                .any(|pos| self.visibility_at(pos) == Visibility::Hidden)
    }

    /// Toggles a flag on the hidden cell under the cursor.
    pub fn toggle_flag(&mut self) -> MarkOutcome {
        use Visibility::*;

        if self.status.is_finished() {
            return MarkOutcome::NoChange;
        }

        let cell = &mut self.visibility[self.cursor.to_nd_index()];
        match *cell {
            Hidden => {
                *cell = Flagged;
                self.flags_left -= 1;
                MarkOutcome::Changed
            }
            Flagged => {
                *cell = Hidden;
                self.flags_left += 1;
                MarkOutcome::Changed
            }
            Revealed => MarkOutcome::NoChange,
        }
    }

    /// Replaces the grid with a brand new one for the same mode and restarts
    /// the clock. On failure the current match is left as it was.
    pub fn reset(&mut self) -> Result<()> {
        let grid = self.generator.generate(self.mode.config())?;

        self.visibility = Array2::default(grid.size().to_nd_index());
        self.flags_left = initial_flags(&grid);
        self.grid = grid;
        self.status = Status::Pending;
        self.timer.reset();
        self.update_status();
        self.start();
        log::debug!("Reset {} session, status: {}", self.mode, self.status);
        Ok(())
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> usize {
        self.grid
            .iter_neighbors(coords)
            .filter(|&pos| self.visibility_at(pos) == Visibility::Flagged)
            .count()
    }

    fn update_status(&mut self) -> RevealOutcome {
        let status = evaluate(&self.grid, &self.visibility);
        let changed = status != self.status;
        self.status = status;

        match status {
            Status::Won | Status::Lost if changed => {
                self.timer.stop();
                log::debug!("Session ended: {}", status);
            }
            _ => {}
        }

        match status {
            Status::Lost => RevealOutcome::HitMine,
            Status::Won => RevealOutcome::Won,
            Status::Pending | Status::Playable => RevealOutcome::Revealed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts calls so tests can check what the session told its timer.
    #[derive(Debug, Default)]
    struct RecordingTimer {
        starts: usize,
        stops: usize,
        resets: usize,
        running: bool,
    }

    impl Timer for RecordingTimer {
        fn start(&mut self) {
            self.starts += 1;
            self.running = true;
        }

        fn stop(&mut self) {
            self.stops += 1;
            self.running = false;
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.running = false;
        }

        fn is_running(&self) -> bool {
            self.running
        }

        fn elapsed(&self) -> Duration {
            Duration::ZERO
        }
    }

    /// Beginner board with the whole top row mined plus the bottom-right
    /// corner: 10 mines, every other cell connected through zeros.
    fn top_row_mines() -> Vec<Coord2> {
        let mut mines: Vec<Coord2> = (0..9).map(|x| (x, 0)).collect();
        mines.push((8, 8));
        mines
    }

    fn session() -> BoardSession<FixedGridGenerator, RecordingTimer> {
        let mut session = BoardSession::with_parts(
            Mode::Beginner,
            FixedGridGenerator::new(top_row_mines()),
            RecordingTimer::default(),
        )
        .unwrap();
        session.start();
        session
    }

    fn go_to<G: GridGenerator, T: Timer>(session: &mut BoardSession<G, T>, (x, y): Coord2) {
        while session.cursor().0 > x {
            session.move_cursor(Direction::Left);
        }
        while session.cursor().0 < x {
            session.move_cursor(Direction::Right);
        }
        while session.cursor().1 > y {
            session.move_cursor(Direction::Up);
        }
        while session.cursor().1 < y {
            session.move_cursor(Direction::Down);
        }
    }

    #[test]
    fn new_session_is_playable_with_full_flag_counter() {
        let session = session();

        assert_eq!(session.status(), Status::Playable);
        assert_eq!(session.flags_left(), 10);
        assert_eq!(session.cursor(), (0, 0));
        assert_eq!(session.size(), (9, 9));
        assert!(session.timer().is_running());
        assert_eq!(session.timer().resets, 1);
    }

    #[test]
    fn expert_preset_is_thirty_wide() {
        let session = BoardSession::seeded(Mode::Expert, 11).unwrap();

        assert_eq!(session.size(), (30, 16));
        assert_eq!(session.grid().mine_count(), 99);
        assert_eq!(session.flags_left(), 99);
    }

    #[test]
    fn flag_counter_matches_mines_on_every_preset() {
        for mode in Mode::ALL {
            let mut session = BoardSession::seeded(mode, 5).unwrap();
            let mines = isize::try_from(mode.config().mines).unwrap();
            assert_eq!(session.flags_left(), mines, "{mode}");

            session.toggle_flag();
            session.reset().unwrap();
            assert_eq!(session.flags_left(), mines, "{mode}");
        }
    }

    #[test]
    fn timer_waits_for_start() {
        let mut session = BoardSession::with_parts(
            Mode::Beginner,
            FixedGridGenerator::new(top_row_mines()),
            RecordingTimer::default(),
        )
        .unwrap();
        assert!(!session.timer().is_running());
        assert_eq!(session.timer().resets, 1);

        session.start();
        assert!(session.timer().is_running());
    }

    #[test]
    fn cursor_clamps_at_edges() {
        let mut session = session();

        session.move_cursor(Direction::Left);
        session.move_cursor(Direction::Up);
        assert_eq!(session.cursor(), (0, 0));

        go_to(&mut session, (8, 8));
        session.move_cursor(Direction::Right);
        session.move_cursor(Direction::Down);
        assert_eq!(session.cursor(), (8, 8));
    }

    #[test]
    fn revealing_a_zero_wins_connected_board() {
        let mut session = session();
        go_to(&mut session, (0, 4));

        assert_eq!(session.reveal_at(), RevealOutcome::Won);
        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.timer().stops, 1);
        assert!(!session.timer().is_running());
        assert_eq!(session.visibility_at((8, 8)), Visibility::Hidden);
    }

    #[test]
    fn revealing_a_mine_loses_and_freezes_board() {
        let mut session = session();

        assert_eq!(session.reveal_at(), RevealOutcome::HitMine);
        assert_eq!(session.status(), Status::Lost);
        assert_eq!(session.timer().stops, 1);

        session.move_cursor(Direction::Down);
        assert_eq!(session.toggle_flag(), MarkOutcome::NoChange);
        assert_eq!(session.reveal_at(), RevealOutcome::NoChange);
        assert_eq!(session.visibility_at((0, 1)), Visibility::Hidden);
        assert_eq!(session.timer().stops, 1);
    }

    #[test]
    fn flag_toggle_round_trips_counter() {
        let mut session = session();

        assert_eq!(session.toggle_flag(), MarkOutcome::Changed);
        assert_eq!(session.flags_left(), 9);
        assert_eq!(session.visibility_at((0, 0)), Visibility::Flagged);

        assert_eq!(session.toggle_flag(), MarkOutcome::Changed);
        assert_eq!(session.flags_left(), 10);
        assert_eq!(session.visibility_at((0, 0)), Visibility::Hidden);
    }

    #[test]
    fn over_flagging_drives_counter_negative() {
        // the counter is deliberately not clamped at zero
        let mut session = session();
        for y in 0..2 {
            for x in 0..6 {
                go_to(&mut session, (x, y));
                session.toggle_flag();
            }
        }

        assert_eq!(session.flags_left(), -2);
    }

    #[test]
    fn flag_on_revealed_cell_is_ignored() {
        let mut session = session();
        go_to(&mut session, (0, 1));
        session.reveal_at();

        assert_eq!(session.toggle_flag(), MarkOutcome::NoChange);
        assert_eq!(session.flags_left(), 10);
    }

    #[test]
    fn reveal_on_flagged_cell_is_a_no_op() {
        let mut session = session();
        go_to(&mut session, (4, 4));
        session.toggle_flag();

        assert_eq!(session.reveal_at(), RevealOutcome::NoChange);
        assert_eq!(session.visibility_at((4, 4)), Visibility::Flagged);
        assert_eq!(session.status(), Status::Playable);
        assert_eq!(session.flags_left(), 9);
    }

    #[test]
    fn second_reveal_changes_nothing() {
        let mut session = session();
        go_to(&mut session, (3, 1));

        assert_eq!(session.reveal_at(), RevealOutcome::Revealed);
        let before = session.visibility.clone();

        assert_eq!(session.reveal_at(), RevealOutcome::NoChange);
        assert_eq!(session.visibility, before);
        assert_eq!(session.status(), Status::Playable);
    }

    #[test]
    fn chord_opens_unflagged_neighbors() {
        let mut session = session();
        go_to(&mut session, (1, 1));
        session.reveal_at();
        assert_eq!(session.grid().value((1, 1)), 3);
        assert_eq!(session.chord_at(), RevealOutcome::NoChange);

        for x in 0..3 {
            go_to(&mut session, (x, 0));
            session.toggle_flag();
        }
        go_to(&mut session, (1, 1));

        assert!(session.can_chord_at((1, 1)));
        assert_eq!(session.chord_at(), RevealOutcome::Won);
        assert_eq!(session.visibility_at((0, 0)), Visibility::Flagged);
    }

    #[test]
    fn chord_with_wrong_flag_hits_mine() {
        let mut session = session();
        go_to(&mut session, (1, 1));
        session.reveal_at();
        for pos in [(0, 0), (1, 0), (0, 2)] {
            go_to(&mut session, pos);
            session.toggle_flag();
        }
        go_to(&mut session, (1, 1));

        assert_eq!(session.chord_at(), RevealOutcome::HitMine);
        assert_eq!(session.status(), Status::Lost);
    }

    #[test]
    fn reset_builds_fresh_board() {
        let mut session = session();
        session.toggle_flag();
        go_to(&mut session, (1, 0));
        session.reveal_at();
        assert_eq!(session.status(), Status::Lost);

        session.reset().unwrap();

        assert_eq!(session.status(), Status::Playable);
        assert_eq!(session.flags_left(), 10);
        assert!(
            session
                .grid()
                .coords()
                .all(|pos| session.visibility_at(pos) == Visibility::Hidden)
        );
        assert_eq!(session.timer().resets, 2);
        assert!(session.timer().is_running());
    }

    #[test]
    fn row_reports_cursor() {
        let mut session = session();
        session.move_cursor(Direction::Right);

        let row: Vec<_> = session.row(0).collect();
        assert_eq!(row.len(), 9);
        assert!(row[1].is_cursor);
        assert!(!row[0].is_cursor);
        assert_eq!(row[0].value, MINE);
    }

    #[test]
    fn generator_errors_prevent_session() {
        let result = BoardSession::with_parts(
            Mode::Beginner,
            FixedGridGenerator::new([(9, 9)]),
            Stopwatch::new(),
        );

        assert!(matches!(result, Err(GameError::InvalidDimensions)));
    }
}
