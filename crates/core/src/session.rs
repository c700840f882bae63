//! Session module - the stateful controller around a grid
//!
//! This module ties together the grid, the rule engine, the pattern catalog and
//! persistence. It owns the only mutable grid and is the single place where
//! commands from the front end are interpreted.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::grid::GridState;
use crate::patterns::{self, Pattern};
use crate::rng::SimpleRng;
use crate::rules;
use crate::snapshot;
use crate::types::*;

/// Run state underneath an optional pending placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Edit,
    Running,
    Paused,
}

impl From<RunState> for Mode {
    fn from(value: RunState) -> Self {
        match value {
            RunState::Edit => Mode::Edit,
            RunState::Running => Mode::Running,
            RunState::Paused => Mode::Paused,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    grid: GridState,
    run: RunState,
    /// Pattern waiting for an anchor (drag-placing)
    placing: Option<&'static Pattern>,
    orientation: Orientation,
    speed: u32,
    draw_mode: bool,
    /// Generations computed since the last clear/randomize/load
    generation: u64,
    rng: SimpleRng,
    save_path: PathBuf,
}

impl Session {
    /// Create a session with an all-dead grid and a seeded random source
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        use rand::SeedableRng;

        Self {
            grid: GridState::new(width, height),
            run: RunState::Edit,
            placing: None,
            orientation: Orientation::Right,
            speed: DEFAULT_SPEED,
            draw_mode: false,
            generation: 0,
            rng: SimpleRng::seed_from_u64(seed),
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }

    /// Initial speed, clamped to `[MIN_SPEED, MAX_SPEED]`
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// File used by `save`/`load`
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn cell(&self, x: i32, y: i32) -> Result<CellState> {
        self.grid.get(x, y)
    }

    pub fn mode(&self) -> Mode {
        if self.placing.is_some() {
            Mode::DragPlacing
        } else {
            self.run.into()
        }
    }

    /// True when ticks advance generations (also while placing during a run)
    pub fn is_running(&self) -> bool {
        self.run == RunState::Running
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn selected_pattern(&self) -> Option<&'static Pattern> {
        self.placing
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn pattern_names(&self) -> impl Iterator<Item = &'static str> {
        patterns::names()
    }

    pub fn start(&mut self) {
        self.set_run(RunState::Running);
    }

    pub fn pause(&mut self) {
        self.set_run(RunState::Paused);
    }

    fn set_run(&mut self, run: RunState) {
        // An explicit start/pause abandons a pending placement.
        if let Some(p) = self.placing.take() {
            debug!(pattern = p.name, "placement cancelled");
        }
        if self.run != run {
            debug!(from = ?self.run, to = ?run, "run state changed");
        }
        self.run = run;
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        info!("grid cleared");
    }

    pub fn randomize(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.generation = 0;
        info!(population = self.grid.population(), "grid randomized");
    }

    pub fn speed_up(&mut self) -> u32 {
        self.speed = (self.speed + 1).min(MAX_SPEED);
        self.speed
    }

    pub fn speed_down(&mut self) -> u32 {
        self.speed = self.speed.saturating_sub(1).max(MIN_SPEED);
        self.speed
    }

    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.next();
        self.orientation
    }

    pub fn toggle_draw_mode(&mut self) -> bool {
        self.draw_mode = !self.draw_mode;
        self.draw_mode
    }

    /// Flip one cell; allowed in every mode, including while running
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Result<CellState> {
        self.grid.toggle(x, y)
    }

    /// Set one cell alive (draw mode painting)
    pub fn paint_cell(&mut self, x: i32, y: i32) -> Result<()> {
        self.grid.set(x, y, CellState::Alive)
    }

    /// Select a catalog pattern and wait for an anchor
    ///
    /// Unknown names leave the mode untouched.
    pub fn select_pattern(&mut self, name: &str) -> Result<()> {
        let pattern = patterns::lookup(name)?;
        debug!(pattern = pattern.name, "pattern selected");
        self.placing = Some(pattern);
        Ok(())
    }

    /// Stamp the selected pattern at `anchor` using the current orientation
    ///
    /// Returns false (and does nothing) when no pattern is selected. On success
    /// the session returns to the mode it had before the selection.
    pub fn release_at(&mut self, x: i32, y: i32) -> bool {
        let Some(pattern) = self.placing.take() else {
            return false;
        };
        let placed = patterns::place(pattern, self.orientation, (x, y), &mut self.grid);
        debug!(
            pattern = pattern.name,
            x,
            y,
            orientation = self.orientation.as_str(),
            placed,
            "pattern placed"
        );
        true
    }

    /// Snapshot bytes of the current grid
    pub fn save_bytes(&self) -> Vec<u8> {
        self.grid.serialize()
    }

    /// Replace the grid with a decoded snapshot; the grid is untouched on error
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let grid = GridState::deserialize(bytes)?;
        self.replace_grid(grid);
        Ok(())
    }

    /// Write the grid to the configured save path
    pub fn save(&self) -> Result<()> {
        snapshot::write_file(&self.save_path, &self.save_bytes())
    }

    /// Load the grid from the configured save path
    pub fn load(&mut self) -> Result<()> {
        let result =
            snapshot::read_file(&self.save_path).and_then(|bytes| self.load_bytes(&bytes));
        if let Err(err) = &result {
            warn!(path = %self.save_path.display(), %err, "load failed; grid unchanged");
        }
        result
    }

    fn replace_grid(&mut self, grid: GridState) {
        info!(
            width = grid.width(),
            height = grid.height(),
            population = grid.population(),
            "grid loaded"
        );
        self.grid = grid;
        self.generation = 0;
    }

    /// Advance one generation if running; returns whether a generation was computed
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step();
        true
    }

    /// Advance exactly one generation regardless of mode
    pub fn step(&mut self) {
        self.grid = rules::step(&self.grid);
        self.generation += 1;
    }

    /// Apply a front-end command
    ///
    /// Returns `Ok(true)` when the command changed something observable.
    pub fn apply(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Clear => self.clear(),
            Command::Randomize => self.randomize(),
            Command::Save => self.save()?,
            Command::Load => self.load()?,
            Command::SpeedUp => {
                let before = self.speed;
                return Ok(self.speed_up() != before);
            }
            Command::SpeedDown => {
                let before = self.speed;
                return Ok(self.speed_down() != before);
            }
            Command::ToggleOrientation => {
                self.toggle_orientation();
            }
            Command::ToggleDrawMode => {
                self.toggle_draw_mode();
            }
            Command::ToggleCell { x, y } => {
                self.toggle_cell(x, y)?;
            }
            Command::PaintCell { x, y } => self.paint_cell(x, y)?,
            Command::SelectPattern(name) => self.select_pattern(&name)?,
            Command::ReleaseAt { x, y } => return Ok(self.release_at(x, y)),
        }
        Ok(true)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[test]
    fn test_new_session() {
        let s = Session::new(20, 10, 7);
        assert_eq!(s.mode(), Mode::Edit);
        assert_eq!(s.orientation(), Orientation::Right);
        assert_eq!(s.speed(), DEFAULT_SPEED);
        assert_eq!(s.generation(), 0);
        assert_eq!(s.population(), 0);
        assert!(!s.draw_mode());
        assert_eq!((s.grid().width(), s.grid().height()), (20, 10));
        assert_eq!(s.save_path(), Path::new(DEFAULT_SAVE_PATH));
    }

    #[test]
    fn test_start_pause_transitions() {
        let mut s = Session::new(5, 5, 1);
        s.start();
        assert_eq!(s.mode(), Mode::Running);
        s.pause();
        assert_eq!(s.mode(), Mode::Paused);
        s.start();
        assert_eq!(s.mode(), Mode::Running);
    }

    #[test]
    fn test_tick_only_when_running() {
        let mut s = Session::new(5, 5, 1);
        s.toggle_cell(2, 2).unwrap();
        assert!(!s.tick());
        assert_eq!(s.population(), 1);

        s.start();
        assert!(s.tick());
        assert_eq!(s.generation(), 1);
        assert_eq!(s.population(), 0);

        s.pause();
        assert!(!s.tick());
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_select_and_release_returns_to_prior_mode() {
        for prior in [RunState::Edit, RunState::Running, RunState::Paused] {
            let mut s = Session::new(20, 20, 1);
            s.run = prior;
            s.select_pattern("glider").unwrap();
            assert_eq!(s.mode(), Mode::DragPlacing);
            assert_eq!(s.selected_pattern().map(|p| p.name), Some("glider"));

            assert!(s.release_at(5, 5));
            assert_eq!(s.mode(), Mode::from(prior));
            assert_eq!(s.population(), 5);
            assert!(s.selected_pattern().is_none());
        }
    }

    #[test]
    fn test_release_without_selection_is_noop() {
        let mut s = Session::new(10, 10, 1);
        assert!(!s.release_at(3, 3));
        assert_eq!(s.population(), 0);
        assert_eq!(s.mode(), Mode::Edit);
    }

    #[test]
    fn test_invalid_pattern_name_keeps_mode() {
        let mut s = Session::new(10, 10, 1);
        s.start();
        let err = s.select_pattern("gosper").unwrap_err();
        assert!(matches!(err, LifeError::InvalidPatternName(ref n) if n == "gosper"));
        assert_eq!(s.mode(), Mode::Running);

        s.select_pattern("toad").unwrap();
        assert!(s.select_pattern("nope").is_err());
        assert_eq!(s.mode(), Mode::DragPlacing);
        assert_eq!(s.selected_pattern().map(|p| p.name), Some("toad"));
    }

    #[test]
    fn test_ticks_continue_while_placing_during_run() {
        let mut s = Session::new(10, 10, 1);
        s.start();
        s.select_pattern("blinker").unwrap();
        assert_eq!(s.mode(), Mode::DragPlacing);
        assert!(s.tick());
    }

    #[test]
    fn test_release_uses_current_orientation() {
        let mut s = Session::new(10, 10, 1);
        s.toggle_orientation(); // down
        s.select_pattern("blinker").unwrap();
        s.release_at(4, 4);
        // Blinker (0,1),(1,1),(2,1) facing down -> (1,0),(1,-1),(1,-2)
        for (x, y) in [(5, 4), (5, 3), (5, 2)] {
            assert_eq!(s.cell(x, y).unwrap(), CellState::Alive);
        }
        assert_eq!(s.population(), 3);
    }

    #[test]
    fn test_mode_independent_commands_keep_mode() {
        let mut s = Session::new(10, 10, 1);
        s.select_pattern("acorn").unwrap();
        for cmd in [
            Command::Clear,
            Command::Randomize,
            Command::SpeedUp,
            Command::SpeedDown,
            Command::ToggleOrientation,
            Command::ToggleDrawMode,
            Command::ToggleCell { x: 1, y: 1 },
            Command::PaintCell { x: 2, y: 2 },
        ] {
            s.apply(cmd.clone()).unwrap();
            assert_eq!(s.mode(), Mode::DragPlacing, "{}", cmd.as_str());
        }
    }

    #[test]
    fn test_cell_edits_allowed_while_running() {
        let mut s = Session::new(10, 10, 1);
        s.start();
        assert_eq!(s.toggle_cell(3, 3).unwrap(), CellState::Alive);
        s.paint_cell(4, 4).unwrap();
        assert_eq!(s.population(), 2);
        assert_eq!(s.mode(), Mode::Running);
    }

    #[test]
    fn test_paint_never_kills() {
        let mut s = Session::new(4, 4, 1);
        s.paint_cell(1, 1).unwrap();
        s.paint_cell(1, 1).unwrap();
        assert_eq!(s.cell(1, 1).unwrap(), CellState::Alive);
        assert!(matches!(s.paint_cell(4, 0), Err(LifeError::OutOfRange { .. })));
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut s = Session::new(4, 4, 1).with_speed(59);
        assert_eq!(s.speed_up(), 60);
        assert_eq!(s.speed_up(), 60);
        assert!(!s.apply(Command::SpeedUp).unwrap());

        let mut s = Session::new(4, 4, 1).with_speed(2);
        assert_eq!(s.speed_down(), 1);
        assert_eq!(s.speed_down(), 1);

        assert_eq!(Session::new(4, 4, 1).with_speed(0).speed(), MIN_SPEED);
        assert_eq!(Session::new(4, 4, 1).with_speed(1000).speed(), MAX_SPEED);
    }

    #[test]
    fn test_orientation_cycles() {
        let mut s = Session::new(4, 4, 1);
        let seen: Vec<_> = (0..4).map(|_| s.toggle_orientation()).collect();
        assert_eq!(
            seen,
            vec![
                Orientation::Down,
                Orientation::Left,
                Orientation::Up,
                Orientation::Right
            ]
        );
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut a = Session::new(16, 16, 42);
        let mut b = Session::new(16, 16, 42);
        a.randomize();
        b.randomize();
        assert_eq!(a.grid(), b.grid());
        assert!(a.population() > 0);
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut s = Session::new(6, 6, 1);
        s.randomize();
        s.step();
        s.step();
        assert_eq!(s.generation(), 2);
        s.clear();
        assert_eq!(s.generation(), 0);
        assert_eq!(s.population(), 0);
    }

    #[test]
    fn test_load_bytes_replaces_dimensions() {
        let mut s = Session::new(10, 10, 1);
        let mut other = GridState::new(3, 4);
        other.set(2, 3, CellState::Alive).unwrap();

        s.load_bytes(&other.serialize()).unwrap();
        assert_eq!(s.grid(), &other);
        assert_eq!((s.grid().width(), s.grid().height()), (3, 4));
    }

    #[test]
    fn test_save_bytes_restore_into_another_session() {
        let mut s = Session::new(7, 3, 11);
        s.toggle_cell(6, 2).unwrap();
        let bytes = s.save_bytes();

        assert_eq!(&bytes[..8], &[7, 0, 0, 0, 3, 0, 0, 0]);
        assert_eq!(bytes.len(), 8 + 7 * 3);
        assert_eq!(bytes.last(), Some(&1));

        let mut other = Session::new(2, 2, 1);
        other.load_bytes(&bytes).unwrap();
        assert_eq!(other.grid(), s.grid());
    }

    #[test]
    fn test_saved_file_matches_save_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.sav");
        let mut s = Session::new(4, 4, 2).with_save_path(&path);
        s.randomize();
        s.save().unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), s.save_bytes());
    }

    #[test]
    fn test_corrupt_load_leaves_grid_unchanged() {
        let mut s = Session::new(8, 8, 1);
        s.randomize();
        s.step();
        let before = s.grid().clone();

        let mut bytes = GridState::new(4, 4).serialize();
        bytes.truncate(bytes.len() - 3);
        assert!(matches!(s.load_bytes(&bytes), Err(LifeError::CorruptData(_))));
        assert_eq!(s.grid(), &before);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life.sav");

        let mut s = Session::new(12, 9, 3).with_save_path(&path);
        s.randomize();
        let saved = s.grid().clone();
        s.apply(Command::Save).unwrap();

        s.clear();
        s.apply(Command::Load).unwrap();
        assert_eq!(s.grid(), &saved);
    }

    #[test]
    fn test_load_missing_file_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = Session::new(5, 5, 1).with_save_path(dir.path().join("none.sav"));
        s.toggle_cell(0, 0).unwrap();
        assert!(matches!(s.apply(Command::Load), Err(LifeError::Io(_))));
        assert_eq!(s.population(), 1);
    }

    #[test]
    fn test_start_cancels_pending_placement() {
        let mut s = Session::new(10, 10, 1);
        s.select_pattern("glider").unwrap();
        s.start();
        assert_eq!(s.mode(), Mode::Running);
        assert!(!s.release_at(2, 2));
        assert_eq!(s.population(), 0);
    }
}
