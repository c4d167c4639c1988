//! Game state module - the per-tick state machine
//!
//! `GameController` owns the board, the live piece, the preview, the score
//! and the tilt mapper. Each call to [`GameController::tick`] consumes one
//! sample and the current time; everything else happens synchronously inside
//! that call:
//!
//! ```text
//! Spawning -> Falling -> Locking -> (Clearing) -> Spawning ...
//!     \                       \            \
//!      +-> GameOver            +-> GameOver +-> GameOver
//! ```
//!
//! Spawning, Locking and Clearing are transient within one call, so callers
//! normally observe `Falling` or `GameOver`. Nothing here returns an error:
//! blocked spawns and a filled top row are ordinary branches to `GameOver`.

use crate::board::{Board, FullRows};
use crate::config::{ConfigError, GameConfig};
use crate::frames::{game_over_frames, line_clear_frames, AnimationFrame};
use crate::mapper::InputMapper;
use crate::piece::Piece;
use crate::preview::NextPiecePreview;
use crate::rng::PieceRandomizer;
use crate::scoring::ScoreTracker;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GamePhase, PieceKind, TiltAction, TiltSample};

/// Result of one attempted one-row descent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The piece moved down one row
    Moved,
    /// The piece locked and the next one spawned
    Locked { lines: u32 },
    /// The descent ended the session
    GameOver,
    /// Nothing to move (no live piece, or the session is over)
    Ignored,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Columns actually travelled (negative is left)
    pub shifted: i16,
    pub rotated: bool,
    /// Set when the fall timer fired this tick
    pub fall: Option<StepResult>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    preview: NextPiecePreview,
    pieces: PieceRandomizer,
    score: ScoreTracker,
    mapper: InputMapper,
    phase: GamePhase,
    /// Time of the last fall-timer firing; starts at the first tick
    last_fall_ms: Option<u64>,
    fall_interval_ms: u32,
    frames: Vec<AnimationFrame>,
    pieces_locked: u32,
}

impl GameController {
    /// Validate `config`, then start a session with the first piece in play.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut pieces = PieceRandomizer::new(seed);
        let preview = NextPiecePreview::new(pieces.draw());

        let mut game = Self {
            board: Board::new(config.width, config.height),
            active: None,
            preview,
            pieces,
            score: ScoreTracker::new(),
            mapper: InputMapper::new(&config),
            phase: GamePhase::Spawning,
            last_fall_ms: None,
            fall_interval_ms: config.base_fall_ms,
            frames: Vec::new(),
            pieces_locked: 0,
            config,
        };

        log::info!(
            "session started: {}x{} board, seed {}",
            config.width,
            config.height,
            seed
        );
        game.spawn_next();
        Ok(game)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only view of the locked cells
    pub fn current_board_state(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scripted setups.
    ///
    /// Edits bypass the state machine; call [`GameController::settle`] to run
    /// the post-lock checks over them.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_score(&self) -> u64 {
        self.score.value()
    }

    /// Two-digit score readout
    pub fn display_score(&self) -> u8 {
        self.score.display_value()
    }

    pub fn next_piece_kind(&self) -> PieceKind {
        self.preview.kind()
    }

    pub fn preview(&self) -> &NextPiecePreview {
        &self.preview
    }

    pub fn mapper(&self) -> &InputMapper {
        &self.mapper
    }

    /// Fall interval chosen by the most recent tick
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Frames queued since the last drain
    pub fn pending_frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Hand queued animation frames to the renderer
    pub fn drain_frames(&mut self) -> Vec<AnimationFrame> {
        std::mem::take(&mut self.frames)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.width = self.board.width();
        out.height = self.board.height();
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.preview.kind();
        out.score = self.score.value();
        out.display_score = self.score.display_value();
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot {
            width: 0,
            height: 0,
            board: Vec::with_capacity(self.board.cells().len()),
            active: None,
            next: self.preview.kind(),
            score: 0,
            display_score: 0,
            phase: self.phase,
        };
        self.snapshot_into(&mut s);
        s
    }

    /// One loop iteration: map the sample, apply moves, run the fall timer.
    pub fn tick(&mut self, now_ms: u64, sample: TiltSample) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.phase.is_terminal() {
            return outcome;
        }

        let last_fall = *self.last_fall_ms.get_or_insert(now_ms);
        let intent = self.mapper.map(sample, now_ms);
        self.fall_interval_ms = intent.fall_interval_ms;

        for action in intent.actions {
            match action {
                TiltAction::Shift(columns) => outcome.shifted = self.shift(columns),
                TiltAction::Rotate => outcome.rotated = self.try_rotate(),
            }
        }

        if now_ms.saturating_sub(last_fall) >= self.fall_interval_ms as u64 {
            self.last_fall_ms = Some(now_ms);
            outcome.fall = Some(self.step_down());
        }

        outcome
    }

    /// Slide the live piece up to `columns` cells sideways.
    ///
    /// Moves one column at a time and stops at the first blocked column, so a
    /// large step can never pass through locked cells. Returns the distance
    /// travelled.
    pub fn shift(&mut self, columns: i16) -> i16 {
        if self.phase != GamePhase::Falling {
            return 0;
        }
        let Some(mut piece) = self.active else {
            return 0;
        };

        let dir = columns.signum();
        let mut travelled = 0;
        while travelled != columns && !self.board.collides(&piece, dir, 0) {
            piece = piece.moved(dir, 0);
            travelled += dir;
        }
        self.active = Some(piece);
        travelled
    }

    /// Advance to the next rotation state in place.
    ///
    /// There is no kick search: if the rotated footprint collides, the piece
    /// is left exactly as it was. Pieces hugging a wall can therefore refuse
    /// to rotate until moved away from it.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase != GamePhase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if self.board.collides(&rotated, 0, 0) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Attempt a one-row descent now, regardless of the fall timer.
    pub fn step_down(&mut self) -> StepResult {
        if self.phase != GamePhase::Falling {
            return StepResult::Ignored;
        }
        let Some(active) = self.active else {
            return StepResult::Ignored;
        };

        if !self.board.collides(&active, 0, 1) {
            self.active = Some(active.moved(0, 1));
            return StepResult::Moved;
        }
        self.lock_active()
    }

    /// Lock the live piece where it stands and resolve the aftermath.
    pub fn lock_active(&mut self) -> StepResult {
        if self.phase.is_terminal() {
            return StepResult::Ignored;
        }
        let Some(active) = self.active.take() else {
            return StepResult::Ignored;
        };

        self.phase = GamePhase::Locking;
        let written = self.board.lock_piece(&active);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        log::debug!(
            "locked {:?} r{} at ({}, {}), {} cells on board",
            active.kind,
            active.rotation,
            active.x,
            active.y,
            written
        );

        self.settle()
    }

    /// Post-lock resolution: clear full rows, check the top row, spawn.
    ///
    /// Any live piece is discarded first; this is only meaningful after the
    /// board has just changed.
    pub fn settle(&mut self) -> StepResult {
        if self.phase.is_terminal() {
            return StepResult::Ignored;
        }
        self.active = None;

        let rows = self.board.clear_full_lines();
        let lines = rows.len() as u32;
        if !rows.is_empty() {
            self.clear_rows(&rows);
        }

        if self.board.row_is_game_over() {
            self.enter_game_over();
            return StepResult::GameOver;
        }

        if !self.spawn_next() {
            return StepResult::GameOver;
        }
        StepResult::Locked { lines }
    }

    fn clear_rows(&mut self, rows: &FullRows) {
        self.phase = GamePhase::Clearing;
        self.score.add_lines(rows.len() as u32);
        log::debug!("clearing rows {:?}, score {}", rows.as_slice(), self.score.value());

        line_clear_frames(rows, self.config.line_flash_ms, &mut self.frames);
        self.board.compact_rows(rows);
    }

    /// Promote the preview to the live piece and draw a new preview.
    fn spawn_next(&mut self) -> bool {
        let kind = self.preview.replace(self.pieces.draw());
        self.spawn_piece(kind)
    }

    /// Replace the live piece with a fresh `kind` at the spawn point.
    ///
    /// The preview is left alone. Returns false (and ends the session) if the
    /// spawn point is blocked.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.spawn_piece(kind)
    }

    fn spawn_piece(&mut self, kind: PieceKind) -> bool {
        self.phase = GamePhase::Spawning;
        let piece = Piece::spawn(kind, self.board.width());

        if self.board.collides(&piece, 0, 0) {
            self.active = None;
            self.enter_game_over();
            return false;
        }

        log::debug!("spawned {:?} at ({}, {})", kind, piece.x, piece.y);
        self.active = Some(piece);
        self.phase = GamePhase::Falling;
        true
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.active = None;
        game_over_frames(self.board.height(), self.config.wipe_row_ms, &mut self.frames);
        log::info!(
            "game over: {} lines after {} pieces",
            self.score.value(),
            self.pieces_locked
        );
    }
}
