//! Game session - the state machine driving one game
//!
//! Ties together board, shapes, catalog and score. Every mutation
//! request - a gravity tick or a discrete input - is validated through
//! the collision predicate before being committed, and the
//! merge -> clear -> score -> respawn sequence on settle happens inside
//! a single function with no intermediate state observable.

use arrayvec::ArrayVec;

use crate::core::catalog::ShapeCatalog;
use crate::core::collision::collides;
use crate::core::score::ScoreKeeper;
use crate::core::shapes::{canonical_grid, ShapeGrid};
use crate::core::Board;
use crate::types::{GameAction, PieceKind, Status, GRAVITY_INTERVAL_MS};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Quarter turns applied so far, wraps modulo 4
    rotation: u8,
    /// Current orientation matrix (canonical grid rotated `rotation` times)
    grid: ShapeGrid,
    x: i8,
    y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn anchor: horizontally centered,
    /// topmost occupied row at board row 0
    pub fn spawn(kind: PieceKind) -> Self {
        let grid = canonical_grid(kind);
        let (x, y) = grid.spawn_anchor();
        Self {
            kind,
            rotation: 0,
            grid,
            x,
            y,
        }
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn grid(&self) -> &ShapeGrid {
        &self.grid
    }

    pub fn anchor(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.grid
            .cells()
            .iter()
            .map(|&(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

/// One game: board, falling piece, score and lifecycle status.
///
/// Single-threaded and tick-driven; there is exactly one writer, and
/// every operation validates and commits synchronously.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    catalog: ShapeCatalog,
    score: ScoreKeeper,
    status: Status,
    /// Milliseconds accumulated toward the next gravity step. Advances
    /// only while playing, so pausing freezes descent outright.
    gravity_timer_ms: u32,
}

impl GameSession {
    /// Create an idle session; call `new_game` to start playing
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            catalog: ShapeCatalog::new(seed),
            score: ScoreKeeper::new(),
            status: Status::Idle,
            gravity_timer_ms: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Start a fresh game from any status: empty board, zero score,
    /// first piece spawned, gravity timer restarted
    pub fn new_game(&mut self) {
        self.board.clear();
        self.score.reset();
        self.gravity_timer_ms = 0;
        self.status = Status::Playing;
        self.spawn_piece();
    }

    /// Suspend or resume the gravity timer. No-op unless playing or
    /// paused.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            Status::Playing => Status::Paused,
            Status::Paused => Status::Playing,
            other => other,
        };
    }

    pub fn move_left(&mut self) -> bool {
        self.status == Status::Playing && self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.status == Status::Playing && self.try_move(1, 0)
    }

    /// Player-requested single-step descent. Unlike a gravity step, a
    /// blocked soft drop is simply rejected - settling is gravity's job.
    pub fn soft_drop(&mut self) -> bool {
        self.status == Status::Playing && self.try_move(0, 1)
    }

    /// Rotate the piece a quarter turn clockwise.
    ///
    /// The candidate orientation is produced by a pure transform and
    /// tested at the current anchor; on collision the piece keeps its
    /// previous orientation. No wall kick: the anchor is never shifted
    /// to rescue a rotation.
    pub fn rotate(&mut self) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let candidate = active.grid.rotated();
        if collides(&self.board, &candidate, (active.x, active.y)) {
            return false;
        }

        active.grid = candidate;
        active.rotation = (active.rotation + 1) % 4;
        true
    }

    /// Advance the session by `elapsed_ms` of wall-clock time, firing
    /// gravity steps as the accumulator crosses the interval. Returns
    /// true if any step fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.status != Status::Playing {
            return false;
        }

        self.gravity_timer_ms += elapsed_ms;
        let mut stepped = false;
        while self.gravity_timer_ms >= GRAVITY_INTERVAL_MS {
            self.gravity_timer_ms -= GRAVITY_INTERVAL_MS;
            stepped |= self.gravity_step();
            if self.status != Status::Playing {
                break;
            }
        }
        stepped
    }

    /// One gravity step: descend by one row, or settle if blocked
    pub fn gravity_step(&mut self) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        if !self.try_move(0, 1) {
            self.settle();
        }
        true
    }

    /// Dispatch a player action. Everything except `NewGame` is a
    /// silent no-op outside `Playing` (pause toggling also works while
    /// paused).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => {
                let before = self.status;
                self.toggle_pause();
                self.status != before
            }
            GameAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    /// Candidate anchor move; commits only when collision-free
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let candidate = (active.x + dx, active.y + dy);
        if collides(&self.board, &active.grid, candidate) {
            return false;
        }

        active.x = candidate.0;
        active.y = candidate.1;
        true
    }

    /// Settle the active piece: merge into the board, clear full rows,
    /// award score, respawn. One atomic transaction per gravity-
    /// triggered settle - nothing outside observes a partial state.
    fn settle(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active.cells(), active.kind);
        let cleared = self.board.clear_full_rows();
        self.score.record_clear(cleared);
        self.spawn_piece();
    }

    /// Draw the next piece and place it at its spawn anchor. A spawn
    /// collision ends the game.
    fn spawn_piece(&mut self) {
        let piece = ActivePiece::spawn(self.catalog.next_piece());
        if collides(&self.board, &piece.grid, (piece.x, piece.y)) {
            self.active = None;
            self.status = Status::GameOver;
            return;
        }
        self.active = Some(piece);
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
