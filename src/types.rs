//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed frame tick fed to the session by the runner (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity descent interval (milliseconds). The single timer driving
/// automatic downward movement; there is no level-based speedup.
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row. N rows in one settle award N * 100.
pub const POINTS_PER_LINE: u32 = 100;

/// The seven canonical tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No piece in play; board may be stale from a previous session
    Idle,
    /// Gravity timer running, inputs accepted
    Playing,
    /// Timer frozen, state untouched until resumed
    Paused,
    /// Terminal; only a new game leaves this state
    GameOver,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Paused => "paused",
            Status::GameOver => "game over",
        }
    }
}

/// Player-facing inputs into the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    TogglePause,
    NewGame,
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn status_strings() {
        assert_eq!(Status::Idle.as_str(), "idle");
        assert_eq!(Status::GameOver.as_str(), "game over");
    }
}
