//! Core module - pure game logic with no external dependencies
//!
//! Everything the engine needs lives here: grid, shapes, collision,
//! piece selection, scoring and the session state machine. Zero
//! dependencies on UI or I/O.

pub mod board;
pub mod catalog;
pub mod collision;
pub mod game;
pub mod score;
pub mod shapes;
pub mod snapshot;

pub use board::Board;
pub use catalog::ShapeCatalog;
pub use collision::collides;
pub use game::{ActivePiece, GameSession};
pub use score::ScoreKeeper;
pub use shapes::{canonical_grid, ShapeGrid};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
