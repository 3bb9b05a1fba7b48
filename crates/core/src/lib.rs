//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the piece/field interaction engine: collision
//! detection, locking, and row clearing. It has **zero dependencies** on
//! terminal rendering or input, making it:
//!
//! - **Deterministic**: the randomness source is injected, so a fixed source replays a game exactly
//! - **Testable**: every rule is exercised by unit tests
//! - **Fast**: the field is a flat array and row clearing never allocates
//!
//! # Module Structure
//!
//! - [`field`]: 10x20 playfield with occupancy queries and full-row clearing
//! - [`shapes`]: the seven tetromino shape matrices
//! - [`piece`]: the falling piece with move/collide/lock
//! - [`rng`]: pluggable spawn randomness
//! - [`session`]: loop-facing driver (input actions, gravity ticks, respawn, game over)
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{MoveOutcome, SequenceSource, Session};
//! use falling_blocks_types::GameAction;
//!
//! // Always spawn a red I piece.
//! let mut session = Session::new(SequenceSource::pieces(&[(0, 0)]));
//!
//! session.apply_action(GameAction::MoveLeft);
//! assert_eq!(session.active().x(), 2);
//!
//! assert_eq!(session.gravity_tick(), Some(MoveOutcome::Moved));
//! assert_eq!(session.active().y(), 1);
//! ```

pub mod error;
pub mod field;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use error::LockError;
pub use field::{ClearedRows, PlayField};
pub use piece::{ActivePiece, MoveOutcome};
pub use rng::{PieceSource, SequenceSource, SimpleRng};
pub use session::{Session, SessionState};
pub use shapes::{shape, Shape, SHAPES};
