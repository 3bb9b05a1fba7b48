//! Session module - the loop-facing game driver
//!
//! Ties the field, the falling piece, and the randomness source together. The
//! game loop feeds it input actions and gravity ticks; the renderer reads the
//! field and the active piece back out. Nothing here blocks or sleeps.

use crate::error::LockError;
use crate::field::PlayField;
use crate::piece::{ActivePiece, MoveOutcome};
use crate::rng::PieceSource;
use crate::types::GameAction;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// The stack reached the top. Only [`GameAction::Restart`] has an effect.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S> {
    field: PlayField,
    active: ActivePiece,
    source: S,
    state: SessionState,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl<S: PieceSource> Session<S> {
    /// Create a session with an empty field and a freshly spawned piece
    pub fn new(mut source: S) -> Self {
        let active = ActivePiece::spawn(&mut source);
        Self {
            field: PlayField::new(),
            active,
            source,
            state: SessionState::Playing,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    /// Apply one input action.
    ///
    /// Movement actions perform exactly one move; returns the outcome, or
    /// `None` when nothing moved (restart, or the game is over).
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        match action.delta() {
            Some((dx, dy)) => self.step(dx, dy),
            None => {
                self.restart();
                None
            }
        }
    }

    /// One gravity tick: a single forced downward move
    pub fn gravity_tick(&mut self) -> Option<MoveOutcome> {
        self.step(0, 1)
    }

    fn step(&mut self, dx: i8, dy: i8) -> Option<MoveOutcome> {
        if self.state == SessionState::GameOver {
            return None;
        }

        match self.active.try_move(&mut self.field, dx, dy) {
            Ok(outcome) => {
                if let MoveOutcome::Locked { lines_cleared } = outcome {
                    self.pieces_locked += 1;
                    self.lines_cleared += lines_cleared as u32;
                    self.spawn_next();
                }
                Some(outcome)
            }
            Err(err @ LockError::Overflow { .. }) => {
                tracing::info!(%err, pieces = self.pieces_locked, "game over");
                self.state = SessionState::GameOver;
                None
            }
        }
    }

    fn spawn_next(&mut self) {
        self.active = ActivePiece::spawn(&mut self.source);
        if self.active.overlaps(&self.field) {
            tracing::info!(
                kind = ?self.active.kind(),
                pieces = self.pieces_locked,
                lines = self.lines_cleared,
                "game over: spawn position is blocked"
            );
            self.state = SessionState::GameOver;
        }
    }

    /// Clear the field and counters and start with a new piece
    pub fn restart(&mut self) {
        self.field.clear();
        self.pieces_locked = 0;
        self.lines_cleared = 0;
        self.state = SessionState::Playing;
        self.active = ActivePiece::spawn(&mut self.source);
        tracing::info!("session restarted");
    }

    pub fn field(&self) -> &PlayField {
        &self.field
    }

    /// Mutable field access, for setting up scenarios
    pub fn field_mut(&mut self) -> &mut PlayField {
        &mut self.field
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }
}
