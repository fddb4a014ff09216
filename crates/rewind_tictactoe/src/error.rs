//! Caller errors for the game state machine.
//!
//! Rejected moves (occupied square, game already won) are not errors; they
//! come back as [`PlayOutcome`](crate::PlayOutcome) values. These types
//! cover requests a presenter should never make.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameErrorKind {
    /// Jump target lies outside the recorded history.
    #[display("Step {step} is outside history (last step is {last})")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Highest valid step.
        last: usize,
    },

    /// Cell index is not on the board.
    #[display("Cell index {index} is outside the board (must be 0-8)")]
    CellOutOfRange {
        /// Requested index.
        index: usize,
    },
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
