//! Tic-tac-toe with move history and time travel.
//!
//! The [`Game`] state machine keeps every board snapshot of the current
//! line of play. A presenter can jump to any recorded step and continue from
//! there; the first move played after a jump discards the abandoned future.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation of one snapshot
//! - **Coordinates**: `(column, row)` labels for the move log
//! - **Game**: history, step pointer, sort order; play / jump / sort
//! - **View**: plain-data view model for any UI layer
//! - **Intents**: serializable messages dispatched into the game
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! game.jump_to(1).unwrap();
//!
//! let view = game.view();
//! assert_eq!(view.status(), "Next player: O");
//! assert_eq!(view.move_log().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coordinates;
mod error;
mod game;
mod intent;
mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use coordinates::{coordinates_of, coordinates_of_index};
pub use error::{GameError, GameErrorKind};
pub use game::{Game, MAX_STEPS, PlayOutcome};
pub use intent::{Intent, IntentOutcome};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, ParallelInstallations,
    SingleMarkPerStep, StepInRange,
};
pub use position::Position;
pub use rules::{WinnerResult, evaluate};
pub use types::{Board, Player, SortOrder, Square};
pub use view::{CellView, GameView, MoveLogEntry, Status};
