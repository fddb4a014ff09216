//! User intents as first-class messages.
//!
//! Presenters that prefer message passing over direct calls build an
//! [`Intent`] per user action and hand it to [`Game::dispatch`]. Each intent
//! is applied whole or not at all.

use crate::error::GameError;
use crate::game::PlayOutcome;
use crate::{Game, Position, SortOrder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request from the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Mark a cell for the player to move.
    Play {
        /// Cell to mark.
        position: Position,
    },
    /// Display an earlier (or later) recorded step.
    JumpTo {
        /// Target step.
        step: usize,
    },
    /// Set the move-log order.
    SetSortOrder {
        /// New order.
        order: SortOrder,
    },
    /// Flip the move-log order.
    ToggleSortOrder,
    /// Start a new game.
    Restart,
}

/// What a dispatched intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    /// A play request, placed or ignored.
    Played(PlayOutcome),
    /// The displayed step changed.
    Jumped,
    /// The move-log order changed.
    Sorted(SortOrder),
    /// The game was reset.
    Restarted,
}

impl Game {
    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Propagates the caller errors of [`Game::jump_to`].
    #[track_caller]
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<IntentOutcome, GameError> {
        let outcome = match intent {
            Intent::Play { position } => IntentOutcome::Played(self.play(position)),
            Intent::JumpTo { step } => {
                self.jump_to(step)?;
                IntentOutcome::Jumped
            }
            Intent::SetSortOrder { order } => {
                self.set_sort_order(order);
                IntentOutcome::Sorted(order)
            }
            Intent::ToggleSortOrder => {
                let order = self.sort_order().toggle();
                self.set_sort_order(order);
                IntentOutcome::Sorted(order)
            }
            Intent::Restart => {
                self.restart();
                IntentOutcome::Restarted
            }
        };
        Ok(outcome)
    }
}
