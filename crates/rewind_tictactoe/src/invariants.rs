//! First-class invariants for the game history.
//!
//! Invariants are logical properties that must hold after every intent.
//! [`Game::play`] checks them in debug builds and they can be tested
//! independently.

use crate::{Board, Game, Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the displayed step is a recorded step.
pub struct StepInRange;

impl Invariant<Game> for StepInRange {
    fn holds(game: &Game) -> bool {
        game.step < game.history.len()
    }

    fn description() -> &'static str {
        "Step pointer lies within history"
    }
}

/// Invariant: one installation position per move.
pub struct ParallelInstallations;

impl Invariant<Game> for ParallelInstallations {
    fn holds(game: &Game) -> bool {
        !game.history.is_empty() && game.installations.len() == game.history.len() - 1
    }

    fn description() -> &'static str {
        "Installation positions run parallel to history"
    }
}

/// Invariant: history starts empty and each step adds exactly one mark.
///
/// The mark added between step `k` and `k + 1` sits at installation `k`
/// and belongs to the player whose turn it was at step `k`.
pub struct SingleMarkPerStep;

impl Invariant<Game> for SingleMarkPerStep {
    fn holds(game: &Game) -> bool {
        let Some(first) = game.history.first() else {
            return false;
        };
        if *first != Board::new() {
            return false;
        }

        game.history
            .windows(2)
            .zip(&game.installations)
            .enumerate()
            .all(|(k, (pair, pos))| {
                let (before, after) = (&pair[0], &pair[1]);
                before.is_empty(*pos)
                    && after.get(*pos) == Square::Occupied(Player::for_step(k))
                    && *after == before.with_mark(*pos, Player::for_step(k))
            })
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark for the player to move"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (StepInRange, ParallelInstallations, SingleMarkPerStep);
