//! Read-only view model handed to presenters.
//!
//! Everything here is plain data: no callbacks, no references into the
//! game. Presenters render it and send [`Intent`](crate::Intent)s back.

use crate::coordinates::coordinates_of;
use crate::rules::WinnerResult;
use crate::{Player, Position, SortOrder, Square};
use derive_getters::Getters;
use derive_more::Display;
use schemars::JsonSchema;
use serde::Serialize;

/// Status line for the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, JsonSchema)]
pub enum Status {
    /// The displayed board has a completed line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// All nine moves were played without a completed line.
    #[display("draw")]
    Draw,
    /// Play continues.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// One board cell as the presenter sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CellView {
    /// Where the cell is.
    pub position: Position,
    /// Mark in the cell, if any.
    pub mark: Option<Player>,
    /// Whether the cell lies on the winning line.
    pub highlighted: bool,
}

/// One entry of the move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MoveLogEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// "Go to game start" or "Go to move #n".
    pub label: String,
    /// Coordinates of the move that produced the step, empty for the start.
    pub coordinates: String,
    /// Whether this is the displayed step.
    pub selected: bool,
}

impl MoveLogEntry {
    pub(crate) fn new(step: usize, played: Option<Position>, current: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        Self {
            step,
            label,
            coordinates: coordinates_of(played),
            selected: step == current,
        }
    }
}

/// Snapshot of everything a presenter needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema, Getters)]
pub struct GameView {
    /// The displayed board, cell by cell.
    cells: [CellView; 9],
    /// Winner of the displayed board, if any.
    winner: Option<WinnerResult>,
    /// Status text.
    status: String,
    /// Player to move at the displayed step.
    to_move: Player,
    /// Displayed step.
    step: usize,
    /// Move-log order.
    sort_order: SortOrder,
    /// Move log, already ordered.
    move_log: Vec<MoveLogEntry>,
}

impl GameView {
    pub(crate) fn new(
        squares: &[Square; 9],
        winner: Option<WinnerResult>,
        status: Status,
        step: usize,
        sort_order: SortOrder,
        move_log: Vec<MoveLogEntry>,
    ) -> Self {
        let cells = Position::ALL.map(|position| CellView {
            position,
            mark: squares[position.to_index()].player(),
            highlighted: winner.is_some_and(|w| w.contains(position)),
        });
        Self {
            cells,
            winner,
            status: status.to_string(),
            to_move: Player::for_step(step),
            step,
            sort_order,
            move_log,
        }
    }

    /// Cells of the winning line, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winner.map(|w| w.line)
    }
}
