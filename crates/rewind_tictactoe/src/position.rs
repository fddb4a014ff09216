//! Board positions for tic-tac-toe moves.

use super::error::{GameError, GameErrorKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 1-based column number.
    pub fn column(self) -> usize {
        self.to_index() % 3 + 1
    }

    /// 1-based row number.
    pub fn row(self) -> usize {
        self.to_index() / 3 + 1
    }
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    #[track_caller]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
            .ok_or_else(|| GameError::new(GameErrorKind::CellOutOfRange { index }))
    }
}
