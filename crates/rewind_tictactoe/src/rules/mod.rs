//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules know nothing about
//! history; the state machine applies them to whichever step is current.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinnerResult, evaluate};
