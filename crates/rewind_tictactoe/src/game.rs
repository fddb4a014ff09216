//! History-keeping game state machine.
//!
//! The machine stores only the board history, the moves that produced it,
//! the displayed step and the move-log order. Turn, winner and status are
//! recomputed from the displayed step on every read.

use crate::error::{GameError, GameErrorKind};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::rules::{self, WinnerResult};
use crate::view::{GameView, MoveLogEntry, Status};
use crate::{Board, Player, Position, SortOrder};
use tracing::{debug, info, instrument, warn};

/// Moves in a complete game.
pub const MAX_STEPS: usize = 9;

/// Result of a [`Game::play`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The mark was placed.
    Placed(Player),
    /// The square is already taken on the displayed board. Nothing changed.
    Occupied,
    /// The displayed board already has a winner. Nothing changed.
    GameOver,
}

impl PlayOutcome {
    /// Whether the request changed the game.
    pub fn is_placed(self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}

/// Tic-tac-toe game with move history and time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) installations: Vec<Position>,
    pub(crate) step: usize,
    pub(crate) sort_order: SortOrder,
}

impl Game {
    /// Creates a new game: one empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            installations: Vec::new(),
            step: 0,
            sort_order: SortOrder::Ascending,
        }
    }

    /// Recorded board snapshots; index 0 is the empty start board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Cells played, entry `k` leading from step `k` to step `k + 1`.
    pub fn installations(&self) -> &[Position] {
        &self.installations
    }

    /// Displayed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Highest step that can be jumped to.
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Move-log order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the displayed step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.step]
    }

    /// Player to move at the displayed step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winner of the displayed board.
    pub fn winner(&self) -> Option<WinnerResult> {
        rules::evaluate(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(result) => Status::Winner(result.player),
            None if self.step == MAX_STEPS => {
                debug_assert!(rules::is_full(self.current_board()), "draw on a non-full board");
                Status::Draw
            }
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// Any history after the displayed step is discarded first, and the
    /// move log returns to ascending order. Playing on an occupied square
    /// or on a board that already has a winner changes nothing.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn play(&mut self, pos: Position) -> PlayOutcome {
        let current = self.current_board();

        if rules::evaluate(current).is_some() {
            debug!("Board already has a winner, ignoring move");
            return PlayOutcome::GameOver;
        }

        if !current.is_empty(pos) {
            debug!("Square occupied, ignoring move");
            return PlayOutcome::Occupied;
        }

        let player = self.to_move();
        let next = current.with_mark(pos, player);

        let discarded = self.last_step() - self.step;
        if discarded > 0 {
            info!(discarded, "Discarding future history");
        }
        self.history.truncate(self.step + 1);
        self.installations.truncate(self.step);

        self.history.push(next);
        self.installations.push(pos);
        self.step = self.last_step();
        self.sort_order = SortOrder::Ascending;

        debug_assert!(self.verify().is_ok(), "history invariants violated");
        debug!(%player, new_step = self.step, "Move placed");
        PlayOutcome::Placed(player)
    }

    /// Raw-index form of [`Game::play`].
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::CellOutOfRange`] if `index` is not 0-8.
    #[track_caller]
    pub fn play_index(&mut self, index: usize) -> Result<PlayOutcome, GameError> {
        let pos = Position::try_from(index)?;
        Ok(self.play(pos))
    }

    /// Displays history step `step`.
    ///
    /// History is kept intact; the next successful [`Game::play`] discards
    /// whatever lies beyond the new step.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::StepOutOfRange`] if `step` is past the last
    /// recorded step.
    #[track_caller]
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let last = self.last_step();
        if step > last {
            warn!(last, "Rejected jump outside history");
            return Err(GameError::new(GameErrorKind::StepOutOfRange { step, last }));
        }
        self.step = step;
        Ok(())
    }

    /// Sets the move-log order.
    #[instrument(skip(self))]
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Starts over from an empty board.
    #[instrument(skip(self), fields(steps = self.history.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }

    /// Checks the history invariants.
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    /// Move log ordered per [`Game::sort_order`].
    pub fn move_log(&self) -> Vec<MoveLogEntry> {
        let mut log: Vec<_> = (0..self.history.len())
            .map(|step| {
                let played = step.checked_sub(1).map(|i| self.installations[i]);
                MoveLogEntry::new(step, played, self.step)
            })
            .collect();
        if self.sort_order == SortOrder::Descending {
            log.reverse();
        }
        log
    }

    /// Builds the view model for the displayed step.
    pub fn view(&self) -> GameView {
        GameView::new(
            self.current_board().squares(),
            self.winner(),
            self.status(),
            self.step,
            self.sort_order,
            self.move_log(),
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::*;

    fn played(moves: &[Position]) -> Game {
        let mut game = Game::new();
        for pos in moves {
            assert!(game.play(*pos).is_placed(), "setup move {pos:?} rejected");
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step(), 0);
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.sort_order(), SortOrder::Ascending);
        assert_eq!(game.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_play_alternates_players() {
        let mut game = Game::new();
        assert_eq!(game.play(Center), PlayOutcome::Placed(Player::X));
        assert_eq!(game.play(TopLeft), PlayOutcome::Placed(Player::O));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.installations(), &[Center, TopLeft]);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let mut game = played(&[Center]);
        let before = game.clone();
        assert_eq!(game.play(Center), PlayOutcome::Occupied);
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let mut game = played(&[TopLeft, Center, TopCenter, MiddleLeft, TopRight]);
        let before = game.clone();
        assert_eq!(game.play(BottomRight), PlayOutcome::GameOver);
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_resets_sort_order() {
        let mut game = Game::new();
        game.set_sort_order(SortOrder::Descending);
        game.play(Center);
        assert_eq!(game.sort_order(), SortOrder::Ascending);
    }

    #[test]
    fn test_rejected_play_keeps_sort_order() {
        let mut game = played(&[Center]);
        game.set_sort_order(SortOrder::Descending);
        game.play(Center);
        assert_eq!(game.sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_jump_does_not_truncate() {
        let mut game = played(&[Center, TopLeft, BottomRight]);
        game.jump_to(1).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.installations().len(), 3);
        assert_eq!(game.to_move(), Player::O);
        game.jump_to(3).unwrap();
        assert_eq!(game.current_board(), &game.history()[3]);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = played(&[Center]);
        let err = game.jump_to(2).unwrap_err();
        assert_eq!(err.kind, GameErrorKind::StepOutOfRange { step: 2, last: 1 });
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_play_after_jump_truncates() {
        let mut game = played(&[Center, TopLeft, BottomRight]);
        game.jump_to(1).unwrap();
        assert_eq!(game.play(BottomRight), PlayOutcome::Placed(Player::O));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step(), 2);
        assert_eq!(game.installations(), &[Center, BottomRight]);
    }

    #[test]
    fn test_play_on_earlier_winning_step_is_allowed() {
        let mut game = played(&[TopLeft, Center, TopCenter, MiddleLeft, TopRight]);
        game.jump_to(4).unwrap();
        assert_eq!(game.winner(), None);
        assert_eq!(game.play(BottomRight), PlayOutcome::Placed(Player::X));
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn test_play_index() {
        let mut game = Game::new();
        assert_eq!(game.play_index(4).unwrap(), PlayOutcome::Placed(Player::X));
        let err = game.play_index(9).unwrap_err();
        assert_eq!(err.kind, GameErrorKind::CellOutOfRange { index: 9 });
        assert_eq!(game.step(), 1);
    }

    #[test]
    fn test_restart() {
        let mut game = played(&[Center, TopLeft]);
        game.set_sort_order(SortOrder::Descending);
        game.restart();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_draw_status_on_full_board() {
        let game = played(&[
            TopLeft,
            TopCenter,
            TopRight,
            Center,
            MiddleLeft,
            MiddleRight,
            BottomCenter,
            BottomLeft,
            BottomRight,
        ]);
        assert!(rules::is_full(game.current_board()));
        assert_eq!(game.status(), Status::Draw);
    }

    #[test]
    fn test_move_log_descending() {
        let mut game = played(&[Center, TopLeft]);
        game.set_sort_order(SortOrder::Descending);
        let steps: Vec<_> = game.move_log().iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
    }
}
