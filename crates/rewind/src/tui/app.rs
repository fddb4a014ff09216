//! Application state and logic.

use super::input::{self, Action, Focus};
use crate::config::Settings;
use crossterm::event::KeyCode;
use rewind_tictactoe::{Game, GameView, Intent, IntentOutcome, PlayOutcome, Position};
use tracing::{debug, warn};

/// Main application state.
pub struct App {
    game: Game,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    /// Row of the move log under the selection, in displayed order.
    log_row: usize,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: Settings) -> Self {
        Self {
            game: Game::new(),
            settings,
            cursor: Position::Center,
            focus: Focus::Board,
            log_row: 0,
            message: "Arrows move, Enter plays, Tab switches to the move log.".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the presenter settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-log row.
    pub fn log_row(&self) -> usize {
        self.log_row
    }

    /// Gets the current feedback message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Builds the view model for rendering.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key, self.focus) else {
            return;
        };
        debug!(?action, "Handling key action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.select_current_step();
            }
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::ScrollLog(delta) => {
                let last = self.game.history().len() - 1;
                self.log_row = self.log_row.saturating_add_signed(delta).min(last);
            }
            Action::Activate => match self.focus {
                Focus::Board => self.send(Intent::Play {
                    position: self.cursor,
                }),
                Focus::MoveLog => {
                    let view = self.game.view();
                    if let Some(entry) = view.move_log().get(self.log_row) {
                        self.send(Intent::JumpTo { step: entry.step });
                    }
                }
            },
            Action::Step(delta) => {
                let step = self.game.step().saturating_add_signed(delta);
                if step <= self.game.last_step() && step != self.game.step() {
                    self.send(Intent::JumpTo { step });
                }
            }
            Action::Send(intent) => self.send(intent),
        }
    }

    /// Dispatches an intent and turns the outcome into feedback.
    fn send(&mut self, intent: Intent) {
        match self.game.dispatch(intent) {
            Ok(outcome) => {
                self.message = describe(outcome, &self.game);
                self.select_current_step();
            }
            Err(e) => {
                warn!(error = %e, ?intent, "Intent rejected");
                self.message = e.kind.to_string();
            }
        }
    }

    /// Moves the move-log selection onto the displayed step.
    fn select_current_step(&mut self) {
        self.log_row = self
            .game
            .move_log()
            .iter()
            .position(|entry| entry.selected)
            .unwrap_or(0);
    }
}

fn describe(outcome: IntentOutcome, game: &Game) -> String {
    match outcome {
        IntentOutcome::Played(PlayOutcome::Placed(player)) => {
            format!("{} played move #{}.", player, game.step())
        }
        IntentOutcome::Played(PlayOutcome::Occupied) => "That square is taken.".to_string(),
        IntentOutcome::Played(PlayOutcome::GameOver) => {
            "Game over. Jump back in the log to play on.".to_string()
        }
        IntentOutcome::Jumped if game.step() == 0 => "Back at game start.".to_string(),
        IntentOutcome::Jumped => format!("Showing move #{}.", game.step()),
        IntentOutcome::Sorted(order) => format!("Move log sorted {}.", order),
        IntentOutcome::Restarted => "New game. X to move.".to_string(),
    }
}
