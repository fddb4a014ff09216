//! Property-based tests for the game state machine.

use proptest::prelude::*;
use rewind_tictactoe::rules::WINNING_LINES;
use rewind_tictactoe::{
    Board, Game, GameInvariants, InvariantSet, Player, Position, Square, evaluate,
};

// =============================================================================
// Strategies
// =============================================================================

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

/// Arbitrary boards, including ones unreachable in play.
fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(arb_square()).prop_map(Board::from_squares)
}

fn arb_position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|i| Position::from_index(i).unwrap())
}

/// A user session: each op is either a cell click or a jump to a fraction
/// of the current history.
#[derive(Debug, Clone)]
enum Op {
    Play(Position),
    Jump(f64),
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => arb_position().prop_map(Op::Play),
            1 => (0.0f64..1.0).prop_map(Op::Jump),
        ],
        0..30,
    )
}

fn apply(game: &mut Game, op: &Op) {
    match op {
        Op::Play(pos) => {
            game.play(*pos);
        }
        Op::Jump(fraction) => {
            let step = (fraction * game.history().len() as f64) as usize;
            game.jump_to(step.min(game.last_step())).unwrap();
        }
    }
}

// =============================================================================
// Win detection
// =============================================================================

proptest! {
    #[test]
    fn evaluate_finds_a_line_iff_one_is_complete(board in arb_board()) {
        let complete = WINNING_LINES.iter().find(|line| {
            let first = board.get(line[0]);
            first != Square::Empty && line.iter().all(|pos| board.get(*pos) == first)
        });

        match (evaluate(&board), complete) {
            (None, None) => {}
            (Some(result), Some(line)) => {
                prop_assert_eq!(result.line, *line);
                prop_assert_eq!(Square::Occupied(result.player), board.get(line[0]));
            }
            (got, expected) => prop_assert!(false, "got {:?}, expected line {:?}", got, expected),
        }
    }
}

// =============================================================================
// State machine laws
// =============================================================================

proptest! {
    #[test]
    fn plays_keep_step_at_end_of_history(moves in prop::collection::vec(arb_position(), 0..12)) {
        let mut game = Game::new();
        let mut last_placed = None;
        for pos in &moves {
            if game.play(*pos).is_placed() {
                last_placed = Some(*pos);
            }
            prop_assert_eq!(game.history().len() - 1, game.step());
        }
        if let Some(pos) = last_placed {
            prop_assert_eq!(game.installations()[game.step() - 1], pos);
        }
    }

    #[test]
    fn repeated_play_changes_state_once(
        setup in prop::collection::vec(arb_position(), 0..9),
        pos in arb_position(),
    ) {
        let mut game = Game::new();
        for p in &setup {
            game.play(*p);
        }
        game.play(pos);
        let once = game.clone();
        game.play(pos);
        prop_assert_eq!(game, once);
    }

    #[test]
    fn turn_follows_step_parity(ops in arb_ops()) {
        let mut game = Game::new();
        for op in &ops {
            apply(&mut game, op);
            let expected = if game.step() % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(game.to_move(), expected);
            prop_assert_eq!(*game.view().to_move(), expected);
        }
    }

    #[test]
    fn invariants_hold_across_sessions(ops in arb_ops()) {
        let mut game = Game::new();
        for op in &ops {
            apply(&mut game, op);
            prop_assert!(GameInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn jump_view_reflects_history(ops in arb_ops(), target in 0.0f64..1.0) {
        let mut game = Game::new();
        for op in &ops {
            apply(&mut game, op);
        }
        let step = ((target * game.history().len() as f64) as usize).min(game.last_step());
        game.jump_to(step).unwrap();

        let snapshot = game.history()[step].clone();
        let view = game.view();
        for cell in view.cells() {
            prop_assert_eq!(cell.mark, snapshot.get(cell.position).player());
        }
    }

    #[test]
    fn play_after_jump_truncates(ops in arb_ops(), target in 0.0f64..1.0, pos in arb_position()) {
        let mut game = Game::new();
        for op in &ops {
            apply(&mut game, op);
        }
        let k = ((target * game.history().len() as f64) as usize).min(game.last_step());
        game.jump_to(k).unwrap();
        let kept = game.history()[..=k].to_vec();

        if game.play(pos).is_placed() {
            prop_assert_eq!(game.history().len(), k + 2);
            prop_assert_eq!(&game.history()[..=k], kept.as_slice());
            prop_assert_eq!(game.installations().len(), k + 1);
        }
    }
}
