//! Full-game rule tests.
//!
//! These drive `Game` directly through whole turns and check the phase
//! cycle, the win condition and reset.

use icebreaker::board::CellState;
use icebreaker::core::{Action, Coord, GameConfig, Phase, Side};
use icebreaker::rules::{Game, GameResult, RuleError};

/// First to (1,1), break (2,2): Second to move.
#[test]
fn test_worked_example() {
    let mut game = Game::standard();

    game.select(Coord::new(1, 1)).unwrap();
    assert_eq!(game.current(), Side::First);
    assert_eq!(game.phase(), Phase::BreakIce);

    game.select(Coord::new(2, 2)).unwrap();
    assert_eq!(game.board().cell(Coord::new(2, 2)), Some(CellState::Broken));
    assert_eq!(game.current(), Side::Second);
    assert_eq!(game.phase(), Phase::Move);
}

/// Phases cycle Move, BreakIce per side and the side alternates.
#[test]
fn test_phase_cycle_over_several_turns() {
    let mut game = Game::standard();
    let script = [
        (Side::First, Coord::new(0, 1), Coord::new(3, 0)),
        (Side::Second, Coord::new(4, 6), Coord::new(3, 1)),
        (Side::First, Coord::new(1, 2), Coord::new(3, 2)),
        (Side::Second, Coord::new(4, 5), Coord::new(3, 3)),
    ];

    for (turn, (side, to, brk)) in script.into_iter().enumerate() {
        assert_eq!(game.current(), side);
        assert_eq!(game.phase(), Phase::Move);
        assert!(!game.move_made());
        assert_eq!(game.turn(), turn as u32 + 1);

        game.select(to).unwrap();
        assert_eq!(game.current(), side);
        assert_eq!(game.phase(), Phase::BreakIce);
        assert!(game.move_made());

        game.select(brk).unwrap();
        assert!(game.is_consistent());
    }

    assert_eq!(game.history().len(), 8);
    assert_eq!(game.board().broken_count(), 4);
    let phases: Vec<_> = game.history().iter().map(|r| r.action.phase()).collect();
    assert!(phases
        .chunks(2)
        .all(|pair| pair == [Phase::Move, Phase::BreakIce]));
}

/// A piece can never step onto broken ice or the other piece.
#[test]
fn test_blocked_cells_rejected() {
    let mut game = Game::standard();
    game.select(Coord::new(1, 0)).unwrap();
    game.select(Coord::new(4, 5)).unwrap();

    // Second at (5,6): (4,5) broken.
    let err = game.select(Coord::new(4, 5)).unwrap_err();
    assert!(matches!(err, RuleError::Move(_)));
    assert!(!game.board().is_valid_move(Coord::new(4, 5)));

    game.select(Coord::new(4, 6)).unwrap();
    game.select(Coord::new(0, 0)).unwrap();

    // First at (1,0) next to broken (0,0).
    assert!(game.select(Coord::new(0, 0)).is_err());
    assert_eq!(game.player(Side::First).position(), Coord::new(1, 0));
}

/// Surround Second in its corner on the standard board.
#[test]
fn test_second_trapped_in_corner() {
    let mut game = Game::standard();
    // First wanders down the left edge while breaking around Second.
    // Second shuffles between (5,6) and (4,6).
    let turns = [
        (Coord::new(1, 0), Coord::new(4, 5)),
        (Coord::new(4, 6), Coord::new(3, 6)),
        (Coord::new(2, 0), Coord::new(3, 5)),
        (Coord::new(5, 6), Coord::new(2, 6)),
        (Coord::new(3, 0), Coord::new(5, 5)),
    ];
    let mut last = None;
    for (to, brk) in turns {
        game.select(to).unwrap();
        last = Some(game.select(brk).unwrap());
    }
    // Second at (5,6): (4,5)x (5,5)x (4,6) free.
    assert!(last.unwrap().result.is_none());
    assert!(game.can_move(Side::Second));

    game.select(Coord::new(4, 6)).unwrap();
    game.select(Coord::new(0, 0)).unwrap();

    // First moves, then breaks (5,6), the only cell Second could reach.
    game.select(Coord::new(4, 0)).unwrap();
    let end = game.select(Coord::new(5, 6)).unwrap();

    // Second at (4,6): (3,5)x (3,6)x (4,5)x (5,5)x (5,6)x.
    assert_eq!(end.result, Some(GameResult::new(Side::First)));
    assert!(!game.can_move(Side::Second));
    assert_eq!(game.select(Coord::new(3, 6)), Err(RuleError::GameOver));
}

/// Second walls First into its own corner and is credited the win.
#[test]
fn test_first_trapped_in_corner() {
    let mut game = Game::standard();
    let turns = [
        // First steps out and breaks beside itself.
        (Side::First, Coord::new(0, 1), Coord::new(1, 0)),
        (Side::Second, Coord::new(4, 6), Coord::new(1, 1)),
        // Back into the corner; only (0,1) is left open.
        (Side::First, Coord::new(0, 0), Coord::new(5, 0)),
        (Side::Second, Coord::new(5, 6), Coord::new(0, 1)),
    ];

    let mut last = None;
    for (side, to, brk) in turns {
        assert_eq!(game.current(), side);
        let moved = game.select(to).unwrap();
        assert!(moved.result.is_none());
        last = Some(game.select(brk).unwrap());
    }

    // First at (0,0): (0,1)x (1,0)x (1,1)x.
    assert_eq!(last.unwrap().result, Some(GameResult::new(Side::Second)));
    assert_eq!(game.result(), Some(GameResult::new(Side::Second)));
    assert_eq!(game.current(), Side::First);
    assert!(!game.can_move(Side::First));
    assert!(game.can_move(Side::Second));
    assert_eq!(game.select(Coord::new(0, 1)), Err(RuleError::GameOver));
}

/// Reset restores the corners and clears every broken cell.
#[test]
fn test_reset_from_terminal() {
    let config = GameConfig::new()
        .with_size(1, 3)
        .with_start(Side::First, Coord::new(0, 1))
        .with_start(Side::Second, Coord::new(0, 2));
    let mut game = Game::new(config).unwrap();
    game.select(Coord::new(0, 0)).unwrap();
    game.select(Coord::new(0, 1)).unwrap();
    assert!(game.is_terminal());

    game.reset();

    assert!(!game.is_terminal());
    assert_eq!(game.board().broken_count(), 0);
    assert_eq!(game.player(Side::First).position(), Coord::new(0, 1));
    assert_eq!(game.player(Side::Second).position(), Coord::new(0, 2));
    assert_eq!(game.current(), Side::First);
}

/// History records every accepted action with side and turn.
#[test]
fn test_history_records() {
    let mut game = Game::standard();
    game.select(Coord::new(1, 1)).unwrap();
    game.select(Coord::new(5, 5)).unwrap();

    let history: Vec<_> = game.history().iter().copied().collect();
    assert_eq!(history[0].side, Side::First);
    assert_eq!(
        history[0].action,
        Action::Move {
            from: Coord::new(0, 0),
            to: Coord::new(1, 1)
        }
    );
    assert_eq!(history[1].action, Action::Break { at: Coord::new(5, 5) });
    assert!(history.iter().all(|r| r.turn == 1));

    // Clones share history until one of them diverges.
    let snapshot = game.clone();
    game.select(Coord::new(4, 6)).unwrap();
    assert_eq!(snapshot.history().len(), 2);
    assert_eq!(game.history().len(), 3);
}
