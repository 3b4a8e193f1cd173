//! Game loop integration tests: gravity, locking, scoring, game over

use block_puzzle::core::{GameState, Grid, PieceSource, Row, ScriptedSource, TickOutcome};
use block_puzzle::types::{BlockColor, GameAction, GameStatus, ShapeKind, COLS, GRAVITY_MS};

const GRAVITY_STEP: u32 = GRAVITY_MS + 1;

/// Row filled everywhere except columns 4 and 5 (the O piece's landing slot).
fn row_with_o_gap() -> Row {
    let mut row = [Some(BlockColor::Red); COLS as usize];
    row[4] = None;
    row[5] = None;
    row
}

fn o_source() -> ScriptedSource {
    ScriptedSource::repeat(ShapeKind::O, BlockColor::Yellow)
}

/// Run gravity until the active piece locks; returns rows cleared.
fn drop_until_lock<S: PieceSource>(game: &mut GameState<S>) -> u32 {
    for _ in 0..64 {
        if let TickOutcome::Locked { cleared } = game.tick(GRAVITY_STEP) {
            return cleared;
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_new_game_starts_running() {
    let game = GameState::new(12345);
    assert_eq!(game.status(), GameStatus::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.gravity_timer_ms(), 0);
    assert_eq!(game.active().y, 0);
    assert_eq!(game.grid().occupied_count(), 0);
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);
    for _ in 0..5 {
        assert_eq!(a.active(), b.active());
        drop_until_lock(&mut a);
        drop_until_lock(&mut b);
    }
}

#[test]
fn test_gravity_accumulates_across_ticks() {
    let mut game = GameState::with_source(o_source());
    for _ in 0..31 {
        assert_eq!(game.tick(16), TickOutcome::Idle);
    }
    // 32 * 16 = 512 > 500
    assert_eq!(game.tick(16), TickOutcome::Fell);
    assert_eq!(game.active().y, 1);
}

#[test]
fn test_score_is_ten_per_row_summed_over_events() {
    let mut rows = *Grid::new().rows();
    rows[16] = row_with_o_gap();
    rows[17] = row_with_o_gap();
    rows[19] = row_with_o_gap();
    let mut game = GameState::with_grid(Grid::from_rows(rows), o_source());

    // First O fills the gap in row 19 only.
    assert_eq!(drop_until_lock(&mut game), 1);
    assert_eq!(game.score(), 10);

    // Second O lands on the first one's leftover and completes two rows.
    assert_eq!(drop_until_lock(&mut game), 2);
    assert_eq!(game.score(), 30);
    assert_eq!(game.lines(), 3);

    // Only the leftover half of the first O remains.
    assert_eq!(game.grid().occupied_count(), 2);
    assert!(game.grid().is_occupied(4, 19));
    assert!(game.grid().is_occupied(5, 19));
}

#[test]
fn test_blocked_spawn_area_is_immediate_game_over() {
    let mut grid = Grid::new();
    grid.set(4, 0, Some(BlockColor::Blue));

    let mut game = GameState::with_grid(
        grid,
        ScriptedSource::repeat(ShapeKind::I, BlockColor::Red),
    );
    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.active().y, 0);

    // No gravity and no input once the game is over.
    assert_eq!(game.tick(GRAVITY_STEP * 10), TickOutcome::Idle);
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert_eq!(game.active().x, 3);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = GameState::with_source(o_source());
    for _ in 0..10 {
        assert!(game.is_running());
        drop_until_lock(&mut game);
    }

    assert_eq!(game.status(), GameStatus::GameOver);
    assert_eq!(game.grid().occupied_count(), 40);
    for y in 0..20 {
        assert!(game.grid().is_occupied(4, y) && game.grid().is_occupied(5, y));
    }
    assert_eq!(game.final_score(), 0);
}

#[test]
fn test_input_after_gravity_game_over_is_dropped() {
    let mut game = GameState::with_source(o_source());
    for _ in 0..9 {
        drop_until_lock(&mut game);
    }
    // The tenth O spawns on top of the stack and cannot fall.
    assert!(game.is_running());
    assert_eq!((game.active().x, game.active().y), (4, 0));

    let outcome = game.advance(GRAVITY_STEP, [GameAction::MoveLeft, GameAction::Rotate]);
    assert_eq!(outcome, TickOutcome::Locked { cleared: 0 });
    assert_eq!(game.status(), GameStatus::GameOver);

    // The blocked replacement piece stays exactly where it spawned.
    assert_eq!((game.active().x, game.active().y), (4, 0));
}

#[test]
fn test_advance_applies_gravity_before_input() {
    let mut game = GameState::with_source(o_source());
    for _ in 0..18 {
        game.tick(GRAVITY_STEP);
    }
    assert_eq!(game.active().y, 18);

    // Gravity locks the resting piece first; the move then applies to the
    // freshly spawned one.
    let outcome = game.advance(GRAVITY_STEP, [GameAction::MoveLeft]);
    assert_eq!(outcome, TickOutcome::Locked { cleared: 0 });
    assert_eq!((game.active().x, game.active().y), (3, 0));
}

#[test]
fn test_input_sequence_applies_in_order() {
    let mut game = GameState::with_source(ScriptedSource::repeat(ShapeKind::I, BlockColor::Green));
    game.advance(
        0,
        [
            GameAction::Rotate,
            GameAction::MoveLeft,
            GameAction::MoveLeft,
            GameAction::SoftDrop,
        ],
    );

    let piece = game.active();
    assert_eq!((piece.shape.width(), piece.shape.height()), (1, 4));
    assert_eq!((piece.x, piece.y), (1, 1));
}

#[test]
fn test_invalid_moves_leave_state_unchanged() {
    let mut game = GameState::with_source(o_source());
    for _ in 0..5 {
        game.apply_action(GameAction::MoveRight);
    }
    let before = *game.active();

    assert!(!game.apply_action(GameAction::MoveRight));
    // O is symmetric, so the rotation is accepted without any visible change.
    game.apply_action(GameAction::Rotate);
    assert_eq!(*game.active(), before);
}

#[test]
fn test_snapshot_reports_render_state() {
    let mut game = GameState::with_source(ScriptedSource::new(vec![
        (ShapeKind::T, BlockColor::Blue),
        (ShapeKind::Z, BlockColor::Green),
    ]));
    drop_until_lock(&mut game);

    let snap = game.snapshot();
    assert_eq!(snap.status, GameStatus::Running);
    assert_eq!(snap.active.kind, ShapeKind::Z);
    assert_eq!(snap.active.color, BlockColor::Green);
    assert_eq!((snap.active.x, snap.active.y), (4, 0));
    assert_eq!(snap.grid.occupied_count(), 4);
    assert_eq!(snap.grid.get(5, 18), Some(Some(BlockColor::Blue)));
}

#[test]
fn test_quit_ends_session_with_score() {
    let mut game = GameState::with_source(o_source());
    game.advance(0, [GameAction::Quit]);
    assert_eq!(game.status(), GameStatus::Quit);
    assert_eq!(game.final_score(), 0);
}
