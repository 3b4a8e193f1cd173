use block_puzzle::core::{GameState, Grid, ScriptedSource};
use block_puzzle::term::{GameView, Rgb, Viewport};
use block_puzzle::types::{BlockColor, ShapeKind};

fn screen_text(fb: &block_puzzle::term::FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10x20 cells at 2x1 => 20x20, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_active_piece_in_its_color() {
    let game = GameState::with_source(ScriptedSource::repeat(ShapeKind::I, BlockColor::Green));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // I spawns at columns 3..=6 on row 0; each cell is 2 chars wide inside the border.
    for col in 3..=6u16 {
        let cell = fb.get(1 + col * 2, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(0, 255, 0));
    }
    assert_eq!(fb.get(1 + 2 * 2, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_locked_cells() {
    let mut grid = Grid::new();
    grid.set(0, 19, Some(BlockColor::Red));
    let game = GameState::with_grid(grid, ScriptedSource::repeat(ShapeKind::O, BlockColor::Blue));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    let left = fb.get(1, 20).unwrap();
    let right = fb.get(2, 20).unwrap();
    assert_eq!((left.ch, right.ch), ('█', '█'));
    assert_eq!(left.style.fg, Rgb::new(255, 0, 0));
}

#[test]
fn term_view_shows_score_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1230;
    snap.lines = 123;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let text = screen_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("1230"));
    assert!(text.contains("LINES"));
    assert!(text.contains("123"));

    let narrow = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(!screen_text(&narrow).contains("SCORE"));
}

#[test]
fn term_view_overlays_game_over() {
    let mut grid = Grid::new();
    grid.set(5, 0, Some(BlockColor::Yellow));
    let game = GameState::with_grid(grid, ScriptedSource::repeat(ShapeKind::T, BlockColor::Red));

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    assert!(screen_text(&fb).contains("GAME OVER"));
}
