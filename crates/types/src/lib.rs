//! Shared types module - constants, piece kinds, colors and actions
//!
//! Everything here is plain data with no dependencies, so the core, input and
//! terminal crates can all agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! These match a 300x600 play area drawn with 30-unit cells.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the runner (~60 FPS) |
//! | `GRAVITY_MS` | 500 | Gravity fires once the timer exceeds this |
//!
//! # Examples
//!
//! ```
//! use block_puzzle_types::{BlockColor, Cell, COLS, ROWS};
//!
//! let empty: Cell = None;
//! let filled: Cell = Some(BlockColor::Yellow);
//! assert!(empty.is_none() && filled.is_some());
//! assert_eq!(BlockColor::Yellow.rgb(), (255, 255, 0));
//! assert_eq!(COLS as usize * ROWS as usize, 200);
//! ```

/// Board width in cells
pub const COLS: u8 = 10;

/// Board height in cells
pub const ROWS: u8 = 20;

/// Gravity interval in milliseconds
pub const GRAVITY_MS: u32 = 500;

/// Points awarded per cleared row (scaled linearly by rows cleared at once)
pub const POINTS_PER_ROW: u32 = 10;

/// Frame interval of the terminal runner in milliseconds
pub const TICK_MS: u32 = 16;

/// The seven shape templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    /// All kinds, in template order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];
}

/// Block colors
///
/// Color is drawn independently of the shape, so any kind can show up in any
/// of the four colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl BlockColor {
    pub const ALL: [BlockColor; 4] = [
        BlockColor::Red,
        BlockColor::Green,
        BlockColor::Blue,
        BlockColor::Yellow,
    ];

    /// 24-bit RGB components
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BlockColor::Red => (255, 0, 0),
            BlockColor::Green => (0, 255, 0),
            BlockColor::Blue => (0, 0, 255),
            BlockColor::Yellow => (255, 255, 0),
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(color)`: filled by a locked block of that color
pub type Cell = Option<BlockColor>;

/// Discrete input events consumed by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// End the session
    Quit,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Gravity and input are live
    Running,
    /// A freshly spawned piece had no valid position
    GameOver,
    /// The player asked to leave
    Quit,
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}
