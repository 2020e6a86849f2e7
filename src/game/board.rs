use super::types::Position;

/// Grid geometry, fixed for the lifetime of a game.
///
/// Purely a query surface: no mutable state, no failure modes once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
}

impl Board {
    /// Create a board. Panics on zero dimensions; that is a contract
    /// violation by the caller, not a recoverable condition.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True iff (x, y) lies on the grid
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.is_valid_position(pos.x, pos.y)
    }

    /// Map a possibly out-of-bounds position back onto the grid,
    /// torus-style. Used by the wrap-around wall policy.
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(
            pos.x.rem_euclid(self.width as i32),
            pos.y.rem_euclid(self.height as i32),
        )
    }

    /// Iterate over every cell of the grid in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}
