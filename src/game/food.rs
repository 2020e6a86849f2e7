use rand::Rng;
use rand::seq::SliceRandom;
use std::error::Error;
use std::fmt;

use super::board::Board;
use super::snake::Snake;
use super::types::Position;

/// No free cell remains for food placement. The engine turns this into the
/// victory end state; it never escapes the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFull;

impl fmt::Display for BoardFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cell available for food")
    }
}

impl Error for BoardFull {}

/// The current food item, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Food {
    pub(crate) position: Option<Position>,
}

impl Food {
    /// Food with no position yet; `spawn` places it
    pub fn new() -> Self {
        Self { position: None }
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Place the food uniformly at random on a cell not covered by the
    /// snake. Each call is independent of previous placements.
    pub fn spawn<R: Rng>(
        &mut self,
        board: &Board,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<(), BoardFull> {
        let free: Vec<Position> = board.cells().filter(|p| !snake.occupies(*p)).collect();
        let chosen = free.choose(rng).ok_or(BoardFull)?;
        self.position = Some(*chosen);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Direction;

    #[test]
    fn test_spawn_avoids_snake() {
        let board = Board::new(10, 10);
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let mut food = Food::new();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            food.spawn(&board, &snake, &mut rng).unwrap();
            let pos = food.position().unwrap();
            assert!(board.contains(pos));
            assert!(!snake.occupies(pos));
        }
    }

    #[test]
    fn test_spawn_single_free_cell() {
        // 3x1 board, snake covering two of the three cells
        let board = Board::new(3, 1);
        let snake = Snake::new(Position::new(1, 0), Direction::Right, 2);
        let mut food = Food::new();
        let mut rng = rand::thread_rng();

        food.spawn(&board, &snake, &mut rng).unwrap();
        assert_eq!(food.position(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_spawn_board_full() {
        // Snake covers the entire 3x1 board
        let board = Board::new(3, 1);
        let snake = Snake::new(Position::new(2, 0), Direction::Right, 3);
        let mut food = Food::new();
        let mut rng = rand::thread_rng();

        assert_eq!(food.spawn(&board, &snake, &mut rng), Err(BoardFull));
    }

    #[test]
    fn test_unspawned_food_has_no_position() {
        assert_eq!(Food::new().position(), None);
    }
}
