use rand::rngs::ThreadRng;

use super::board::Board;
use super::config::{GameConfig, WallPolicy};
use super::food::Food;
use super::snake::Snake;
use super::types::{Direction, GameState, Position};

/// Orchestrates the board, snake, and food, and owns the score and the
/// game-state machine. Driven from outside by `handle_input` and `tick`.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    snake: Snake,
    food: Food,
    score: u32,
    state: GameState,
    /// Single-slot direction buffer between ticks. Later inputs before the
    /// next tick overwrite earlier ones; last write wins by design.
    pending_direction: Option<Direction>,
    rng: ThreadRng,
}

impl GameEngine {
    /// Create an engine with the snake centered on the board and the first
    /// food already placed.
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.grid_width, config.grid_height);
        let mut engine = Self {
            config,
            board,
            snake: Snake::new(Position::new(0, 0), Direction::Right, 1),
            food: Food::new(),
            score: 0,
            state: GameState::Running,
            pending_direction: None,
            rng: rand::thread_rng(),
        };
        engine.restart();
        engine
    }

    /// Buffer a direction change for the next tick. Only effective while
    /// running; reversal filtering happens in the snake itself at tick time.
    pub fn handle_input(&mut self, direction: Direction) {
        if self.state == GameState::Running {
            self.pending_direction = Some(direction);
        }
    }

    /// Advance the game by one step: move the snake, then resolve wall,
    /// self, and food collisions. A no-op unless the game is running.
    pub fn tick(&mut self) {
        if self.state != GameState::Running {
            return;
        }

        let direction = self.pending_direction.take().unwrap_or(self.snake.direction);
        self.snake.advance(direction);
        self.resolve_collisions();
    }

    fn resolve_collisions(&mut self) {
        let head = self.snake.head();

        match self.config.wall_policy {
            WallPolicy::Solid => {
                if !self.board.contains(head) {
                    self.state = GameState::GameOver;
                    return;
                }
            }
            WallPolicy::Wrap => {
                self.snake.body[0] = self.board.wrap(head);
            }
        }

        if self.snake.collides_with_self() {
            self.state = GameState::GameOver;
            return;
        }

        if Some(self.snake.head()) == self.food.position() {
            self.score += self.config.food_score;
            self.snake.grow();
            if self.food.spawn(&self.board, &self.snake, &mut self.rng).is_err() {
                // Every cell is taken; the player has won
                self.state = GameState::Victory;
            }
        }
    }

    /// Running -> Paused only; a no-op in any other state
    pub fn pause(&mut self) {
        if self.state == GameState::Running {
            self.state = GameState::Paused;
        }
    }

    /// Paused -> Running only; a no-op in any other state
    pub fn unpause(&mut self) {
        if self.state == GameState::Paused {
            self.state = GameState::Running;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => self.state = GameState::Paused,
            GameState::Paused => self.state = GameState::Running,
            _ => {}
        }
    }

    /// Reinitialize everything: centered snake of the configured length
    /// heading right, fresh food, zero score, running. Valid from any state.
    pub fn restart(&mut self) {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        self.snake = Snake::new(center, Direction::Right, self.config.initial_snake_length);
        self.food = Food::new();
        self.score = 0;
        self.state = GameState::Running;
        self.pending_direction = None;

        if self.food.spawn(&self.board, &self.snake, &mut self.rng).is_err() {
            // Degenerate board where the snake already covers every cell
            self.state = GameState::Victory;
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food.position()
    }
}
