use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens when the snake's head leaves the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallPolicy {
    /// Hitting a wall ends the game
    Solid,
    /// Leaving one edge re-enters at the opposite edge
    Wrap,
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Points awarded per food item
    pub food_score: u32,
    /// Wall collision behavior
    pub wall_policy: WallPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_snake_length: 3,
            food_score: 10,
            wall_policy: WallPolicy::Solid,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }
}

/// Difficulty level, mapped to the tick rate of the driver loop.
/// The engine itself is rate-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Game ticks per second for this difficulty
    pub fn tick_rate(&self) -> u64 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 12,
            Difficulty::Hard => 16,
        }
    }

    /// Duration of one tick at this difficulty
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.tick_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.food_score, 10);
        assert_eq!(config.wall_policy, WallPolicy::Solid);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 15);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 15);
    }

    #[test]
    fn test_tick_rates() {
        assert_eq!(Difficulty::Easy.tick_rate(), 8);
        assert_eq!(Difficulty::Medium.tick_rate(), 12);
        assert_eq!(Difficulty::Hard.tick_rate(), 16);
        assert_eq!(Difficulty::Easy.tick_duration(), Duration::from_millis(125));
    }
}
