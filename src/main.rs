use anyhow::Result;
use clap::Parser;
use tui_snake::game::{Difficulty, GameConfig, WallPolicy};
use tui_snake::modes::HumanMode;
use tui_snake::score::HighScoreStore;

// The centered length-3 snake extends two cells left of the board center,
// so either dimension below 4 would lay body cells off the grid
const MIN_GRID_SIZE: i64 = 4;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Grid width
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(MIN_GRID_SIZE..))]
    width: u16,

    /// Grid height
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u16).range(MIN_GRID_SIZE..))]
    height: u16,

    /// Difficulty (sets the game speed)
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: Difficulty,

    /// Wrap around the edges instead of dying on the walls
    #[arg(long)]
    wrap: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let config = GameConfig {
        wall_policy: if cli.wrap {
            WallPolicy::Wrap
        } else {
            WallPolicy::Solid
        },
        ..GameConfig::new(cli.width as usize, cli.height as usize)
    };

    let high_scores = HighScoreStore::open_default();

    let mut mode = HumanMode::new(config, cli.difficulty, high_scores);
    mode.run().await?;

    Ok(())
}
