use anyhow::Result;
use clap::{Parser, ValueEnum};
use hand_snake::game::GameConfig;
use hand_snake::gesture::GestureConfig;
use hand_snake::modes::{HumanMode, PointerMode};

#[derive(Parser)]
#[command(name = "hand_snake")]
#[command(version, about = "Snake steered by a continuous pointer position")]
struct Cli {
    /// How the snake is steered
    #[arg(long, default_value = "pointer")]
    mode: Mode,

    /// Board width in pixels (multiple of the cell size)
    #[arg(long, default_value = "640")]
    width: i32,

    /// Board height in pixels (multiple of the cell size)
    #[arg(long, default_value = "480")]
    height: i32,

    /// Cell edge length in pixels
    #[arg(long, default_value = "20")]
    cell: i32,

    /// Game ticks per second
    #[arg(long, default_value = "10")]
    tick_hz: u64,

    /// Snake length after a reset
    #[arg(long, default_value = "1")]
    initial_length: usize,

    /// Points per food eaten
    #[arg(long, default_value = "10")]
    food_score: u32,

    /// Pointer dead-zone radius around the frame center, per axis
    #[arg(long, default_value = "0.15")]
    threshold: f64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Steer with arrow keys / WASD
    Human,
    /// Steer with the cursor position (mouse as the pointer)
    Pointer,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        board_width: cli.width,
        board_height: cli.height,
        cell_size: cli.cell,
        initial_snake_length: cli.initial_length,
        food_score: cli.food_score,
        tick_hz: cli.tick_hz,
    };
    config.validate()?;

    match cli.mode {
        Mode::Human => {
            let mut mode = HumanMode::new(config)?;
            mode.run().await?;
        }
        Mode::Pointer => {
            let gesture = GestureConfig {
                threshold: cli.threshold,
            };
            let mut mode = PointerMode::new(config, gesture)?;
            mode.run().await?;
        }
    }

    Ok(())
}
