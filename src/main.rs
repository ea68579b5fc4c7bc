#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    console::{Console, ConsoleOptions},
    init_logging, random_board, AutomatedParticipant, HumanParticipant, Match, Style, BOARD_SIZE,
    FLEET,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

/// Sea battle on a 6×6 board against a computer opponent.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 800, help = "Pause between steps in milliseconds (0 disables)")]
    pace_ms: u64,
    #[arg(long, help = "Print boards without ANSI colours")]
    no_color: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let player_board = random_board(&mut rng, BOARD_SIZE, &FLEET)?;
    let mut enemy_board = random_board(&mut rng, BOARD_SIZE, &FLEET)?;
    enemy_board.set_concealed(true);

    let options = ConsoleOptions {
        style: if cli.no_color { Style::Plain } else { Style::Ansi },
        pace: Duration::from_millis(cli.pace_ms),
    };
    let mut console = Console::new(std::io::stdin().lock(), std::io::stdout(), options);
    console.print_intro()?;

    let mut game = Match::new(
        player_board,
        Box::new(HumanParticipant::new(console)),
        enemy_board,
        Box::new(AutomatedParticipant::new()),
    );
    game.run(&mut rng)?;
    Ok(())
}
