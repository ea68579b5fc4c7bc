use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, prelude::*};

/// Play computer-vs-computer matches and print one JSON summary per match.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the first match; later matches use consecutive seeds.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    for index in 0..args.games {
        let mut rng = SmallRng::seed_from_u64(args.seed.wrapping_add(index));
        let first = random_board(&mut rng, BOARD_SIZE, &FLEET)?;
        let second = random_board(&mut rng, BOARD_SIZE, &FLEET)?;

        let mut game = Match::new(
            first,
            Box::new(AutomatedParticipant::named("player1")),
            second,
            Box::new(AutomatedParticipant::named("player2")),
        );
        let summary = game.run(&mut rng)?;
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
