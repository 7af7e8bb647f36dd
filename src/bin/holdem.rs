use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use holdem_showdown::core::PokerError;
use holdem_showdown::holdem::{HoldemGame, HoleCardKicker, MAX_PLAYERS, SplitPot, TieBreaker};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TiePolicy {
    /// Equal hands share the pot.
    SplitPot,
    /// Equal hands are decided by the hole cards in deal order.
    HoleCards,
}

/// Deal and show down Texas Hold'em hands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Players at the table.
    #[arg(
        short,
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(2..=MAX_PLAYERS as i64)
    )]
    players: u8,

    /// Seed for the shuffle. A random seed is used when not set.
    #[arg(short, long)]
    seed: Option<u64>,

    /// How to settle hands that are worth exactly the same.
    #[arg(short, long, value_enum, default_value_t = TiePolicy::SplitPot)]
    tie_policy: TiePolicy,

    /// Number of games to play with the same generator.
    #[arg(short, long, default_value_t = 1)]
    games: usize,
}

fn play_one(
    players: usize,
    rng: &mut StdRng,
    tie_breaker: &dyn TieBreaker,
) -> Result<(), PokerError> {
    let mut game = HoldemGame::new(players, rng)?;
    game.play_out()?;
    println!("{game}");

    let winners = game.winners(tie_breaker)?;
    let names: Vec<String> = winners
        .ones()
        .map(|seat| {
            format!(
                "Player {} with {}",
                seat + 1,
                game.player_hands()[seat].best.name()
            )
        })
        .collect();
    if winners.count() > 1 {
        println!("Split pot: {}", names.join(", "));
    } else {
        println!("Winner: {}", names.join(", "));
    }

    match game.verify_hands() {
        Ok(()) => println!("\nAll hands are valid!"),
        Err(seats) => println!("\nInvalid hands found: {seats:?}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let tie_breaker: &dyn TieBreaker = match args.tie_policy {
        TiePolicy::SplitPot => &SplitPot,
        TiePolicy::HoleCards => &HoleCardKicker,
    };

    for game in 0..args.games {
        if args.games > 1 {
            println!("==== Game {} ====", game + 1);
        }
        if let Err(e) = play_one(usize::from(args.players), &mut rng, tie_breaker) {
            event!(Level::ERROR, error = %e, "Game failed");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
