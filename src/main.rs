#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, ui, Board, BellNotifier, CliPlayer, LogNotifier, Match, Player, ShotNotifier,
    Side, TargetingEngine,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Solo {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Ring the terminal bell on hits")]
        bell: bool,
        #[arg(long, help = "Place your ships randomly without prompting")]
        auto_place: bool,
    },
    /// Two players taking turns at the same console.
    Hotseat {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Ring the terminal bell on hits")]
        bell: bool,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn notifier(label: &'static str, bell: bool) -> Box<dyn ShotNotifier> {
    if bell {
        Box::new(BellNotifier::new(std::io::stdout()))
    } else {
        Box::new(LogNotifier::new(label))
    }
}

#[cfg(feature = "std")]
fn human(name: &str, rng: SmallRng) -> CliPlayer<std::io::StdinLock<'static>, std::io::Stdout> {
    CliPlayer::new(name, std::io::stdin().lock(), std::io::stdout(), rng)
}

#[cfg(feature = "std")]
fn play(
    mut game: Match,
    first: &mut dyn Player,
    second: &mut dyn Player,
) -> anyhow::Result<()> {
    game.setup(Side::First, first)?;
    game.setup(Side::Second, second)?;
    let winner = game.run(first, second)?;
    let (winner_name, loser_name) = match winner {
        Side::First => (first.name().to_string(), second.name().to_string()),
        Side::Second => (second.name().to_string(), first.name().to_string()),
    };
    println!("\n{} wins!", winner_name);
    println!("{}'s ships:", winner_name);
    print!("{}", ui::render_owner(game.board(winner)));
    println!("{}'s ships:", loser_name);
    print!("{}", ui::render_owner(game.board(winner.other())));
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solo {
            seed,
            bell,
            auto_place,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut player = human("Player 1", make_rng(seed)).with_auto_place(auto_place);
            let mut computer = TargetingEngine::new(make_rng(seed.map(|s| s.wrapping_add(1))));
            let game = Match::new(
                Board::with_notifier(notifier("Player 1", bell)),
                Board::with_notifier(notifier("Computer", bell)),
            );
            play(game, &mut player, &mut computer)?;
        }
        Commands::Hotseat { seed, bell } => {
            let mut p1 = human("Player 1", make_rng(seed));
            let mut p2 = human("Player 2", make_rng(seed.map(|s| s.wrapping_add(1))));
            let game = Match::new(
                Board::with_notifier(notifier("Player 1", bell)),
                Board::with_notifier(notifier("Player 2", bell)),
            );
            play(game, &mut p1, &mut p2)?;
        }
    }
    Ok(())
}
