use broadside::{init_logging_with, Board, Match, Side, TargetingEngine};
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging_with(std::env::var("BROADSIDE_LOG").ok().as_deref(), LevelFilter::Warn);

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: sim <seed1> <seed2>");
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut p1 = TargetingEngine::new(SmallRng::seed_from_u64(seed1));
    let mut p2 = TargetingEngine::new(SmallRng::seed_from_u64(seed2));

    let mut game = Match::new(Board::new(), Board::new());
    game.setup(Side::First, &mut p1)?;
    game.setup(Side::Second, &mut p2)?;
    let winner = game.run(&mut p1, &mut p2)?;

    let status = |side: Side| if side == winner { "Won" } else { "Lost" };
    let result = json!({
        "player1": {"status": status(Side::First), "shots": game.shots(Side::First)},
        "player2": {"status": status(Side::Second), "shots": game.shots(Side::Second)},
        "winner": match winner {
            Side::First => "player1",
            Side::Second => "player2",
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
