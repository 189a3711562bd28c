use broadside::{Board, GameStatus, Match, Player, Side, TargetingEngine, TOTAL_PIECE_CELLS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn engine(seed: u64) -> TargetingEngine<SmallRng> {
    TargetingEngine::new(SmallRng::seed_from_u64(seed))
}

#[test]
fn test_ai_vs_ai_game() {
    let mut p1 = engine(123);
    let mut p2 = engine(456);
    let mut game = Match::new(Board::new(), Board::new());
    game.setup(Side::First, &mut p1).unwrap();
    game.setup(Side::Second, &mut p2).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    let winner = game.run(&mut p1, &mut p2).unwrap();
    assert_eq!(game.status(), GameStatus::Won(winner));
    assert!(game.board(winner.other()).is_defeated());
    assert!(!game.board(winner).is_defeated());
    assert_eq!(game.to_move(), winner);

    let shots = game.shots(winner);
    assert!(shots >= TOTAL_PIECE_CELLS && shots <= 100);
    // the first side moves first, so the loser fired one fewer shot or the same
    let loser_shots = game.shots(winner.other());
    match winner {
        Side::First => assert_eq!(loser_shots, shots - 1),
        Side::Second => assert_eq!(loser_shots, shots),
    }
}

#[test]
fn test_games_finish_across_seeds() {
    for seed in 0..20u64 {
        let mut p1 = engine(seed);
        let mut p2 = engine(seed + 1000);
        let mut game = Match::new(Board::new(), Board::new());
        game.setup(Side::First, &mut p1).unwrap();
        game.setup(Side::Second, &mut p2).unwrap();
        let winner = game.run(&mut p1, &mut p2).unwrap();
        assert!(game.shots(winner) <= 100, "seed {}", seed);
    }
}

#[test]
fn test_targeting_beats_exhaustive_search() {
    // the hunt rules should sink a fleet well before every cell is fired at
    let mut total = 0;
    for seed in 0..20u64 {
        let mut board = Board::new();
        engine(seed).place_pieces(&mut board).unwrap();
        let mut ai = engine(seed + 500);
        let mut shots = 0;
        while !board.is_defeated() {
            ai.take_turn(&mut board).unwrap();
            shots += 1;
        }
        total += shots;
    }
    assert!(total / 20 < 95, "average {} shots", total / 20);
}

#[test]
fn test_play_turn_after_game_over_fails() {
    let mut p1 = engine(1);
    let mut p2 = engine(2);
    let mut game = Match::new(Board::new(), Board::new());
    game.setup(Side::First, &mut p1).unwrap();
    game.setup(Side::Second, &mut p2).unwrap();
    game.run(&mut p1, &mut p2).unwrap();
    assert!(game.play_turn(&mut p1).is_err());
    assert_eq!(p1.name(), "Computer");
}
