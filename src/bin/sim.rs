use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use tictactoe::{random_playout, Cell, Game, GameStatus, Player, Symbol, DEFAULT_PLAYERS};

#[derive(Serialize)]
struct Summary {
    seed: Option<u64>,
    status: GameStatus,
    winner: Option<String>,
    turns: usize,
    board: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [seed]", args[0]);
        std::process::exit(1);
    }
    let seed: Option<u64> = args.get(1).map(|s| s.parse()).transpose()?;

    let mut rng = if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let players = DEFAULT_PLAYERS.map(|(name, symbol)| Player::new(name, symbol));
    let mut game = Game::new(players);
    let status = random_playout(&mut game, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let board = game
        .board()
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Marked(Symbol::X) => 'X',
                    Cell::Marked(Symbol::O) => 'O',
                })
                .collect()
        })
        .collect();

    let summary = Summary {
        seed,
        status,
        winner: game.winner().map(|p| p.name().to_string()),
        turns: game.turn(),
        board,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
