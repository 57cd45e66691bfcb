//! Uniformly random playouts, for simulation runs and property tests.

use crate::{
    board::Position,
    common::MoveError,
    game::{Game, GameStatus},
};
use rand::Rng;

/// Pick one of the open positions uniformly, or `None` on a full board.
pub fn random_position<R: Rng>(game: &Game, rng: &mut R) -> Option<Position> {
    let open = game.board().empty_positions();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Play random valid moves for whoever is to move until the game is done.
pub fn random_playout<R: Rng>(game: &mut Game, rng: &mut R) -> Result<GameStatus, MoveError> {
    while !game.is_done() {
        let position = random_position(game, rng).ok_or(MoveError::GameOver)?;
        let player = game.current_player().clone();
        game.play(&player, position)?;
    }
    Ok(game.status())
}
