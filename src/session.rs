#![cfg(feature = "std")]

use crate::board::{parse_position, Board, Position};
use crate::game::{Game, GameStatus, Player};
use crate::interface::{InputProvider, Notifier, Screen, Sound};

pub const MOVE_PROMPT: &str = "Where would you like to play? [1-9]";
pub const INVALID_MOVE: &str = "Invalid move.";

/// Ask `player` for a move until they name an open cell.
pub fn prompt_move<I, S>(
    player: &Player,
    board: &Board,
    input: &mut I,
    screen: &mut S,
) -> anyhow::Result<Position>
where
    I: InputProvider + ?Sized,
    S: Screen + ?Sized,
{
    screen.print_line(&format!(
        "Your turn, {}! You're {}",
        player.name(),
        player.symbol()
    ));
    loop {
        let response = input.prompt_line(MOVE_PROMPT)?;
        match board.validate_position(parse_position(&response)) {
            Ok(position) => return Ok(position),
            Err(e) => {
                log::debug!("rejected {:?}: {}", response, e);
                screen.print_line(INVALID_MOVE);
            }
        }
    }
}

/// Drive `game` to completion, then show the result and play its cue.
pub fn run_game<I, S, N>(
    game: &mut Game,
    input: &mut I,
    screen: &mut S,
    notifier: &mut N,
) -> anyhow::Result<GameStatus>
where
    I: InputProvider + ?Sized,
    S: Screen + ?Sized,
    N: Notifier + ?Sized,
{
    while !game.is_done() {
        let player = game.current_player().clone();

        screen.clear_screen();
        screen.print_board(game.board());

        let position = prompt_move(&player, game.board(), input, screen)?;
        game.play(&player, position).map_err(|e| anyhow::anyhow!(e))?;
    }

    screen.clear_screen();
    screen.print_board(game.board());

    let status = game.status();
    match status {
        GameStatus::Won(i) => {
            let winner = &game.players()[i];
            log::info!("{} won after {} moves", winner.name(), game.turn());
            screen.print_line(&format!("Congratulations, {}!", winner.name()));
            notifier.play_sound(Sound::Win);
        }
        GameStatus::Draw => {
            log::info!("game drawn");
            screen.print_line("It's a draw! :(");
            notifier.play_sound(Sound::Draw);
        }
        GameStatus::InProgress => {
            return Err(anyhow::anyhow!("game loop exited before the game finished"));
        }
    }
    Ok(status)
}
