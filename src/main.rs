use std::path::PathBuf;

use clap::Parser;
use tictactoe::{
    init_logging, run_game, CommandNotifier, Game, GameStatus, Notifier, Player, SilentNotifier,
    Symbol, TerminalInput, TerminalScreen, DEFAULT_PLAYERS, DEFAULT_SOUND_DIR,
};

#[derive(Parser)]
#[command(author, version, about = "Two-player tic-tac-toe in the terminal", long_about = None)]
struct Cli {
    /// Name of the player using X, who moves first.
    #[arg(long, default_value = DEFAULT_PLAYERS[0].0)]
    x_name: String,
    /// Name of the player using O.
    #[arg(long, default_value = DEFAULT_PLAYERS[1].0)]
    o_name: String,
    /// Directory holding fanfare.mp3 and sad-trombone.mp3.
    #[arg(long, default_value = DEFAULT_SOUND_DIR)]
    sound_dir: PathBuf,
    /// Audio player to run instead of probing the usual ones.
    #[arg(long)]
    sound_command: Option<String>,
    /// Do not play a sound when the game ends.
    #[arg(long)]
    no_sound: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let players = [
        Player::new(cli.x_name, Symbol::X),
        Player::new(cli.o_name, Symbol::O),
    ];
    let mut game = Game::new(players);

    let mut notifier: Box<dyn Notifier> = if cli.no_sound {
        Box::new(SilentNotifier)
    } else {
        Box::new(CommandNotifier::new(cli.sound_dir, cli.sound_command))
    };

    let status = run_game(
        &mut game,
        &mut TerminalInput::new(),
        &mut TerminalScreen::new(),
        notifier.as_mut(),
    )?;
    log::debug!("final status {:?}", status);
    debug_assert!(!matches!(status, GameStatus::InProgress));
    Ok(())
}
