use std::collections::VecDeque;
use std::io;

use tictactoe::session::{INVALID_MOVE, MOVE_PROMPT};
use tictactoe::{
    prompt_move, run_game, Board, Game, GameStatus, InputProvider, Notifier, Player, Screen,
    Sound, Symbol,
};

/// Answers prompts from a fixed script and records what was asked.
struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl InputProvider for ScriptedInput {
    fn prompt_line(&mut self, text: &str) -> io::Result<String> {
        self.prompts.push(text.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}

#[derive(Default)]
struct RecordingScreen {
    clears: usize,
    boards: Vec<Board>,
    lines: Vec<String>,
}

impl Screen for RecordingScreen {
    fn clear_screen(&mut self) {
        self.clears += 1;
    }

    fn print_board(&mut self, board: &Board) {
        self.boards.push(*board);
    }

    fn print_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[derive(Default)]
struct RecordingNotifier {
    played: Vec<Sound>,
}

impl Notifier for RecordingNotifier {
    fn play_sound(&mut self, sound: Sound) {
        self.played.push(sound);
    }
}

fn new_game() -> Game {
    Game::new([Player::new("Jesse", Symbol::X), Player::new("Mysterio", Symbol::O)])
}

#[test]
fn test_full_game_with_win() {
    let mut game = new_game();
    let mut input = ScriptedInput::new(&["1", "4", "2", "5", "3"]);
    let mut screen = RecordingScreen::default();
    let mut notifier = RecordingNotifier::default();

    let status = run_game(&mut game, &mut input, &mut screen, &mut notifier).unwrap();

    assert_eq!(status, GameStatus::Won(0));
    assert_eq!(notifier.played, vec![Sound::Win]);
    assert_eq!(screen.lines.last().unwrap(), "Congratulations, Jesse!");
    // One clear + board per turn, plus the final one.
    assert_eq!(screen.clears, 6);
    assert_eq!(screen.boards.len(), 6);
    assert_eq!(screen.boards.last().unwrap(), game.board());
    assert!(screen.boards[0].empty_positions().len() == 9);
    assert!(input.prompts.iter().all(|p| p == MOVE_PROMPT));
    assert_eq!(screen.lines[0], "Your turn, Jesse! You're X");
    assert_eq!(screen.lines[1], "Your turn, Mysterio! You're O");
}

#[test]
fn test_full_game_with_draw() {
    let mut game = new_game();
    let moves = ["1", "2", "3", "5", "4", "6", "8", "7", "9"];
    let mut input = ScriptedInput::new(&moves);
    let mut screen = RecordingScreen::default();
    let mut notifier = RecordingNotifier::default();

    let status = run_game(&mut game, &mut input, &mut screen, &mut notifier).unwrap();

    assert_eq!(status, GameStatus::Draw);
    assert_eq!(notifier.played, vec![Sound::Draw]);
    assert_eq!(screen.lines.last().unwrap(), "It's a draw! :(");
    assert!(game.board().is_full());
}

#[test]
fn test_invalid_input_reprompts() {
    let board = Board::new();
    let player = Player::new("Jesse", Symbol::X);
    let mut input = ScriptedInput::new(&["", "zero", "0", "10", "2.5", " 6 "]);
    let mut screen = RecordingScreen::default();

    let pos = prompt_move(&player, &board, &mut input, &mut screen).unwrap();

    assert_eq!(pos.get(), 6);
    assert_eq!(input.prompts.len(), 6);
    let rejections = screen.lines.iter().filter(|l| *l == INVALID_MOVE).count();
    assert_eq!(rejections, 5);
}

#[test]
fn test_occupied_cell_reprompts() {
    let mut game = new_game();
    let mut input = ScriptedInput::new(&["5", "5", "1", "2", "9", "8"]);
    let mut screen = RecordingScreen::default();
    let mut notifier = RecordingNotifier::default();

    let status = run_game(&mut game, &mut input, &mut screen, &mut notifier).unwrap();

    assert_eq!(status, GameStatus::Won(0));
    assert_eq!(game.turn(), 5);
    assert_eq!(input.prompts.len(), 6);
    assert_eq!(screen.lines.iter().filter(|l| *l == INVALID_MOVE).count(), 1);
}

#[test]
fn test_closed_input_is_an_error() {
    let mut game = new_game();
    let mut input = ScriptedInput::new(&["5"]);
    let mut screen = RecordingScreen::default();
    let mut notifier = RecordingNotifier::default();

    let err = run_game(&mut game, &mut input, &mut screen, &mut notifier).unwrap_err();

    assert!(err.to_string().contains("script exhausted"));
    assert_eq!(game.turn(), 1);
    assert!(notifier.played.is_empty());
}
