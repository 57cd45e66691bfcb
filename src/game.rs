use crate::{
    board::{Board, Position, Symbol},
    common::MoveError,
    config::NUM_CELLS,
};
use alloc::string::String;

/// A named participant and the mark they play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Carries the index of the winning player.
    Won(usize),
    Draw,
}

/// One match: two players, their board, the move counter and the winner.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    turn: usize,
    winner: Option<usize>,
}

impl Game {
    /// Start a game on an empty board. `players[0]` moves first.
    pub fn new(players: [Player; 2]) -> Self {
        Self {
            players,
            board: Board::new(),
            turn: 0,
            winner: None,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player to move: `players[turn % 2]`.
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn % 2]
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    /// Place `player`'s mark at `position`, advance the turn and check for a win.
    ///
    /// The position is re-validated against the board, so an occupied or
    /// out-of-range cell is rejected without touching any state. Moves after
    /// the game has finished are rejected too.
    pub fn make_move(&mut self, player: &Player, position: f64) -> Result<&mut Self, MoveError> {
        if self.is_done() {
            return Err(MoveError::GameOver);
        }
        let position = self.board.validate_position(position)?;
        self.apply(player, position);
        Ok(self)
    }

    /// Same as [`Game::make_move`] for callers already holding a `Position`.
    pub fn play(&mut self, player: &Player, position: Position) -> Result<&mut Self, MoveError> {
        self.make_move(player, position.get() as f64)
    }

    fn apply(&mut self, player: &Player, position: Position) {
        let symbol = player.symbol();
        self.board.set(position, symbol);
        self.turn += 1;
        log::debug!("{} ({}) played {} on turn {}", player.name(), symbol, position, self.turn);

        if self.winner.is_none() && self.board.has_winner_after_move(symbol, position) {
            self.winner = self
                .players
                .iter()
                .position(|p| p == player)
                .or_else(|| self.players.iter().position(|p| p.symbol() == symbol));
            log::debug!("{} completed a line", player.name());
        }
    }

    /// A winner exists or the board filled up without one.
    pub fn is_done(&self) -> bool {
        self.has_winner() || self.is_draw()
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none() && self.turn == NUM_CELLS
    }

    /// Evaluate the current game status. A win takes precedence over a draw.
    pub fn status(&self) -> GameStatus {
        if let Some(i) = self.winner {
            GameStatus::Won(i)
        } else if self.is_draw() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
