//! Common types for tic-tac-toe: position and move errors.

/// Why a typed position was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// Input was not a whole number (includes non-numeric text).
    NotInteger,
    /// Number is below 1.
    TooSmall,
    /// Number is above 9.
    TooLarge,
    /// The cell already holds a mark.
    Occupied,
}

/// Errors returned by `Game::make_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Position failed validation against the current board.
    InvalidPosition(PositionError),
    /// The game already has a winner or is drawn.
    GameOver,
}

impl From<PositionError> for MoveError {
    fn from(err: PositionError) -> Self {
        MoveError::InvalidPosition(err)
    }
}

impl core::fmt::Display for PositionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PositionError::NotInteger => write!(f, "Position is not a whole number"),
            PositionError::TooSmall => write!(f, "Position is smaller than 1"),
            PositionError::TooLarge => write!(f, "Position is larger than 9"),
            PositionError::Occupied => write!(f, "Position is already taken"),
        }
    }
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::InvalidPosition(e) => write!(f, "Invalid move: {}", e),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PositionError {}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
