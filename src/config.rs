use crate::board::Symbol;

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Lowest and highest position a player can type.
pub const MIN_POSITION: i64 = 1;
pub const MAX_POSITION: i64 = NUM_CELLS as i64;

pub const DEFAULT_PLAYERS: [(&str, Symbol); 2] = [("Jesse", Symbol::X), ("Mysterio", Symbol::O)];

/// Directory the audio assets are resolved against when none is given.
pub const DEFAULT_SOUND_DIR: &str = "./sounds";
pub const WIN_SOUND: &str = "fanfare.mp3";
pub const DRAW_SOUND: &str = "sad-trombone.mp3";

/// Command-line audio players tried in order when no explicit command is set.
pub const SOUND_PLAYERS: [&str; 8] = [
    "mplayer", "afplay", "mpg123", "mpg321", "play", "omxplayer", "aplay", "cmdmp3",
];
