#![cfg(feature = "std")]

//! Collaborators the session loop talks to: where lines come from, where the
//! board goes, and how the end of a game is announced.

use crate::board::Board;
use std::io;

/// Audio cues played when a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Win,
    Draw,
}

impl Sound {
    /// File name of the asset, relative to the sound directory.
    pub fn asset(self) -> &'static str {
        match self {
            Sound::Win => crate::config::WIN_SOUND,
            Sound::Draw => crate::config::DRAW_SOUND,
        }
    }
}

/// Source of raw user text.
pub trait InputProvider {
    /// Show `text` and block until a line is available. The trailing newline
    /// is not included.
    fn prompt_line(&mut self, text: &str) -> io::Result<String>;
}

/// Where the game is drawn.
pub trait Screen {
    fn clear_screen(&mut self);

    fn print_board(&mut self, board: &Board);

    fn print_line(&mut self, text: &str);
}

/// Fire-and-forget end-of-game cue. Implementations must not fail.
pub trait Notifier {
    fn play_sound(&mut self, sound: Sound);
}
