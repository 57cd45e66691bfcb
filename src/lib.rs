#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
pub mod interface;
#[cfg(feature = "std")]
mod logging;
pub mod playout;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
mod sound;
#[cfg(feature = "std")]
mod terminal;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use playout::{random_playout, random_position};
#[cfg(feature = "std")]
pub use interface::{InputProvider, Notifier, Screen, Sound};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::{prompt_move, run_game};
#[cfg(feature = "std")]
pub use sound::{CommandNotifier, SilentNotifier};
#[cfg(feature = "std")]
pub use terminal::{TerminalInput, TerminalScreen};
