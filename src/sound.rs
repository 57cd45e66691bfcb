#![cfg(feature = "std")]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::{DEFAULT_SOUND_DIR, SOUND_PLAYERS};
use crate::interface::{Notifier, Sound};

/// Plays assets by spawning a command-line audio player.
///
/// The child is never waited on. Missing files, missing players and spawn
/// errors are logged at debug level and otherwise ignored.
pub struct CommandNotifier {
    sound_dir: PathBuf,
    command: Option<String>,
}

impl CommandNotifier {
    pub fn new(sound_dir: impl Into<PathBuf>, command: Option<String>) -> Self {
        Self {
            sound_dir: sound_dir.into(),
            command,
        }
    }

    /// Full path of the file played for `sound`.
    pub fn asset_path(&self, sound: Sound) -> PathBuf {
        self.sound_dir.join(sound.asset())
    }

    fn candidates(&self) -> Vec<&str> {
        match &self.command {
            Some(cmd) => vec![cmd.as_str()],
            None => SOUND_PLAYERS.to_vec(),
        }
    }

    fn spawn(player: &str, path: &Path) -> std::io::Result<()> {
        Command::new(player)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

impl Default for CommandNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_SOUND_DIR, None)
    }
}

impl Notifier for CommandNotifier {
    fn play_sound(&mut self, sound: Sound) {
        let path = self.asset_path(sound);
        if !path.is_file() {
            log::debug!("sound asset {} not found, skipping", path.display());
            return;
        }
        for player in self.candidates() {
            match Self::spawn(player, &path) {
                Ok(()) => {
                    log::debug!("playing {} with {}", path.display(), player);
                    return;
                }
                Err(e) => log::debug!("could not start {}: {}", player, e),
            }
        }
        log::debug!("no audio player available for {}", path.display());
    }
}

/// [`Notifier`] that plays nothing.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn play_sound(&mut self, _sound: Sound) {}
}
