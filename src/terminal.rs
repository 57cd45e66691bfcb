#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::interface::{InputProvider, Screen};

/// Reads answers from stdin.
pub struct TerminalInput<R = io::StdinLock<'static>> {
    reader: R,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> TerminalInput<R> {
    /// Read answers from any buffered reader instead of stdin.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputProvider for TerminalInput<R> {
    fn prompt_line(&mut self, text: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", text)?;
        stdout.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a move was entered",
            ));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

/// Draws to stdout using ANSI escapes to clear.
pub struct TerminalScreen<W = io::Stdout> {
    out: W,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn from_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn clear_screen(&mut self) {
        let _ = write!(self.out, "\x1B[2J\x1B[1;1H");
        let _ = self.out.flush();
    }

    fn print_board(&mut self, board: &Board) {
        let _ = write!(self.out, "{}", board);
        let _ = self.out.flush();
    }

    fn print_line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }
}
