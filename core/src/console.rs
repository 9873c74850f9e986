//! console.rs
//! Line-oriented command loop over any `BufRead` / `Write` pair.
//!
//! Each line starts with a command char:
//! - `1 <text>` encode `<text>`
//! - `0 <text>` decode `<text>`
//! - `q` stop
//!
//! Any other line is ignored. The char right after the command char is a
//! separator and is not part of `<text>`.

use std::io::{self, BufRead, Write};

use crate::codec::ChieruCodec;
use crate::constants::{commands, ERROR_SENTINEL, PROMPT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Encode(&'a str),
    Decode(&'a str),
    Quit,
}

impl<'a> Command<'a> {
    /// Parse one input line (a trailing newline is ignored).
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut chars = line.chars();
        let command = chars.next()?;

        let mut payload = chars;
        payload.next();
        let text = payload.as_str();

        match command {
            commands::ENCODE => Some(Command::Encode(text)),
            commands::DECODE => Some(Command::Decode(text)),
            commands::QUIT => Some(Command::Quit),
            _ => None,
        }
    }
}

pub struct Console<'c> {
    codec: &'c ChieruCodec,
}

impl<'c> Console<'c> {
    pub fn new(codec: &'c ChieruCodec) -> Self {
        Self { codec }
    }

    /// Output line for `command`; `None` for `Quit`.
    ///
    /// Under the strict policy a failed decode prints `ERROR_SENTINEL`
    /// followed by the error message.
    pub fn execute(&self, command: &Command<'_>) -> Option<String> {
        match *command {
            Command::Encode(text) => Some(self.codec.encode_text(text)),
            Command::Decode(text) => Some(match self.codec.decode_text_with_policy(text) {
                Ok(decoded) => decoded,
                Err(e) => format!("{ERROR_SENTINEL} {e}"),
            }),
            Command::Quit => None,
        }
    }

    /// Prompt, read, dispatch and print until `q` or end of input.
    ///
    /// # Returns
    /// Number of encode/decode commands executed.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> io::Result<usize> {
        let mut executed = 0usize;
        let mut line = String::new();

        loop {
            write!(writer, "{PROMPT}")?;
            writer.flush()?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => {
                    if let Some(out) = self.execute(&command) {
                        writeln!(writer, "{out}")?;
                        executed += 1;
                    }
                }
                None => tracing::debug!(line = line.trim_end(), "ignored console line"),
            }
        }

        writer.flush()?;
        Ok(executed)
    }
}
