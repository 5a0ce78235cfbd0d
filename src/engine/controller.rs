//! Reading player input and handing it to the dispatch chain.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;

use crate::engine::dispatch::Dispatch;
use crate::engine::output::Output;

pub const PROMPT: &str = "What will you do?";

/// What became of one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Handled,
    /// Input ran out.
    Closed,
}

/// Lowercase a line and split it on whitespace.
pub fn tokenize(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The front end: reads lines from the player and shows them output.
pub trait Controller {
    /// Prompt and read one line. `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn present(&mut self, out: Output) -> io::Result<()>;

    /// Read one line and send it down the chain starting at `target`.
    ///
    /// Commands that resolve nowhere are reported to the player, never
    /// returned.
    fn interact(&mut self, target: &dyn Dispatch) -> io::Result<Interaction> {
        let Some(line) = self.read_line()? else {
            return Ok(Interaction::Closed);
        };

        let args = tokenize(&line);
        let mut out = Output::new();
        if let Err(err) = target.dispatch(&args, &mut out) {
            debug!("unresolved input {:?}: {:?}", args, err);
            out.notice(err.to_string());
        }

        self.present(out)?;
        Ok(Interaction::Handled)
    }
}

/// Line-oriented controller over any reader and writer.
pub struct InputController<R, W> {
    input: R,
    output: W,
}

impl InputController<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        InputController::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InputController { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Controller for InputController<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        writeln!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail as a verb.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn present(&mut self, out: Output) -> io::Result<()> {
        for block in &out.blocks {
            writeln!(self.output, "{block}")?;
        }
        self.output.flush()
    }
}
