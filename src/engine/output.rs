use std::fmt;

use crate::world::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Text(String),
    Exit(Direction),
    Notice(String),
}

impl fmt::Display for OutputBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputBlock::Text(s) | OutputBlock::Notice(s) => f.write_str(s),
            OutputBlock::Exit(direction) => write!(f, "There is an exit to the {direction}."),
        }
    }
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    /// Like [`Output::say`], but keeps blank text.
    pub fn line(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Text(s.into()));
    }

    pub fn exit(&mut self, direction: Direction) {
        self.blocks.push(OutputBlock::Exit(direction));
    }

    /// Messages about the command itself rather than the world.
    pub fn notice(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Notice(s));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// One printable line per block.
    pub fn lines(&self) -> Vec<String> {
        self.blocks.iter().map(|b| b.to_string()).collect()
    }
}
