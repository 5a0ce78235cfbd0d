mod controller;
mod dispatch;
mod game;
mod output;
mod player;
mod runtime;

pub use controller::{Controller, InputController, Interaction, PROMPT, tokenize};
pub use dispatch::{CommandTable, Controllable, Dispatch, Handler};
pub use game::Game;
pub use output::{Output, OutputBlock};
pub use player::Player;
pub use runtime::Engine;
