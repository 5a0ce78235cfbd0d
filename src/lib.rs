//! A small text adventure: a handful of rooms, a player who can walk
//! between them, and a chain of command handlers fed from a prompt.

pub mod config;
pub mod engine;
pub mod error;
pub mod world;

pub use engine::{Controller, Engine, Game, InputController, Output, Player};
pub use error::{DispatchError, DispatchResult, MapError};
pub use world::{Direction, Map, Room, RoomId, RoomSpec, load_map_from_str, standard_map};
