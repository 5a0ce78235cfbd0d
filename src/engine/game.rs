use std::rc::Rc;

use log::debug;

use crate::engine::dispatch::{CommandTable, Controllable, Dispatch};
use crate::engine::output::Output;
use crate::engine::player::Player;
use crate::error::MapError;
use crate::world::{Map, standard_map};

/// One play session: the map and the player walking it.
pub struct Game {
    commands: CommandTable<Game>,
    map: Rc<Map>,
    player: Player,
}

impl Game {
    /// A game on the built-in map.
    pub fn new() -> Result<Self, MapError> {
        Ok(Self::with_map(standard_map()?))
    }

    pub fn with_map(map: Map) -> Self {
        let map = Rc::new(map);
        let player = Player::new(Rc::clone(&map));
        Game {
            commands: CommandTable::new(),
            map,
            player,
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Show the player where they are.
    pub fn start(&self, out: &mut Output) {
        debug!("game starting in room {}", self.player.location());
        self.player.current_room().describe(out);
    }
}

impl Controllable for Game {
    fn commands(&self) -> &CommandTable<Self> {
        &self.commands
    }

    fn subordinate(&self) -> Option<&dyn Dispatch> {
        Some(&self.player)
    }
}
