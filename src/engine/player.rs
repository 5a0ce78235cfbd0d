//! Player state and the verbs a player answers.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::engine::dispatch::{CommandTable, Controllable, Dispatch};
use crate::engine::output::Output;
use crate::error::{DispatchError, DispatchResult};
use crate::world::{Item, Map, Room, RoomId};

pub struct Player {
    commands: CommandTable<Player>,
    map: Rc<Map>,
    location: Cell<RoomId>,
    inventory: HashMap<String, Item>,
}

impl Player {
    /// Place a new player in the map's starting room.
    pub fn new(map: Rc<Map>) -> Self {
        let start = map.starting_room().id();
        Player {
            commands: CommandTable::new()
                .with(&["cry", "c"], Player::cry)
                .with(&["move", "m"], Player::move_command),
            map,
            location: Cell::new(start),
            inventory: HashMap::new(),
        }
    }

    pub fn location(&self) -> RoomId {
        self.location.get()
    }

    pub fn current_room(&self) -> &Room {
        self.map.room(self.location.get())
    }

    pub fn inventory(&self) -> &HashMap<String, Item> {
        &self.inventory
    }

    /// Unknown verbs go to whichever room the player stands in now.
    pub fn current_dispatch_target(&self) -> &Room {
        self.current_room()
    }

    /// Try to walk one step. Returns whether the player changed rooms.
    pub fn travel(&self, direction: &str, out: &mut Output) -> bool {
        let previous = self.location.get();
        let next = self.current_room().travel(direction, out);

        if next == previous {
            out.say("There's no path.");
            return false;
        }

        debug!("player moved {direction} from room {previous} to room {next}");
        self.location.set(next);
        self.current_room().describe(out);
        true
    }

    fn cry(&self, _args: &[String], out: &mut Output) -> DispatchResult {
        out.say("You stand there and sob.");
        Ok(())
    }

    fn move_command(&self, args: &[String], out: &mut Output) -> DispatchResult {
        let Some(direction) = args.get(1) else {
            return Err(DispatchError::MissingArgument {
                verb: args.first().cloned().unwrap_or_default(),
                argument: "direction",
            });
        };
        self.travel(direction, out);
        Ok(())
    }
}

impl Controllable for Player {
    fn commands(&self) -> &CommandTable<Self> {
        &self.commands
    }

    fn subordinate(&self) -> Option<&dyn Dispatch> {
        Some(self.current_dispatch_target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::standard_map;

    fn player() -> Player {
        Player::new(Rc::new(standard_map().unwrap()))
    }

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn starts_in_first_room_with_empty_inventory() {
        let p = player();
        assert_eq!(p.location(), RoomId(0));
        assert!(p.inventory().is_empty());
    }

    #[test]
    fn cry_and_its_alias() {
        let p = player();
        for line in ["cry", "c"] {
            let mut out = Output::new();
            p.dispatch(&args(line), &mut out).unwrap();
            assert_eq!(out.lines(), vec!["You stand there and sob."]);
        }
        assert_eq!(p.location(), RoomId(0));
    }

    #[test]
    fn move_through_an_exit_describes_new_room() {
        let p = player();
        let mut out = Output::new();
        p.dispatch(&args("move north"), &mut out).unwrap();

        assert_eq!(p.location(), RoomId(3));
        assert_eq!(
            out.lines(),
            vec![
                "The room doesn't make sense",
                "There is an exit to the east.",
                "There is an exit to the south.",
            ]
        );
    }

    #[test]
    fn move_into_a_wall() {
        let p = player();
        let mut out = Output::new();
        p.dispatch(&args("m west"), &mut out).unwrap();
        assert_eq!(p.location(), RoomId(0));
        assert_eq!(out.lines(), vec!["There's no path."]);
    }

    #[test]
    fn move_with_a_bad_direction() {
        let p = player();
        let mut out = Output::new();
        p.dispatch(&args("move up"), &mut out).unwrap();
        assert_eq!(p.location(), RoomId(0));
        assert_eq!(
            out.lines(),
            vec!["up is not a valid direction", "There's no path."]
        );
    }

    #[test]
    fn move_without_direction_is_an_error() {
        let p = player();
        let mut out = Output::new();
        let err = p.dispatch(&args("m"), &mut out).unwrap_err();
        assert_eq!(
            err,
            DispatchError::MissingArgument {
                verb: "m".to_string(),
                argument: "direction",
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn extra_tokens_after_direction_are_ignored() {
        let p = player();
        let mut out = Output::new();
        p.dispatch(&args("move east quickly"), &mut out).unwrap();
        assert_eq!(p.location(), RoomId(1));
    }

    #[test]
    fn dispatch_target_follows_the_player() {
        let p = player();
        assert_eq!(p.current_dispatch_target().id(), RoomId(0));
        p.travel("east", &mut Output::new());
        assert_eq!(p.current_dispatch_target().id(), RoomId(1));
    }

    #[test]
    fn unknown_verb_dies_at_the_room() {
        let p = player();
        let mut out = Output::new();
        assert_eq!(
            p.dispatch(&args("dance"), &mut out),
            Err(DispatchError::NoCommand("dance".to_string()))
        );
    }
}
