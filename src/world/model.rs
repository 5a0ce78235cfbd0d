use std::fmt;

use crate::engine::{CommandTable, Controllable, Output};

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// One of the four ways out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Describe order: north, east, south, west.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Only the full lowercase words are directions.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "north" => Some(Direction::North),
            "east" => Some(Direction::East),
            "south" => Some(Direction::South),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a room in its map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub(crate) usize);

impl RoomId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct Room {
    id: RoomId,
    description: String,
    neighbors: [Option<RoomId>; 4],
    // Rooms answer no verbs yet; the chain ends here.
    commands: CommandTable<Room>,
}

impl Room {
    pub(crate) fn new(id: RoomId, description: impl Into<String>) -> Self {
        Room {
            id,
            description: description.into(),
            neighbors: [None; 4],
            commands: CommandTable::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn neighbor(&self, direction: Direction) -> Option<RoomId> {
        self.neighbors[direction.index()]
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, target: RoomId) {
        self.neighbors[direction.index()] = Some(target);
    }

    /// The description, then one exit line per present neighbor.
    pub fn describe(&self, out: &mut Output) {
        out.line(self.description.as_str());
        for direction in Direction::ALL {
            if self.neighbor(direction).is_some() {
                out.exit(direction);
            }
        }
    }

    /// Where a step in `direction` leads.
    ///
    /// Unknown words and walls both leave the player here.
    pub fn travel(&self, direction: &str, out: &mut Output) -> RoomId {
        match Direction::parse(direction) {
            Some(dir) => self.neighbor(dir).unwrap_or(self.id),
            None => {
                out.say(format!("{direction} is not a valid direction"));
                self.id
            }
        }
    }
}

impl Controllable for Room {
    fn commands(&self) -> &CommandTable<Self> {
        &self.commands
    }
}

/// Something a player could carry. Nothing creates these yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
}
