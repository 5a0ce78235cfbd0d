use log::{debug, trace};

use super::model::{Direction, Room, RoomId};
use super::validator::validate_map;
use crate::error::MapError;

/// One row of a room table: a description and neighbor ids, which are
/// positions in the same table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSpec {
    pub description: String,
    pub north: Option<usize>,
    pub east: Option<usize>,
    pub south: Option<usize>,
    pub west: Option<usize>,
}

impl RoomSpec {
    pub fn new(
        description: impl Into<String>,
        north: Option<usize>,
        east: Option<usize>,
        south: Option<usize>,
        west: Option<usize>,
    ) -> Self {
        RoomSpec {
            description: description.into(),
            north,
            east,
            south,
            west,
        }
    }

    fn links(&self) -> [(Direction, Option<usize>); 4] {
        [
            (Direction::North, self.north),
            (Direction::East, self.east),
            (Direction::South, self.south),
            (Direction::West, self.west),
        ]
    }
}

/// The fixed room graph. Rooms live here for the whole session and refer to
/// each other by [`RoomId`].
pub struct Map {
    rooms: Vec<Room>,
}

impl Map {
    /// Allocate every room, then wire each declared link together with its
    /// back-link, then check the graph once.
    pub fn from_specs(specs: &[RoomSpec]) -> Result<Map, MapError> {
        if specs.is_empty() {
            return Err(MapError::Empty);
        }

        let mut rooms: Vec<Room> = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| Room::new(RoomId(i), spec.description.clone()))
            .collect();

        for (i, spec) in specs.iter().enumerate() {
            for (direction, target) in spec.links() {
                let Some(target) = target else { continue };
                if target >= rooms.len() {
                    return Err(MapError::UnknownRoom {
                        room: i,
                        direction: direction.name(),
                        target,
                    });
                }
                link(&mut rooms, i, direction, target)?;
                link(&mut rooms, target, direction.opposite(), i)?;
                trace!("linked room {i} {direction} to room {target}");
            }
        }

        let map = Map { rooms };
        let errors = validate_map(&map);
        if !errors.is_empty() {
            return Err(MapError::Invalid(errors));
        }

        debug!("built map with {} rooms", map.rooms.len());
        Ok(map)
    }

    /// The first room built.
    pub fn starting_room(&self) -> &Room {
        &self.rooms[0]
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn get(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_rooms_unchecked(rooms: Vec<Room>) -> Map {
        Map { rooms }
    }
}

fn link(
    rooms: &mut [Room],
    from: usize,
    direction: Direction,
    to: usize,
) -> Result<(), MapError> {
    let room = &mut rooms[from];
    match room.neighbor(direction) {
        Some(existing) if existing.index() != to => Err(MapError::ConflictingLink {
            room: from,
            direction: direction.name(),
            existing: existing.index(),
            requested: to,
        }),
        _ => {
            room.set_neighbor(direction, RoomId(to));
            Ok(())
        }
    }
}
