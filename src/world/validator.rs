use super::map::Map;
use super::model::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

pub fn validate_map(map: &Map) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    // Rooms must not be empty
    if map.is_empty() {
        errors.push(ValidationError::new("map has no rooms"));
    }

    for room in map.rooms() {
        for direction in Direction::ALL {
            let Some(target) = room.neighbor(direction) else {
                continue;
            };

            // Every neighbor must exist
            let Some(other) = map.get(target.index()) else {
                errors.push(ValidationError::new(format!(
                    "room {} {} neighbor {} not found",
                    room.id(),
                    direction,
                    target
                )));
                continue;
            };

            // ...and point straight back
            if other.neighbor(direction.opposite()) != Some(room.id()) {
                errors.push(ValidationError::new(format!(
                    "room {} leads {} to room {}, but room {} does not lead {} back",
                    room.id(),
                    direction,
                    target,
                    target,
                    direction.opposite()
                )));
            }
        }
    }

    errors
}
