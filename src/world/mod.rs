mod loader;
mod map;
mod model;
mod validator;

pub use loader::{STANDARD_MAP, load_map_from_str, standard_map};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use map::{Map, RoomSpec};
pub use model::{Direction, Item, Room, RoomId};
pub use validator::{ValidationError, validate_map};
