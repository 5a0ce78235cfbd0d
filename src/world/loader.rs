use serde::Deserialize;

use super::map::{Map, RoomSpec};
use crate::error::MapError;

/// The built-in room table.
pub const STANDARD_MAP: &str = include_str!("standard_map.toml");

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct MapFile {
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RoomConfig {
    description: String,

    #[serde(default)]
    north: Option<usize>,

    #[serde(default)]
    east: Option<usize>,

    #[serde(default)]
    south: Option<usize>,

    #[serde(default)]
    west: Option<usize>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Parse a room table and build the map from it.
pub fn load_map_from_str(contents: &str) -> Result<Map, MapError> {
    let map_file: MapFile = toml::from_str(contents)?;

    let specs: Vec<RoomSpec> = map_file
        .room
        .into_iter()
        .map(|r| RoomSpec {
            description: normalize_desc(&r.description),
            north: r.north,
            east: r.east,
            south: r.south,
            west: r.west,
        })
        .collect();

    Map::from_specs(&specs)
}

/// The map every session plays on.
pub fn standard_map() -> Result<Map, MapError> {
    load_map_from_str(STANDARD_MAP)
}

/// Collapse runs of whitespace so multi-line TOML strings read as one line.
fn normalize_desc(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
