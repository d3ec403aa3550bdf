//! Dungeon map: tiles, rooms, corridors, pickups and fog-of-war

pub mod corridor;
pub mod generation;
mod grid;
pub mod resources;
mod room;
mod tile;
pub mod visibility;

pub use corridor::ConnectStrategy;
pub use generation::{Layout, generate_layout};
pub use grid::Grid;
pub use resources::place_resources;
pub use room::{Room, Side, room_at};
pub use tile::{FoodKind, Tile, WeaponKind};
pub use visibility::{VisibilitySet, mark_visited};
