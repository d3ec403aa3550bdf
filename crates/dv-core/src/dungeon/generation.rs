//! Room placement, carving and decoration
//!
//! Produces the static layout of a dungeon: rooms, walls, doors, windows,
//! pillars and connecting corridors. Pickups and enemies are added on top by
//! the resource and spawn passes.

use serde::{Deserialize, Serialize};

use super::corridor::{connect_rooms, unreachable_passages};
use super::room::{Room, Side};
use super::{Grid, Tile};
use crate::config::{DungeonConfig, RoomConfig};
use crate::consts::{ROOM_MAX_HEIGHT, ROOM_MAX_WIDTH, ROOM_MIN_HEIGHT, ROOM_MIN_WIDTH};
use crate::error::GenerationError;
use crate::position::Position;
use crate::rng::GameRng;

/// A carved and connected map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub grid: Grid,
    pub rooms: Vec<Room>,
}

/// Rejection-sample rooms into a `width` x `height` map
///
/// Every sample counts against `max_attempts`, accepted or not. Returns as
/// many rooms as were placed, which may be fewer than `target`.
pub fn place_rooms(
    width: usize,
    height: usize,
    target: usize,
    max_attempts: u32,
    rng: &mut GameRng,
) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::with_capacity(target);

    // Keep a one-cell margin around the map edge
    let max_w = ROOM_MAX_WIDTH.min(width.saturating_sub(2));
    let max_h = ROOM_MAX_HEIGHT.min(height.saturating_sub(2));
    if max_w < ROOM_MIN_WIDTH || max_h < ROOM_MIN_HEIGHT {
        return rooms;
    }

    for _ in 0..max_attempts {
        if rooms.len() >= target {
            break;
        }

        let w = rng.range_inclusive(ROOM_MIN_WIDTH, max_w);
        let h = rng.range_inclusive(ROOM_MIN_HEIGHT, max_h);
        let x = 1 + rng.rn2((width - w - 1) as u32) as usize;
        let y = 1 + rng.rn2((height - h - 1) as u32) as usize;

        let room = Room::new(x, y, w, h);
        if rooms.iter().any(|r| room.overlaps(r, 1)) {
            continue;
        }
        rooms.push(room);
    }

    rooms
}

/// Pick the generated door: a uniform side, then a uniform non-corner cell
pub fn pick_door(room: &Room, rng: &mut GameRng) -> Option<Position> {
    let side = *rng.choose(&Side::ALL)?;
    rng.choose(&room.side_cells(side)).copied()
}

/// Carve floor, walls and an optional door
///
/// Top and bottom rows, corners included, become `WallH`; the remaining
/// left and right column cells become `WallV`.
pub fn carve_room(grid: &mut Grid, room: &Room, door: Option<Position>) {
    for pos in room.cells() {
        let top = pos.y == room.y as i32;
        let bottom = pos.y == (room.y + room.height - 1) as i32;
        let left = pos.x == room.x as i32;
        let right = pos.x == (room.x + room.width - 1) as i32;

        let tile = if top || bottom {
            Tile::WallH
        } else if left || right {
            Tile::WallV
        } else {
            Tile::Floor
        };
        grid.set(pos, tile);
    }

    if let Some(door) = door {
        grid.set(door, Tile::Door);
    }
}

fn touches_door(grid: &Grid, pos: Position) -> bool {
    [(1, 0), (-1, 0), (0, 1), (0, -1)]
        .into_iter()
        .any(|(dx, dy)| grid.get(pos.offset(dx, dy)) == Some(Tile::Door))
}

/// Maybe add a pillar and a window to a carved and connected room
///
/// Pillars need an interior of at least 3x3 and avoid the centre and every
/// cell next to a door, so the rest of the interior stays one connected
/// floor. Windows replace a non-corner wall cell.
pub fn decorate_room(grid: &mut Grid, room: &Room, config: &RoomConfig, rng: &mut GameRng) {
    if config.pillar_one_in > 0
        && room.interior_width() >= 3
        && room.interior_height() >= 3
        && rng.one_in(config.pillar_one_in)
    {
        let center = room.center();
        let cells: Vec<Position> = room
            .interior()
            .filter(|&p| p != center && !touches_door(grid, p))
            .collect();
        if let Some(&pos) = rng.choose(&cells) {
            grid.set(pos, Tile::Pillar);
        }
    }

    if config.window_one_in > 0 && rng.one_in(config.window_one_in) {
        let walls: Vec<Position> = Side::ALL
            .iter()
            .flat_map(|&side| room.side_cells(side))
            .filter(|&p| grid.get(p).is_some_and(|t| t != Tile::Door))
            .collect();
        if let Some(&pos) = rng.choose(&walls) {
            grid.set(pos, Tile::Window);
        }
    }
}

/// Generate the full layout: place, carve, connect and decorate rooms
pub fn generate_layout(
    config: &DungeonConfig,
    rng: &mut GameRng,
) -> Result<Layout, GenerationError> {
    config.validate()?;
    let (width, height) = (config.map.width, config.map.height);

    let rooms = place_rooms(
        width,
        height,
        config.rooms.target,
        config.rooms.max_attempts,
        rng,
    );
    if rooms.len() < config.rooms.min_rooms {
        return Err(GenerationError::TooFewRooms {
            placed: rooms.len(),
            required: config.rooms.min_rooms,
        });
    }
    tracing::debug!(rooms = rooms.len(), "rooms placed");

    let mut grid = Grid::new(width, height);
    for room in &rooms {
        let door = pick_door(room, rng);
        carve_room(&mut grid, room, door);
    }

    let joined = connect_rooms(&mut grid, &rooms, config.rooms.connection);
    tracing::debug!(
        corridors = joined.len(),
        strategy = ?config.rooms.connection,
        "rooms connected"
    );

    // Corridors only turn walls into doors, so decorating last keeps every
    // door next to open floor
    for room in &rooms {
        decorate_room(&mut grid, room, &config.rooms, rng);
    }

    if let Some(first) = rooms.first() {
        let stranded = unreachable_passages(&grid, first.center());
        if !stranded.is_empty() {
            tracing::warn!(cells = stranded.len(), "unreachable passage cells");
        }
    }

    Ok(Layout { grid, rooms })
}
