//! Corridor generation
//!
//! Every room after the first is joined to exactly one earlier room by an
//! L-shaped path between the two centres, so the rooms form a tree rooted at
//! room 0 and the whole map is reachable from the player's spawn.

use serde::{Deserialize, Serialize};

use super::room::Room;
use super::{Grid, Tile};
use crate::position::Position;

/// How each room picks the earlier room it connects to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectStrategy {
    /// Room i joins room i-1
    Chain,
    /// Room i joins the earlier room with the closest centre
    #[default]
    Nearest,
}

/// Earlier room closest to `rooms[index]`, ties to the lowest index
///
/// Returns `None` for room 0.
pub fn nearest_earlier_room(rooms: &[Room], index: usize) -> Option<usize> {
    let center = rooms.get(index)?.center();
    rooms[..index]
        .iter()
        .enumerate()
        .min_by_key(|(i, r)| (r.center().distance_sq(center), *i))
        .map(|(i, _)| i)
}

/// Carve one corridor cell
///
/// Empty becomes corridor, room boundaries become doors, anything already
/// walkable is left alone.
fn carve_cell(grid: &mut Grid, pos: Position) {
    match grid.get(pos) {
        Some(Tile::Empty) => {
            grid.set(pos, Tile::Corridor);
        }
        Some(tile) if tile.is_wall() => {
            grid.set(pos, Tile::Door);
        }
        _ => {}
    }
}

/// Dig an L-shaped corridor: along `from`'s row to `to`'s column, then along
/// that column to `to`'s row
pub fn carve_corridor(grid: &mut Grid, from: Position, to: Position) {
    let (x1, x2) = (from.x.min(to.x), from.x.max(to.x));
    for x in x1..=x2 {
        carve_cell(grid, Position::new(x, from.y));
    }

    let (y1, y2) = (from.y.min(to.y), from.y.max(to.y));
    for y in y1..=y2 {
        carve_cell(grid, Position::new(to.x, y));
    }
}

/// Connect every room to an earlier one
///
/// Returns the `(room, target)` pairs that were joined.
pub fn connect_rooms(
    grid: &mut Grid,
    rooms: &[Room],
    strategy: ConnectStrategy,
) -> Vec<(usize, usize)> {
    let mut joined = Vec::with_capacity(rooms.len().saturating_sub(1));

    for i in 1..rooms.len() {
        let target = match strategy {
            ConnectStrategy::Chain => Some(i - 1),
            ConnectStrategy::Nearest => nearest_earlier_room(rooms, i),
        };
        let Some(target) = target else {
            continue;
        };

        carve_corridor(grid, rooms[i].center(), rooms[target].center());
        tracing::trace!(room = i, target, "corridor carved");
        joined.push((i, target));
    }

    joined
}

fn is_passage_at(grid: &Grid, pos: Position) -> bool {
    grid.get(pos).is_some_and(|t| t.is_passage())
}

/// Cells reachable from `start` by orthogonal steps over floor, door and
/// corridor tiles
///
/// Pillars and pickups do not count as passages. Returns a row-major mask
/// the size of the grid.
pub fn reachable_from(grid: &Grid, start: Position) -> Vec<bool> {
    let width = grid.width();
    let mut seen = vec![false; width * grid.height()];
    if !is_passage_at(grid, start) {
        return seen;
    }

    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        if !is_passage_at(grid, pos) {
            continue;
        }
        let idx = pos.y as usize * width + pos.x as usize;
        if seen[idx] {
            continue;
        }
        seen[idx] = true;

        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            stack.push(pos.offset(dx, dy));
        }
    }

    seen
}

/// Passage cells (floor, door, corridor) that cannot be reached from `start`
pub fn unreachable_passages(grid: &Grid, start: Position) -> Vec<Position> {
    let seen = reachable_from(grid, start);
    let width = grid.width();
    grid.iter()
        .filter(|&(pos, tile)| {
            tile.is_passage() && !seen[pos.y as usize * width + pos.x as usize]
        })
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::generation::carve_room;

    fn carved(rooms: &[Room]) -> Grid {
        let mut grid = Grid::new(60, 20);
        for room in rooms {
            carve_room(&mut grid, room, None);
        }
        grid
    }

    #[test]
    fn test_nearest_earlier_room() {
        let rooms = vec![
            Room::new(1, 1, 5, 5),
            Room::new(40, 1, 5, 5),
            Room::new(10, 1, 5, 5),
        ];
        assert_eq!(nearest_earlier_room(&rooms, 0), None);
        assert_eq!(nearest_earlier_room(&rooms, 1), Some(0));
        assert_eq!(nearest_earlier_room(&rooms, 2), Some(0));
    }

    #[test]
    fn test_nearest_tie_goes_to_lowest_index() {
        let rooms = vec![
            Room::new(1, 1, 5, 5),
            Room::new(21, 1, 5, 5),
            Room::new(11, 1, 5, 5),
        ];
        // Room 2 is equidistant from rooms 0 and 1
        assert_eq!(nearest_earlier_room(&rooms, 2), Some(0));
    }

    #[test]
    fn test_carve_corridor_shape() {
        let mut grid = Grid::new(20, 10);
        carve_corridor(&mut grid, Position::new(2, 2), Position::new(8, 6));

        for x in 2..=8 {
            assert_eq!(grid.get(Position::new(x, 2)), Some(Tile::Corridor));
        }
        for y in 2..=6 {
            assert_eq!(grid.get(Position::new(8, y)), Some(Tile::Corridor));
        }
        // Nothing dug at the source column below the row
        assert_eq!(grid.get(Position::new(2, 3)), Some(Tile::Empty));
    }

    #[test]
    fn test_corridor_converts_walls_and_keeps_floor() {
        let rooms = vec![Room::new(1, 1, 6, 5), Room::new(20, 1, 6, 5)];
        let mut grid = carved(&rooms);
        grid.set(Position::new(6, 3), Tile::Window);

        connect_rooms(&mut grid, &rooms, ConnectStrategy::Chain);

        // Right wall of room 0 and left wall of room 1 on row 3
        assert_eq!(grid.get(Position::new(6, 3)), Some(Tile::Door));
        assert_eq!(grid.get(Position::new(20, 3)), Some(Tile::Door));
        assert_eq!(grid.get(Position::new(4, 3)), Some(Tile::Floor));
        assert_eq!(grid.get(Position::new(10, 3)), Some(Tile::Corridor));
    }

    #[test]
    fn test_connect_rooms_reaches_everything() {
        let rooms = vec![
            Room::new(1, 1, 6, 5),
            Room::new(30, 2, 5, 6),
            Room::new(12, 12, 7, 5),
            Room::new(45, 10, 8, 6),
        ];
        for strategy in [ConnectStrategy::Chain, ConnectStrategy::Nearest] {
            let mut grid = carved(&rooms);
            let joined = connect_rooms(&mut grid, &rooms, strategy);
            assert_eq!(joined.len(), rooms.len() - 1);
            assert!(unreachable_passages(&grid, rooms[0].center()).is_empty());
        }
    }

    #[test]
    fn test_pillar_blocks_reachability() {
        let rooms = vec![Room::new(1, 1, 6, 5), Room::new(20, 1, 6, 5)];
        let mut grid = carved(&rooms);
        connect_rooms(&mut grid, &rooms, ConnectStrategy::Chain);
        assert!(unreachable_passages(&grid, rooms[0].center()).is_empty());

        // Walls off the corridor where it leaves room 0
        grid.set(Position::new(5, 3), Tile::Pillar);
        let stranded = unreachable_passages(&grid, rooms[0].center());
        assert!(stranded.contains(&Position::new(6, 3)));
        assert!(stranded.contains(&rooms[1].center()));
    }

    #[test]
    fn test_unconnected_rooms_detected() {
        let rooms = vec![Room::new(1, 1, 6, 5), Room::new(30, 2, 5, 6)];
        let grid = carved(&rooms);
        assert!(!unreachable_passages(&grid, rooms[0].center()).is_empty());
    }
}
