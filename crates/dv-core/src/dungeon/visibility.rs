//! Fog-of-war
//!
//! The visible set is rebuilt from scratch every turn. Rooms stay lit once
//! visited, corridors show up next to anything lit, and the player always
//! sees the 3x3 square around them.

use super::room::Room;
use super::{Grid, Tile};
use crate::position::Position;

/// Cells currently shown to the player
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibilitySet {
    width: usize,
    height: usize,
    visible: Vec<bool>,
}

impl VisibilitySet {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            visible: vec![false; width * height],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.visible[i])
    }

    pub fn mark(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.visible[i] = true;
        }
    }

    pub fn clear(&mut self) {
        self.visible.fill(false);
    }

    pub fn count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    /// True if any of the eight cells around `pos` is visible
    pub fn any_neighbor_visible(&self, pos: Position) -> bool {
        pos.neighbors().any(|n| self.is_visible(n))
    }

    /// Rebuild the set for the current turn
    ///
    /// Corridors are tested in a single row-major pass against the set as it
    /// is being built, so a lit corridor cell can light the cells after it
    /// in scan order but never the ones before.
    pub fn recompute(&mut self, grid: &Grid, rooms: &[Room], player: Position) {
        if self.width != grid.width() || self.height != grid.height() {
            *self = Self::new(grid.width(), grid.height());
        }
        self.clear();

        for room in rooms.iter().filter(|r| r.visited) {
            for pos in room.cells() {
                self.mark(pos);
            }
        }

        for (pos, tile) in grid.iter() {
            if tile == Tile::Corridor && self.any_neighbor_visible(pos) {
                self.mark(pos);
            }
        }

        self.mark(player);
        for pos in player.neighbors() {
            self.mark(pos);
        }
    }
}

/// Mark the room containing `player` as visited
///
/// Returns the room index when this call made the transition.
pub fn mark_visited(rooms: &mut [Room], player: Position) -> Option<usize> {
    let (index, room) = rooms
        .iter_mut()
        .enumerate()
        .find(|(_, r)| r.contains(player))?;
    if room.visited {
        return None;
    }
    room.visited = true;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::corridor::carve_corridor;
    use crate::dungeon::generation::carve_room;

    fn two_rooms() -> (Grid, Vec<Room>) {
        let rooms = vec![Room::new(1, 1, 5, 5), Room::new(20, 1, 5, 5)];
        let mut grid = Grid::new(30, 10);
        for room in &rooms {
            carve_room(&mut grid, room, None);
        }
        carve_corridor(&mut grid, rooms[1].center(), rooms[0].center());
        (grid, rooms)
    }

    #[test]
    fn test_mark_visited_once() {
        let (_, mut rooms) = two_rooms();
        assert_eq!(mark_visited(&mut rooms, Position::new(3, 3)), Some(0));
        assert!(rooms[0].visited);
        assert_eq!(mark_visited(&mut rooms, Position::new(3, 3)), None);
        assert_eq!(mark_visited(&mut rooms, Position::new(10, 3)), None);
        // Walls count as inside
        assert_eq!(mark_visited(&mut rooms, Position::new(20, 1)), Some(1));
    }

    #[test]
    fn test_player_square_only() {
        let (grid, rooms) = two_rooms();
        let mut vis = VisibilitySet::new(grid.width(), grid.height());
        vis.recompute(&grid, &rooms, Position::new(12, 3));
        assert_eq!(vis.count(), 9);
        assert!(vis.is_visible(Position::new(11, 2)));
        assert!(vis.is_visible(Position::new(13, 4)));
        assert!(!vis.is_visible(Position::new(14, 3)));
    }

    #[test]
    fn test_visited_room_and_adjacent_corridor() {
        let (grid, mut rooms) = two_rooms();
        let player = Position::new(3, 3);
        mark_visited(&mut rooms, player);

        let mut vis = VisibilitySet::new(grid.width(), grid.height());
        vis.recompute(&grid, &rooms, player);

        for pos in rooms[0].cells() {
            assert!(vis.is_visible(pos));
        }
        // The scan runs east along row 3 from the door of room 0
        for x in 6..20 {
            assert!(vis.is_visible(Position::new(x, 3)), "x = {x}");
        }
        assert!(!vis.is_visible(rooms[1].center()));
    }

    #[test]
    fn test_corridor_scan_does_not_run_backwards() {
        let (grid, mut rooms) = two_rooms();
        let player = Position::new(22, 3);
        mark_visited(&mut rooms, player);

        let mut vis = VisibilitySet::new(grid.width(), grid.height());
        vis.recompute(&grid, &rooms, player);

        // Only the cell touching room 1 is lit; earlier cells were scanned first
        assert!(vis.is_visible(Position::new(19, 3)));
        assert!(!vis.is_visible(Position::new(18, 3)));
        assert!(!vis.is_visible(Position::new(6, 3)));
    }

    #[test]
    fn test_corner_player_out_of_bounds_ignored() {
        let grid = Grid::new(10, 10);
        let mut vis = VisibilitySet::new(10, 10);
        vis.recompute(&grid, &[], Position::new(0, 0));
        assert_eq!(vis.count(), 4);
        assert!(!vis.is_visible(Position::new(-1, -1)));
    }
}
