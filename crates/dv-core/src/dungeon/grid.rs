//! Fixed-size tile buffer

use serde::{Deserialize, Serialize};

use super::Tile;
use crate::position::Position;

/// Row-major 2-D tile storage
///
/// All access is bounds-checked: reads outside the map return `None` and
/// writes outside the map are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid filled with `Empty`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).map(|i| self.tiles[i])
    }

    /// Set a tile, returning false when out of bounds
    pub fn set(&mut self, pos: Position, tile: Tile) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Every position paired with its tile, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(i, &tile)| {
            (Position::from((i % width, i / width)), tile)
        })
    }

    /// Positions holding the given tile
    pub fn positions_of(&self, tile: Tile) -> Vec<Position> {
        self.iter()
            .filter(|&(_, t)| t == tile)
            .map(|(pos, _)| pos)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10, 5);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 5);
        assert!(grid.iter().all(|(_, t)| t == Tile::Empty));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(10, 5);
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.get(Position::new(10, 0)), None);
        assert_eq!(grid.get(Position::new(0, 5)), None);
        assert!(!grid.set(Position::new(0, 5), Tile::Floor));
    }

    #[test]
    fn test_set_get() {
        let mut grid = Grid::new(10, 5);
        let pos = Position::new(3, 4);
        assert!(grid.set(pos, Tile::Corridor));
        assert_eq!(grid.get(pos), Some(Tile::Corridor));
        assert_eq!(grid.positions_of(Tile::Corridor), vec![pos]);
    }
}
