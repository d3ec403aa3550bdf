//! Rectangular rooms
//!
//! A room's rectangle includes its perimeter walls. `x`/`y` is the top-left
//! wall corner.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Which wall a door sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    /// One-way: set when the player first enters
    pub visited: bool,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            visited: false,
        }
    }

    /// Check if this room overlaps with another (with buffer)
    pub fn overlaps(&self, other: &Room, buffer: usize) -> bool {
        let x1 = self.x.saturating_sub(buffer);
        let y1 = self.y.saturating_sub(buffer);
        let x2 = self.x + self.width + buffer;
        let y2 = self.y + self.height + buffer;

        let ox1 = other.x.saturating_sub(buffer);
        let oy1 = other.y.saturating_sub(buffer);
        let ox2 = other.x + other.width + buffer;
        let oy2 = other.y + other.height + buffer;

        !(x2 <= ox1 || x1 >= ox2 || y2 <= oy1 || y1 >= oy2)
    }

    pub fn center(&self) -> Position {
        Position::from((self.x + self.width / 2, self.y + self.height / 2))
    }

    /// Check if point is inside the room, walls included
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x as i32
            && pos.y >= self.y as i32
            && pos.x < (self.x + self.width) as i32
            && pos.y < (self.y + self.height) as i32
    }

    /// Check if point is strictly inside the walls
    pub fn contains_interior(&self, pos: Position) -> bool {
        pos.x > self.x as i32
            && pos.y > self.y as i32
            && pos.x < (self.x + self.width - 1) as i32
            && pos.y < (self.y + self.height - 1) as i32
    }

    pub fn interior_width(&self) -> usize {
        self.width.saturating_sub(2)
    }

    pub fn interior_height(&self) -> usize {
        self.height.saturating_sub(2)
    }

    /// All cells, walls included
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.y + self.height)
            .flat_map(move |y| (self.x..self.x + self.width).map(move |x| Position::from((x, y))))
    }

    /// Cells strictly inside the walls
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells().filter(move |&p| self.contains_interior(p))
    }

    pub fn is_corner(&self, pos: Position) -> bool {
        let left = self.x as i32;
        let right = (self.x + self.width - 1) as i32;
        let top = self.y as i32;
        let bottom = (self.y + self.height - 1) as i32;
        (pos.x == left || pos.x == right) && (pos.y == top || pos.y == bottom)
    }

    /// Wall cells on a side, corners excluded
    pub fn side_cells(&self, side: Side) -> Vec<Position> {
        let right = self.x + self.width - 1;
        let bottom = self.y + self.height - 1;
        match side {
            Side::Top => (self.x + 1..right).map(|x| Position::from((x, self.y))).collect(),
            Side::Bottom => (self.x + 1..right).map(|x| Position::from((x, bottom))).collect(),
            Side::Left => (self.y + 1..bottom).map(|y| Position::from((self.x, y))).collect(),
            Side::Right => (self.y + 1..bottom).map(|y| Position::from((right, y))).collect(),
        }
    }
}

/// Index of the room containing `pos`, walls included
pub fn room_at(rooms: &[Room], pos: Position) -> Option<usize> {
    rooms.iter().position(|r| r.contains(pos))
}
