//! Tile kinds and pickup catalogs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::*;

/// Weapons found lying in the dungeon
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum WeaponKind {
    Mace,
    Dagger,
    Wand,
    Arrow,
    Sword,
}

impl WeaponKind {
    pub const fn damage(self) -> i32 {
        match self {
            WeaponKind::Mace => 10,
            WeaponKind::Dagger => 5,
            WeaponKind::Wand => 8,
            WeaponKind::Arrow => 7,
            WeaponKind::Sword => 12,
        }
    }

    pub const fn icon(self) -> char {
        match self {
            WeaponKind::Mace => 'M',
            WeaponKind::Dagger => 'D',
            WeaponKind::Wand => 'W',
            WeaponKind::Arrow => 'A',
            WeaponKind::Sword => 'S',
        }
    }
}

/// Food quality
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum FoodKind {
    Common,
    Superior,
    Magic,
    Corrupted,
}

impl FoodKind {
    /// Health restored when eaten
    pub const fn heal(self) -> i32 {
        match self {
            FoodKind::Common => 10,
            FoodKind::Superior => 20,
            FoodKind::Magic => 30,
            FoodKind::Corrupted => 5,
        }
    }

    /// Hunger removed when eaten
    pub const fn nutrition(self) -> i32 {
        match self {
            FoodKind::Common => 20,
            FoodKind::Superior => 30,
            FoodKind::Magic => 40,
            FoodKind::Corrupted => 0,
        }
    }

    /// Relative placement weight, out of 100
    pub const fn weight(self) -> u32 {
        match self {
            FoodKind::Common => 70,
            FoodKind::Superior => 15,
            FoodKind::Magic => 5,
            FoodKind::Corrupted => 10,
        }
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Floor,
    WallH,
    WallV,
    Door,
    Corridor,
    Pillar,
    Window,
    GoldLow,
    GoldHigh,
    Food(FoodKind),
    Weapon(WeaponKind),
}

impl Tile {
    /// Display character
    pub const fn symbol(self) -> char {
        match self {
            Tile::Empty => S_EMPTY,
            Tile::Floor => S_FLOOR,
            Tile::WallH => S_HWALL,
            Tile::WallV => S_VWALL,
            Tile::Door => S_DOOR,
            Tile::Corridor => S_CORRIDOR,
            Tile::Pillar => S_PILLAR,
            Tile::Window => S_WINDOW,
            Tile::GoldLow => S_GOLD_LOW,
            Tile::GoldHigh => S_GOLD_HIGH,
            Tile::Food(_) => S_FOOD,
            Tile::Weapon(kind) => kind.icon(),
        }
    }

    /// Whether the player may stand here
    pub const fn is_walkable(self) -> bool {
        !matches!(
            self,
            Tile::Empty | Tile::WallH | Tile::WallV | Tile::Window
        )
    }

    /// Whether an enemy may step here
    ///
    /// Enemies never walk onto food or weapons.
    pub const fn is_enemy_walkable(self) -> bool {
        matches!(
            self,
            Tile::Floor
                | Tile::Corridor
                | Tile::Door
                | Tile::Pillar
                | Tile::GoldLow
                | Tile::GoldHigh
        )
    }

    /// Room boundary a corridor converts into a door
    pub const fn is_wall(self) -> bool {
        matches!(self, Tile::WallH | Tile::WallV | Tile::Window)
    }

    /// Gold value if this is a gold pile
    pub const fn gold_value(self) -> Option<u32> {
        match self {
            Tile::GoldLow => Some(GOLD_LOW_VALUE),
            Tile::GoldHigh => Some(GOLD_HIGH_VALUE),
            _ => None,
        }
    }

    /// Whether this cell counts toward the connectivity invariant
    pub const fn is_passage(self) -> bool {
        matches!(self, Tile::Floor | Tile::Door | Tile::Corridor)
    }
}
