//! Dungeon configuration
//!
//! Every field has a default, so a partial TOML file only needs to name the
//! values it changes:
//!
//! ```toml
//! [map]
//! width = 60
//!
//! [rooms]
//! connection = "chain"
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::dungeon::ConnectStrategy;
use crate::error::ConfigError;
use crate::monster::ChaseRefresh;

/// Complete configuration for one dungeon session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub map: MapConfig,
    pub rooms: RoomConfig,
    pub resources: ResourceConfig,
    pub enemies: EnemyConfig,
    pub player: PlayerConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
        }
    }
}

/// Room placement, connection and decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Rooms the generator tries to place
    pub target: usize,
    /// Fewer placed rooms than this fails generation
    pub min_rooms: usize,
    /// Placement samples, accepted or rejected
    pub max_attempts: u32,
    pub connection: ConnectStrategy,
    /// 1-in-N chance of a pillar per room; 0 disables
    pub pillar_one_in: u32,
    /// 1-in-N chance of a window per room; 0 disables
    pub window_one_in: u32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            target: MAX_ROOMS,
            min_rooms: MIN_ROOMS,
            max_attempts: ROOM_PLACEMENT_ATTEMPTS,
            connection: ConnectStrategy::default(),
            pillar_one_in: 3,
            window_one_in: 2,
        }
    }
}

/// Pickup quotas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub gold_low: u32,
    pub gold_high: u32,
    pub food: u32,
    pub weapons: u32,
    /// Samples allowed per item before giving up
    pub max_retries: u32,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            gold_low: GOLD_LOW_COUNT,
            gold_high: GOLD_HIGH_COUNT,
            food: FOOD_COUNT,
            weapons: WEAPON_COUNT,
            max_retries: RESOURCE_PLACEMENT_RETRIES,
        }
    }
}

impl ResourceConfig {
    pub fn total(&self) -> u64 {
        u64::from(self.gold_low)
            + u64::from(self.gold_high)
            + u64::from(self.food)
            + u64::from(self.weapons)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Roster capacity
    pub capacity: usize,
    /// Per-room spawn chance in percent
    pub spawn_percent: u32,
    pub counter_damage: i32,
    pub chase_refresh: ChaseRefresh,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            capacity: MAX_ENEMIES,
            spawn_percent: ENEMY_SPAWN_PERCENT,
            counter_damage: COUNTER_DAMAGE,
            chase_refresh: ChaseRefresh::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_food: usize,
    pub max_weapons: usize,
    pub unarmed_damage: i32,
    /// Resolved turns between hunger increments
    pub hunger_interval: u32,
    pub starvation_damage: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_food: MAX_FOOD_ITEMS,
            max_weapons: MAX_WEAPON_ITEMS,
            unarmed_damage: UNARMED_DAMAGE,
            hunger_interval: HUNGER_INTERVAL,
            starvation_damage: STARVATION_DAMAGE,
        }
    }
}

impl DungeonConfig {
    /// Check that the configuration can drive a generator and a session
    pub fn validate(&self) -> Result<(), ConfigError> {
        let MapConfig { width, height } = self.map;
        if width < MIN_MAP_DIMENSION || height < MIN_MAP_DIMENSION {
            return Err(ConfigError::MapTooSmall {
                width,
                height,
                min: MIN_MAP_DIMENSION,
            });
        }

        let rooms = &self.rooms;
        if rooms.min_rooms == 0 || rooms.target < rooms.min_rooms {
            return Err(ConfigError::RoomCount {
                min_rooms: rooms.min_rooms,
                target: rooms.target,
            });
        }
        if rooms.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }

        if self.resources.max_retries == 0 && self.resources.total() > 0 {
            return Err(ConfigError::Zero {
                field: "resources.max_retries",
            });
        }

        if self.enemies.spawn_percent > 100 {
            return Err(ConfigError::OutOfRange {
                field: "enemies.spawn_percent",
                value: self.enemies.spawn_percent,
                max: 100,
            });
        }

        for (field, value) in [
            ("enemies.counter_damage", self.enemies.counter_damage),
            ("player.unarmed_damage", self.player.unarmed_damage),
            ("player.starvation_damage", self.player.starvation_damage),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.player.hunger_interval == 0 {
            return Err(ConfigError::Zero {
                field: "player.hunger_interval",
            });
        }

        Ok(())
    }
}
