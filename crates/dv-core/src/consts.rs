//! Core game constants
//!
//! Defaults for map size, room generation, resources and the player.

/// Map dimensions
pub const MAP_WIDTH: usize = 80;
pub const MAP_HEIGHT: usize = 24;

/// Smallest map the room generator accepts
pub const MIN_MAP_DIMENSION: usize = 9;

/// Room limits
pub const MIN_ROOMS: usize = 6;
pub const MAX_ROOMS: usize = 10;
pub const ROOM_PLACEMENT_ATTEMPTS: u32 = 200;

/// Room dimensions, perimeter walls included
pub const ROOM_MIN_WIDTH: usize = 4;
pub const ROOM_MAX_WIDTH: usize = 10;
pub const ROOM_MIN_HEIGHT: usize = 4;
pub const ROOM_MAX_HEIGHT: usize = 8;

/// Resource quotas
pub const GOLD_LOW_COUNT: u32 = 20;
pub const GOLD_HIGH_COUNT: u32 = 5;
pub const FOOD_COUNT: u32 = 10;
pub const WEAPON_COUNT: u32 = 5;
pub const RESOURCE_PLACEMENT_RETRIES: u32 = 1000;

/// Gold values
pub const GOLD_LOW_VALUE: u32 = 10;
pub const GOLD_HIGH_VALUE: u32 = 50;

/// Enemy roster limits
pub const MAX_ENEMIES: usize = 20;
pub const ENEMY_SPAWN_PERCENT: u32 = 50;
pub const COUNTER_DAMAGE: i32 = 2;

/// Player limits
pub const MAX_HEALTH: i32 = 100;
pub const MAX_HUNGER: i32 = 100;
pub const MAX_FOOD_ITEMS: usize = 5;
pub const MAX_WEAPON_ITEMS: usize = 10;
pub const UNARMED_DAMAGE: i32 = 1;
pub const HUNGER_INTERVAL: u32 = 10;
pub const STARVATION_DAMAGE: i32 = 1;

/// Map symbols
pub const S_EMPTY: char = ' ';
pub const S_FLOOR: char = '.';
pub const S_HWALL: char = '-';
pub const S_VWALL: char = '|';
pub const S_DOOR: char = '+';
pub const S_CORRIDOR: char = '#';
pub const S_PILLAR: char = 'O';
pub const S_WINDOW: char = '=';
pub const S_GOLD_LOW: char = '$';
pub const S_GOLD_HIGH: char = '%';
pub const S_FOOD: char = 'F';
pub const S_PLAYER: char = '@';
