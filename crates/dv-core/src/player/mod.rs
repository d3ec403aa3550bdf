//! The player character

mod inventory;

pub use inventory::Inventory;

use serde::{Deserialize, Serialize};

use crate::config::PlayerConfig;
use crate::consts::{MAX_HEALTH, MAX_HUNGER};
use crate::dungeon::FoodKind;
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    /// 0..=100
    pub health: i32,
    pub gold: u32,
    /// 0 is full, 100 is starving
    pub hunger: i32,
    pub inventory: Inventory,
}

impl Player {
    pub fn new(position: Position, config: &PlayerConfig) -> Self {
        Self {
            position,
            health: MAX_HEALTH,
            gold: 0,
            hunger: 0,
            inventory: Inventory::new(config.max_food, config.max_weapons),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Lose health, clamped at 0; negative amounts are ignored
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount.max(0)).max(0);
        self.health
    }

    /// Gain health, clamped at the maximum
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.health = (self.health + amount).min(MAX_HEALTH);
        self.health
    }

    pub fn add_gold(&mut self, amount: u32) -> u32 {
        self.gold = self.gold.saturating_add(amount);
        self.gold
    }

    pub fn is_starving(&self) -> bool {
        self.hunger >= MAX_HUNGER
    }

    /// Grow one hunger step, clamped at the maximum
    pub fn grow_hungry(&mut self) -> i32 {
        self.hunger = (self.hunger + 1).min(MAX_HUNGER);
        self.hunger
    }

    /// Apply a food's healing and nutrition
    pub fn eat(&mut self, kind: FoodKind) {
        self.heal(kind.heal());
        self.hunger = (self.hunger - kind.nutrition()).max(0);
    }

    /// Damage dealt per hit with the current weapon
    pub fn attack_damage(&self, unarmed: i32) -> i32 {
        self.inventory
            .equipped_weapon()
            .map_or(unarmed, |w| w.damage())
    }
}
