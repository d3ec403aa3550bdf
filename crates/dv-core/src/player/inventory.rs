//! Bounded food and weapon storage

use serde::{Deserialize, Serialize};

use crate::dungeon::{FoodKind, WeaponKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    food: Vec<FoodKind>,
    weapons: Vec<WeaponKind>,
    max_food: usize,
    max_weapons: usize,
    /// Index into `weapons`
    equipped: Option<usize>,
}

impl Inventory {
    pub fn new(max_food: usize, max_weapons: usize) -> Self {
        Self {
            food: Vec::with_capacity(max_food),
            weapons: Vec::with_capacity(max_weapons),
            max_food,
            max_weapons,
            equipped: None,
        }
    }

    pub fn food(&self) -> &[FoodKind] {
        &self.food
    }

    pub fn weapons(&self) -> &[WeaponKind] {
        &self.weapons
    }

    pub fn equipped_index(&self) -> Option<usize> {
        self.equipped
    }

    pub fn equipped_weapon(&self) -> Option<WeaponKind> {
        self.equipped.and_then(|i| self.weapons.get(i).copied())
    }

    /// Store food, returning false when there is no room
    pub fn add_food(&mut self, kind: FoodKind) -> bool {
        if self.food.len() >= self.max_food {
            return false;
        }
        self.food.push(kind);
        true
    }

    /// Store a weapon
    ///
    /// Returns `None` when full, otherwise whether the weapon was equipped
    /// because nothing else was.
    pub fn add_weapon(&mut self, kind: WeaponKind) -> Option<bool> {
        if self.weapons.len() >= self.max_weapons {
            return None;
        }
        self.weapons.push(kind);
        if self.equipped.is_none() {
            self.equipped = Some(self.weapons.len() - 1);
            return Some(true);
        }
        Some(false)
    }

    /// Remove and return the food at `index`
    pub fn take_food(&mut self, index: usize) -> Option<FoodKind> {
        (index < self.food.len()).then(|| self.food.remove(index))
    }

    /// Equip the weapon at `index`
    pub fn equip(&mut self, index: usize) -> Option<WeaponKind> {
        let kind = *self.weapons.get(index)?;
        self.equipped = Some(index);
        Some(kind)
    }
}
