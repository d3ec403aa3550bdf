//! Capacity-bounded enemy collection

use serde::{Deserialize, Serialize};

use super::{Enemy, EnemyId, EnemyType};
use crate::position::Position;

/// Every living enemy in the dungeon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    enemies: Vec<Enemy>,
    capacity: usize,
    next_id: EnemyId,
}

impl Roster {
    pub fn new(capacity: usize) -> Self {
        Self {
            enemies: Vec::new(),
            capacity,
            next_id: EnemyId(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.enemies.len() >= self.capacity
    }

    /// Add an enemy, or `None` when the roster is full
    pub fn spawn(&mut self, kind: EnemyType, position: Position, home_room: usize) -> Option<EnemyId> {
        if self.is_full() {
            return None;
        }
        let id = self.next_id;
        self.next_id = id.next();
        self.enemies.push(Enemy::new(id, kind, position, home_room));
        Some(id)
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn remove(&mut self, id: EnemyId) -> Option<Enemy> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(idx))
    }

    /// Enemy standing on `pos`, ignoring `except`
    pub fn enemy_at(&self, pos: Position, except: Option<EnemyId>) -> Option<&Enemy> {
        self.enemies
            .iter()
            .find(|e| e.position == pos && Some(e.id) != except)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Enemy> {
        self.enemies.iter_mut()
    }

    pub fn active(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.active)
    }

    pub fn ids(&self) -> Vec<EnemyId> {
        self.enemies.iter().map(|e| e.id).collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(crate::consts::MAX_ENEMIES)
    }
}
