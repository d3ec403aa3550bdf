//! Enemy types and per-instance state

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::position::Position;

/// Unique identifier for enemy instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl EnemyId {
    pub fn next(self) -> Self {
        EnemyId(self.0 + 1)
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How far an enemy will pursue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaseBudget {
    /// Zero budget; pursuit is not limited
    Unrestricted,
    /// Steps remaining
    Limited(u32),
    /// Pursues forever
    Unlimited,
}

impl ChaseBudget {
    pub const fn can_step(self) -> bool {
        match self {
            ChaseBudget::Unrestricted => true,
            ChaseBudget::Limited(n) => n > 0,
            ChaseBudget::Unlimited => true,
        }
    }

    /// Spend one step attempt
    pub fn consume(&mut self) {
        if let ChaseBudget::Limited(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum EnemyType {
    Demon,
    #[strum(serialize = "Fire Breather")]
    FireBreather,
    Giant,
    Snake,
    Undead,
}

impl EnemyType {
    /// Damage needed to defeat a fresh enemy
    pub const fn health_threshold(self) -> i32 {
        match self {
            EnemyType::Demon => 5,
            EnemyType::FireBreather => 10,
            EnemyType::Giant => 15,
            EnemyType::Snake => 20,
            EnemyType::Undead => 30,
        }
    }

    pub const fn chase_budget(self) -> ChaseBudget {
        match self {
            EnemyType::Demon => ChaseBudget::Unrestricted,
            EnemyType::FireBreather => ChaseBudget::Unrestricted,
            EnemyType::Giant => ChaseBudget::Limited(5),
            EnemyType::Snake => ChaseBudget::Unlimited,
            EnemyType::Undead => ChaseBudget::Limited(5),
        }
    }

    pub const fn icon(self) -> char {
        match self {
            EnemyType::Demon => 'D',
            EnemyType::FireBreather => 'F',
            EnemyType::Giant => 'G',
            EnemyType::Snake => 'S',
            EnemyType::Undead => 'U',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub kind: EnemyType,
    pub position: Position,
    pub health_threshold: i32,
    pub chase_budget: ChaseBudget,
    pub active: bool,
    /// Room the enemy was spawned in; it only acts while the player is there
    pub home_room: usize,
}

impl Enemy {
    /// Create an enemy with its type's initial stats
    pub fn new(id: EnemyId, kind: EnemyType, position: Position, home_room: usize) -> Self {
        Self {
            id,
            kind,
            position,
            health_threshold: kind.health_threshold(),
            chase_budget: kind.chase_budget(),
            active: false,
            home_room,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health_threshold <= 0
    }

    /// Restore the initial chase budget
    pub fn refresh_budget(&mut self) {
        self.chase_budget = self.kind.chase_budget();
    }
}
