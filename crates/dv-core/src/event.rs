//! Events reported to the presentation layer

use serde::{Deserialize, Serialize};

use crate::action::InventorySlot;
use crate::dungeon::{FoodKind, WeaponKind};
use crate::gameloop::EndReason;
use crate::monster::{EnemyId, EnemyType};
use crate::position::Position;

/// Something that happened during a turn, in resolution order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Moved {
        to: Position,
    },
    /// The move target was out of bounds or not walkable
    Bumped {
        target: Position,
    },
    GoldPickedUp {
        amount: u32,
        total: u32,
    },
    FoodPickedUp {
        kind: FoodKind,
    },
    WeaponPickedUp {
        kind: WeaponKind,
        equipped: bool,
    },
    /// The pickup stays on the floor
    InventoryFull {
        position: Position,
    },
    RoomEntered {
        room: usize,
        first_visit: bool,
    },
    /// An awake enemy stepped toward the player
    EnemyMoved {
        id: EnemyId,
        kind: EnemyType,
        to: Position,
    },
    EnemyStruck {
        id: EnemyId,
        kind: EnemyType,
        damage: i32,
        remaining: i32,
    },
    EnemyDefeated {
        id: EnemyId,
        kind: EnemyType,
    },
    DamageTaken {
        amount: i32,
        health: i32,
        source: EnemyType,
    },
    FoodEaten {
        kind: FoodKind,
        health: i32,
        hunger: i32,
    },
    WeaponEquipped {
        kind: WeaponKind,
    },
    NothingToUse {
        slot: InventorySlot,
    },
    InventoryListed {
        food: Vec<FoodKind>,
        weapons: Vec<WeaponKind>,
        equipped: Option<usize>,
    },
    HungerIncreased {
        hunger: i32,
    },
    Starving {
        damage: i32,
        health: i32,
    },
    /// Generation diagnostic: the roster was full
    SpawnSkipped {
        room: usize,
    },
    SessionEnded {
        reason: EndReason,
    },
}
