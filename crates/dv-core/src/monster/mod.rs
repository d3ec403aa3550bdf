//! Hostile entities: stats, roster, spawning and pursuit

pub mod ai;
mod enemy;
mod roster;
pub mod spawn;

pub use ai::{AiAction, ChaseRefresh, update_enemies};
pub use enemy::{ChaseBudget, Enemy, EnemyId, EnemyType};
pub use roster::Roster;
pub use spawn::spawn_in_rooms;
