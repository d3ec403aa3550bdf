//! dv-core: Core dungeon logic for delve
//!
//! This crate contains all simulation logic with no I/O dependencies:
//! room and corridor generation, fog-of-war, resource placement, the enemy
//! roster and the turn controller. Presentation and persistence live in
//! other crates and only consume the state exposed here.

pub mod action;
pub mod combat;
pub mod config;
pub mod dungeon;
pub mod error;
pub mod event;
pub mod monster;
pub mod player;

mod consts;
mod gameloop;
mod position;
mod rng;

pub use action::{Direction, Intent, InventorySlot};
pub use config::DungeonConfig;
pub use consts::*;
pub use error::{ConfigError, GenerationError, TurnError};
pub use event::GameEvent;
pub use gameloop::{EndReason, GameLoop, GameState, TurnPhase, TurnReport};
pub use position::Position;
pub use rng::GameRng;
