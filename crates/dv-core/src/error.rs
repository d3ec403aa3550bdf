//! Error types for dungeon generation and turn resolution

use thiserror::Error;

/// Configuration values that cannot produce a playable dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("map is {width}x{height}, minimum is {min}x{min}")]
    MapTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("room count range is invalid: min {min_rooms}, target {target}")]
    RoomCount { min_rooms: usize, target: usize },

    #[error("room placement needs at least one attempt")]
    NoAttempts,

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field} is {value}, must not be negative")]
    Negative { field: &'static str, value: i32 },

    #[error("{field} is {value}, must be at most {max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Failures while building a dungeon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("placed {placed} rooms, at least {required} required")]
    TooFewRooms { placed: usize, required: usize },

    #[error("not enough floor for {resource}: placed {placed} of {requested}")]
    InsufficientFloor {
        resource: &'static str,
        placed: u32,
        requested: u32,
    },
}

/// Rejections from the turn controller
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("the session has ended")]
    SessionEnded,
}
