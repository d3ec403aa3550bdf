//! Pickup placement
//!
//! Gold, food and weapons are stored as tiles until the player walks over
//! them. Each item lands on a uniformly chosen floor cell; a cell that
//! already holds something is resampled.

use strum::IntoEnumIterator;

use super::{FoodKind, Grid, Tile, WeaponKind};
use crate::config::ResourceConfig;
use crate::error::GenerationError;
use crate::position::Position;
use crate::rng::GameRng;

/// Weighted food roll
pub fn roll_food(rng: &mut GameRng) -> FoodKind {
    let mut roll = rng.rn2(100);
    for kind in FoodKind::iter() {
        if roll < kind.weight() {
            return kind;
        }
        roll -= kind.weight();
    }
    FoodKind::Common
}

pub fn roll_weapon(rng: &mut GameRng) -> WeaponKind {
    let kinds: Vec<WeaponKind> = WeaponKind::iter().collect();
    rng.choose(&kinds).copied().unwrap_or(WeaponKind::Dagger)
}

struct Placer<'a> {
    grid: &'a mut Grid,
    floor: Vec<Position>,
    free: usize,
    max_retries: u32,
}

impl Placer<'_> {
    fn place(
        &mut self,
        resource: &'static str,
        requested: u32,
        rng: &mut GameRng,
        mut make: impl FnMut(&mut GameRng) -> Tile,
    ) -> Result<(), GenerationError> {
        for placed in 0..requested {
            let insufficient = GenerationError::InsufficientFloor {
                resource,
                placed,
                requested,
            };
            if self.free == 0 {
                return Err(insufficient);
            }

            let mut spot = None;
            for _ in 0..self.max_retries {
                let Some(&pos) = rng.choose(&self.floor) else {
                    break;
                };
                if self.grid.get(pos) == Some(Tile::Floor) {
                    spot = Some(pos);
                    break;
                }
            }
            let Some(pos) = spot else {
                return Err(insufficient);
            };

            let tile = make(rng);
            self.grid.set(pos, tile);
            self.free -= 1;
        }
        tracing::trace!(resource, count = requested, "resources placed");
        Ok(())
    }
}

/// Scatter the configured pickups onto floor cells, never on `spawn`
pub fn place_resources(
    grid: &mut Grid,
    spawn: Position,
    config: &ResourceConfig,
    rng: &mut GameRng,
) -> Result<(), GenerationError> {
    let floor: Vec<Position> = grid
        .positions_of(Tile::Floor)
        .into_iter()
        .filter(|&p| p != spawn)
        .collect();
    let mut placer = Placer {
        free: floor.len(),
        floor,
        grid,
        max_retries: config.max_retries,
    };

    placer.place("low gold", config.gold_low, rng, |_| Tile::GoldLow)?;
    placer.place("high gold", config.gold_high, rng, |_| Tile::GoldHigh)?;
    placer.place("food", config.food, rng, |rng| Tile::Food(roll_food(rng)))?;
    placer.place("weapons", config.weapons, rng, |rng| {
        Tile::Weapon(roll_weapon(rng))
    })?;

    tracing::debug!(total = config.total(), "resources placed");
    Ok(())
}
