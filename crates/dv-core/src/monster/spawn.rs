//! Initial enemy placement

use strum::IntoEnumIterator;

use super::{EnemyType, Roster};
use crate::config::EnemyConfig;
use crate::dungeon::{Grid, Room, Tile};
use crate::event::GameEvent;
use crate::position::Position;
use crate::rng::GameRng;

/// Roll a uniformly random enemy type
pub fn roll_enemy_type(rng: &mut GameRng) -> EnemyType {
    let kinds: Vec<EnemyType> = EnemyType::iter().collect();
    rng.choose(&kinds).copied().unwrap_or(EnemyType::Demon)
}

/// Give each room after the first a chance at one enemy
///
/// Enemies land on an unoccupied interior floor cell. Spawns that do not fit
/// in the roster are skipped and reported.
pub fn spawn_in_rooms(
    roster: &mut Roster,
    grid: &Grid,
    rooms: &[Room],
    config: &EnemyConfig,
    rng: &mut GameRng,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for (index, room) in rooms.iter().enumerate().skip(1) {
        if !rng.percent(config.spawn_percent) {
            continue;
        }
        let kind = roll_enemy_type(rng);

        let cells: Vec<Position> = room
            .interior()
            .filter(|&p| grid.get(p) == Some(Tile::Floor))
            .filter(|&p| roster.enemy_at(p, None).is_none())
            .collect();
        let Some(&pos) = rng.choose(&cells) else {
            continue;
        };

        match roster.spawn(kind, pos, index) {
            Some(id) => {
                tracing::trace!(%id, ?kind, room = index, "enemy spawned");
            }
            None => {
                tracing::warn!(room = index, capacity = roster.capacity(), "roster full, spawn skipped");
                events.push(GameEvent::SpawnSkipped { room: index });
            }
        }
    }

    events
}
