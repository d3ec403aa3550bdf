//! Enemy activation and pursuit
//!
//! Enemies only wake while the player stands in their home room. An awake
//! enemy takes one step per turn straight toward the player, diagonals
//! included, and gives up when the way is blocked.

use serde::{Deserialize, Serialize};

use super::{EnemyId, Roster};
use crate::dungeon::Grid;
use crate::position::Position;

/// AI action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiAction {
    /// Player is elsewhere; the enemy is dormant
    None,
    /// Moved to new position
    Moved(Position),
    /// Step target was a wall, a pickup or another enemy
    Blocked,
    /// Already sharing the player's cell
    OnPlayer,
    /// Out of chase budget
    Waited,
}

/// When a spent chase budget is restored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaseRefresh {
    #[default]
    Never,
    /// Reset when the player walks into the enemy's home room from elsewhere
    OnRoomEntry,
}

/// Activate, refresh and step every enemy for one turn
///
/// `player_room` is the room the player occupies after moving, and
/// `entered_room` is set when that room differs from the one they left.
pub fn update_enemies(
    roster: &mut Roster,
    grid: &Grid,
    player: Position,
    player_room: Option<usize>,
    entered_room: Option<usize>,
    refresh: ChaseRefresh,
) -> Vec<(EnemyId, AiAction)> {
    let mut actions = Vec::with_capacity(roster.len());

    for id in roster.ids() {
        let action = process_enemy(roster, grid, id, player, player_room, entered_room, refresh);
        tracing::trace!(%id, ?action, "enemy turn");
        actions.push((id, action));
    }

    actions
}

fn process_enemy(
    roster: &mut Roster,
    grid: &Grid,
    id: EnemyId,
    player: Position,
    player_room: Option<usize>,
    entered_room: Option<usize>,
    refresh: ChaseRefresh,
) -> AiAction {
    let Some(enemy) = roster.get_mut(id) else {
        return AiAction::None;
    };

    enemy.active = player_room == Some(enemy.home_room);
    if !enemy.active {
        return AiAction::None;
    }

    if refresh == ChaseRefresh::OnRoomEntry && entered_room == Some(enemy.home_room) {
        enemy.refresh_budget();
    }

    if enemy.position == player {
        return AiAction::OnPlayer;
    }
    if !enemy.chase_budget.can_step() {
        return AiAction::Waited;
    }
    enemy.chase_budget.consume();

    let from = enemy.position;
    let target = from.offset((player.x - from.x).signum(), (player.y - from.y).signum());

    let walkable = grid.get(target).is_some_and(|t| t.is_enemy_walkable());
    if !walkable || roster.enemy_at(target, Some(id)).is_some() {
        return AiAction::Blocked;
    }

    match roster.get_mut(id) {
        Some(enemy) => {
            enemy.position = target;
            AiAction::Moved(target)
        }
        None => AiAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::generation::carve_room;
    use crate::dungeon::{Room, Tile, WeaponKind};
    use crate::monster::{ChaseBudget, EnemyType};

    /// Long room 1, with room 0 tucked away on the left
    fn setup() -> (Grid, Vec<Room>) {
        let mut grid = Grid::new(40, 12);
        let rooms = vec![Room::new(1, 1, 4, 4), Room::new(6, 1, 30, 8)];
        for room in &rooms {
            carve_room(&mut grid, room, None);
        }
        (grid, rooms)
    }

    #[test]
    fn test_giant_stops_after_five_steps() {
        let (grid, _) = setup();
        let mut roster = Roster::new(20);
        let id = roster.spawn(EnemyType::Giant, Position::new(33, 4), 1).unwrap();
        let player = Position::new(8, 4);

        for step in 1..=5 {
            let actions = update_enemies(&mut roster, &grid, player, Some(1), None, ChaseRefresh::Never);
            assert_eq!(actions, vec![(id, AiAction::Moved(Position::new(33 - step, 4)))]);
        }
        assert_eq!(roster.get(id).unwrap().chase_budget, ChaseBudget::Limited(0));

        for _ in 0..3 {
            let actions = update_enemies(&mut roster, &grid, player, Some(1), None, ChaseRefresh::Never);
            assert_eq!(actions, vec![(id, AiAction::Waited)]);
        }
        assert_eq!(roster.get(id).unwrap().position, Position::new(28, 4));
    }

    #[test]
    fn test_inactive_outside_home_room() {
        let (grid, _) = setup();
        let mut roster = Roster::new(20);
        let id = roster.spawn(EnemyType::Snake, Position::new(20, 4), 1).unwrap();

        let actions = update_enemies(&mut roster, &grid, Position::new(2, 2), Some(0), None, ChaseRefresh::Never);
        assert_eq!(actions, vec![(id, AiAction::None)]);
        let enemy = roster.get(id).unwrap();
        assert!(!enemy.active);
        assert_eq!(enemy.position, Position::new(20, 4));

        update_enemies(&mut roster, &grid, Position::new(10, 4), None, None, ChaseRefresh::Never);
        assert!(!roster.get(id).unwrap().active);
    }

    #[test]
    fn test_diagonal_step() {
        let (grid, _) = setup();
        let mut roster = Roster::new(20);
        let id = roster.spawn(EnemyType::Snake, Position::new(20, 6), 1).unwrap();
        update_enemies(&mut roster, &grid, Position::new(10, 2), Some(1), None, ChaseRefresh::Never);
        assert_eq!(roster.get(id).unwrap().position, Position::new(19, 5));
    }

    #[test]
    fn test_demon_pursues_without_limit() {
        let (grid, _) = setup();
        let mut roster = Roster::new(20);
        let id = roster.spawn(EnemyType::Demon, Position::new(20, 4), 1).unwrap();
        for step in 1..=8 {
            let actions = update_enemies(&mut roster, &grid, Position::new(10, 4), Some(1), None, ChaseRefresh::Never);
            assert_eq!(actions, vec![(id, AiAction::Moved(Position::new(20 - step, 4)))]);
        }
        let demon = roster.get(id).unwrap();
        assert!(demon.active);
        assert_eq!(demon.chase_budget, ChaseBudget::Unrestricted);
    }

    #[test]
    fn test_blocked_step_spends_budget() {
        let (mut grid, _) = setup();
        grid.set(Position::new(19, 4), Tile::Weapon(WeaponKind::Mace));
        let mut roster = Roster::new(20);
        let id = roster.spawn(EnemyType::Undead, Position::new(20, 4), 1).unwrap();

        let actions = update_enemies(&mut roster, &grid, Position::new(10, 4), Some(1), None, ChaseRefresh::Never);
        assert_eq!(actions, vec![(id, AiAction::Blocked)]);
        let enemy = roster.get(id).unwrap();
        assert_eq!(enemy.position, Position::new(20, 4));
        assert_eq!(enemy.chase_budget, ChaseBudget::Limited(4));
    }

    #[test]
    fn test_enemies_do_not_stack() {
        let (grid, _) = setup();
        let mut roster = Roster::new(20);
        let front = roster.spawn(EnemyType::Giant, Position::new(19, 4), 1).unwrap();
        roster.get_mut(front).unwrap().chase_budget = ChaseBudget::Limited(0);
        let back = roster.spawn(EnemyType::Snake, Position::new(20, 4), 1).unwrap();

        let actions = update_enemies(&mut roster, &grid, Position::new(10, 4), Some(1), None, ChaseRefresh::Never);
        assert_eq!(actions, vec![(front, AiAction::Waited), (back, AiAction::Blocked)]);
    }

    #[test]
    fn test_on_player_does_not_step() {
        let (grid, _) = setup();
        let mut roster = Roster::new(20);
        let id = roster.spawn(EnemyType::Giant, Position::new(10, 4), 1).unwrap();
        let actions = update_enemies(&mut roster, &grid, Position::new(10, 4), Some(1), None, ChaseRefresh::Never);
        assert_eq!(actions, vec![(id, AiAction::OnPlayer)]);
        assert_eq!(roster.get(id).unwrap().chase_budget, ChaseBudget::Limited(5));
    }

    #[test]
    fn test_refresh_on_room_entry() {
        let (grid, _) = setup();
        let mut roster = Roster::new(20);
        let id = roster.spawn(EnemyType::Giant, Position::new(33, 4), 1).unwrap();
        roster.get_mut(id).unwrap().chase_budget = ChaseBudget::Limited(0);

        let player = Position::new(8, 4);
        let actions = update_enemies(&mut roster, &grid, player, Some(1), None, ChaseRefresh::OnRoomEntry);
        assert_eq!(actions, vec![(id, AiAction::Waited)]);

        let actions = update_enemies(&mut roster, &grid, player, Some(1), Some(1), ChaseRefresh::OnRoomEntry);
        assert_eq!(actions, vec![(id, AiAction::Moved(Position::new(32, 4)))]);
        assert_eq!(roster.get(id).unwrap().chase_budget, ChaseBudget::Limited(4));

        // Policy Never ignores room entry
        roster.get_mut(id).unwrap().chase_budget = ChaseBudget::Limited(0);
        let actions = update_enemies(&mut roster, &grid, player, Some(1), Some(1), ChaseRefresh::Never);
        assert_eq!(actions, vec![(id, AiAction::Waited)]);
    }
}
