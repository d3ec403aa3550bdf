//! Melee resolution
//!
//! Combat happens whenever the player and an awake enemy share a cell. The
//! player strikes first; a survivor strikes back for a fixed amount.

use crate::event::GameEvent;
use crate::monster::Roster;
use crate::player::Player;

/// Fixed combat parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatRules {
    pub unarmed_damage: i32,
    pub counter_damage: i32,
}

/// Resolve one exchange with every active enemy on the player's cell
pub fn resolve_combat(player: &mut Player, roster: &mut Roster, rules: CombatRules) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let foes: Vec<_> = roster
        .active()
        .filter(|e| e.position == player.position)
        .map(|e| e.id)
        .collect();

    for id in foes {
        if player.is_dead() {
            break;
        }
        let Some(enemy) = roster.get_mut(id) else {
            continue;
        };

        let damage = player.attack_damage(rules.unarmed_damage);
        enemy.health_threshold -= damage;
        let kind = enemy.kind;
        events.push(GameEvent::EnemyStruck {
            id,
            kind,
            damage,
            remaining: enemy.health_threshold.max(0),
        });

        if enemy.is_defeated() {
            roster.remove(id);
            tracing::debug!(%id, ?kind, "enemy defeated");
            events.push(GameEvent::EnemyDefeated { id, kind });
        } else {
            let health = player.take_damage(rules.counter_damage);
            tracing::debug!(%id, ?kind, health, "player hit");
            events.push(GameEvent::DamageTaken {
                amount: rules.counter_damage,
                health,
                source: kind,
            });
        }
    }

    events
}
