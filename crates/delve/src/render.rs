//! Plain-text map dump

use dv_core::{GameEvent, GameState, Position, S_PLAYER};

/// Draw the map through the fog, with the player and awake enemies on top
///
/// `reveal` ignores the fog and draws every enemy.
pub fn render_map(state: &GameState, reveal: bool) -> String {
    let grid = &state.grid;
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Position::from((x, y));
            if !reveal && !state.visibility().is_visible(pos) {
                out.push(' ');
                continue;
            }
            let enemy = if reveal {
                state.roster.enemy_at(pos, None)
            } else {
                state.active_enemies().find(|e| e.position == pos)
            };
            let ch = if pos == state.player.position {
                S_PLAYER
            } else if let Some(enemy) = enemy {
                enemy.kind.icon()
            } else {
                grid.get(pos).map_or(' ', |t| t.symbol())
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out
}

pub fn status_line(state: &GameState) -> String {
    let player = &state.player;
    let weapon = player
        .inventory
        .equipped_weapon()
        .map_or_else(|| "none".to_string(), |w| w.to_string());
    format!(
        "Turn: {}  Health: {}  Gold: {}  Hunger: {}  Weapon: {}",
        state.turns(),
        player.health,
        player.gold,
        player.hunger,
        weapon
    )
}

pub fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::Moved { to } => format!("moved to {to}"),
        GameEvent::Bumped { target } => format!("blocked at {target}"),
        GameEvent::GoldPickedUp { amount, total } => format!("picked up {amount} gold ({total})"),
        GameEvent::FoodPickedUp { kind } => format!("picked up {kind} food"),
        GameEvent::WeaponPickedUp { kind, equipped } => {
            if *equipped {
                format!("picked up and equipped a {kind}")
            } else {
                format!("picked up a {kind}")
            }
        }
        GameEvent::InventoryFull { position } => format!("no room to carry the item at {position}"),
        GameEvent::RoomEntered { room, first_visit } => {
            if *first_visit {
                format!("discovered room {room}")
            } else {
                format!("entered room {room}")
            }
        }
        GameEvent::EnemyMoved { kind, to, .. } => format!("the {kind} moves to {to}"),
        GameEvent::EnemyStruck { kind, damage, remaining, .. } => {
            format!("hit the {kind} for {damage} ({remaining} left)")
        }
        GameEvent::EnemyDefeated { kind, .. } => format!("defeated the {kind}"),
        GameEvent::DamageTaken { amount, health, source } => {
            format!("the {source} hits for {amount} (health {health})")
        }
        GameEvent::FoodEaten { kind, health, hunger } => {
            format!("ate {kind} food (health {health}, hunger {hunger})")
        }
        GameEvent::WeaponEquipped { kind } => format!("equipped a {kind}"),
        GameEvent::NothingToUse { slot } => format!("nothing in {slot:?}"),
        GameEvent::InventoryListed { food, weapons, equipped } => {
            format!("food: {food:?}, weapons: {weapons:?}, equipped: {equipped:?}")
        }
        GameEvent::HungerIncreased { hunger } => format!("hunger rises to {hunger}"),
        GameEvent::Starving { damage, health } => {
            format!("starving: lost {damage} health ({health})")
        }
        GameEvent::SpawnSkipped { room } => format!("no room in the roster for room {room}"),
        GameEvent::SessionEnded { reason } => format!("session ended: {reason:?}"),
    }
}
