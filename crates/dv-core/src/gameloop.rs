//! Session state and the turn controller

use serde::{Deserialize, Serialize};

use crate::action::{Direction, Intent, InventorySlot};
use crate::combat::{CombatRules, resolve_combat};
use crate::config::DungeonConfig;
use crate::dungeon::{
    Grid, Room, Tile, VisibilitySet, generate_layout, mark_visited, place_resources, room_at,
};
use crate::error::{GenerationError, TurnError};
use crate::event::GameEvent;
use crate::monster::{AiAction, Enemy, Roster, spawn_in_rooms, update_enemies};
use crate::player::Player;
use crate::position::Position;
use crate::rng::GameRng;

/// Why a session finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Died,
    Quit,
}

/// Turn controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Generated, not yet handed to a controller
    #[default]
    Idle,
    AwaitIntent,
    Resolve,
    Ended(EndReason),
}

impl TurnPhase {
    pub fn is_ended(&self) -> bool {
        matches!(self, TurnPhase::Ended(_))
    }
}

/// Outcome of one `tick`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn counter after resolution
    pub turn: u64,
    pub events: Vec<GameEvent>,
    pub phase: TurnPhase,
}

/// Complete session state
///
/// The visibility set is derived and skipped by serde; call
/// [`GameState::refresh_visibility`] after deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: DungeonConfig,
    pub seed: u64,
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub player: Player,
    pub roster: Roster,
    turns: u64,
    phase: TurnPhase,
    /// Room the player stood in at the end of the last turn
    current_room: Option<usize>,
    #[serde(skip)]
    visibility: VisibilitySet,
    #[serde(skip)]
    generation_events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh dungeon from a seed
    pub fn generate(config: DungeonConfig, seed: u64) -> Result<Self, GenerationError> {
        let mut rng = GameRng::new(seed);
        let layout = generate_layout(&config, &mut rng)?;
        let mut grid = layout.grid;
        let rooms = layout.rooms;

        let spawn = rooms
            .first()
            .map(Room::center)
            .ok_or(GenerationError::TooFewRooms {
                placed: 0,
                required: config.rooms.min_rooms,
            })?;
        place_resources(&mut grid, spawn, &config.resources, &mut rng)?;

        let mut roster = Roster::new(config.enemies.capacity);
        let events = spawn_in_rooms(&mut roster, &grid, &rooms, &config.enemies, &mut rng);
        let player = Player::new(spawn, &config.player);

        tracing::debug!(
            seed,
            rooms = rooms.len(),
            enemies = roster.len(),
            "dungeon generated"
        );

        let mut state = Self::from_parts(config, grid, rooms, player, roster);
        state.seed = seed;
        state.generation_events = events;
        Ok(state)
    }

    /// Assemble a state from prebuilt components
    ///
    /// The room under the player is marked visited.
    pub fn from_parts(
        config: DungeonConfig,
        grid: Grid,
        mut rooms: Vec<Room>,
        player: Player,
        roster: Roster,
    ) -> Self {
        mark_visited(&mut rooms, player.position);
        let current_room = room_at(&rooms, player.position);
        let mut state = Self {
            config,
            seed: 0,
            grid,
            rooms,
            player,
            roster,
            turns: 0,
            phase: TurnPhase::Idle,
            current_room,
            visibility: VisibilitySet::default(),
            generation_events: Vec::new(),
        };
        state.refresh_visibility();
        state
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn current_room(&self) -> Option<usize> {
        self.current_room
    }

    pub fn visibility(&self) -> &VisibilitySet {
        &self.visibility
    }

    /// Diagnostics raised while populating the dungeon
    pub fn generation_events(&self) -> &[GameEvent] {
        &self.generation_events
    }

    pub fn active_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.roster.active()
    }

    /// Rebuild the derived visibility set
    pub fn refresh_visibility(&mut self) {
        self.visibility
            .recompute(&self.grid, &self.rooms, self.player.position);
    }
}

/// Drives a [`GameState`] one intent at a time
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    /// Take ownership of a state and start accepting intents
    pub fn new(mut state: GameState) -> Self {
        state.refresh_visibility();
        if state.phase == TurnPhase::Idle || state.phase == TurnPhase::Resolve {
            state.phase = TurnPhase::AwaitIntent;
        }
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Resolve one intent
    pub fn tick(&mut self, intent: Intent) -> Result<TurnReport, TurnError> {
        if self.state.phase.is_ended() {
            return Err(TurnError::SessionEnded);
        }
        self.state.phase = TurnPhase::Resolve;
        let mut events = Vec::new();

        let time_passes = match intent {
            Intent::Move(dir) => {
                self.move_player(dir, &mut events);
                true
            }
            Intent::UseItem(slot) => self.use_item(slot, &mut events),
            Intent::OpenInventory => {
                let inv = &self.state.player.inventory;
                events.push(GameEvent::InventoryListed {
                    food: inv.food().to_vec(),
                    weapons: inv.weapons().to_vec(),
                    equipped: inv.equipped_index(),
                });
                false
            }
            Intent::Wait => true,
            Intent::Quit => {
                self.end(EndReason::Quit, &mut events);
                false
            }
        };

        if time_passes {
            self.resolve_world(&mut events);
        }

        if !self.state.phase.is_ended() {
            self.state.phase = TurnPhase::AwaitIntent;
        }
        tracing::debug!(turn = self.state.turns, ?intent, events = events.len(), "turn resolved");

        Ok(TurnReport {
            turn: self.state.turns,
            events,
            phase: self.state.phase,
        })
    }

    fn move_player(&mut self, dir: Direction, events: &mut Vec<GameEvent>) {
        let (dx, dy) = dir.delta();
        let target = self.state.player.position.offset(dx, dy);

        let Some(tile) = self.state.grid.get(target).filter(|t| t.is_walkable()) else {
            events.push(GameEvent::Bumped { target });
            return;
        };

        self.state.player.position = target;
        events.push(GameEvent::Moved { to: target });
        self.pickup(target, tile, events);
    }

    fn pickup(&mut self, pos: Position, tile: Tile, events: &mut Vec<GameEvent>) {
        let player = &mut self.state.player;
        let collected = match tile {
            Tile::GoldLow | Tile::GoldHigh => {
                let amount = tile.gold_value().unwrap_or(0);
                let total = player.add_gold(amount);
                events.push(GameEvent::GoldPickedUp { amount, total });
                true
            }
            Tile::Food(kind) => {
                let stored = player.inventory.add_food(kind);
                if stored {
                    events.push(GameEvent::FoodPickedUp { kind });
                }
                stored
            }
            Tile::Weapon(kind) => match player.inventory.add_weapon(kind) {
                Some(equipped) => {
                    events.push(GameEvent::WeaponPickedUp { kind, equipped });
                    true
                }
                None => false,
            },
            _ => return,
        };

        if collected {
            self.state.grid.set(pos, Tile::Floor);
        } else {
            events.push(GameEvent::InventoryFull { position: pos });
        }
    }

    /// Returns whether the turn advances
    fn use_item(&mut self, slot: InventorySlot, events: &mut Vec<GameEvent>) -> bool {
        let player = &mut self.state.player;
        match slot {
            InventorySlot::Food(index) => match player.inventory.take_food(index) {
                Some(kind) => {
                    player.eat(kind);
                    events.push(GameEvent::FoodEaten {
                        kind,
                        health: player.health,
                        hunger: player.hunger,
                    });
                    true
                }
                None => {
                    events.push(GameEvent::NothingToUse { slot });
                    false
                }
            },
            InventorySlot::Weapon(index) => match player.inventory.equip(index) {
                Some(kind) => {
                    events.push(GameEvent::WeaponEquipped { kind });
                    true
                }
                None => {
                    events.push(GameEvent::NothingToUse { slot });
                    false
                }
            },
        }
    }

    /// Everything after the player's own action: rooms, enemies, combat,
    /// hunger and fog-of-war
    fn resolve_world(&mut self, events: &mut Vec<GameEvent>) {
        let state = &mut self.state;
        state.turns += 1;
        let position = state.player.position;

        let previous = state.current_room;
        let now = room_at(&state.rooms, position);
        let first_visit = mark_visited(&mut state.rooms, position).is_some();
        let entered = now.filter(|_| now != previous);
        if let Some(room) = entered {
            events.push(GameEvent::RoomEntered { room, first_visit });
        }
        state.current_room = now;

        let actions = update_enemies(
            &mut state.roster,
            &state.grid,
            position,
            now,
            entered,
            state.config.enemies.chase_refresh,
        );
        for (id, action) in actions {
            let AiAction::Moved(to) = action else {
                continue;
            };
            if let Some(enemy) = state.roster.get(id) {
                events.push(GameEvent::EnemyMoved {
                    id,
                    kind: enemy.kind,
                    to,
                });
            }
        }

        let rules = CombatRules {
            unarmed_damage: state.config.player.unarmed_damage,
            counter_damage: state.config.enemies.counter_damage,
        };
        events.extend(resolve_combat(&mut state.player, &mut state.roster, rules));

        if !state.player.is_dead() {
            self.tick_hunger(events);
        }
        if self.state.player.is_dead() {
            self.end(EndReason::Died, events);
        }

        self.state.refresh_visibility();
    }

    fn tick_hunger(&mut self, events: &mut Vec<GameEvent>) {
        let config = &self.state.config.player;
        let interval = u64::from(config.hunger_interval.max(1));
        if self.state.turns % interval != 0 {
            return;
        }

        let player = &mut self.state.player;
        let before = player.hunger;
        let hunger = player.grow_hungry();
        if hunger != before {
            events.push(GameEvent::HungerIncreased { hunger });
        }
        if player.is_starving() {
            let damage = config.starvation_damage;
            let health = player.take_damage(damage);
            tracing::debug!(health, "starving");
            events.push(GameEvent::Starving { damage, health });
        }
    }

    fn end(&mut self, reason: EndReason, events: &mut Vec<GameEvent>) {
        self.state.phase = TurnPhase::Ended(reason);
        tracing::info!(?reason, turns = self.state.turns, gold = self.state.player.gold, "session ended");
        events.push(GameEvent::SessionEnded { reason });
    }
}
