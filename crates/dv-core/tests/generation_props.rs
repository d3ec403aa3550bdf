use proptest::prelude::*;

use dv_core::dungeon::corridor::unreachable_passages;
use dv_core::dungeon::{ConnectStrategy, generate_layout};
use dv_core::{Direction, DungeonConfig, GameLoop, GameRng, GameState, Intent};

fn intent_for(code: u8) -> Intent {
    match code {
        0 => Intent::Move(Direction::Up),
        1 => Intent::Move(Direction::Down),
        2 => Intent::Move(Direction::Left),
        3 => Intent::Move(Direction::Right),
        _ => Intent::Wait,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_padded_rooms_never_overlap(seed in any::<u64>(), target in 6_usize..=10) {
        let mut config = DungeonConfig::default();
        config.rooms.target = target;
        let layout = generate_layout(&config, &mut GameRng::new(seed)).unwrap();

        for (i, a) in layout.rooms.iter().enumerate() {
            prop_assert!(a.width >= 4 && a.height >= 4);
            for b in &layout.rooms[i + 1..] {
                prop_assert!(!a.overlaps(b, 1), "seed={seed}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_passages_reachable_from_first_room(seed in any::<u64>(), chain in any::<bool>()) {
        let mut config = DungeonConfig::default();
        config.rooms.connection = if chain {
            ConnectStrategy::Chain
        } else {
            ConnectStrategy::Nearest
        };
        let layout = generate_layout(&config, &mut GameRng::new(seed)).unwrap();

        let stranded = unreachable_passages(&layout.grid, layout.rooms[0].center());
        prop_assert!(stranded.is_empty(), "seed={seed}: unreachable {stranded:?}");
    }

    #[test]
    fn test_visited_rooms_stay_visible(
        seed in any::<u64>(),
        moves in prop::collection::vec(0_u8..5, 1..80),
    ) {
        let state = GameState::generate(DungeonConfig::default(), seed);
        prop_assume!(state.is_ok());
        let Ok(state) = state else {
            return Ok(());
        };
        let mut game = GameLoop::new(state);
        let mut seen = vec![false; game.state().rooms.len()];

        for code in moves {
            if game.tick(intent_for(code)).is_err() {
                break;
            }
            let state = game.state();
            for (i, room) in state.rooms.iter().enumerate() {
                prop_assert!(room.visited || !seen[i], "room {i} reverted");
                seen[i] = room.visited;
                if room.visited {
                    prop_assert!(room.cells().all(|p| state.visibility().is_visible(p)));
                }
            }
            prop_assert!(state.visibility().is_visible(state.player.position));
        }
    }
}
