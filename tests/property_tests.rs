//! Property tests for generation, wrap-around, adjacency and vortices.

use proptest::prelude::*;

use fountain_cavern::core::STARTING_ARROWS;
use fountain_cavern::{
    wrap, Board, CavernConfig, CavernRng, Cell, Command, GameSize, GameState, GameStatus, Position,
    TurnEngine,
};

fn game_size() -> impl Strategy<Value = GameSize> {
    prop_oneof![Just(GameSize::Small), Just(GameSize::Medium), Just(GameSize::Large)]
}

proptest! {
    /// Exactly one entrance and fountain, exact hazard counts, no overlap.
    #[test]
    fn prop_generated_counts(size in game_size(), seed in any::<u64>()) {
        let config = CavernConfig::for_size(size);
        let board = Board::generate(size, &mut CavernRng::new(seed)).unwrap();

        prop_assert_eq!(board.count_of(Cell::Entrance), 1);
        prop_assert_eq!(board.count_of(Cell::Fountain), 1);
        for hazard in Cell::HAZARDS {
            prop_assert_eq!(board.count_of(hazard), size.hazards_per_kind());
        }
        let occupied = board.iter().filter(|&(_, cell)| cell != Cell::Empty).count();
        prop_assert_eq!(occupied, config.entity_count());
    }

    /// The entrance always sits on a corner.
    #[test]
    fn prop_entrance_on_corner(size in game_size(), seed in any::<u64>()) {
        let board = Board::generate(size, &mut CavernRng::new(seed)).unwrap();
        let entrance = board.location_of(Cell::Entrance).unwrap();
        prop_assert!(entrance.is_corner(size.dimension()));
    }

    /// Wrap is total, lands in range and leaves in-range values alone.
    #[test]
    fn prop_wrap_total_and_idempotent(value in any::<i32>(), dimension in 1usize..64) {
        let wrapped = wrap(value as i64, dimension);
        prop_assert!(wrapped < dimension);
        prop_assert_eq!(wrap(wrapped as i64, dimension), wrapped);
        prop_assert_eq!(
            wrapped as i64,
            (value as i64).rem_euclid(dimension as i64)
        );
    }

    /// Adjacency is symmetric under the 8-neighborhood.
    #[test]
    fn prop_adjacency_symmetric(
        dimension in 4usize..10,
        a in (0usize..10, 0usize..10),
        b in (0usize..10, 0usize..10),
    ) {
        let a = Position::new(a.0 % dimension, a.1 % dimension);
        let b = Position::new(b.0 % dimension, b.1 % dimension);
        prop_assume!(a != b);

        let mut at_b = Board::empty(dimension);
        at_b.set_cell(b.row, b.col, Cell::Pit).unwrap();
        let mut at_a = Board::empty(dimension);
        at_a.set_cell(a.row, a.col, Cell::Pit).unwrap();

        let forward = at_b.is_adjacent(a.row as i64, a.col as i64, Cell::Pit);
        let backward = at_a.is_adjacent(b.row as i64, b.col as i64, Cell::Pit);
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, a.chebyshev(b) == 1);
    }

    /// Stepping on a vortex never kills, never removes it, and never leaves
    /// the player sharing the drifted vortex's cell.
    #[test]
    fn prop_vortex_never_removed(size in game_size(), seed in any::<u64>()) {
        let board = Board::generate(size, &mut CavernRng::new(seed)).unwrap();
        let before = board.all_locations_of(Cell::Vortex);
        let vortex = board.location_of(Cell::Vortex).unwrap();

        let mut engine = standing_at(board, vortex);
        let outcome = engine.resolve_turn(Command::Invalid);

        prop_assert_eq!(outcome.status, GameStatus::Playing);
        prop_assert_ne!(engine.position(), vortex);

        let after = engine.board().all_locations_of(Cell::Vortex);
        prop_assert_eq!(after.len(), before.len());
        prop_assert!(after.difference(&before).all(|&moved| moved != engine.position()));
        prop_assert_eq!(engine.board().count_of(Cell::Entrance), 1);
        prop_assert_eq!(engine.board().count_of(Cell::Fountain), 1);
    }

    /// Enabling the fountain only works on the fountain cell.
    #[test]
    fn prop_enable_only_at_fountain(seed in any::<u64>(), row in 0usize..6, col in 0usize..6) {
        let mut board = Board::generate(GameSize::Medium, &mut CavernRng::new(seed)).unwrap();
        for hazard in Cell::HAZARDS {
            for pos in board.all_locations_of(hazard) {
                board.set_cell(pos.row, pos.col, Cell::Empty).unwrap();
            }
        }
        let fountain = board.location_of(Cell::Fountain).unwrap();
        let target = Position::new(row, col);

        let mut engine = standing_at(board, target);
        engine.resolve_turn(Command::EnableFountain);
        prop_assert_eq!(engine.fountain_enabled(), target == fountain);
        prop_assert_eq!(engine.status(), GameStatus::Playing);
    }
}

/// Engine with a fresh player placed directly on `pos`.
fn standing_at(board: Board, pos: Position) -> TurnEngine {
    let state = GameState::new(pos, STARTING_ARROWS);
    TurnEngine::with_state(board, state).unwrap()
}
