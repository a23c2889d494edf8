//! Board generation integration tests.
//!
//! These tests verify placement counts, the corner entrance, determinism
//! and the configuration guard across every menu size.

use fountain_cavern::{Board, CavernConfig, CavernError, CavernRng, Cell, GameSize, Position};

fn assert_well_formed(board: &Board, config: &CavernConfig) {
    assert_eq!(board.count_of(Cell::Entrance), 1);
    assert_eq!(board.count_of(Cell::Fountain), 1);
    for hazard in Cell::HAZARDS {
        assert_eq!(board.count_of(hazard), config.hazards_per_kind, "{hazard} count");
    }

    let cells = config.dimension * config.dimension;
    assert_eq!(board.count_of(Cell::Empty), cells - config.entity_count());

    let entrance = board.location_of(Cell::Entrance).unwrap();
    assert!(entrance.is_corner(config.dimension), "entrance at {entrance} is not a corner");
}

// =============================================================================
// Placement
// =============================================================================

/// Every menu size produces a well-formed cavern over many seeds.
#[test]
fn test_generated_boards_are_well_formed() {
    for size in GameSize::ALL {
        let config = CavernConfig::for_size(size);
        for seed in 0..200 {
            let mut rng = CavernRng::new(seed);
            let board = Board::generate(size, &mut rng).unwrap();
            assert_eq!(board.dimension(), size.dimension());
            assert_well_formed(&board, &config);
        }
    }
}

/// All four corners show up as entrances across seeds.
#[test]
fn test_entrance_uses_all_corners() {
    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..400 {
        let mut rng = CavernRng::new(seed);
        let board = Board::generate(GameSize::Medium, &mut rng).unwrap();
        seen.insert(board.location_of(Cell::Entrance).unwrap());
    }

    let expected: std::collections::BTreeSet<_> = [
        Position::new(0, 0),
        Position::new(0, 5),
        Position::new(5, 0),
        Position::new(5, 5),
    ]
    .into_iter()
    .collect();
    assert_eq!(seen, expected);
}

/// A crowded custom board still places every entity on its own cell.
#[test]
fn test_crowded_custom_board() {
    // 2 + 3 * 4 = 14 entities on 16 cells.
    let config = CavernConfig::for_size(GameSize::Small).with_hazards_per_kind(4);
    for seed in 0..50 {
        let mut rng = CavernRng::new(seed);
        let board = Board::generate_with(&config, &mut rng).unwrap();
        assert_well_formed(&board, &config);
    }
}

// =============================================================================
// Determinism
// =============================================================================

/// Same seed, same cavern.
#[test]
fn test_same_seed_same_board() {
    let a = Board::generate(GameSize::Large, &mut CavernRng::new(99)).unwrap();
    let b = Board::generate(GameSize::Large, &mut CavernRng::new(99)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

/// Restoring a captured RNG state reproduces the next cavern.
#[test]
fn test_rng_state_reproduces_board() {
    let mut rng = CavernRng::new(5);
    let _first = Board::generate(GameSize::Small, &mut rng).unwrap();

    let state = rng.state();
    let second = Board::generate(GameSize::Small, &mut rng).unwrap();

    let mut restored = CavernRng::from_state(&state);
    let replayed = Board::generate(GameSize::Small, &mut restored).unwrap();
    assert_eq!(second, replayed);
}

/// Different seeds usually give different caverns.
#[test]
fn test_seeds_vary_layout() {
    let boards: std::collections::HashSet<String> = (0..20)
        .map(|seed| {
            Board::generate(GameSize::Large, &mut CavernRng::new(seed))
                .unwrap()
                .to_string()
        })
        .collect();
    assert!(boards.len() > 1);
}

// =============================================================================
// Configuration guard
// =============================================================================

/// Undersized or overfull configurations fail fast instead of hanging.
#[test]
fn test_invalid_configs_fail_fast() {
    let mut rng = CavernRng::new(1);

    for dimension in [0, 1, 2, 3] {
        let config = CavernConfig::default().with_dimension(dimension);
        assert!(matches!(
            Board::generate_with(&config, &mut rng),
            Err(CavernError::Config { .. })
        ));
    }

    let config = CavernConfig::for_size(GameSize::Small).with_hazards_per_kind(5);
    assert!(matches!(
        Board::generate_with(&config, &mut rng),
        Err(CavernError::Config { .. })
    ));
}

/// A rejected config leaves the RNG untouched.
#[test]
fn test_guard_runs_before_sampling() {
    let mut rng = CavernRng::new(3);
    let before = rng.state();
    let config = CavernConfig::default().with_dimension(3);
    assert!(Board::generate_with(&config, &mut rng).is_err());
    assert_eq!(rng.state(), before);
}
