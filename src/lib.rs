//! # fountain-cavern
//!
//! Cavern generation and turn resolution for the Fountain of Objects game.
//!
//! The player starts at a corner entrance of a hidden NxN cavern, has to
//! find and enable the fountain, and walk back out alive. Pits and
//! predators kill on contact, vortices throw the player elsewhere, and a
//! small quiver of arrows can clear predators and vortices.
//!
//! ## Design Principles
//!
//! 1. **No I/O**: The engine takes abstract `Command`s and returns
//!    structured `Narration`. Menus, prompts and rendering live outside.
//!
//! 2. **Deterministic**: Generation draws from an explicitly owned,
//!    seedable `CavernRng`. Same seed, same cavern.
//!
//! 3. **Torus movement**: Moves, shots and vortex knockback wrap around the
//!    edges. Adjacency sensing does not.
//!
//! ## Example
//!
//! ```
//! use fountain_cavern::{Board, CavernRng, Command, GameSize, GameStatus, TurnEngine};
//!
//! let mut rng = CavernRng::new(42);
//! let board = Board::generate(GameSize::Small, &mut rng).unwrap();
//! let mut engine = TurnEngine::new(board).unwrap();
//!
//! let outcome = engine.resolve_turn(Command::from_input("enable fountain"));
//! assert_eq!(outcome.status, GameStatus::Playing);
//! for line in outcome.lines() {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Positions and wrap-around, RNG, configuration, errors
//! - `cavern`: Cell contents, the board, generation
//! - `rules`: Commands, state, sensing, narration, the turn engine
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod cavern;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    wrap, Direction, Position,
    CavernRng, CavernRngState,
    CavernConfig, GameSize,
    CavernError, Result,
};

pub use crate::cavern::{Board, Cell};

pub use crate::rules::{
    Command, GameState, GameStatus, AdjacencySignal,
    Narration, TurnOutcome, TurnEngine,
    GameSession, SessionSummary,
};
