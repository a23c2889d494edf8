//! Core engine types: coordinates, RNG, configuration, errors.
//!
//! These are shared by the cavern generator and the turn engine and know
//! nothing about hazards or commands.

pub mod position;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{wrap, Direction, Position};
pub use rng::{CavernRng, CavernRngState};
pub use config::{CavernConfig, GameSize, HAZARD_KINDS, MIN_DIMENSION, STARTING_ARROWS};
pub use error::{CavernError, Result};
