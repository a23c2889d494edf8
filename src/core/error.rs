//! Error taxonomy for the cavern engine.
//!
//! Only contract violations are errors. Gameplay no-ops (invalid command,
//! enabling the fountain elsewhere, shooting with an empty quiver) are
//! reported as narration and never surface here.

use thiserror::Error;

use crate::cavern::Cell;

/// Errors raised by board generation and strict board queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CavernError {
    /// The requested board cannot hold every entity, or cannot offer a
    /// corner entrance. Raised before any placement is attempted.
    #[error("invalid cavern configuration: {reason}")]
    Config { reason: String },

    /// Strict, non-wrapping cell access outside the grid.
    #[error("cell (row {row}, col {col}) is outside a {dimension}x{dimension} cavern")]
    OutOfBounds { row: usize, col: usize, dimension: usize },

    /// A board handed to the turn engine has no Entrance or no Fountain.
    #[error("cavern has no {0:?} cell")]
    MissingLandmark(Cell),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CavernError>;
