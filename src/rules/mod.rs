//! Turn rules: commands, player state, sensing, narration and the turn
//! engine that ties them together.
//!
//! The engine consumes abstract [`Command`] values and produces
//! [`TurnOutcome`]s. It never reads or writes a terminal.

pub mod command;
pub mod state;
pub mod sense;
pub mod narration;
pub mod engine;
pub mod session;

pub use command::Command;
pub use state::{GameState, GameStatus};
pub use sense::AdjacencySignal;
pub use narration::{Narration, TurnOutcome};
pub use engine::TurnEngine;
pub use session::{GameSession, SessionSummary};
