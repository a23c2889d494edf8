//! Structured narration produced by a turn.
//!
//! Each `Narration` is one event the player should hear about. `Display`
//! renders the line a terminal front end prints; structured fields stay
//! available for agents and tests.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::sense::AdjacencySignal;
use super::state::GameStatus;
use crate::cavern::Cell;
use crate::core::{Direction, Position};

/// One narrated event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Narration {
    /// Opening line of every turn.
    Room(Position),
    FellIntoPit,
    Devoured,
    /// A vortex threw the player to `to`.
    SweptAway { to: Position },
    /// A hazard is in a neighboring room.
    Sensed(AdjacencySignal),
    EntranceDark,
    /// Standing at the entrance with the fountain running. The game is won.
    Escaped,
    FountainDormant,
    FountainActive,
    FountainEnabled,
    /// `EnableFountain` issued away from the fountain or a second time.
    NothingToEnable,
    Moved { direction: Direction, to: Position },
    ShotKilled { target: Cell, at: Position },
    ShotMissed { direction: Direction },
    OutOfArrows,
    /// Epilogue after a death line.
    Defeat,
    InvalidCommand,
}

impl std::fmt::Display for Narration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Narration::Room(pos) => write!(f, "You are in the room at {pos}"),
            Narration::FellIntoPit => f.write_str("You fell into the pit!"),
            Narration::Devoured => f.write_str("The amaroks have devoured you!"),
            Narration::SweptAway { .. } => {
                f.write_str("The maelstrom is blowing you away to another room!")
            }
            Narration::Sensed(signal) => f.write_str(signal.message().unwrap_or_default()),
            Narration::EntranceDark => {
                f.write_str("You see light coming from the cavern entrance.")
            }
            Narration::Escaped => f.write_str(
                "The Fountain of Objects has been reactivated, and you have escaped with your life! You win!",
            ),
            Narration::FountainDormant => {
                f.write_str("You hear water dripping in this room. The Fountain of Objects is here!")
            }
            Narration::FountainActive => f.write_str(
                "You hear the rushing waters from the Fountain of Objects. It has been reactivated!",
            ),
            Narration::FountainEnabled => {
                f.write_str("You turn the valves and the Fountain of Objects roars back to life.")
            }
            Narration::NothingToEnable => f.write_str("There is nothing here to enable."),
            Narration::Moved { direction, .. } => {
                write!(f, "You move {}.", direction.name())
            }
            Narration::ShotKilled { target, .. } => {
                let name = if *target == Cell::Vortex { "maelstrom" } else { "amarok" };
                write!(f, "Your arrow strikes the {name}. It is gone!")
            }
            Narration::ShotMissed { direction } => {
                write!(f, "Your arrow flies {} and hits nothing.", direction.name())
            }
            Narration::OutOfArrows => f.write_str("You are out of arrows!"),
            Narration::Defeat => f.write_str(
                "Sorry you were killed and have lost the game! Better luck next time!",
            ),
            Narration::InvalidCommand => f.write_str("Invalid command! Try again"),
        }
    }
}

/// Result of resolving one command.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Events in the order they happened.
    pub narration: SmallVec<[Narration; 4]>,

    /// Nearby hazard reported this turn.
    pub signal: AdjacencySignal,

    /// Status after the turn.
    pub status: GameStatus,
}

impl TurnOutcome {
    /// Outcome with no events, used once the game is over.
    #[must_use]
    pub fn idle(status: GameStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub(crate) fn push(&mut self, event: Narration) {
        self.narration.push(event);
    }

    /// Rendered narration lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.narration.iter().map(ToString::to_string).collect()
    }

    /// Check whether a particular event happened.
    #[must_use]
    pub fn contains(&self, event: &Narration) -> bool {
        self.narration.contains(event)
    }
}
