//! What the player can sense from the current room.

use serde::{Deserialize, Serialize};

use crate::cavern::{Board, Cell};
use crate::core::Position;

/// The hazard the player notices nearby, if any.
///
/// Derived fresh every turn and never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjacencySignal {
    #[default]
    None,
    Pit,
    Predator,
    Vortex,
}

impl AdjacencySignal {
    /// Probe the 8-neighborhood of `pos`.
    ///
    /// Hazard kinds are tried in `Cell::SENSE_ORDER` and only the first
    /// match is reported, even when several kinds are nearby.
    #[must_use]
    pub fn sense(board: &Board, pos: Position) -> Self {
        Cell::SENSE_ORDER
            .into_iter()
            .find(|&hazard| board.is_adjacent(pos.row as i64, pos.col as i64, hazard))
            .map_or(AdjacencySignal::None, AdjacencySignal::from_hazard)
    }

    /// Signal for a hazard cell. Non-hazards map to `None`.
    #[must_use]
    pub const fn from_hazard(cell: Cell) -> Self {
        match cell {
            Cell::Pit => AdjacencySignal::Pit,
            Cell::Predator => AdjacencySignal::Predator,
            Cell::Vortex => AdjacencySignal::Vortex,
            _ => AdjacencySignal::None,
        }
    }

    /// Sensory line for the player, or `None` when nothing is nearby.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            AdjacencySignal::None => None,
            AdjacencySignal::Pit => Some("You feel a draft. There is a pit in a nearby room."),
            AdjacencySignal::Predator => {
                Some("You can smell the rotten stench of an amarok in a nearby room.")
            }
            AdjacencySignal::Vortex => {
                Some("You hear the growling and groaning of a maelstrom nearby.")
            }
        }
    }
}
