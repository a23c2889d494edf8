//! Cell contents.

use serde::{Deserialize, Serialize};

/// What occupies a single cavern cell. Contents are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// Start cell and, once the fountain runs, the exit.
    Entrance,
    /// The objective. Must be enabled before leaving.
    Fountain,
    /// Instant death. Cannot be shot.
    Pit,
    /// Throws the player to another room and drifts away.
    Vortex,
    /// Instant death. Can be shot.
    Predator,
}

impl Cell {
    /// Hazard kinds in placement order.
    pub const HAZARDS: [Cell; 3] = [Cell::Pit, Cell::Vortex, Cell::Predator];

    /// Hazard kinds in sensing priority order.
    ///
    /// When the player is next to several kinds, only the first one found
    /// in this order is reported.
    pub const SENSE_ORDER: [Cell; 3] = [Cell::Pit, Cell::Predator, Cell::Vortex];

    /// Pits, vortices and predators.
    #[must_use]
    pub const fn is_hazard(self) -> bool {
        matches!(self, Cell::Pit | Cell::Vortex | Cell::Predator)
    }

    /// Whether an arrow clears this cell.
    #[must_use]
    pub const fn is_killable(self) -> bool {
        matches!(self, Cell::Vortex | Cell::Predator)
    }

    /// Single-character glyph for board dumps.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Entrance => 'E',
            Cell::Fountain => 'F',
            Cell::Pit => 'P',
            Cell::Vortex => 'V',
            Cell::Predator => 'A',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cell::Empty => "Empty",
            Cell::Entrance => "Entrance",
            Cell::Fountain => "Fountain",
            Cell::Pit => "Pit",
            Cell::Vortex => "Vortex",
            Cell::Predator => "Predator",
        };
        f.write_str(name)
    }
}
