//! Rejection-sampling placement.
//!
//! Every entity is placed by drawing uniform `(row, col)` pairs until one
//! lands on an empty cell. The entrance adds a second rejection layer on
//! top: empty draws that are not corners are thrown back.
//!
//! Termination relies on [`CavernConfig::validate`] having been called: as
//! long as at least one empty cell remains, each draw succeeds with
//! positive probability.

use super::board::Board;
use super::cell::Cell;
use crate::core::{CavernConfig, CavernRng, Position};

/// Place the entrance, the fountain, then every hazard kind.
pub(crate) fn populate(board: &mut Board, config: &CavernConfig, rng: &mut CavernRng) {
    let entrance = draw_corner(board, rng);
    board.put(entrance, Cell::Entrance);
    log::debug!("Placed entrance at {entrance}");

    let fountain = draw_empty(board, rng);
    board.put(fountain, Cell::Fountain);
    log::debug!("Placed fountain at {fountain}");

    for hazard in Cell::HAZARDS {
        for _ in 0..config.hazards_per_kind {
            let pos = draw_empty(board, rng);
            board.put(pos, hazard);
            log::debug!("Placed {hazard} at {pos}");
        }
    }
}

/// Draw uniformly until an empty cell comes up.
pub(crate) fn draw_empty(board: &Board, rng: &mut CavernRng) -> Position {
    let dim = board.dimension();
    loop {
        let pos = Position::new(rng.gen_index(dim), rng.gen_index(dim));
        if board.get(pos) == Cell::Empty {
            return pos;
        }
    }
}

/// Draw empty cells until one of them is a corner.
pub(crate) fn draw_corner(board: &Board, rng: &mut CavernRng) -> Position {
    let dim = board.dimension();
    loop {
        let pos = draw_empty(board, rng);
        if pos.is_corner(dim) {
            return pos;
        }
    }
}
