//! Turn resolution.
//!
//! `TurnEngine::resolve_turn` runs the same fixed sequence every call:
//!
//! 1. Hazard at the current cell: pit or predator ends the game, a vortex
//!    throws the player and drifts away (that consumes the whole turn)
//! 2. Adjacency sensing
//! 3. Landmark narration (entrance / fountain)
//! 4. Win check: at the entrance with the fountain running
//! 5. Apply the command
//!
//! Consequences are one call behind movement: stepping onto a pit is only
//! fatal when the *next* command is resolved.

use super::command::Command;
use super::narration::{Narration, TurnOutcome};
use super::sense::AdjacencySignal;
use super::state::{GameState, GameStatus};
use crate::cavern::{Board, Cell};
use crate::core::{CavernConfig, CavernError, CavernRng, Direction, Position, Result, STARTING_ARROWS};

/// Knockback applied to a player caught by a vortex.
const KNOCKBACK: (i64, i64) = (-1, 2);

/// Drift applied to the vortex itself after it throws the player.
///
/// Occupied cells along the drift are stepped over, never overwritten, so
/// landmarks and hazard counts survive every displacement.
const VORTEX_DRIFT: (i64, i64) = (1, -2);

/// Owns the board and player state for one game.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    board: Board,
    state: GameState,
    entrance: Position,
    fountain: Position,
}

impl TurnEngine {
    /// Start a game on `board` with the standard quiver.
    ///
    /// Entrance and fountain coordinates are looked up once here.
    pub fn new(board: Board) -> Result<Self> {
        Self::with_arrows(board, STARTING_ARROWS)
    }

    /// Start a game with a custom number of arrows.
    pub fn with_arrows(board: Board, arrows: u32) -> Result<Self> {
        let entrance = board
            .location_of(Cell::Entrance)
            .ok_or(CavernError::MissingLandmark(Cell::Entrance))?;
        let fountain = board
            .location_of(Cell::Fountain)
            .ok_or(CavernError::MissingLandmark(Cell::Fountain))?;

        Ok(Self {
            board,
            state: GameState::new(entrance, arrows),
            entrance,
            fountain,
        })
    }

    /// Pick up a game from an explicit player state.
    ///
    /// Used to set up scenarios mid-game. The position must lie on the board.
    pub fn with_state(board: Board, state: GameState) -> Result<Self> {
        board.cell_at(state.position.row, state.position.col)?;
        let mut engine = Self::with_arrows(board, state.arrows)?;
        engine.state = state;
        Ok(engine)
    }

    /// Generate a cavern and start a game on it.
    pub fn from_config(config: &CavernConfig, rng: &mut CavernRng) -> Result<Self> {
        let board = Board::generate_with(config, rng)?;
        Self::with_arrows(board, config.starting_arrows)
    }

    /// The cavern, including any drift and kills so far.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player-side state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.state.position
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn arrows(&self) -> u32 {
        self.state.arrows
    }

    #[must_use]
    pub fn fountain_enabled(&self) -> bool {
        self.state.fountain_enabled
    }

    #[must_use]
    pub fn entrance(&self) -> Position {
        self.entrance
    }

    #[must_use]
    pub fn fountain(&self) -> Position {
        self.fountain
    }

    /// Resolve one command.
    ///
    /// Once the game is over this is a no-op that reports the final status.
    pub fn resolve_turn(&mut self, command: Command) -> TurnOutcome {
        if self.state.status.is_terminal() {
            log::warn!("Ignoring {command} after the game ended ({})", self.state.status);
            return TurnOutcome::idle(self.state.status);
        }

        let pos = self.state.position;
        log::debug!("Resolving {command} at {pos}");

        let mut outcome = TurnOutcome::idle(GameStatus::Playing);
        outcome.push(Narration::Room(pos));

        // 1. Whatever the last move landed on.
        let here = self.board.get(pos);
        if here.is_hazard() {
            self.resolve_hazard(here, pos, &mut outcome);
            return outcome;
        }

        // 2. Sensing.
        let signal = AdjacencySignal::sense(&self.board, pos);
        outcome.signal = signal;
        if signal != AdjacencySignal::None {
            outcome.push(Narration::Sensed(signal));
        }

        // 3. Landmarks.
        let enabled = self.state.fountain_enabled;
        if pos == self.entrance {
            outcome.push(if enabled { Narration::Escaped } else { Narration::EntranceDark });
        } else if pos == self.fountain {
            outcome.push(if enabled { Narration::FountainActive } else { Narration::FountainDormant });
        }

        // 4. Win.
        if pos == self.entrance && enabled {
            self.state.status = GameStatus::Won;
            outcome.status = GameStatus::Won;
            log::info!("Player escaped at {pos} with the fountain running");
            return outcome;
        }

        // 5. The command itself.
        match command {
            Command::Move(direction) => self.apply_move(direction, &mut outcome),
            Command::Shoot(direction) => self.apply_shot(direction, &mut outcome),
            Command::EnableFountain => self.apply_enable(&mut outcome),
            Command::Invalid => outcome.push(Narration::InvalidCommand),
        }

        outcome
    }

    fn resolve_hazard(&mut self, hazard: Cell, pos: Position, outcome: &mut TurnOutcome) {
        match hazard {
            Cell::Pit => self.finish(GameStatus::LostToPit, outcome, Narration::FellIntoPit),
            Cell::Predator => self.finish(GameStatus::LostToPredator, outcome, Narration::Devoured),
            Cell::Vortex => {
                let to = self.displace(pos);
                outcome.push(Narration::SweptAway { to });
            }
            Cell::Empty | Cell::Entrance | Cell::Fountain => {}
        }
    }

    fn finish(&mut self, status: GameStatus, outcome: &mut TurnOutcome, death: Narration) {
        log::info!("Player died at {}: {status}", self.state.position);
        self.state.status = status;
        outcome.status = status;
        outcome.push(death);
        outcome.push(Narration::Defeat);
    }

    /// Throw the player off a vortex and let the vortex drift.
    ///
    /// Returns the player's new cell. The vortex is never lost: it moves
    /// along `VORTEX_DRIFT` to the first empty cell that is not the
    /// player's, or stays put if the whole drift cycle is blocked.
    fn displace(&mut self, vortex: Position) -> Position {
        let dim = self.board.dimension();
        self.board.put(vortex, Cell::Empty);

        let landing = vortex.offset_wrapped(KNOCKBACK.0, KNOCKBACK.1, dim);
        self.state.position = landing;

        let drift = self.drift_target(vortex, landing);
        self.board.put(drift, Cell::Vortex);
        log::trace!("Vortex at {vortex} threw player to {landing} and drifted to {drift}");

        landing
    }

    fn drift_target(&self, from: Position, player: Position) -> Position {
        let dim = self.board.dimension();
        let mut candidate = from;
        loop {
            candidate = candidate.offset_wrapped(VORTEX_DRIFT.0, VORTEX_DRIFT.1, dim);
            if candidate == from {
                return from;
            }
            if candidate != player && self.board.get(candidate) == Cell::Empty {
                return candidate;
            }
        }
    }

    fn apply_move(&mut self, direction: Direction, outcome: &mut TurnOutcome) {
        let to = self.state.position.step(direction, self.board.dimension());
        self.state.position = to;
        outcome.push(Narration::Moved { direction, to });
    }

    fn apply_shot(&mut self, direction: Direction, outcome: &mut TurnOutcome) {
        if self.state.arrows == 0 {
            outcome.push(Narration::OutOfArrows);
            return;
        }
        self.state.arrows -= 1;

        let at = self.state.position.step(direction, self.board.dimension());
        let target = self.board.get(at);
        if target.is_killable() {
            self.board.put(at, Cell::Empty);
            log::debug!("Arrow cleared {target} at {at}");
            outcome.push(Narration::ShotKilled { target, at });
        } else {
            outcome.push(Narration::ShotMissed { direction });
        }
    }

    fn apply_enable(&mut self, outcome: &mut TurnOutcome) {
        if self.state.position == self.fountain && !self.state.fountain_enabled {
            self.state.fountain_enabled = true;
            log::info!("Fountain enabled at {}", self.fountain);
            outcome.push(Narration::FountainEnabled);
        } else {
            outcome.push(Narration::NothingToEnable);
        }
    }
}
