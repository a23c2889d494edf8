//! A timed play session.
//!
//! `GameSession` wraps a `TurnEngine` with a passive stopwatch and a turn
//! counter for end-of-game reporting. It adds no rules of its own.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::engine::TurnEngine;
use super::narration::TurnOutcome;
use super::state::GameStatus;
use crate::core::{CavernConfig, CavernRng, GameSize, Result};

/// End-of-game report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub status: GameStatus,
    /// Turns resolved while the game was running.
    pub turns: u32,
    pub elapsed: Duration,
    pub arrows_left: u32,
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.elapsed.as_secs();
        write!(
            f,
            "Game {} after {} turns in {}m {:02}s with {} arrows left.",
            self.status,
            self.turns,
            secs / 60,
            secs % 60,
            self.arrows_left
        )
    }
}

/// Turn engine plus stopwatch.
#[derive(Debug)]
pub struct GameSession {
    engine: TurnEngine,
    started: Instant,
    finished: Option<Duration>,
    turns: u32,
}

impl GameSession {
    /// Start timing a game on an existing engine.
    #[must_use]
    pub fn new(engine: TurnEngine) -> Self {
        Self {
            engine,
            started: Instant::now(),
            finished: None,
            turns: 0,
        }
    }

    /// Generate a cavern of the given size and start timing.
    pub fn start(size: GameSize, rng: &mut CavernRng) -> Result<Self> {
        let engine = TurnEngine::from_config(&CavernConfig::for_size(size), rng)?;
        Ok(Self::new(engine))
    }

    /// Resolve one command and update the stopwatch.
    pub fn play(&mut self, command: Command) -> TurnOutcome {
        if self.engine.status().is_terminal() {
            return self.engine.resolve_turn(command);
        }

        let outcome = self.engine.resolve_turn(command);
        self.turns += 1;
        if outcome.status.is_terminal() {
            let elapsed = self.started.elapsed();
            log::info!("Game {} after {} turns ({:?})", outcome.status, self.turns, elapsed);
            self.finished = Some(elapsed);
        }
        outcome
    }

    #[must_use]
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.engine.status().is_terminal()
    }

    /// Wall-clock time played. Frozen once the game ends.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.started.elapsed())
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            status: self.engine.status(),
            turns: self.turns,
            elapsed: self.elapsed(),
            arrows_left: self.engine.arrows(),
        }
    }
}
