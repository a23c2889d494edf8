//! Cavern game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CavernRng, GameSize};
use crate::rules::{Command, GameSession};

/// Python wrapper for a timed game session.
///
/// Commands are passed as the text a player would type.
#[pyclass(name = "CavernGame")]
pub struct PyCavernGame {
    session: GameSession,
    seed: u64,
}

#[pymethods]
impl PyCavernGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: "small", "medium" or "large" (or "1"-"3")
    /// - seed: RNG seed; a random one is drawn when omitted
    #[new]
    #[pyo3(signature = (size = "small", seed = None))]
    fn new(size: &str, seed: Option<u64>) -> PyResult<Self> {
        let size: GameSize = size
            .parse()
            .map_err(|e: crate::core::CavernError| PyValueError::new_err(e.to_string()))?;
        let mut rng = match seed {
            Some(seed) => CavernRng::new(seed),
            None => CavernRng::from_entropy(),
        };
        let seed = rng.seed();
        let session =
            GameSession::start(size, &mut rng).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { session, seed })
    }

    /// Resolve one typed command and return the narration lines.
    fn resolve(&mut self, command: &str) -> Vec<String> {
        self.session.play(Command::from_input(command)).lines()
    }

    /// Current status: "playing", "won", "lost to a pit", "lost to a predator".
    #[getter]
    fn status(&self) -> String {
        self.session.engine().status().to_string()
    }

    /// Whether the game has ended.
    #[getter]
    fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Player position as (row, col).
    #[getter]
    fn position(&self) -> (usize, usize) {
        let pos = self.session.engine().position();
        (pos.row, pos.col)
    }

    #[getter]
    fn arrows(&self) -> u32 {
        self.session.engine().arrows()
    }

    #[getter]
    fn fountain_enabled(&self) -> bool {
        self.session.engine().fountain_enabled()
    }

    #[getter]
    fn turns(&self) -> u32 {
        self.session.turns()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.seed
    }

    /// Board dump, one glyph per cell. Reveals every hazard.
    fn render(&self) -> String {
        self.session.engine().board().to_string()
    }

    /// End-of-game report line.
    fn summary(&self) -> String {
        self.session.summary().to_string()
    }

    fn __repr__(&self) -> String {
        let pos = self.session.engine().position();
        format!(
            "CavernGame(seed={}, pos=({}, {}), arrows={}, status={})",
            self.seed,
            pos.row,
            pos.col,
            self.session.engine().arrows(),
            self.session.engine().status()
        )
    }
}
