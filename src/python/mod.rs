//! Python bindings for the cavern engine.
//!
//! Lets scripted agents play the game without a terminal.
//!
//! # Quick Start
//!
//! ```python
//! import fountain_cavern as fc
//!
//! game = fc.CavernGame(size="medium", seed=42)
//! for line in game.resolve("move east"):
//!     print(line)
//! print(game.status, game.position, game.arrows)
//! ```

use pyo3::prelude::*;

mod py_cavern;

pub use py_cavern::*;

/// fountain_cavern: the Fountain of Objects cavern engine.
#[pymodule]
fn fountain_cavern(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCavernGame>()?;
    Ok(())
}
