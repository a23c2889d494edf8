//! The cavern: cell contents, the board grid, and procedural generation.
//!
//! A board is generated once per game and then mutated only by the turn
//! engine (vortex drift and arrow kills).

pub mod cell;
pub mod board;
mod generator;

pub use cell::Cell;
pub use board::Board;
