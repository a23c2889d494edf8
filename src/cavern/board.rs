//! The cavern grid and its spatial queries.
//!
//! ## Storage
//!
//! Cells are kept row-major in an `im::Vector`, so cloning a board for
//! lookahead or for a Python-side copy is O(1).
//!
//! ## Queries
//!
//! - `cell_at`: strict read, out-of-range is an error (no wrap)
//! - `location_of` / `all_locations_of`: where an item sits
//! - `is_adjacent`: 8-neighborhood test, no wrap, false off-board
//!
//! Movement and shooting wrap around the edges, but adjacency does not:
//! a player on the left edge does not sense a pit on the right edge.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::generator;
use crate::core::{CavernConfig, CavernError, CavernRng, GameSize, Position, Result};

/// Square grid of cell contents.
///
/// Deserialization goes through `BoardData` so a board read back from
/// JSON always holds exactly `dimension * dimension` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    dimension: usize,
    cells: Vector<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardData {
    dimension: usize,
    cells: Vector<Cell>,
}

impl TryFrom<BoardData> for Board {
    type Error = CavernError;

    fn try_from(data: BoardData) -> Result<Self> {
        let expected = data
            .dimension
            .checked_mul(data.dimension)
            .filter(|&n| n > 0)
            .ok_or_else(|| CavernError::Config {
                reason: format!("invalid board dimension {}", data.dimension),
            })?;

        if data.cells.len() != expected {
            return Err(CavernError::Config {
                reason: format!(
                    "{0}x{0} board needs {1} cells, found {2}",
                    data.dimension,
                    expected,
                    data.cells.len()
                ),
            });
        }

        Ok(Self {
            dimension: data.dimension,
            cells: data.cells,
        })
    }
}

impl Board {
    /// Create an all-empty board.
    ///
    /// Useful for hand-built scenarios. Generated boards come from
    /// [`Board::generate`].
    #[must_use]
    pub fn empty(dimension: usize) -> Self {
        assert!(dimension > 0, "Board must have at least one cell");
        Self {
            dimension,
            cells: std::iter::repeat(Cell::Empty)
                .take(dimension * dimension)
                .collect(),
        }
    }

    /// Generate a populated board for a menu size.
    pub fn generate(size: GameSize, rng: &mut CavernRng) -> Result<Self> {
        Self::generate_with(&CavernConfig::for_size(size), rng)
    }

    /// Generate a populated board from an explicit configuration.
    ///
    /// Places the entrance on a corner, then the fountain, then each hazard
    /// kind, every one on its own cell. Fails with `CavernError::Config`
    /// before touching the RNG if the board cannot hold everything.
    pub fn generate_with(config: &CavernConfig, rng: &mut CavernRng) -> Result<Self> {
        config.validate()?;

        let mut board = Self::empty(config.dimension);
        generator::populate(&mut board, config, rng);

        log::info!(
            "Generated {0}x{0} cavern with {1} of each hazard (seed {2})",
            config.dimension,
            config.hazards_per_kind,
            rng.seed()
        );
        Ok(board)
    }

    /// Side length of the grid.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Check whether signed coordinates fall on the board.
    #[must_use]
    pub fn contains(&self, row: i64, col: i64) -> bool {
        let dim = self.dimension as i64;
        (0..dim).contains(&row) && (0..dim).contains(&col)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.dimension || col >= self.dimension {
            return Err(CavernError::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(row * self.dimension + col)
    }

    /// Strict cell read. Never wraps.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Cell content at a position produced by this board.
    ///
    /// # Panics
    ///
    /// Panics if the position belongs to a larger board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.dimension + pos.col]
    }

    /// Unconditional write. Used for generation, vortex drift and kills.
    pub fn set_cell(&mut self, row: usize, col: usize, item: Cell) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells.set(idx, item);
        Ok(())
    }

    /// Write at a position produced by this board.
    pub(crate) fn put(&mut self, pos: Position, item: Cell) {
        let idx = pos.row * self.dimension + pos.col;
        self.cells.set(idx, item);
    }

    /// Iterate over every `(position, cell)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let dim = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Position::new(i / dim, i % dim), cell))
    }

    /// First cell holding `item`, scanning row-major.
    ///
    /// Meant for the entrance and fountain, which are unique on a
    /// generated board.
    #[must_use]
    pub fn location_of(&self, item: Cell) -> Option<Position> {
        self.iter().find(|&(_, cell)| cell == item).map(|(pos, _)| pos)
    }

    /// Every cell holding `item`.
    #[must_use]
    pub fn all_locations_of(&self, item: Cell) -> FxHashSet<Position> {
        self.iter()
            .filter(|&(_, cell)| cell == item)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of cells holding `item`.
    #[must_use]
    pub fn count_of(&self, item: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == item).count()
    }

    /// Check whether any instance of `item` sits in the 8-neighborhood of
    /// `(row, col)`, i.e. at Chebyshev distance exactly 1.
    ///
    /// Off-board coordinates are never adjacent to anything. The
    /// neighborhood does not wrap.
    #[must_use]
    pub fn is_adjacent(&self, row: i64, col: i64, item: Cell) -> bool {
        if !self.contains(row, col) {
            return false;
        }

        for d_row in -1..=1i64 {
            for d_col in -1..=1i64 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let (r, c) = (row + d_row, col + d_col);
                if self.contains(r, c) && self.get(Position::new(r as usize, c as usize)) == item {
                    log::trace!("{item} adjacent to ({row}, {col}) at ({r}, {c})");
                    return true;
                }
            }
        }
        false
    }

    /// Rows of cells, top to bottom, for rendering sinks.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        (0..self.dimension).map(move |row| {
            (0..self.dimension)
                .map(|col| self.get(Position::new(row, col)))
                .collect()
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(dimension: usize, items: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::empty(dimension);
        for &(row, col, item) in items {
            board.set_cell(row, col, item).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty(4);
        assert_eq!(board.dimension(), 4);
        assert_eq!(board.count_of(Cell::Empty), 16);
        assert_eq!(board.location_of(Cell::Entrance), None);
    }

    #[test]
    fn test_cell_at_bounds() {
        let board = board_with(4, &[(3, 3, Cell::Pit)]);
        assert_eq!(board.cell_at(3, 3), Ok(Cell::Pit));
        assert_eq!(board.cell_at(0, 0), Ok(Cell::Empty));
        assert_eq!(
            board.cell_at(4, 0),
            Err(CavernError::OutOfBounds { row: 4, col: 0, dimension: 4 })
        );
        assert!(board.cell_at(0, 17).is_err());
    }

    #[test]
    fn test_set_cell_out_of_bounds() {
        let mut board = Board::empty(4);
        assert!(board.set_cell(0, 4, Cell::Pit).is_err());
        assert_eq!(board.count_of(Cell::Pit), 0);
    }

    #[test]
    fn test_locations() {
        let board = board_with(
            5,
            &[
                (0, 4, Cell::Entrance),
                (2, 2, Cell::Fountain),
                (1, 1, Cell::Predator),
                (4, 0, Cell::Predator),
            ],
        );

        assert_eq!(board.location_of(Cell::Entrance), Some(Position::new(0, 4)));
        assert_eq!(board.location_of(Cell::Fountain), Some(Position::new(2, 2)));

        let predators = board.all_locations_of(Cell::Predator);
        assert_eq!(predators.len(), 2);
        assert!(predators.contains(&Position::new(1, 1)));
        assert!(predators.contains(&Position::new(4, 0)));
        assert!(board.all_locations_of(Cell::Vortex).is_empty());
    }

    #[test]
    fn test_adjacency_cardinal_and_diagonal() {
        let board = board_with(5, &[(2, 2, Cell::Pit)]);

        for (row, col) in [(1, 2), (3, 2), (2, 1), (2, 3), (1, 1), (1, 3), (3, 1), (3, 3)] {
            assert!(board.is_adjacent(row, col, Cell::Pit), "({row}, {col}) should sense the pit");
        }

        // The cell itself and anything two away are not adjacent.
        assert!(!board.is_adjacent(2, 2, Cell::Pit));
        assert!(!board.is_adjacent(0, 2, Cell::Pit));
        assert!(!board.is_adjacent(4, 4, Cell::Pit));
        assert!(!board.is_adjacent(1, 2, Cell::Vortex));
    }

    #[test]
    fn test_adjacency_does_not_wrap() {
        let board = board_with(4, &[(0, 3, Cell::Predator)]);
        assert!(!board.is_adjacent(0, 0, Cell::Predator));
        assert!(board.is_adjacent(1, 2, Cell::Predator));
    }

    #[test]
    fn test_adjacency_off_board() {
        let board = board_with(4, &[(0, 0, Cell::Pit)]);
        assert!(!board.is_adjacent(-1, 0, Cell::Pit));
        assert!(!board.is_adjacent(0, -1, Cell::Pit));
        assert!(!board.is_adjacent(4, 4, Cell::Pit));
    }

    #[test]
    fn test_display_glyphs() {
        let board = board_with(4, &[(0, 0, Cell::Entrance), (1, 2, Cell::Fountain), (3, 3, Cell::Vortex)]);
        assert_eq!(format!("{board}"), "E...\n..F.\n....\n...V\n");
    }

    #[test]
    fn test_clone_is_independent() {
        let board = board_with(4, &[(1, 1, Cell::Predator)]);
        let mut copy = board.clone();
        copy.set_cell(1, 1, Cell::Empty).unwrap();

        assert_eq!(board.cell_at(1, 1), Ok(Cell::Predator));
        assert_eq!(copy.cell_at(1, 1), Ok(Cell::Empty));
    }

    #[test]
    fn test_serde_roundtrip() {
        let board = board_with(4, &[(0, 0, Cell::Entrance), (2, 3, Cell::Fountain), (1, 1, Cell::Pit)]);
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);
    }

    #[test]
    fn test_deserialize_rejects_mismatched_dimension() {
        let board = board_with(4, &[(0, 0, Cell::Entrance), (2, 3, Cell::Fountain)]);
        let mut value = serde_json::to_value(&board).unwrap();
        value["dimension"] = serde_json::json!(5);

        let err = serde_json::from_value::<Board>(value).unwrap_err();
        assert!(err.to_string().contains("needs 25 cells, found 16"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_zero_dimension() {
        let json = r#"{"dimension":0,"cells":[]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());
    }

    #[test]
    fn test_generate_rejects_tiny_board() {
        let mut rng = CavernRng::new(1);
        let config = CavernConfig::default().with_dimension(2);
        assert!(matches!(
            Board::generate_with(&config, &mut rng),
            Err(CavernError::Config { .. })
        ));
    }
}
