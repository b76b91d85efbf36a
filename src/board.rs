use crate::Tile;
use std::collections::HashMap;

/// A row and a column on the board.
///
/// # See Also
///
/// * [Placements](crate::Placements)
/// * [Board]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Position {
    /// The vertical component, counted from the top row.
    pub row: usize,
    /// The horizontal component, counted from the leftmost column.
    pub column: usize,
}

impl Position {
    /// # Returns
    ///
    /// A [`Position`] at `row` and `column`.
    #[inline]
    pub fn new(row: usize, column: usize) -> Position {
        Position { row, column }
    }
}

/// Describes the premium printed on a cell of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BoardCellType {
    /// A cell without a premium.
    #[default]
    Plain,
    /// The cell where the first word must be written.
    Start,
    /// Doubles the points of the letter written on the cell.
    DoubleLetter,
    /// Triples the points of the letter written on the cell.
    TripleLetter,
    /// Doubles the points of the word written over the cell.
    DoubleWord,
    /// Triples the points of the word written over the cell.
    TripleWord,
}

/// A snapshot of one cell of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BoardCell {
    /// The [tile](Tile) written on the cell, if any.
    pub tile: Option<Tile>,
    /// The premium printed on the cell.
    pub cell_type: BoardCellType,
}

/// Stores [tiles](Tile) written on the board. The [game](crate::Game) only writes
/// [tiles](Tile) which some move validation has already accepted, so implementors are not
/// expected to check the legality of a placement.
pub trait Board {
    /// Writes `tile` on the cell at `position`.
    fn set_tile(&mut self, tile: Tile, position: Position);

    /// # Returns
    ///
    /// The cell at `position`.
    fn cell(&self, position: Position) -> BoardCell;
}

/// A [board](Board) which stores written [tiles](Tile) in a map of
/// [positions](Position) to [tiles](Tile).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct MapBoard {
    tiles: HashMap<Position, Tile>,
    premiums: HashMap<Position, BoardCellType>,
}

impl MapBoard {
    /// # Returns
    ///
    /// An empty [`MapBoard`] where every cell is [plain](BoardCellType::Plain).
    pub fn new() -> MapBoard {
        MapBoard::default()
    }

    /// # Arguments
    ///
    /// * `premiums`: A map of [positions](Position) to the premium printed on that cell.
    /// Missing [positions](Position) are [plain](BoardCellType::Plain).
    ///
    /// # Returns
    ///
    /// An empty [`MapBoard`] with premiums.
    pub fn with_premiums(premiums: HashMap<Position, BoardCellType>) -> MapBoard {
        MapBoard {
            tiles: HashMap::new(),
            premiums,
        }
    }

    /// A map of [positions](Position) to [tiles](Tile) that have been written.
    #[inline]
    pub fn tiles(&self) -> &HashMap<Position, Tile> {
        &self.tiles
    }
}

impl Board for MapBoard {
    fn set_tile(&mut self, tile: Tile, position: Position) {
        self.tiles.insert(position, tile);
    }

    fn cell(&self, position: Position) -> BoardCell {
        BoardCell {
            tile: self.tiles.get(&position).copied(),
            cell_type: self.premiums.get(&position).copied().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use map_macro::hash_map;

    #[test]
    fn empty_cell() {
        let board = MapBoard::new();

        let cell = board.cell(Position::new(7, 7));

        assert_eq!(
            BoardCell {
                tile: None,
                cell_type: BoardCellType::Plain
            },
            cell
        );
    }

    #[test]
    fn set_tile() {
        let mut board = MapBoard::new();
        let tile = Tile::letter('Q', 10);

        board.set_tile(tile, Position::new(0, 3));

        assert_eq!(Some(tile), board.cell(Position::new(0, 3)).tile);
        assert_eq!(1, board.tiles().len());
    }

    #[test]
    fn premiums() {
        let start = Position::new(7, 7);
        let mut board = MapBoard::with_premiums(hash_map! {
            start => BoardCellType::Start,
            Position::new(0, 0) => BoardCellType::TripleWord,
        });
        let tile = Tile::letter('A', 1);

        board.set_tile(tile, start);

        assert_eq!(
            BoardCell {
                tile: Some(tile),
                cell_type: BoardCellType::Start
            },
            board.cell(start)
        );
        assert_eq!(
            BoardCellType::TripleWord,
            board.cell(Position::new(0, 0)).cell_type
        );
        assert_eq!(
            BoardCellType::Plain,
            board.cell(Position::new(1, 0)).cell_type
        );
    }
}
