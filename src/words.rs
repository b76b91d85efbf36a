use crate::{Placements, Position, Score, Tile};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Describes the reasons why [`WrittenWords`] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum WrittenWordsError {
    /// Attempting to write no [tiles](Tile).
    #[error("no tiles were written")]
    EmptyTiles,
    /// Attempting to place [tiles](Tile) that were not consumed.
    #[error("placements {indexes_out_of_bounds:?} do not refer to one of {tiles_len} tiles")]
    IndexesOutOfBounds {
        /// Indexes in placements which are greater than or equal to `tiles_len`.
        indexes_out_of_bounds: BTreeSet<usize>,
        /// The number of consumed [tiles](Tile).
        tiles_len: usize,
    },
    /// Attempting to consume [tiles](Tile) without placing them.
    #[error("tiles at {missing_positions:?} were consumed without a position")]
    MissingPositions {
        /// Indexes of consumed [tiles](Tile) which have no [position](Position).
        missing_positions: BTreeSet<usize>,
    },
    /// Attempting to write two [tiles](Tile) at the same [position](Position).
    #[error("more than one tile was written at {positions:?}")]
    DuplicatePositions {
        /// [Positions](Position) given to more than one [tile](Tile).
        positions: BTreeSet<Position>,
    },
}

/// The result of a move accepted by some word validation outside of this crate:
/// the [tiles](Tile) consumed from the current player's rack, where each of those
/// [tiles](Tile) is written on the board, and the points earned.
///
/// # See Also
///
/// * [Game::write_words](crate::Game::write_words)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WrittenWords {
    total_points: Score,
    tiles: Vec<Tile>,
    placements: Placements,
}

impl WrittenWords {
    /// Checks that `tiles` is not empty and that every index in `placements` refers to
    /// exactly one of `tiles`, and that every one of `tiles` is placed.
    ///
    /// # Arguments
    ///
    /// * `total_points`: The points earned by every word formed by the move.
    /// * `tiles`: The [tiles](Tile) consumed from the current player's rack.
    /// * `placements`: A bimap of indexes into `tiles` to [positions](Position) on the board.
    ///
    /// # Errors
    ///
    /// * [WrittenWordsError::EmptyTiles] Attempting to write no [tiles](Tile).
    /// * [WrittenWordsError::IndexesOutOfBounds] Attempting to place [tiles](Tile) that
    /// were not consumed.
    /// * [WrittenWordsError::MissingPositions] Attempting to consume [tiles](Tile) without
    /// placing them.
    pub fn new(
        total_points: Score,
        tiles: Vec<Tile>,
        placements: Placements,
    ) -> Result<WrittenWords, HashSet<WrittenWordsError>> {
        let mut errors = HashSet::with_capacity(3);
        if tiles.is_empty() {
            errors.insert(WrittenWordsError::EmptyTiles);
        }

        let tiles_len = tiles.len();
        let indexes_out_of_bounds: BTreeSet<usize> = placements
            .left_values()
            .copied()
            .filter(|&index| index >= tiles_len)
            .collect();
        if !indexes_out_of_bounds.is_empty() {
            errors.insert(WrittenWordsError::IndexesOutOfBounds {
                indexes_out_of_bounds,
                tiles_len,
            });
        }

        let missing_positions: BTreeSet<usize> = (0..tiles_len)
            .filter(|index| !placements.contains_left(index))
            .collect();
        if !missing_positions.is_empty() {
            errors.insert(WrittenWordsError::MissingPositions { missing_positions });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(WrittenWords {
            total_points,
            tiles,
            placements,
        })
    }

    /// # Returns
    ///
    /// [`WrittenWords`] built from an iterator of [tiles](Tile) paired with their
    /// [positions](Position), in order.
    ///
    /// # Errors
    ///
    /// * [WrittenWordsError::EmptyTiles] Attempting to write no [tiles](Tile).
    /// * [WrittenWordsError::DuplicatePositions] Attempting to write two [tiles](Tile) at
    /// the same [position](Position).
    pub fn from_tile_positions(
        total_points: Score,
        tile_positions: impl IntoIterator<Item = (Tile, Position)>,
    ) -> Result<WrittenWords, HashSet<WrittenWordsError>> {
        let mut tiles = Vec::new();
        let mut placements = Placements::new();
        let mut positions = BTreeSet::new();
        for (index, (tile, position)) in tile_positions.into_iter().enumerate() {
            tiles.push(tile);
            if placements.insert_no_overwrite(index, position).is_err() {
                positions.insert(position);
            }
        }

        if !positions.is_empty() {
            let mut errors = HashSet::with_capacity(1);
            errors.insert(WrittenWordsError::DuplicatePositions { positions });
            return Err(errors);
        }

        WrittenWords::new(total_points, tiles, placements)
    }

    /// The points earned by every word formed by the move.
    #[inline]
    pub fn total_points(&self) -> Score {
        self.total_points
    }

    /// The [tiles](Tile) consumed from the current player's rack.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// A bimap of indexes into [tiles](WrittenWords::tiles) to [positions](Position).
    #[inline]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// An [iterator](Iterator) of each consumed [tile](Tile) paired with its
    /// [position](Position) in the order the [tiles](Tile) were consumed.
    pub fn tile_positions(&self) -> impl Iterator<Item = (Tile, Position)> + '_ {
        self.placements
            .iter()
            .filter_map(|(&index, &position)| Some((*self.tiles.get(index)?, position)))
    }
}
