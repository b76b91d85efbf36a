use crate::{Rack, RackCapacity, Score, Tile};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Uniquely identifies a [player](Player) across games.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// # Returns
    ///
    /// A new, random [`PlayerId`].
    pub fn new() -> PlayerId {
        PlayerId(Uuid::new_v4())
    }

    /// # Returns
    ///
    /// A [`PlayerId`] wrapping an existing `uuid`.
    #[inline]
    pub fn from_uuid(uuid: Uuid) -> PlayerId {
        PlayerId(uuid)
    }

    /// The wrapped uuid.
    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        PlayerId::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The number of turns a [player](Player) has passed in a row.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct ConsecutivePasses(u32);

impl ConsecutivePasses {
    /// No passes.
    pub const INITIAL: ConsecutivePasses = ConsecutivePasses(0);

    /// # Returns
    ///
    /// One more pass, saturating at [u32::MAX].
    #[inline]
    #[must_use]
    pub fn increment(self) -> ConsecutivePasses {
        ConsecutivePasses(self.0.saturating_add(1))
    }

    /// The number of passes.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Describes the reason why a [player](Player) could not be changed.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum PlayerError {
    /// Attempting to change the rack, score, or passes of a player who has surrendered.
    #[error("player {player_id} has surrendered")]
    HasSurrendered {
        /// The surrendered player.
        player_id: PlayerId,
    },
    /// Attempting to remove a [tile](Tile) which is not on the rack, or more copies of
    /// a [tile](Tile) than the rack holds.
    #[error("player {player_id} does not own tile {tile:?}")]
    DoesNotOwnTile {
        /// The player whose rack was checked.
        player_id: PlayerId,
        /// The first [tile](Tile) which could not be found.
        tile: Tile,
    },
    /// Attempting to hold more [tiles](Tile) than the [rack capacity](RackCapacity).
    #[error("player {player_id} cannot hold {tiles_len} tiles on a rack of {rack_capacity}")]
    RackOverflow {
        /// The player whose rack would overflow.
        player_id: PlayerId,
        /// The number of [tiles](Tile) the rack would hold.
        tiles_len: usize,
        /// The number of [tiles](Tile) the rack can hold.
        rack_capacity: usize,
    },
    /// Attempting to change a score past the bounds of [Score].
    #[error("player {player_id} cannot add {points} points to a score of {score}")]
    ScoreOverflow {
        /// The player whose score would overflow.
        player_id: PlayerId,
        /// The score before the change.
        score: Score,
        /// The points which would be added, negative when subtracted.
        points: Score,
    },
}

/// Owns one participant's rack, score, consecutive passes, and surrender flag. Once a
/// player surrenders, their rack, score, and passes cannot change.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    id: PlayerId,
    rack_capacity: RackCapacity,
    rack: Rack,
    score: Score,
    consecutive_passes: ConsecutivePasses,
    has_surrendered: bool,
}

impl Player {
    /// # Returns
    ///
    /// A [`Player`] with an empty rack, no points, and no passes.
    pub fn new(id: PlayerId, rack_capacity: RackCapacity) -> Player {
        Player {
            id,
            rack_capacity,
            rack: Rack::with_capacity(rack_capacity.value()),
            score: 0,
            consecutive_passes: ConsecutivePasses::INITIAL,
            has_surrendered: false,
        }
    }

    /// Uniquely identifies the player.
    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The number of [tiles](Tile) the player can hold.
    #[inline]
    pub fn rack_capacity(&self) -> RackCapacity {
        self.rack_capacity
    }

    /// The [tiles](Tile) the player holds.
    #[inline]
    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    /// The number of points the player holds.
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    /// The number of turns the player has passed in a row.
    #[inline]
    pub fn consecutive_passes(&self) -> ConsecutivePasses {
        self.consecutive_passes
    }

    /// Whether the player has surrendered.
    #[inline]
    pub fn has_surrendered(&self) -> bool {
        self.has_surrendered
    }

    /// Whether the player holds some [tile](Tile).
    #[inline]
    pub fn has_any_tiles(&self) -> bool {
        !self.rack.is_empty()
    }

    /// The sum of the points of every [tile](Tile) the player holds.
    pub fn remaining_tiles_points(&self) -> Score {
        self.rack.iter().map(|tile| Score::from(tile.points())).sum()
    }

    /// # Errors
    ///
    /// * [PlayerError::HasSurrendered] Attempting to pass after surrendering.
    pub fn increment_consecutive_passes(&mut self) -> Result<(), PlayerError> {
        self.check_has_not_surrendered()?;
        self.consecutive_passes = self.consecutive_passes.increment();
        Ok(())
    }

    /// # Errors
    ///
    /// * [PlayerError::HasSurrendered] Attempting to act after surrendering.
    pub fn reset_consecutive_passes(&mut self) -> Result<(), PlayerError> {
        self.check_has_not_surrendered()?;
        self.consecutive_passes = ConsecutivePasses::INITIAL;
        Ok(())
    }

    /// Marks the player as surrendered. Surrendering again does nothing.
    pub fn surrender(&mut self) {
        self.has_surrendered = true;
    }

    /// Appends `tiles` to the end of the rack.
    ///
    /// # Errors
    ///
    /// * [PlayerError::HasSurrendered] Attempting to draw after surrendering.
    /// * [PlayerError::RackOverflow] Attempting to hold more [tiles](Tile) than the
    /// [rack capacity](RackCapacity).
    pub fn add_tiles_to_rack(&mut self, tiles: &[Tile]) -> Result<(), PlayerError> {
        self.check_has_not_surrendered()?;

        let tiles_len = self.rack.len() + tiles.len();
        let rack_capacity = self.rack_capacity.value();
        if tiles_len > rack_capacity {
            return Err(PlayerError::RackOverflow {
                player_id: self.id,
                tiles_len,
                rack_capacity,
            });
        }

        self.rack.extend_from_slice(tiles);
        Ok(())
    }

    /// Removes the first matching copy of each of `tiles` from the rack. Either every
    /// [tile](Tile) is removed or none are.
    ///
    /// # Errors
    ///
    /// * [PlayerError::HasSurrendered] Attempting to play after surrendering.
    /// * [PlayerError::DoesNotOwnTile] Attempting to remove a [tile](Tile) which is not on
    /// the rack, or more copies of a [tile](Tile) than the rack holds.
    pub fn remove_tiles_from_rack(&mut self, tiles: &[Tile]) -> Result<(), PlayerError> {
        self.check_has_not_surrendered()?;

        // Cannot filter by tile since tiles might request a subset of duplicate tiles
        let mut rack = self.rack.clone();
        for tile in tiles {
            let Some(index) = rack.iter().position(|held| held == tile) else {
                return Err(PlayerError::DoesNotOwnTile {
                    player_id: self.id,
                    tile: *tile,
                });
            };
            rack.remove(index);
        }

        self.rack = rack;
        Ok(())
    }

    /// # Errors
    ///
    /// * [PlayerError::HasSurrendered] Attempting to score after surrendering.
    /// * [PlayerError::ScoreOverflow] The score would not fit in a [Score].
    pub fn increment_points(&mut self, points: Score) -> Result<(), PlayerError> {
        self.check_has_not_surrendered()?;
        self.score = self.checked_score(points)?;
        Ok(())
    }

    /// Subtracts the [points of every tile held](Player::remaining_tiles_points)
    /// from the score.
    ///
    /// # Errors
    ///
    /// * [PlayerError::HasSurrendered] Attempting to score after surrendering.
    /// * [PlayerError::ScoreOverflow] The score would not fit in a [Score].
    pub fn subtract_remaining_tiles_points_from_score(&mut self) -> Result<(), PlayerError> {
        self.check_has_not_surrendered()?;
        let remaining_tiles_points = self.remaining_tiles_points();
        self.score = self.checked_score(-remaining_tiles_points)?;
        Ok(())
    }

    /// # Errors
    ///
    /// * [PlayerError::HasSurrendered] Attempting to score after surrendering.
    /// * [PlayerError::ScoreOverflow] Adding `points` would not fit in a [Score].
    pub fn check_increment_points(&self, points: Score) -> Result<(), PlayerError> {
        self.check_has_not_surrendered()?;
        self.checked_score(points).map(|_| ())
    }

    fn checked_score(&self, points: Score) -> Result<Score, PlayerError> {
        self.score
            .checked_add(points)
            .ok_or(PlayerError::ScoreOverflow {
                player_id: self.id,
                score: self.score,
                points,
            })
    }

    fn check_has_not_surrendered(&self) -> Result<(), PlayerError> {
        if self.has_surrendered {
            return Err(PlayerError::HasSurrendered { player_id: self.id });
        }

        Ok(())
    }
}
