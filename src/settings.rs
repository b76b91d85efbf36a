use crate::{DEFAULT_MAXIMUM_CONSECUTIVE_PASSES, DEFAULT_RACK_CAPACITY};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Describes the reason why a setting could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum SettingsError {
    /// Attempting to create a [RackCapacity] outside of [RackCapacity::RANGE].
    #[error("rack capacity {value} is outside of 2..=30")]
    RackCapacityOutOfRange {
        /// The rejected number of tiles.
        value: usize,
    },
    /// Attempting to create a [MaximumConsecutivePasses] outside of
    /// [MaximumConsecutivePasses::RANGE].
    #[error("maximum consecutive passes {value} is outside of 1..=20")]
    MaximumConsecutivePassesOutOfRange {
        /// The rejected number of passes.
        value: u32,
    },
}

/// The number of [tiles](crate::Tile) each player can hold on their rack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct RackCapacity(usize);

impl RackCapacity {
    /// The allowed number of [tiles](crate::Tile) on a rack. `2` to `30` inclusive.
    pub const RANGE: RangeInclusive<usize> = 2..=30;

    /// # Errors
    ///
    /// * [SettingsError::RackCapacityOutOfRange] when `value` is outside of
    /// [RackCapacity::RANGE].
    pub fn new(value: usize) -> Result<RackCapacity, SettingsError> {
        if !RackCapacity::RANGE.contains(&value) {
            return Err(SettingsError::RackCapacityOutOfRange { value });
        }

        Ok(RackCapacity(value))
    }

    /// The number of [tiles](crate::Tile).
    #[inline]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for RackCapacity {
    fn default() -> Self {
        RackCapacity(DEFAULT_RACK_CAPACITY)
    }
}

/// The number of consecutive passes every non-surrendered player must reach for the game
/// to end in a stalemate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MaximumConsecutivePasses(u32);

impl MaximumConsecutivePasses {
    /// The allowed number of consecutive passes. `1` to `20` inclusive.
    pub const RANGE: RangeInclusive<u32> = 1..=20;

    /// # Errors
    ///
    /// * [SettingsError::MaximumConsecutivePassesOutOfRange] when `value` is outside of
    /// [MaximumConsecutivePasses::RANGE].
    pub fn new(value: u32) -> Result<MaximumConsecutivePasses, SettingsError> {
        if !MaximumConsecutivePasses::RANGE.contains(&value) {
            return Err(SettingsError::MaximumConsecutivePassesOutOfRange { value });
        }

        Ok(MaximumConsecutivePasses(value))
    }

    /// The number of passes.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for MaximumConsecutivePasses {
    fn default() -> Self {
        MaximumConsecutivePasses(DEFAULT_MAXIMUM_CONSECUTIVE_PASSES)
    }
}

const _: () = assert!(DEFAULT_RACK_CAPACITY >= 2 && DEFAULT_RACK_CAPACITY <= 30);
const _: () = assert!(
    DEFAULT_MAXIMUM_CONSECUTIVE_PASSES >= 1 && DEFAULT_MAXIMUM_CONSECUTIVE_PASSES <= 20
);
