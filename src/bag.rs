use crate::Tile;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Describes the reason why [tiles](Tile) could not be drawn from the [bag](Bag).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum BagError {
    /// Attempting to draw no [tiles](Tile).
    #[error("cannot draw a non-positive number of tiles")]
    NonPositiveCount,
}

/// Randomizes the order of [tiles](Tile) in place. Shared between [bags](Bag), so
/// implementors only need `&self`.
pub trait Shuffle: Debug + Send + Sync {
    /// Reorders `tiles` in place.
    fn shuffle(&self, tiles: &mut [Tile]);
}

/// Shuffles with a Fisher-Yates shuffle over the thread-local random number generator.
#[derive(Debug, Copy, Clone, Default)]
pub struct ThreadRngShuffler;

impl Shuffle for ThreadRngShuffler {
    fn shuffle(&self, tiles: &mut [Tile]) {
        tiles.shuffle(&mut rand::thread_rng());
    }
}

/// Shuffles with a Fisher-Yates shuffle over a seeded random number generator, so the
/// same seed always produces the same sequence of shuffles.
#[derive(Debug)]
pub struct SeededShuffler {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededShuffler {
    /// # Returns
    ///
    /// A [`SeededShuffler`] whose shuffles are determined by `seed`.
    pub fn new(seed: u64) -> SeededShuffler {
        SeededShuffler {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Shuffle for SeededShuffler {
    fn shuffle(&self, tiles: &mut [Tile]) {
        // a poisoned rng is still a valid rng
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        tiles.shuffle(&mut *rng);
    }
}

/// Leaves [tiles](Tile) in their order.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoShuffle;

impl Shuffle for NoShuffle {
    fn shuffle(&self, _tiles: &mut [Tile]) {}
}

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
#[derive(Debug, Clone)]
pub struct Bag {
    tiles: Vec<Tile>,
    shuffler: Arc<dyn Shuffle>,
}

impl Bag {
    /// # Returns
    ///
    /// An empty [`Bag`] which shuffles with `shuffler`.
    pub fn new(shuffler: Arc<dyn Shuffle>) -> Bag {
        Bag {
            tiles: Vec::new(),
            shuffler,
        }
    }

    /// # Returns
    ///
    /// A [`Bag`] holding `tiles` in their given order which shuffles with `shuffler`.
    /// Call [Bag::shuffle_tiles] before relying on a random order.
    pub fn with_tiles(tiles: Vec<Tile>, shuffler: Arc<dyn Shuffle>) -> Bag {
        Bag { tiles, shuffler }
    }

    /// The number of [tiles](Tile) in the bag.
    #[inline]
    pub fn tiles_count(&self) -> usize {
        self.tiles.len()
    }

    /// The [tiles](Tile) in the bag in drawing order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Appends `tiles` to the end of the bag.
    pub fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// Randomizes the order of every [tile](Tile) in the bag with the bag's shuffler.
    pub fn shuffle_tiles(&mut self) {
        self.shuffler.shuffle(&mut self.tiles);
    }

    /// Removes up to `count` [tiles](Tile) from the front of the bag. When the bag holds
    /// fewer than `count` [tiles](Tile), every remaining [tile](Tile) is drawn, so the
    /// returned vector may be shorter than requested.
    ///
    /// # Errors
    ///
    /// * [BagError::NonPositiveCount] Attempting to draw no [tiles](Tile).
    pub fn draw_tiles(&mut self, count: usize) -> Result<Vec<Tile>, BagError> {
        if count == 0 {
            return Err(BagError::NonPositiveCount);
        }

        let drawn = count.min(self.tiles.len());
        Ok(self.tiles.drain(..drawn).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_tiles, standard_tiles};
    use itertools::Itertools;
    use rand::Rng;

    /// Reverses [tiles](Tile) so tests can tell whether the bag was shuffled.
    #[derive(Debug)]
    struct ReverseShuffle;

    impl Shuffle for ReverseShuffle {
        fn shuffle(&self, tiles: &mut [Tile]) {
            tiles.reverse();
        }
    }

    #[test]
    fn add_tiles() {
        let mut bag = Bag::new(Arc::new(NoShuffle));
        let tiles = random_tiles(&mut rand::thread_rng(), 5);

        bag.add_tiles(tiles.clone());
        bag.add_tiles(tiles.clone());

        assert_eq!(10, bag.tiles_count());
        assert_eq!(tiles, bag.tiles()[5..]);
    }

    #[test]
    fn draw_zero() {
        let mut bag = Bag::with_tiles(standard_tiles(), Arc::new(NoShuffle));

        assert_eq!(BagError::NonPositiveCount, bag.draw_tiles(0).unwrap_err());
        assert_eq!(standard_tiles().len(), bag.tiles_count());
    }

    #[test]
    fn draw_from_front() {
        let tiles = random_tiles(&mut rand::thread_rng(), 10);
        let mut bag = Bag::with_tiles(tiles.clone(), Arc::new(NoShuffle));

        let drawn = bag.draw_tiles(3).unwrap();

        assert_eq!(tiles[..3], drawn);
        assert_eq!(tiles[3..], *bag.tiles());
    }

    #[test]
    fn draw_more_than_available() {
        let mut rng = rand::thread_rng();
        let bag_len = rng.gen_range(0..10);
        let mut bag = Bag::with_tiles(random_tiles(&mut rng, bag_len), Arc::new(NoShuffle));

        let drawn = bag.draw_tiles(bag_len + rng.gen_range(1..10)).unwrap();

        assert_eq!(bag_len, drawn.len());
        assert_eq!(0, bag.tiles_count());
    }

    #[test]
    fn shuffle_uses_shuffler() {
        let tiles = random_tiles(&mut rand::thread_rng(), 10);
        let mut bag = Bag::with_tiles(tiles.clone(), Arc::new(ReverseShuffle));

        bag.shuffle_tiles();

        assert_eq!(tiles.into_iter().rev().collect_vec(), bag.tiles());
    }

    #[test]
    fn shuffle_keeps_tiles() {
        let mut bag = Bag::with_tiles(standard_tiles(), Arc::new(ThreadRngShuffler));

        bag.shuffle_tiles();

        assert_eq!(
            standard_tiles().into_iter().counts(),
            bag.tiles().iter().copied().counts()
        );
    }

    #[test]
    fn seeded_shuffles_repeat() {
        let mut first = Bag::with_tiles(standard_tiles(), Arc::new(SeededShuffler::new(42)));
        let mut second = Bag::with_tiles(standard_tiles(), Arc::new(SeededShuffler::new(42)));

        first.shuffle_tiles();
        second.shuffle_tiles();

        assert_eq!(first.tiles(), second.tiles());
        assert_ne!(standard_tiles(), first.tiles());
    }

    #[test]
    fn shared_shuffler() {
        let shuffler: Arc<dyn Shuffle> = Arc::new(SeededShuffler::new(7));
        let mut first = Bag::with_tiles(standard_tiles(), Arc::clone(&shuffler));
        let mut second = Bag::with_tiles(standard_tiles(), shuffler);

        first.shuffle_tiles();
        second.shuffle_tiles();

        // the second bag continues the sequence of the first
        assert_ne!(first.tiles(), second.tiles());
    }
}
