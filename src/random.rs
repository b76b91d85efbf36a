use crate::{
    Bag, Player, PlayerId, Players, RackCapacity, Score, Tile, MAXIMUM_PLAYERS, MINIMUM_PLAYERS,
};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A vector of `len` random [tiles](Tile).
pub fn random_tiles<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Tile> {
    (0..len).map(|_| rng.gen::<Tile>()).collect()
}

/// It inserts a random, small number of players between [MINIMUM_PLAYERS] and
/// [MAXIMUM_PLAYERS] inclusive with empty racks of `rack_capacity` into players.
///
/// # Returns
///
/// The number of additional players.
pub fn random_players<R: Rng + ?Sized>(
    rng: &mut R,
    players: &mut Players,
    rack_capacity: RackCapacity,
) -> usize {
    let players_len = rng.gen_range(MINIMUM_PLAYERS..=MAXIMUM_PLAYERS);
    for _ in 0..players_len {
        players.push(Player::new(PlayerId::new(), rack_capacity));
    }

    players_len
}

/// It inserts a random, small, non-zero number of [tiles](Tile) into the bag.
///
/// # Returns
///
/// The number of additional [tiles](Tile) in the bag.
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R, bag: &mut Bag) -> usize {
    let bag_len = rng.gen_range(10..20);
    bag.add_tiles(random_tiles(rng, bag_len));

    bag_len
}

/// Fills the rack of each player who has not surrendered with the same random, small,
/// non-zero number of [tiles](Tile), never more than their rack can hold.
///
/// # Returns
///
/// The number of [tiles](Tile) added to each rack.
pub fn random_racks<R: Rng + ?Sized>(rng: &mut R, players: &mut Players) -> usize {
    let free = players
        .iter()
        .map(|player| player.rack_capacity().value() - player.rack().len())
        .min()
        .unwrap_or(0);
    if free == 0 {
        return 0;
    }

    let rack_len = rng.gen_range(1..=free);
    for player in players.iter_mut().filter(|player| !player.has_surrendered()) {
        let tiles = random_tiles(rng, rack_len);
        player
            .add_tiles_to_rack(&tiles)
            .unwrap_or_else(|error| unreachable!("rack should have room: {error}"));
    }

    rack_len
}

/// Gives each player who has not surrendered a random, medium, non-zero number of points.
pub fn random_scores<R: Rng + ?Sized>(rng: &mut R, players: &mut Players) {
    let possible_points: Uniform<Score> = Uniform::from(100..200);
    for player in players.iter_mut().filter(|player| !player.has_surrendered()) {
        player
            .increment_points(possible_points.sample(rng))
            .unwrap_or_else(|error| unreachable!("player should not have surrendered: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NoShuffle, DEFAULT_RACK_CAPACITY};
    use std::sync::Arc;

    #[test]
    fn random_tiles_len() {
        let mut rng = rand::thread_rng();
        let len = rng.gen_range(0..20);

        assert_eq!(len, random_tiles(&mut rng, len).len());
    }

    #[test]
    fn random_players_empty() {
        let mut players = Players::new();

        let players_len =
            random_players(&mut rand::thread_rng(), &mut players, RackCapacity::default());

        assert_eq!(players_len, players.len());
        assert!((MINIMUM_PLAYERS..=MAXIMUM_PLAYERS).contains(&players_len));
        for player in &players {
            assert!(!player.has_any_tiles());
            assert_eq!(0, player.score());
        }
    }

    #[test]
    fn random_bag_empty() {
        let mut bag = Bag::new(Arc::new(NoShuffle));

        let bag_len = random_bag(&mut rand::thread_rng(), &mut bag);

        assert_eq!(bag_len, bag.tiles_count());
    }

    #[test]
    fn random_racks_empty() {
        let mut rng = rand::thread_rng();
        let mut players = Players::new();
        random_players(&mut rng, &mut players, RackCapacity::default());

        let rack_len = random_racks(&mut rng, &mut players);

        assert!((1..=DEFAULT_RACK_CAPACITY).contains(&rack_len));
        for player in &players {
            assert_eq!(rack_len, player.rack().len());
        }
    }

    #[test]
    fn random_scores_zeros() {
        let mut rng = rand::thread_rng();
        let mut players = Players::new();
        random_players(&mut rng, &mut players, RackCapacity::default());

        random_scores(&mut rng, &mut players);

        for player in &players {
            assert!(player.score() >= 100);
        }
    }
}
