use crate::{Player, PlayerId, Position, Tile, PLAYER_CAPACITY, RACK_CAPACITY};
use bimap::BiBTreeMap;
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// The number of points held by a player. Can become negative once the
/// points of unplayed [tiles](Tile) are subtracted at the end of the game.
///
/// # See Also
///
/// * [Player::score](crate::Player::score)
/// * [WrittenWords::total_points](crate::WrittenWords::total_points)
pub type Score = i32;
/// A bimap of indexes of [tiles](Tile) consumed by
/// [written words](crate::WrittenWords) to [positions](Position) on the board.
///
/// # See Also
///
/// * [Position]
/// * [WrittenWords](crate::WrittenWords)
/// * [Game::write_words](crate::Game::write_words)
pub type Placements = BiBTreeMap<usize, Position>;
/// A vector of [tiles](Tile) held by one player.
///
/// # See Also
///
/// * [Tile]
/// * [RACK_CAPACITY]
/// * [Player](crate::Player)
pub type Rack = SmallVec<[Tile; RACK_CAPACITY]>;
/// An ordered vector of every player in a [game](crate::Game).
///
/// # See Also
///
/// * [Player]
/// * [PLAYER_CAPACITY]
/// * [Game::new](crate::Game::new)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// An ordered set of ids of the players who won a [game](crate::Game).
///
/// # See Also
///
/// * [PlayerId]
/// * [Game::winners](crate::Game::winners)
pub type Winners = BTreeSet<PlayerId>;
