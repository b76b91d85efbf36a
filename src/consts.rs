use konst::primitive::parse_usize;
use konst::{option, result};

/// The minimum number of players in a [game](crate::Game). `2` players.
///
/// # See Also
///
/// * [MAXIMUM_PLAYERS]
/// * [Game::new](crate::Game::new)
pub const MINIMUM_PLAYERS: usize = 2;
/// The maximum number of players in a [game](crate::Game). `4` players.
///
/// # See Also
///
/// * [MINIMUM_PLAYERS]
/// * [Game::new](crate::Game::new)
pub const MAXIMUM_PLAYERS: usize = 4;
/// The default number of [tiles](crate::Tile) a rack can hold. `7` tiles per rack.
///
/// # See Also
///
/// * [RackCapacity](crate::RackCapacity)
pub const DEFAULT_RACK_CAPACITY: usize = 7;
/// The default number of consecutive passes every player must reach before the game ends
/// in a stalemate. `2` passes.
///
/// # See Also
///
/// * [MaximumConsecutivePasses](crate::MaximumConsecutivePasses)
/// * [Game::pass](crate::Game::pass)
pub const DEFAULT_MAXIMUM_CONSECUTIVE_PASSES: u32 = 2;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to
/// [the maximum number of players](MAXIMUM_PLAYERS).
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [Winners](crate::Winners)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    MAXIMUM_PLAYERS
);
/// All racks will be stored on the stack until the number of [tiles](crate::Tile) in a rack
/// becomes greater than `RACK_CAPACITY`. When there are more than `RACK_CAPACITY`
/// [tiles](crate::Tile) in a rack, its data will be heap allocated. If the environment variable
/// named `RACK_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to
/// [the default rack capacity](DEFAULT_RACK_CAPACITY).
///
/// This only tunes memory layout. The number of [tiles](crate::Tile) a player may hold is
/// enforced by [RackCapacity](crate::RackCapacity).
///
/// # See Also
///
/// * [Rack](crate::Rack)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    DEFAULT_RACK_CAPACITY
);
const _: () = assert!(MINIMUM_PLAYERS <= MAXIMUM_PLAYERS);
const _: () = assert!(PLAYER_CAPACITY > 0);
const _: () = assert!(RACK_CAPACITY > 0);
