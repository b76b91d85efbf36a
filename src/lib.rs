//! Concrete structs to represent and protect the state of a multiplayer tile-and-word board game
//! with methods to progress through the turns of the game.
//!
//! ## Summary
//!
//! A [game](Game) owns a [bag](Bag) of undrawn [tiles](Tile), a [board](Board), and between
//! [MINIMUM_PLAYERS] and [MAXIMUM_PLAYERS] [players](Player) in turn order. Each player holds
//! a rack of [tiles](Tile), a score, a count of [passes in a row](ConsecutivePasses), and
//! whether they have surrendered. On their turn, the current player either
//! [passes](Game::pass), [surrenders](Game::surrender),
//! [exchanges tiles](Game::exchange_tiles), or [writes words](Game::write_words). The
//! remaining players with the highest score win once the game has ended.
//!
//! The game does not validate words or score them. Some move validation outside of this crate
//! accepts a move and describes it as [written words](WrittenWords): the [tiles](Tile) consumed,
//! where each of them is written, and the points earned.
//!
//! ## How is the game created?
//!
//! [Game::new] checks the number of players, that no player is given twice, and that the
//! current player is playing, and returns every failed check at once. [Game::start] creates
//! a new [GameId] and lets the first player take the first turn. Racks are
//! [limited](RackCapacity) and the number of [passes in a row](MaximumConsecutivePasses) that
//! ends the game is configurable.
//!
//! ## How is the game advanced?
//!
//! Every command first fails when the game [has ended](GameError::HasEnded) and then when the
//! sender [is not on turn](GameError::PlayerIsNotOnTurn). After a successful command, the
//! turn advances to the next player in turn order who has not surrendered, wrapping around to
//! the first player.
//!
//! * [Passing](Game::pass) counts one more pass for the current player.
//! * [Surrendering](Game::surrender) removes the current player from the turn order and from
//! the winners.
//! * [Exchanging](Game::exchange_tiles) returns [tiles](Tile) to the bag, shuffles the bag, and
//! draws the same number of [tiles](Tile).
//! * [Writing](Game::write_words) removes the consumed [tiles](Tile) from the rack, draws as many
//! as are available, earns points, and places the [tiles](Tile) on the board.
//!
//! Exchanging and writing reset the current player's passes in a row.
//!
//! ## How is the game ended?
//!
//! * Every remaining player has passed too many times in a row. Each of them loses the points
//! of the [tiles](Tile) they hold.
//! * One player is left who has not surrendered. They win regardless of score.
//! * The current player writes their last [tile](Tile) while the bag is empty. They earn the
//! points of the [tiles](Tile) held by their remaining opponents, and each remaining player
//! loses the points of the [tiles](Tile) they hold.
//!
//! ## How is the game viewed?
//!
//! To obtain an immutable representation of the current state of the game visible to all
//! players, call [Game::view]. [Game::rack] shares private information for each individual
//! player.
//!
//! ## How is the game run?
//!
//! [process_input] asks the current [participant](Participant) for a [command](Command) until
//! one is accepted, and [send_updates] sends every participant the public view and their rack.
//!
//! ## How is the game tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. The game implements
//! methods to get mutable references to its properties, helper methods to add random data to
//! specific properties, and a constructor for games that have already ended.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use game::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use runtime::*;
pub use settings::*;
pub use tile::*;
pub use types::*;
pub use words::*;

mod bag;
mod board;
mod consts;
mod game;
mod player;
#[cfg(test)]
mod random;
mod runtime;
mod settings;
mod tile;
mod types;
mod words;
