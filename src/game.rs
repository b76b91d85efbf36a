use crate::{
    Bag, BagError, Board, MaximumConsecutivePasses, Player, PlayerError, PlayerId, Players, Score,
    Winners, MAXIMUM_PLAYERS, MINIMUM_PLAYERS,
};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub use game_view::*;

mod exchange;
mod game_view;
mod pass;
mod surrender;
#[cfg(test)]
mod test_setup;
mod write;

/// Uniquely identifies a [game](Game).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct GameId(Uuid);

impl GameId {
    /// # Returns
    ///
    /// A new, random [`GameId`].
    pub fn new() -> GameId {
        GameId(Uuid::new_v4())
    }

    /// # Returns
    ///
    /// A [`GameId`] wrapping an existing `uuid`.
    #[inline]
    pub fn from_uuid(uuid: Uuid) -> GameId {
        GameId(uuid)
    }

    /// The wrapped uuid.
    #[inline]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        GameId::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Describes the reasons why a [game](Game) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewGameError {
    /// Attempting to start with fewer than [MINIMUM_PLAYERS] players.
    #[error("{players_len} players are too few to start")]
    TooFewPlayers {
        /// The number of players given.
        players_len: usize,
    },
    /// Attempting to start with more than [MAXIMUM_PLAYERS] players.
    #[error("{players_len} players are too many to start")]
    TooManyPlayers {
        /// The number of players given.
        players_len: usize,
    },
    /// Attempting to start with the same player more than once.
    #[error("players {duplicate_player_ids:?} were given more than once")]
    DuplicatePlayers {
        /// Ids of players given more than once.
        duplicate_player_ids: BTreeSet<PlayerId>,
    },
    /// Attempting to start on the turn of a player who is not playing.
    #[error("current player {current_player_id} is missing from game {game_id}")]
    CurrentPlayerMissing {
        /// The game being created.
        game_id: GameId,
        /// The id of the player who should be on turn.
        current_player_id: PlayerId,
    },
}

/// Describes the reason why a command could not be executed on a [game](Game).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum GameError {
    /// Attempting any command after the game has ended.
    #[error("game {game_id} has already ended")]
    HasEnded {
        /// The ended game.
        game_id: GameId,
    },
    /// Attempting any command as a player whose turn it is not.
    #[error("player {player_id} is not on turn in game {game_id}")]
    PlayerIsNotOnTurn {
        /// The game the command was sent to.
        game_id: GameId,
        /// The player who sent the command.
        player_id: PlayerId,
        /// The player whose turn it is.
        current_player_id: PlayerId,
    },
    /// Advancing the turn when every other player has surrendered.
    #[error("all opponents have surrendered in game {game_id}")]
    AllOpponentsHaveSurrendered {
        /// The game whose turn could not advance.
        game_id: GameId,
    },
    /// Surrendering when no player is left who has not surrendered. The surrendering player
    /// stays surrendered.
    #[error("no player remains in game {game_id}")]
    NoPlayersRemaining {
        /// The game left without players.
        game_id: GameId,
    },
    /// Attempting to exchange no [tiles](crate::Tile).
    #[error("cannot exchange no tiles")]
    EmptyExchange,
    /// Attempting to exchange while the bag holds fewer [tiles](crate::Tile) than a rack.
    #[error("cannot exchange with {bag_len} tiles in the bag and a rack of {rack_capacity}")]
    NotEnoughTilesInBag {
        /// The number of [tiles](crate::Tile) in the bag.
        bag_len: usize,
        /// The number of [tiles](crate::Tile) the current player's rack can hold.
        rack_capacity: usize,
    },
    /// Attempting to exchange more [tiles](crate::Tile) than a rack can hold.
    #[error("cannot exchange {exchanges_len} tiles with a rack of {rack_capacity}")]
    TooManyTilesToExchange {
        /// The number of [tiles](crate::Tile) requested.
        exchanges_len: usize,
        /// The number of [tiles](crate::Tile) the current player's rack can hold.
        rack_capacity: usize,
    },
    /// The current player rejected the change.
    #[error(transparent)]
    Player(#[from] PlayerError),
    /// The bag rejected the draw.
    #[error(transparent)]
    Bag(#[from] BagError),
}

/// Owns the state of one game and implements the commands that advance it. Created from
/// [Game::new] or [Game::start].
///
/// Players take turns in the order they were given, skipping players who have surrendered.
/// On their turn, the current player either [passes](Game::pass),
/// [surrenders](Game::surrender), [exchanges tiles](Game::exchange_tiles), or
/// [writes words](Game::write_words). The game ends when every remaining player has passed
/// [too many times in a row](MaximumConsecutivePasses), when one player is left who has not
/// surrendered, or when the current player plays their last [tile](crate::Tile) with an
/// empty bag. The remaining players with the highest score win.
#[derive(Debug)]
pub struct Game<B> {
    /// Uniquely identifies the game.
    id: GameId,
    /// This is a bag of all the tiles that haven't been drawn yet.
    bag: Bag,
    /// Stores every written tile.
    board: B,
    /// The number of passes in a row that ends the game.
    maximum_consecutive_passes: MaximumConsecutivePasses,
    /// Every player in turn order.
    players: Players,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// Whether the game has ended. Never reset.
    has_ended: bool,
    /// Ids of the remaining players with the highest score. Empty until the game has ended.
    winners: Winners,
}

impl<B: Board> Game<B> {
    /// Checks that there are between [MINIMUM_PLAYERS] and [MAXIMUM_PLAYERS] players, that no
    /// player is given twice, and that the current player is one of the players.
    ///
    /// # Arguments
    ///
    /// * `id`: Uniquely identifies the game.
    /// * `bag`: This is a bag of all the tiles that haven't been drawn yet.
    /// * `board`: Stores every written tile.
    /// * `players`: Every player in turn order.
    /// * `current_player_id`: The id of the player whose turn it is.
    /// * `maximum_consecutive_passes`: The number of passes in a row that ends the game.
    ///
    /// # Errors
    ///
    /// * [NewGameError::TooFewPlayers] Attempting to start with fewer than [MINIMUM_PLAYERS]
    /// players.
    /// * [NewGameError::TooManyPlayers] Attempting to start with more than [MAXIMUM_PLAYERS]
    /// players.
    /// * [NewGameError::DuplicatePlayers] Attempting to start with the same player more than
    /// once.
    /// * [NewGameError::CurrentPlayerMissing] Attempting to start on the turn of a player who
    /// is not playing.
    pub fn new(
        id: GameId,
        bag: Bag,
        board: B,
        players: Players,
        current_player_id: PlayerId,
        maximum_consecutive_passes: MaximumConsecutivePasses,
    ) -> Result<Game<B>, HashSet<NewGameError>> {
        let current_player = Game::<B>::check(id, &players, current_player_id)?;

        debug!(
            game_id = %id,
            players_len = players.len(),
            bag_len = bag.tiles_count(),
            current_player_id = %current_player_id,
            "game created"
        );
        Ok(Game {
            id,
            bag,
            board,
            maximum_consecutive_passes,
            players,
            current_player,
            has_ended: false,
            winners: Winners::new(),
        })
    }

    /// Creates a [game](Game) with a new [GameId] where the first player takes the first turn.
    ///
    /// # Errors
    ///
    /// The same as [Game::new].
    pub fn start(
        bag: Bag,
        board: B,
        players: Players,
        maximum_consecutive_passes: MaximumConsecutivePasses,
    ) -> Result<Game<B>, HashSet<NewGameError>> {
        let id = GameId::new();
        let Some(first_player_id) = players.first().map(Player::id) else {
            return Err(HashSet::from([NewGameError::TooFewPlayers { players_len: 0 }]));
        };
        Game::new(
            id,
            bag,
            board,
            players,
            first_player_id,
            maximum_consecutive_passes,
        )
    }

    /// Uniquely identifies the game.
    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Whether the game has ended.
    #[inline]
    pub fn has_ended(&self) -> bool {
        self.has_ended
    }

    /// The id of the player whose turn it is.
    #[inline]
    pub fn current_player_id(&self) -> PlayerId {
        self.players[self.current_player].id()
    }

    /// The index of the player whose turn it is in [turn order](Game::players).
    #[inline]
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// Ids of the remaining players with the highest score. Empty until the game has ended.
    #[inline]
    pub fn winners(&self) -> &Winners {
        &self.winners
    }

    /// Every player in turn order.
    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// # Returns
    ///
    /// The player with `player_id` or `None` if they are not playing.
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == player_id)
    }

    /// This is a bag of all the tiles that haven't been drawn yet.
    #[inline]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Stores every written tile.
    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// The number of passes in a row that ends the game.
    #[inline]
    pub fn maximum_consecutive_passes(&self) -> MaximumConsecutivePasses {
        self.maximum_consecutive_passes
    }

    /// Checks the arguments of [Game::new] and returns all found errors.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    fn check(
        id: GameId,
        players: &Players,
        current_player_id: PlayerId,
    ) -> Result<usize, HashSet<NewGameError>> {
        let mut errors = HashSet::with_capacity(4);
        let players_len = players.len();
        if players_len < MINIMUM_PLAYERS {
            errors.insert(NewGameError::TooFewPlayers { players_len });
        }
        if players_len > MAXIMUM_PLAYERS {
            errors.insert(NewGameError::TooManyPlayers { players_len });
        }

        let duplicate_player_ids: BTreeSet<PlayerId> =
            players.iter().map(Player::id).duplicates().collect();
        if !duplicate_player_ids.is_empty() {
            errors.insert(NewGameError::DuplicatePlayers {
                duplicate_player_ids,
            });
        }

        let current_player = players
            .iter()
            .position(|player| player.id() == current_player_id);
        if current_player.is_none() {
            errors.insert(NewGameError::CurrentPlayerMissing {
                game_id: id,
                current_player_id,
            });
        }

        match current_player {
            Some(current_player) if errors.is_empty() => Ok(current_player),
            _ => Err(errors),
        }
    }

    /// Checks that the game has not ended and then that `player_id` is on turn.
    ///
    /// # Errors
    ///
    /// * [GameError::HasEnded] Attempting any command after the game has ended.
    /// * [GameError::PlayerIsNotOnTurn] Attempting any command as a player whose turn it
    /// is not.
    fn check_turn(&self, player_id: PlayerId) -> Result<(), GameError> {
        if self.has_ended {
            return Err(GameError::HasEnded { game_id: self.id });
        }

        let current_player_id = self.current_player_id();
        if player_id != current_player_id {
            return Err(GameError::PlayerIsNotOnTurn {
                game_id: self.id,
                player_id,
                current_player_id,
            });
        }

        Ok(())
    }

    /// An [iterator](Iterator) of every player who has not surrendered in turn order.
    fn non_surrendered_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players
            .iter()
            .filter(|player| !player.has_surrendered())
    }

    /// Advances to the next player in turn order who has not surrendered, wrapping around
    /// to the first player.
    ///
    /// # Errors
    ///
    /// * [GameError::AllOpponentsHaveSurrendered] Every other player has surrendered.
    fn next_turn(&mut self) -> Result<(), GameError> {
        let players_len = self.players.len();
        let next_player = (1..players_len)
            .map(|step| (self.current_player + step) % players_len)
            .find(|&index| !self.players[index].has_surrendered());

        let Some(next_player) = next_player else {
            warn!(game_id = %self.id, "cannot advance turn since all opponents have surrendered");
            return Err(GameError::AllOpponentsHaveSurrendered { game_id: self.id });
        };

        self.current_player = next_player;
        debug!(
            game_id = %self.id,
            current_player_id = %self.current_player_id(),
            "turn advanced"
        );
        Ok(())
    }

    /// Subtracts the points of the [tiles](crate::Tile) each remaining player holds from
    /// their own score. Callers stage `players` and commit them only when every score fits.
    fn subtract_remaining_tiles_points_from_scores(players: &mut Players) -> Result<(), GameError> {
        for player in players
            .iter_mut()
            .filter(|player| !player.has_surrendered())
        {
            player.subtract_remaining_tiles_points_from_score()?;
        }

        Ok(())
    }

    /// Adds the points of the [tiles](crate::Tile) each remaining opponent holds to the
    /// score of the player at `current_player`.
    fn add_opponents_remaining_tiles_points(
        players: &mut Players,
        current_player: usize,
    ) -> Result<(), GameError> {
        let opponents_points: Score = players
            .iter()
            .enumerate()
            .filter(|&(index, player)| index != current_player && !player.has_surrendered())
            .map(|(_, player)| player.remaining_tiles_points())
            .sum();

        players[current_player].increment_points(opponents_points)?;
        Ok(())
    }

    /// Ends the game where the remaining players with the highest score win. Must only be
    /// called once.
    fn end_game(&mut self) {
        let highest_score = self.non_surrendered_players().map(Player::score).max();
        let winners: Winners = self
            .non_surrendered_players()
            .filter(|player| Some(player.score()) == highest_score)
            .map(Player::id)
            .collect();

        self.has_ended = true;
        self.winners = winners;
        info!(game_id = %self.id, winners = ?self.winners, "game ended");
    }
}
