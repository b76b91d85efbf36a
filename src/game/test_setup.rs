use crate::{
    random_bag, random_players, random_racks, random_scores, Bag, Board, Game, GameId, MapBoard,
    MaximumConsecutivePasses, NewGameError, NoShuffle, Player, PlayerId, Players, RackCapacity,
    Winners, PLAYER_CAPACITY,
};
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

impl Game<MapBoard> {
    /// Generates an empty [Game] with no players.
    ///
    /// # Returns
    ///
    /// A [Game] struct with the properties set to the following:
    /// * `bag`: An empty bag which never shuffles.
    /// * `board`: An empty board.
    /// * `maximum_consecutive_passes`: The default.
    /// * `players`: An empty players vector.
    /// * `current_player`: `0`.
    pub fn empty_game() -> Game<MapBoard> {
        Game {
            id: GameId::new(),
            bag: Bag::new(Arc::new(NoShuffle)),
            board: MapBoard::new(),
            maximum_consecutive_passes: MaximumConsecutivePasses::default(),
            players: Players::with_capacity(PLAYER_CAPACITY),
            current_player: 0,
            has_ended: false,
            winners: Winners::new(),
        }
    }
}

impl<B: Board> Game<B> {
    /// Creates a [Game] that has already ended with `winners`, after the same checks as
    /// [Game::new].
    pub fn new_ended(
        id: GameId,
        bag: Bag,
        board: B,
        players: Players,
        current_player_id: PlayerId,
        winners: Winners,
    ) -> Result<Game<B>, HashSet<NewGameError>> {
        let mut game = Game::new(
            id,
            bag,
            board,
            players,
            current_player_id,
            MaximumConsecutivePasses::default(),
        )?;
        game.has_ended = true;
        game.winners = winners;
        Ok(game)
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.players`.
    pub fn mut_players(&mut self) -> &mut Players {
        &mut self.players
    }

    /// A mutable reference to `self.current_player`.
    pub fn mut_current_player(&mut self) -> &mut usize {
        &mut self.current_player
    }

    /// A mutable reference to `self.maximum_consecutive_passes`.
    pub fn mut_maximum_consecutive_passes(&mut self) -> &mut MaximumConsecutivePasses {
        &mut self.maximum_consecutive_passes
    }

    /// Pushes `players_len` players with empty racks of the default capacity.
    pub fn push_players(&mut self, players_len: usize) {
        self.players.extend(
            (0..players_len).map(|_| Player::new(PlayerId::new(), RackCapacity::default())),
        );
    }

    /// It inserts a random, small number of players with empty racks.
    ///
    /// # Returns
    ///
    /// The number of additional players.
    pub fn random_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_players(rng, &mut self.players, RackCapacity::default())
    }

    /// It inserts a random, small, non-zero number of [tiles](crate::Tile) into the bag.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](crate::Tile) in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_bag(rng, &mut self.bag)
    }

    /// Pushes the same random, small, non-zero number of [tiles](crate::Tile)
    /// into each remaining player's rack.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](crate::Tile) in each remaining player's rack.
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_racks(rng, &mut self.players)
    }

    /// Gives each remaining player a random, medium, non-zero number of points.
    pub fn random_scores<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        random_scores(rng, &mut self.players)
    }

    /// Sets the current player to a random index of players.
    ///
    /// # Panics
    ///
    /// If there are no players.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.current_player = rng.gen_range(0..self.players.len());
        self.current_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{standard_tiles, GameError, Position, Tile, WrittenWords};
    use map_macro::btree_set;
    use tap::Tap;

    #[test]
    fn empty_game() {
        let game = Game::empty_game();

        assert_eq!(0, game.bag.tiles_count());
        assert!(game.board.tiles().is_empty());
        assert!(game.players.is_empty());
        assert_eq!(0, game.current_player);
        assert!(!game.has_ended);
    }

    #[test]
    fn new_ended_rejects_commands() {
        let tile = Tile::letter('A', 1);
        let players: Players = (0..2)
            .map(|_| {
                Player::new(PlayerId::new(), RackCapacity::default())
                    .tap_mut(|player| player.add_tiles_to_rack(&[tile]).unwrap())
            })
            .collect();
        let current_player_id = players[0].id();
        let game_id = GameId::new();
        let bag = Bag::new(Arc::new(NoShuffle)).tap_mut(|bag| bag.add_tiles(standard_tiles()));
        let written_words =
            WrittenWords::from_tile_positions(1, [(tile, Position::new(7, 7))]).unwrap();

        let mut game = Game::new_ended(
            game_id,
            bag,
            MapBoard::new(),
            players,
            current_player_id,
            btree_set! { current_player_id },
        )
        .unwrap();

        assert!(game.has_ended());
        assert_eq!(btree_set! { current_player_id }, *game.winners());
        let expected_error = GameError::HasEnded { game_id };
        assert_eq!(Err(expected_error.clone()), game.pass(current_player_id));
        assert_eq!(
            Err(expected_error.clone()),
            game.exchange_tiles(current_player_id, &[tile])
        );
        assert_eq!(
            Err(expected_error.clone()),
            game.write_words(current_player_id, &written_words)
        );
        assert_eq!(Err(expected_error), game.surrender(current_player_id));
        assert_eq!(&[tile], game.players[0].rack().as_slice());
        assert_eq!(0, game.players[0].consecutive_passes().value());
        assert!(!game.players[0].has_surrendered());
        assert_eq!(standard_tiles().len(), game.bag().tiles_count());
        assert!(game.board().tiles().is_empty());
    }

    #[test]
    fn random_current_player() {
        let mut rng = rand::thread_rng();
        let mut game = Game::empty_game();
        let players_len = game.random_players(&mut rng);

        let current_player = game.random_current_player(&mut rng);

        assert!(current_player < players_len);
        assert_eq!(current_player, game.current_player);
    }
}
