use crate::{Board, Game, GameError, PlayerId, Tile};
use tracing::debug;

impl<B: Board> Game<B> {
    /// Exchanges `tiles` from the current player's rack with the same number of
    /// [tiles](Tile) from the bag, resets their consecutive passes, and advances the turn.
    /// The exchanged [tiles](Tile) go back into the bag and the bag is shuffled before
    /// drawing, so a player may draw some of their own [tiles](Tile) back.
    ///
    /// # Arguments
    ///
    /// * `player_id`: The id of the player exchanging.
    /// * `tiles`: The [tiles](Tile) to give up. Each [tile](Tile) must be held once per
    /// occurrence.
    ///
    /// # Errors
    ///
    /// * [GameError::HasEnded] Attempting to exchange after the game has ended.
    /// * [GameError::PlayerIsNotOnTurn] Attempting to exchange as a player whose turn it
    /// is not.
    /// * [GameError::EmptyExchange] Attempting to exchange no [tiles](Tile).
    /// * [GameError::NotEnoughTilesInBag] Attempting to exchange while the bag holds fewer
    /// [tiles](Tile) than a rack.
    /// * [GameError::TooManyTilesToExchange] Attempting to exchange more [tiles](Tile) than a
    /// rack can hold.
    /// * [GameError::Player] Attempting to exchange [tiles](Tile) the current player does
    /// not hold.
    /// * [GameError::AllOpponentsHaveSurrendered] The turn could not advance.
    pub fn exchange_tiles(
        &mut self,
        player_id: PlayerId,
        tiles: &[Tile],
    ) -> Result<(), GameError> {
        self.check_turn(player_id)?;
        self.check_exchange(tiles)?;

        let player = &mut self.players[self.current_player];
        player.remove_tiles_from_rack(tiles)?;
        self.bag.add_tiles(tiles.iter().copied());
        self.bag.shuffle_tiles();
        let drawn = self.bag.draw_tiles(tiles.len())?;
        player.add_tiles_to_rack(&drawn)?;
        player.reset_consecutive_passes()?;
        debug!(
            game_id = %self.id,
            player_id = %player_id,
            exchanges_len = tiles.len(),
            "exchanged tiles"
        );

        self.next_turn()
    }

    /// Checks the size of the exchange against the bag and the current player's rack.
    fn check_exchange(&self, tiles: &[Tile]) -> Result<(), GameError> {
        if tiles.is_empty() {
            return Err(GameError::EmptyExchange);
        }

        let rack_capacity = self.players[self.current_player].rack_capacity().value();
        let bag_len = self.bag.tiles_count();
        if bag_len < rack_capacity {
            return Err(GameError::NotEnoughTilesInBag {
                bag_len,
                rack_capacity,
            });
        }

        let exchanges_len = tiles.len();
        if exchanges_len > rack_capacity {
            return Err(GameError::TooManyTilesToExchange {
                exchanges_len,
                rack_capacity,
            });
        }

        Ok(())
    }
}
