use crate::{Board, Game, GameError, PlayerId, WrittenWords};
use tracing::debug;

impl<B: Board> Game<B> {
    /// Writes words already validated elsewhere. Removes the consumed [tiles](crate::Tile)
    /// from the current player's rack, draws as many [tiles](crate::Tile) from the bag as
    /// are left, adds the points earned, resets their consecutive passes, and places every
    /// [tile](crate::Tile) on the board.
    ///
    /// When the bag is empty and the current player holds no [tiles](crate::Tile), the
    /// current player earns the points of every [tile](crate::Tile) their remaining
    /// opponents hold, every remaining player loses the points of the
    /// [tiles](crate::Tile) they hold, and the game ends. Otherwise, the turn advances.
    ///
    /// # Arguments
    ///
    /// * `player_id`: The id of the player writing.
    /// * `written_words`: The consumed [tiles](crate::Tile), where they are written, and
    /// the points they earn.
    ///
    /// # Errors
    ///
    /// * [GameError::HasEnded] Attempting to write after the game has ended.
    /// * [GameError::PlayerIsNotOnTurn] Attempting to write as a player whose turn it is not.
    /// * [GameError::Player] Attempting to write [tiles](crate::Tile) the current player does
    /// not hold, or a score would overflow. Nothing changes.
    /// * [GameError::AllOpponentsHaveSurrendered] The turn could not advance.
    pub fn write_words(
        &mut self,
        player_id: PlayerId,
        written_words: &WrittenWords,
    ) -> Result<(), GameError> {
        self.check_turn(player_id)?;

        let tiles = written_words.tiles();
        let total_points = written_words.total_points();
        let mut players = self.players.clone();
        let mut bag = self.bag.clone();
        let player = &mut players[self.current_player];
        player.check_increment_points(total_points)?;
        player.remove_tiles_from_rack(tiles)?;
        let drawn = bag.draw_tiles(tiles.len())?;
        player.add_tiles_to_rack(&drawn)?;
        player.increment_points(total_points)?;
        player.reset_consecutive_passes()?;
        let is_going_out = bag.tiles_count() == 0 && !player.has_any_tiles();
        if is_going_out {
            Self::add_opponents_remaining_tiles_points(&mut players, self.current_player)?;
            Self::subtract_remaining_tiles_points_from_scores(&mut players)?;
        }

        self.players = players;
        self.bag = bag;
        for (tile, position) in written_words.tile_positions() {
            self.board.set_tile(tile, position);
        }
        debug!(
            game_id = %self.id,
            player_id = %player_id,
            tiles_len = tiles.len(),
            total_points,
            is_going_out,
            "wrote words"
        );

        if !is_going_out {
            return self.next_turn();
        }

        self.end_game();
        Ok(())
    }
}
