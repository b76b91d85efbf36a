use crate::{Board, Game, GameError, PlayerId};
use tracing::debug;

impl<B: Board> Game<B> {
    /// Passes the turn of the current player. When every player who has not surrendered has
    /// passed at least [the maximum number of times in a row](crate::MaximumConsecutivePasses),
    /// each of them loses the points of the [tiles](crate::Tile) left in their rack and the
    /// game ends. Otherwise, the turn advances.
    ///
    /// # Arguments
    ///
    /// * `player_id`: The id of the player passing.
    ///
    /// # Errors
    ///
    /// * [GameError::HasEnded] Attempting to pass after the game has ended.
    /// * [GameError::PlayerIsNotOnTurn] Attempting to pass as a player whose turn it is not.
    /// * [GameError::Player] A score would overflow. Nothing changes.
    /// * [GameError::AllOpponentsHaveSurrendered] The turn could not advance.
    pub fn pass(&mut self, player_id: PlayerId) -> Result<(), GameError> {
        self.check_turn(player_id)?;

        let mut players = self.players.clone();
        players[self.current_player].increment_consecutive_passes()?;
        let maximum = self.maximum_consecutive_passes.value();
        let is_stalemate = players
            .iter()
            .filter(|player| !player.has_surrendered())
            .all(|player| player.consecutive_passes().value() >= maximum);
        if is_stalemate {
            Self::subtract_remaining_tiles_points_from_scores(&mut players)?;
        }

        self.players = players;
        debug!(game_id = %self.id, player_id = %player_id, is_stalemate, "passed");

        if !is_stalemate {
            return self.next_turn();
        }

        self.end_game();
        Ok(())
    }
}
