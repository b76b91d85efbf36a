use crate::{Board, Game, GameError, PlayerId};
use tracing::{debug, warn};

impl<B: Board> Game<B> {
    /// Surrenders the current player. A surrendered player never takes another turn and
    /// cannot win. When one player is left who has not surrendered, the game ends.
    /// Otherwise, the turn advances.
    ///
    /// The surrender is kept even when the command fails afterwards.
    ///
    /// # Arguments
    ///
    /// * `player_id`: The id of the player surrendering.
    ///
    /// # Errors
    ///
    /// * [GameError::HasEnded] Attempting to surrender after the game has ended.
    /// * [GameError::PlayerIsNotOnTurn] Attempting to surrender as a player whose turn it
    /// is not.
    /// * [GameError::NoPlayersRemaining] Every player has surrendered.
    /// * [GameError::AllOpponentsHaveSurrendered] The turn could not advance.
    pub fn surrender(&mut self, player_id: PlayerId) -> Result<(), GameError> {
        self.check_turn(player_id)?;

        self.players[self.current_player].surrender();
        let remaining = self.non_surrendered_players().count();
        debug!(game_id = %self.id, player_id = %player_id, remaining, "surrendered");

        match remaining {
            0 => {
                warn!(game_id = %self.id, "every player has surrendered");
                Err(GameError::NoPlayersRemaining { game_id: self.id })
            }
            1 => {
                self.end_game();
                Ok(())
            }
            _ => self.next_turn(),
        }
    }
}
