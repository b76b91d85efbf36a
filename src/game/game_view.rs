use crate::{
    Board, ConsecutivePasses, Game, GameId, Player, PlayerId, Rack, Score, Winners,
    PLAYER_CAPACITY,
};
use smallvec::SmallVec;

/// The publicly visible state of one [player](Player).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PlayerView {
    /// Uniquely identifies the player.
    pub id: PlayerId,
    /// The total points earned by the player.
    pub score: Score,
    /// The number of [tiles](crate::Tile) on the player's rack.
    pub rack_len: usize,
    /// The number of passes in a row by the player.
    pub consecutive_passes: ConsecutivePasses,
    /// Whether the player has surrendered.
    pub has_surrendered: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        PlayerView {
            id: player.id(),
            score: player.score(),
            rack_len: player.rack().len(),
            consecutive_passes: player.consecutive_passes(),
            has_surrendered: player.has_surrendered(),
        }
    }
}

/// A vector of publicly visible state for each player in turn order.
pub type PlayerViews = SmallVec<[PlayerView; PLAYER_CAPACITY]>;

/// Immutably borrows properties from [`Game`] which every player may see.
#[derive(Debug)]
pub struct GameView<'a, B> {
    /// Uniquely identifies the game.
    pub game_id: GameId,
    /// The number of [tiles](crate::Tile) that haven't been drawn yet.
    pub bag_len: usize,
    /// Stores every written [tile](crate::Tile).
    pub board: &'a B,
    /// The publicly visible state of every player in turn order.
    pub players: PlayerViews,
    /// The id of the player whose turn it is.
    pub current_player_id: PlayerId,
    /// Whether the game has ended.
    pub has_ended: bool,
    /// Ids of the remaining players with the highest score. Empty until the game has ended.
    pub winners: &'a Winners,
}

impl<B: Board> Game<B> {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows properties from [`Game`], but
    /// with `bag` replaced by the number of [tiles](crate::Tile) in the bag and each rack
    /// replaced by the number of [tiles](crate::Tile) on it.
    pub fn view(&self) -> GameView<'_, B> {
        GameView {
            game_id: self.id,
            bag_len: self.bag.tiles_count(),
            board: &self.board,
            players: self.players.iter().map(PlayerView::from).collect(),
            current_player_id: self.current_player_id(),
            has_ended: self.has_ended,
            winners: &self.winners,
        }
    }

    /// # Returns
    ///
    /// The [tiles](crate::Tile) held by the requesting player or `None` if they are not
    /// playing.
    pub fn rack(&self, player_id: PlayerId) -> Option<&Rack> {
        self.player(player_id).map(Player::rack)
    }
}
