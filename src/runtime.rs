use crate::{Board, Game, GameError, GameView, PlayerId, Rack, Tile, WrittenWords};
use async_trait::async_trait;
use futures::future;
use itertools::Itertools;
use tracing::debug;

/// One of the moves a player can make on their turn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    /// See [Game::pass].
    Pass,
    /// See [Game::surrender].
    Surrender,
    /// See [Game::exchange_tiles].
    Exchange(Vec<Tile>),
    /// See [Game::write_words].
    Write(WrittenWords),
}

impl<B: Board> Game<B> {
    /// Executes `command` as `player_id`.
    ///
    /// # Errors
    ///
    /// The same as the method `command` refers to.
    pub fn apply(&mut self, player_id: PlayerId, command: &Command) -> Result<(), GameError> {
        match command {
            Command::Pass => self.pass(player_id),
            Command::Surrender => self.surrender(player_id),
            Command::Exchange(tiles) => self.exchange_tiles(player_id, tiles),
            Command::Write(written_words) => self.write_words(player_id, written_words),
        }
    }
}

/// Connects one player to a [game](Game). `get_command` and `update_command_error` block
/// execution until getting input or updating output. `update_view` may execute in parallel
/// with updates to other participants.
///
/// # Errors
///
/// The implementor of [`Participant`] is responsible for returning an error to prevent the
/// runtime from running indefinitely whether from no response or repeated invalid commands.
/// When a method call fails, the runtime is stopped, and the error is propagated back to the
/// calling client code.
#[async_trait]
pub trait Participant<E> {
    /// On their turn, gets a [`Command`] from the current player.
    fn get_command(&self) -> Result<Command, E>;

    /// When a [`Command`] is rejected, updates the current player with the state of the
    /// game, their rack, their command, and the reason why it could not be executed.
    fn update_command_error<'a, B>(
        &self,
        game_view: &'a GameView<'a, B>,
        rack: &'a Rack,
        command: Command,
        error: GameError,
    ) -> Result<(), E>;

    /// After a turn, updates each player with the state of the game and their rack.
    async fn update_view<'a, B: Sync>(
        &self,
        game_view: &'a GameView<'a, B>,
        rack: &'a Rack,
    ) -> Result<(), E>;
}

/// It repeatedly asks the current participant for a [`Command`], and if the command is
/// rejected, it tells the participant about the error and asks again. Stops once a command
/// is accepted or when the game has already ended.
///
/// # Arguments
///
/// * `participants`: A slice of participants in the same order as the
/// [players](Game::players).
/// * `game`: The game to advance.
///
/// # Errors
///
/// When the current participant fails to send a command or receive an error update.
///
/// # Panics
///
/// If `participants` has fewer entries than the game has players.
pub fn process_input<P, E, B>(participants: &[P], game: &mut Game<B>) -> Result<(), E>
where
    P: Participant<E>,
    B: Board,
{
    if game.has_ended() {
        return Ok(());
    }

    let current_player = game.current_player_index();
    let player_id = game.current_player_id();
    let participant = &participants[current_player];

    loop {
        let command = participant.get_command()?;
        match game.apply(player_id, &command) {
            Ok(()) => return Ok(()),
            Err(error) => {
                debug!(
                    game_id = %game.id(),
                    player_id = %player_id,
                    error = %error,
                    "command rejected"
                );
                // cannot use map_err since E needs to be propagated here
                participant.update_command_error(
                    &game.view(),
                    game.players()[current_player].rack(),
                    command,
                    error,
                )?;
            }
        }
    }
}

/// Asynchronously sends the current state of the game to every [`Participant`].
///
/// # Arguments
///
/// * `participants`: A slice of participants in the same order as the
/// [players](Game::players).
/// * `game`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [`Participant::update_view`] into a vector.
///
/// # Panics
///
/// If `participants` has fewer entries than the game has players.
pub async fn send_updates<P, E, B>(participants: &[P], game: &Game<B>) -> Result<(), Vec<E>>
where
    P: Participant<E>,
    B: Board + Sync,
{
    let game_view = game.view();
    let update_tasks = game
        .players()
        .iter()
        .enumerate()
        .map(|(index, player)| participants[index].update_view(&game_view, player.rack()));

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
