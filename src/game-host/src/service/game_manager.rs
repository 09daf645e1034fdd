use std::collections::HashMap;

use agent::strategy::Strategy;
use common::model::messages::Id;
use thiserror::Error;
use tokio::{
    sync::{broadcast, mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{info, warn};

use crate::{
    model::{
        external::{TurnError, TurnResult},
        internal::{GameRequest, MatchState},
    },
    service::game_thread::GameThread,
};

#[derive(Error, Debug, PartialEq)]
pub enum HostError {
    #[error("No match with id {0}")]
    UnknownMatch(Id),
    #[error("Match {0} is no longer running")]
    GameGone(Id),
    #[error(transparent)]
    Turn(#[from] TurnError),
}

struct Game {
    sender: mpsc::Sender<GameRequest>,
    handle: JoinHandle<()>,
}

/// Hosts independent matches, one game thread each. A match is forgotten as
/// soon as its final round has been returned.
pub struct GameManager {
    games: HashMap<Id, Game>,
    shutdown_receiver: broadcast::Receiver<()>,
}

impl GameManager {
    pub fn new(shutdown_receiver: broadcast::Receiver<()>) -> Self {
        GameManager {
            games: HashMap::new(),
            shutdown_receiver,
        }
    }

    pub fn create_game<S>(&mut self, opponent: S) -> Id
    where
        S: Strategy + Send + 'static,
    {
        let id = Id::new();
        let (sender, receiver) = mpsc::channel(100);
        let mut shutdown_receiver = self.shutdown_receiver.resubscribe();
        let handle = tokio::spawn(async move {
            GameThread::new(id, opponent)
                .run(&mut shutdown_receiver, receiver)
                .await
        });
        self.games.insert(id, Game { sender, handle });
        info!("Created game {}", id);
        id
    }

    pub fn active_games(&self) -> usize {
        self.games.len()
    }

    pub async fn submit(&mut self, id: Id, input: impl Into<String>) -> Result<TurnResult, HostError> {
        let game = self.games.get(&id).ok_or_else(|| {
            warn!("Turn submitted to unknown game {}", id);
            HostError::UnknownMatch(id)
        })?;

        let (respond_to, response) = oneshot::channel();
        let request = GameRequest::Submit {
            input: input.into(),
            respond_to,
        };
        if game.sender.send(request).await.is_err() {
            return Err(self.forget(id));
        }
        let result = match response.await {
            Ok(result) => result?,
            Err(_) => return Err(self.forget(id)),
        };

        if result.final_result.is_some() {
            if let Some(game) = self.games.remove(&id) {
                // The thread exits on its own once the match is over
                let _ = game.handle.await;
            }
            info!("Game {} finished, forgetting it", id);
        }
        Ok(result)
    }

    pub async fn state(&self, id: Id) -> Result<MatchState, HostError> {
        let game = self.games.get(&id).ok_or(HostError::UnknownMatch(id))?;
        let (respond_to, response) = oneshot::channel();
        game.sender
            .send(GameRequest::State { respond_to })
            .await
            .map_err(|_| HostError::GameGone(id))?;
        response.await.map_err(|_| HostError::GameGone(id))
    }

    fn forget(&mut self, id: Id) -> HostError {
        warn!("Game {} stopped responding", id);
        self.games.remove(&id);
        HostError::GameGone(id)
    }
}
