use agent::strategy::Strategy;
use common::model::messages::Id;
use tokio::sync::{broadcast, mpsc::Receiver};
use tracing::{debug, info};

use crate::{model::internal::GameRequest, service::match_controller::MatchController};

/// Hosts one match: requests are handled strictly one after another.
pub struct GameThread<S> {
    id: Id,
    controller: MatchController<S>,
}

impl<S: Strategy> GameThread<S> {
    pub fn new(id: Id, opponent: S) -> Self {
        GameThread {
            id,
            controller: MatchController::new(opponent),
        }
    }

    /// Runs until the match is over, every sender is gone, or shutdown fires.
    pub async fn run(
        mut self,
        shutdown_receiver: &mut broadcast::Receiver<()>,
        mut from_manager: Receiver<GameRequest>,
    ) {
        debug!("Game {} started", self.id);
        loop {
            tokio::select! {
                request = from_manager.recv() => {
                    let Some(request) = request else {
                        debug!("Game {} lost its last sender", self.id);
                        break;
                    };
                    self.update(request);
                    if self.controller.is_over() {
                        break;
                    }
                }
                _ = shutdown_receiver.recv() => {
                    break;
                }
            }
        }
        info!("Game {} exited after {} rounds", self.id, self.controller.state().round_number);
    }

    fn update(&mut self, request: GameRequest) {
        match request {
            GameRequest::Submit { input, respond_to } => {
                let result = self.controller.submit(&input);
                if respond_to.send(result).is_err() {
                    debug!("Game {}: submitter stopped waiting for the result", self.id);
                }
            }
            GameRequest::State { respond_to } => {
                let _ = respond_to.send(*self.controller.state());
            }
        }
    }
}
