use agent::strategy::{RandomMove, Strategy};
use anyhow::Context;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::broadcast,
};
use tracing::{debug, info};

use crate::{
    model::{external::ClientResponse, internal::MatchState},
    service::{
        game_manager::{GameManager, HostError},
        match_controller::describe_rules,
    },
};

#[derive(Clone, Debug, Default)]
pub struct GameConfig {
    /// Seeds the opponent; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// One JSON object per line instead of text.
    pub json: bool,
}

impl GameConfig {
    pub fn opponent(&self) -> RandomMove {
        match self.seed {
            Some(seed) => RandomMove::seeded(seed),
            None => RandomMove::new(),
        }
    }
}

/// The game thread can take the shutdown before the turn that was in flight.
fn stopped_by_shutdown(error: &HostError, shutdown_receiver: &mut broadcast::Receiver<()>) -> bool {
    matches!(error, HostError::GameGone(_)) && shutdown_receiver.try_recv().is_ok()
}

fn render(response: &ClientResponse, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(response)? + "\n")
    } else {
        Ok(response.to_string())
    }
}

/// Plays one match, reading a move per line from `input` until the match is
/// over, `input` runs dry, or shutdown fires. Returns the last known state.
pub async fn play<S, R, W>(
    opponent: S,
    config: &GameConfig,
    input: R,
    output: &mut W,
    mut shutdown_receiver: broadcast::Receiver<()>,
) -> anyhow::Result<MatchState>
where
    S: Strategy + Send + 'static,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut manager = GameManager::new(shutdown_receiver.resubscribe());
    let id = manager.create_game(opponent);

    let rules = ClientResponse::Rules {
        text: describe_rules().to_owned(),
    };
    output
        .write_all(render(&rules, config.json)?.as_bytes())
        .await?;

    let mut last_state = MatchState::new();
    let mut lines = input.lines();
    loop {
        if !config.json {
            output.write_all(b"\nYour move: ").await?;
        }
        output.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read move")?,
            _ = shutdown_receiver.recv() => {
                info!("Shutdown requested mid-match");
                break;
            }
        };
        let Some(line) = line else {
            debug!("Input closed before the match ended");
            break;
        };

        let result = match manager.submit(id, line).await {
            Ok(result) => result,
            Err(e) if stopped_by_shutdown(&e, &mut shutdown_receiver) => {
                info!("Shutdown requested while a turn was in flight");
                break;
            }
            Err(e) => return Err(e.into()),
        };
        let finished = result.final_result.is_some();
        last_state = result.state;
        output
            .write_all(render(&ClientResponse::RoundResult(result), config.json)?.as_bytes())
            .await?;
        if finished {
            break;
        }
    }
    output.flush().await?;

    Ok(last_state)
}

#[cfg(test)]
mod tests {
    use agent::strategy::{Fixed, Scripted};
    use common::model::game::Move;

    use super::*;

    async fn run(opponent: impl Strategy + Send + 'static, json: bool, input: &str) -> (MatchState, String) {
        let (_shutdown_sender, shutdown_receiver) = broadcast::channel(1);
        let config = GameConfig { seed: None, json };
        let mut output = Vec::new();
        let state = play(opponent, &config, input.as_bytes(), &mut output, shutdown_receiver)
            .await
            .unwrap();
        (state, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn text_session() {
        let opponent = Scripted::new(vec![Move::Scissors, Move::Rock, Move::Rock]).unwrap();
        let (state, text) = run(opponent, false, "rock\nbomb\nbomb\npaper\n").await;

        assert!(text.starts_with("Welcome to Rock-Paper-Scissors-Plus!"));
        assert!(text.contains("Outcome: You win this round!"));
        assert!(text.contains("Outcome: Invalid move: Bomb can only be used once per game."));
        assert!(text.contains("Final Result: You win the game"));
        // The fourth line is never read
        assert_eq!(text.matches("Round ").count(), 3);
        assert!(state.is_over);
        assert_eq!((state.first_player_score, state.second_player_score), (2, 1));
    }

    #[tokio::test]
    async fn json_session() {
        let (state, text) = run(Fixed(Move::Paper), true, "rock\n").await;
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "Rules");
        assert_eq!(lines[1]["type"], "RoundResult");
        assert_eq!(lines[1]["outcome"], "second_wins");
        assert_eq!(state.round_number, 1);
        assert!(!state.is_over);
    }

    #[tokio::test]
    async fn empty_input_ends_before_any_round() {
        let (state, _) = run(Fixed(Move::Rock), false, "").await;
        assert_eq!(state, MatchState::new());
    }

    #[test]
    fn lost_game_after_shutdown_ends_quietly() {
        let (shutdown_sender, mut shutdown_receiver) = broadcast::channel(1);
        let id = common::model::messages::Id::new();
        assert!(!stopped_by_shutdown(&HostError::GameGone(id), &mut shutdown_receiver));

        shutdown_sender.send(()).unwrap();
        assert!(!stopped_by_shutdown(&HostError::UnknownMatch(id), &mut shutdown_receiver));
        assert!(stopped_by_shutdown(&HostError::GameGone(id), &mut shutdown_receiver));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = GameConfig {
            seed: Some(5),
            json: false,
        };
        let mut a = config.opponent();
        let mut b = config.opponent();
        for _ in 0..10 {
            assert_eq!(a.make_move(false), b.make_move(false));
        }
    }
}
