use std::fs;

use agent::strategy::Scripted;
use common::model::{
    game::{Move, Outcome},
    validation::Rejection,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    model::{
        external::{MatchResult, TurnError, TurnResult},
        internal::MatchState,
    },
    service::match_controller::MatchController,
};

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Event {
    Submit {
        input: String,
    },
    Receive {
        #[serde(default)]
        outcome: Option<Outcome>,
        #[serde(default)]
        opponent_move: Option<Move>,
        #[serde(default)]
        rejection: Option<Rejection>,
        #[serde(default)]
        state: Option<MatchState>,
        #[serde(default)]
        final_result: Option<MatchResult>,
        #[serde(default)]
        finished: Option<bool>,
    },
    Refused,
    CurrentState {
        state: MatchState,
    },
    Comment {
        text: String,
    },
}

/// A match against a scripted opponent, replayed from a JSON file.
#[derive(Deserialize)]
pub struct TestCase {
    opponent: Vec<Move>,
    sequence: Vec<Event>,
}

impl TestCase {
    pub fn load(file_name: &str) -> Self {
        let file_path = env!("CARGO_MANIFEST_DIR").to_string() + "/test/data/" + file_name;
        let text = fs::read_to_string(&file_path)
            .unwrap_or_else(|e| panic!("Unable to read {}: {}", file_path, e));
        serde_json::from_str(&text).expect("Could not parse test case")
    }

    pub fn run(&self) {
        let mut controller = MatchController::new(Scripted::new(self.opponent.clone()).expect("opponent script is empty"));
        let mut last: Option<Result<TurnResult, TurnError>> = None;

        for (step, event) in self.sequence.iter().enumerate() {
            match event {
                Event::Submit { input } => {
                    last = Some(controller.submit(input));
                }
                Event::Receive {
                    outcome,
                    opponent_move,
                    rejection,
                    state,
                    final_result,
                    finished,
                } => {
                    let result = match &last {
                        Some(Ok(result)) => result,
                        other => panic!("Step {}: expected a round result, got {:?}", step, other),
                    };
                    if let Some(outcome) = outcome {
                        assert_eq!(outcome, &result.outcome, "step {}", step);
                    }
                    if let Some(opponent_move) = opponent_move {
                        assert_eq!(opponent_move, &result.opponent_move, "step {}", step);
                    }
                    if rejection.is_some() {
                        assert_eq!(rejection, &result.rejection, "step {}", step);
                    }
                    if let Some(state) = state {
                        assert_eq!(state, &result.state, "step {}", step);
                    }
                    if final_result.is_some() {
                        assert_eq!(final_result, &result.final_result, "step {}", step);
                    }
                    if let Some(finished) = finished {
                        assert_eq!(*finished, result.final_result.is_some(), "step {}", step);
                    }
                }
                Event::Refused => {
                    assert_eq!(
                        last,
                        Some(Err(TurnError::MatchOver)),
                        "step {}: expected a refusal",
                        step
                    );
                }
                Event::CurrentState { state } => {
                    assert_eq!(state, controller.state(), "step {}", step);
                }
                Event::Comment { text } => {
                    info!("Comment: {:}", text)
                }
            }
        }
    }
}

mod scenarios {
    use super::TestCase;

    #[test]
    fn rock_beats_scissors() {
        TestCase::load("rock_beats_scissors.json").run();
    }

    #[test]
    fn bomb_reuse() {
        TestCase::load("bomb_reuse.json").run();
    }

    #[test]
    fn invalid_input() {
        TestCase::load("invalid_input.json").run();
    }

    #[test]
    fn full_match() {
        TestCase::load("full_match.json").run();
    }

    #[test]
    fn bomb_against_bomb() {
        TestCase::load("bomb_against_bomb.json").run();
    }

    #[test]
    fn forfeit_against_bomb() {
        TestCase::load("forfeit_against_bomb.json").run();
    }

    #[test]
    fn opponent_wins_the_match() {
        TestCase::load("opponent_wins.json").run();
    }
}
