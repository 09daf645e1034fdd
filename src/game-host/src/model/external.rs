use std::fmt;

use common::model::{
    game::{Move, Outcome},
    validation::Rejection,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::internal::MatchState;

pub const RULES: &str = "Welcome to Rock-Paper-Scissors-Plus!\n\
    - Best of 3 rounds\n\
    - Moves: rock, paper, scissors\n\
    - Bomb beats everything (usable once)\n\
    - Bomb vs bomb = draw\n\
    - Invalid input loses the round\n";

#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    #[error("The game has already ended.")]
    MatchOver,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    SubmitterWins,
    OpponentWins,
    Draw,
}

impl MatchResult {
    pub fn from_scores(state: &MatchState) -> Self {
        match state.first_player_score.cmp(&state.second_player_score) {
            std::cmp::Ordering::Greater => MatchResult::SubmitterWins,
            std::cmp::Ordering::Less => MatchResult::OpponentWins,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }
}

/// Everything one processed turn produced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub input: String,
    /// `None` when the submission was rejected.
    pub submitted: Option<Move>,
    pub opponent_move: Move,
    pub outcome: Outcome,
    pub rejection: Option<Rejection>,
    pub state: MatchState,
    /// Only set on the final round.
    pub final_result: Option<MatchResult>,
}

// Client types
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ClientResponse {
    Rules { text: String },
    RoundResult(TurnResult),
    Refused { reason: String },
}

impl From<Result<TurnResult, TurnError>> for ClientResponse {
    fn from(value: Result<TurnResult, TurnError>) -> Self {
        match value {
            Ok(result) => ClientResponse::RoundResult(result),
            Err(e) => ClientResponse::Refused {
                reason: e.to_string(),
            },
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchResult::SubmitterWins => "You win the game",
            MatchResult::OpponentWins => "Bot wins the game",
            MatchResult::Draw => "The game ends in a draw",
        })
    }
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Round {}", self.state.round_number)?;
        writeln!(f, "Your move: {}", self.input)?;
        writeln!(f, "Bot move: {}", self.opponent_move)?;
        match (self.rejection, self.outcome) {
            (Some(reason), _) => writeln!(f, "Outcome: Invalid move: {}", reason)?,
            (None, Outcome::FirstWins) => writeln!(f, "Outcome: You win this round!")?,
            (None, Outcome::SecondWins) => writeln!(f, "Outcome: Bot wins this round.")?,
            (None, Outcome::Draw) => writeln!(f, "Outcome: This round is a draw.")?,
        }
        writeln!(
            f,
            "Score → You: {} | Bot: {}",
            self.state.first_player_score, self.state.second_player_score
        )?;
        if let Some(result) = self.final_result {
            writeln!(f)?;
            writeln!(f, "Final Result: {}", result)?;
        }
        Ok(())
    }
}

impl fmt::Display for ClientResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientResponse::Rules { text } => f.write_str(text),
            ClientResponse::RoundResult(result) => result.fmt(f),
            ClientResponse::Refused { reason } => writeln!(f, "{}", reason),
        }
    }
}
