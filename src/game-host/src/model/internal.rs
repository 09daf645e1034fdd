use common::model::game::{Move, Outcome, PlayedMove};
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use super::external::{TurnError, TurnResult};

/// Rounds in a match.
pub const MATCH_LENGTH: u8 = 3;

/// Running record of one match. The submitter is the first player, the
/// automated opponent the second.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchState {
    pub round_number: u8,
    pub first_player_score: u8,
    pub second_player_score: u8,
    pub first_player_bomb_used: bool,
    pub second_player_bomb_used: bool,
    pub is_over: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished round.
    pub fn apply(self, outcome: Outcome, first: PlayedMove, second: Move) -> Self {
        let mut state = self;
        state.round_number += 1;

        state.first_player_bomb_used |= first.is_bomb();
        state.second_player_bomb_used |= second == Move::Bomb;

        match outcome {
            Outcome::FirstWins => state.first_player_score += 1,
            Outcome::SecondWins => state.second_player_score += 1,
            Outcome::Draw => {}
        }

        state.is_over |= state.round_number >= MATCH_LENGTH;
        state
    }
}

// Messages for a hosted match
#[derive(Debug)]
pub enum GameRequest {
    Submit {
        input: String,
        respond_to: oneshot::Sender<Result<TurnResult, TurnError>>,
    },
    State {
        respond_to: oneshot::Sender<MatchState>,
    },
}
