use agent::strategy::Strategy;
use common::model::{
    game::{resolve, Outcome, PlayedMove},
    validation::validate_move,
};
use tracing::{debug, info, warn};

use crate::model::{
    external::{MatchResult, TurnError, TurnResult, RULES},
    internal::MatchState,
};

pub fn start_match() -> MatchState {
    MatchState::new()
}

pub fn describe_rules() -> &'static str {
    RULES
}

/// Plays one round of `state` with `input` from the submitter.
///
/// Rejected input still costs a round: the opponent moves anyway and wins it.
/// Only a finished match refuses the turn, leaving `state` as it was.
pub fn submit_turn<S>(
    state: MatchState,
    input: &str,
    opponent: &mut S,
) -> Result<TurnResult, TurnError>
where
    S: Strategy + ?Sized,
{
    if state.is_over {
        warn!("Turn {:?} submitted after the match ended", input);
        return Err(TurnError::MatchOver);
    }

    let validation = validate_move(input, state.first_player_bomb_used);
    let opponent_move = opponent.make_move(state.second_player_bomb_used);

    let (played, outcome) = match validation {
        Ok(value) => (PlayedMove::Legal(value), resolve(value, opponent_move)),
        Err(reason) => {
            debug!("Rejected {:?}: {}", input, reason);
            (PlayedMove::Invalid, Outcome::SecondWins)
        }
    };
    let state = state.apply(outcome, played, opponent_move);
    debug!(
        "Round {}: {:?} vs {} -> {:?}",
        state.round_number, played, opponent_move, outcome
    );

    let final_result = state.is_over.then(|| MatchResult::from_scores(&state));
    if let Some(result) = final_result {
        info!(
            "Match over after {} rounds: {:?} ({}-{})",
            state.round_number, result, state.first_player_score, state.second_player_score
        );
    }

    Ok(TurnResult {
        input: input.to_owned(),
        submitted: validation.ok(),
        opponent_move,
        outcome,
        rejection: validation.err(),
        state,
        final_result,
    })
}

/// One match against one opponent. Owns its state exclusively.
pub struct MatchController<S> {
    state: MatchState,
    opponent: S,
}

impl<S: Strategy> MatchController<S> {
    pub fn new(opponent: S) -> Self {
        MatchController {
            state: start_match(),
            opponent,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    pub fn submit(&mut self, input: &str) -> Result<TurnResult, TurnError> {
        let result = submit_turn(self.state, input, &mut self.opponent)?;
        self.state = result.state;
        Ok(result)
    }
}
