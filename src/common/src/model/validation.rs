use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::game::Move;

/// Why a submission was not accepted as a move. Costs the submitter the round.
#[derive(Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("That is not a valid move.")]
    NotAMove,
    #[error("Bomb can only be used once per game.")]
    BombAlreadyUsed,
}

/// Classifies raw user input. Case and surrounding whitespace are ignored.
pub fn validate_move(input: &str, bomb_already_used: bool) -> Result<Move, Rejection> {
    let value = input.trim().to_lowercase().parse::<Move>()?;
    if value == Move::Bomb && bomb_already_used {
        return Err(Rejection::BombAlreadyUsed);
    }
    Ok(value)
}
