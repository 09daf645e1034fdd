use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::validation::Rejection;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// `None` when both moves are the same, otherwise whether `self` wins.
    pub fn beats(&self, other: &Move) -> Option<bool> {
        if self == other {
            None
        } else {
            Some(matches!(
                (self, other),
                (Move::Bomb, _)
                    | (Move::Rock, Move::Scissors)
                    | (Move::Scissors, Move::Paper)
                    | (Move::Paper, Move::Rock)
            ))
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Exact, already-normalized tokens only. See `validation::validate_move`.
impl FromStr for Move {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or(Rejection::NotAMove)
    }
}

/// A move as recorded against the match: either a legal move or the marker
/// for a rejected submission.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayedMove {
    Legal(Move),
    Invalid,
}

impl PlayedMove {
    pub fn is_bomb(&self) -> bool {
        matches!(self, PlayedMove::Legal(Move::Bomb))
    }
}

impl From<Move> for PlayedMove {
    fn from(value: Move) -> Self {
        PlayedMove::Legal(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl Outcome {
    /// The same round seen from the other side.
    pub fn mirror(self) -> Outcome {
        match self {
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// Resolves a round between two legal moves.
///
/// Identical moves draw, a lone bomb wins, and otherwise rock beats scissors,
/// scissors beats paper, paper beats rock.
pub fn resolve(first: Move, second: Move) -> Outcome {
    match first.beats(&second) {
        Some(true) => Outcome::FirstWins,
        Some(false) => Outcome::SecondWins,
        None => Outcome::Draw,
    }
}
