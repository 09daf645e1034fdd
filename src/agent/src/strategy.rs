use common::model::game::Move;
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use tracing::trace;

/// Picks the automated player's move for a round.
pub trait Strategy {
    fn make_move(&mut self, bomb_used: bool) -> Move;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn make_move(&mut self, bomb_used: bool) -> Move {
        (**self).make_move(bomb_used)
    }
}

fn available_moves(bomb_used: bool) -> &'static [Move] {
    if bomb_used {
        &Move::CLASSIC
    } else {
        &Move::ALL
    }
}

// Random
/// Uniform over the moves still available: the bomb is only offered until it
/// has been played once.
pub struct RandomMove<R = StdRng> {
    rng: R,
}

impl RandomMove {
    pub fn new() -> Self {
        RandomMove {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomMove {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMove {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomMove<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomMove { rng }
    }
}

impl<R: Rng> Strategy for RandomMove<R> {
    fn make_move(&mut self, bomb_used: bool) -> Move {
        let choices = available_moves(bomb_used);
        let choice = *choices
            .choose(&mut self.rng)
            .expect("move list is never empty");
        trace!("Random strategy picked {} from {:?}", choice, choices);
        choice
    }
}

// Trivial strategies
/// Always plays the same move. Playing a bomb twice is the caller's problem.
pub struct Fixed(pub Move);

impl Strategy for Fixed {
    fn make_move(&mut self, _: bool) -> Move {
        self.0
    }
}

/// Replays a fixed sequence of moves, starting over once it runs out.
pub struct Scripted {
    moves: Vec<Move>,
    next: usize,
}

impl Scripted {
    /// `None` for an empty script.
    pub fn new(moves: Vec<Move>) -> Option<Self> {
        if moves.is_empty() {
            return None;
        }
        Some(Scripted { moves, next: 0 })
    }
}

impl Strategy for Scripted {
    fn make_move(&mut self, _: bool) -> Move {
        let value = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        value
    }
}
