use super::engine::Color;

/// Where a game stands. `Check` only annotates; play continues through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Check(Color),
    Checkmate(Color),
    Stalemate,
    TimeForfeit(Color),
}

impl Outcome {
    /// Terminal outcomes accept no further clicks or ticks.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Outcome::Checkmate(_) | Outcome::Stalemate | Outcome::TimeForfeit(_)
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate(winner) | Outcome::TimeForfeit(winner) => Some(winner),
            _ => None,
        }
    }
}
