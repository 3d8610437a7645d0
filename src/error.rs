use crate::play::Seat;

/// Errors returned by hand and session mutations.
///
/// Every variant is recoverable: the caller decides whether to re-prompt,
/// show a message, or move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Card position outside the hand.
    InvalidIndex { index: usize, size: usize },
    /// Draw while a discard is owed, or discard while a draw is owed.
    IllegalDraw,
    /// Pile too small to hand out its top card.
    EmptyPileAccess,
    /// Mutation by the seat that is not to act.
    OutOfTurn(Seat),
    /// Mutation after the round has been won.
    RoundOver,
    /// New round requested before the current one ended.
    RoundInProgress,
    /// New round requested after a seat reached the threshold.
    MatchOver,
    /// The player driving a seat produced no decision.
    NoDecision(Seat),
    /// Starting hand size the deck cannot support.
    InvalidHandSize(usize),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, size } => {
                write!(f, "invalid index: {} (hand holds {} cards)", index, size)
            }
            Self::IllegalDraw => write!(f, "illegal draw: one draw then one discard per turn"),
            Self::EmptyPileAccess => write!(f, "empty pile access"),
            Self::OutOfTurn(seat) => write!(f, "out of turn: {}", seat),
            Self::RoundOver => write!(f, "round is over"),
            Self::RoundInProgress => write!(f, "round still in progress"),
            Self::MatchOver => write!(f, "match is over"),
            Self::NoDecision(seat) => write!(f, "no decision from {}", seat),
            Self::InvalidHandSize(n) => write!(f, "invalid hand size: {}", n),
        }
    }
}

impl std::error::Error for GameError {}
