use super::seat::Seat;
use crate::cards::Card;

/// Where a seat takes its card from.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Source {
    /// Blind draw from the draw pile.
    #[default]
    Pile,
    /// The face-up top of the discard pile.
    Discard,
}

/// Which half of a turn is owed next.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    #[default]
    Draw,
    Discard,
}

/// Lifecycle of a round.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Dealing,
    InProgress,
    RoundOver,
}

/// One completed turn: a draw followed by a discard.
///
/// `drawn` is private to `seat` when the source is the pile; presentation
/// decides what to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Ply {
    pub seat: Seat,
    pub source: Source,
    pub drawn: Card,
    pub discarded: Card,
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            Source::Pile => write!(f, "{} drew a card and dropped {}", self.seat, self.discarded),
            Source::Discard => write!(
                f,
                "{} took {} and dropped {}",
                self.seat, self.drawn, self.discarded
            ),
        }
    }
}
