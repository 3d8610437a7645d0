use crate::N;

/// A place at the table. The human always acts first in an exchange.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    Human = 0,
    Computer = 1,
}

impl Seat {
    /// Seats in turn order.
    pub const fn all() -> [Seat; N] {
        [Seat::Human, Seat::Computer]
    }
    pub fn index(&self) -> usize {
        *self as usize
    }
    pub fn opponent(&self) -> Seat {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => write!(f, "player"),
            Seat::Computer => write!(f, "computer"),
        }
    }
}
