//! Decision makers that drive a seat through a ply.
//!
//! - [`Computer`] — Greedy rule-based opponent
//! - [`Human`] — Interactive prompts on the terminal (requires `cli` feature)
pub mod computer;
pub use computer::*;

#[cfg(feature = "cli")]
pub mod human;
#[cfg(feature = "cli")]
pub use human::*;

use crate::cards::Card;
use crate::cards::Hand;
use crate::play::Source;

/// Decides both halves of a turn for one seat.
///
/// The session calls [`Player::source`] before the draw and
/// [`Player::discard`] after it, so the hand passed to `discard` holds the
/// extra card.
pub trait Player {
    /// Choose where to draw from. `offer` is the discard top when it can be taken.
    fn source(&mut self, hand: &Hand, offer: Option<Card>) -> Source;
    /// Choose the index of the card to drop. `None` means no decision was made.
    fn discard(&mut self, hand: &Hand) -> Option<usize>;
}
