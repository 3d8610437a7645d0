use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered stack of cards whose last element is the top.
///
/// The same type serves as draw pile and discard pile; only the session
/// decides which role a pile plays. A pile holding fewer than two cards
/// is depleted: it refuses to hand out its last card, so the session
/// replenishes before anyone draws from an empty sequence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Pile(Vec<Card>);

impl Pile {
    /// The 52 cards in deck order: suit by suit, ace to king.
    pub fn deck() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Rank::all().into_iter().map(move |r| Card::from((r, s))))
                .collect(),
        )
    }
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Peeks at the top card regardless of depletion.
    pub fn top(&self) -> Option<Card> {
        self.0.last().copied()
    }
    /// Returns the top card, removing it when `remove` is set.
    /// Yields nothing once the pile is depleted.
    pub fn draw_top(&mut self, remove: bool) -> Option<Card> {
        match (self.is_depleted(), remove) {
            (true, _) => None,
            (false, true) => self.0.pop(),
            (false, false) => self.top(),
        }
    }
    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw_top(true)
    }
    /// Places a card on top.
    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }
    /// Uniformly permutes the pile in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.0.len() > 1 {
            self.0.shuffle(rng);
        }
    }
    pub fn is_depleted(&self) -> bool {
        self.0.len() < 2
    }
    /// Removes `count` cards from the bottom, keeping their order.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.0.len());
        self.0.drain(..count).collect()
    }
    /// Moves every card of `other` underneath this pile, leaving `other` empty.
    pub fn absorb(&mut self, other: &mut Pile) {
        let mut cards = std::mem::take(&mut other.0);
        cards.append(&mut self.0);
        self.0 = cards;
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Pile> for Vec<Card> {
    fn from(pile: Pile) -> Self {
        pile.0
    }
}
