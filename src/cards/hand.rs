use super::card::Card;
use super::rank::Rank;
use super::scoring::Scoring;
use crate::GameError;
use crate::Points;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// A player's cards in the order they were received.
///
/// Order is only kept for stable display indices; scoring and win
/// detection treat the hand as a multiset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
    pub fn get(&self, index: usize) -> Option<Card> {
        self.0.get(index).copied()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }
    /// Removes the card at `index`, shifting later cards down.
    pub fn remove(&mut self, index: usize) -> Result<Card, GameError> {
        match index < self.0.len() {
            true => Ok(self.0.remove(index)),
            false => Err(GameError::InvalidIndex {
                index,
                size: self.0.len(),
            }),
        }
    }
    /// Distinct ranks held.
    pub fn ranks(&self) -> BTreeSet<Rank> {
        self.0.iter().map(Card::rank).collect()
    }
    /// Cards held per rank.
    pub fn counts(&self) -> BTreeMap<Rank, usize> {
        self.0.iter().map(Card::rank).fold(BTreeMap::new(), |mut map, r| {
            *map.entry(r).or_insert(0) += 1;
            map
        })
    }
    pub fn score(&self, scoring: Scoring) -> Points {
        scoring.score(self)
    }
    /// Exactly the four target ranks, duplicates allowed.
    pub fn is_winning(&self) -> bool {
        let ranks = self.ranks();
        ranks.len() == Rank::targets().len() && ranks.iter().all(Rank::is_target)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

/// one card per line, prefixed with the index to drop it by
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            writeln!(f, "({}) -> {}", i, card)?;
        }
        Ok(())
    }
}
