use super::Player;
use crate::cards::Card;
use crate::cards::Hand;
use crate::play::Source;

/// Greedy opponent that hoards target ranks.
///
/// It drops the first off-target card it holds, or failing that the first
/// card of a duplicated rank. The policy never looks at the piles and uses
/// no randomness.
#[derive(Debug, Default, Clone, Copy)]
pub struct Computer {
    greedy: bool,
}

impl Computer {
    /// A computer that also takes face-up discards it wants.
    pub fn greedy() -> Self {
        Self { greedy: true }
    }

    /// Index of the card to drop from a hand holding its extra card.
    ///
    /// `None` only when every card is a distinct target rank, which means
    /// the hand already wins and the caller should not have asked.
    pub fn choose_discard(hand: &Hand) -> Option<usize> {
        Self::off_target(hand).or_else(|| Self::duplicate(hand))
    }

    /// Whether the candidate is worth taking instead of a blind draw.
    pub fn wants_card(card: Card, hand: &Hand) -> bool {
        card.rank().is_target() && !hand.contains(&card)
    }

    fn off_target(hand: &Hand) -> Option<usize> {
        hand.iter().position(|c| !c.rank().is_target())
    }
    fn duplicate(hand: &Hand) -> Option<usize> {
        let counts = hand.counts();
        hand.iter()
            .position(|c| counts.get(&c.rank()).map_or(false, |n| *n > 1))
    }
}

impl Player for Computer {
    fn source(&mut self, hand: &Hand, offer: Option<Card>) -> Source {
        match offer {
            Some(card) if self.greedy && Self::wants_card(card, hand) => Source::Discard,
            _ => Source::Pile,
        }
    }
    fn discard(&mut self, hand: &Hand) -> Option<usize> {
        Self::choose_discard(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::from(Card::parse(s).unwrap())
    }
    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn drops_first_off_target_card() {
        assert_eq!(Computer::choose_discard(&hand("As Kd 4c 9h")), Some(3));
        assert_eq!(Computer::choose_discard(&hand("As 2d Kd 9h 4c")), Some(1));
    }

    #[test]
    fn drop_is_deterministic() {
        let h = hand("As Kd 4c 9h");
        assert!((0..16).all(|_| Computer::choose_discard(&h) == Some(3)));
    }

    #[test]
    fn drops_first_duplicate_when_all_targets() {
        assert_eq!(Computer::choose_discard(&hand("As Kd 4c 4d 7h")), Some(2));
        assert_eq!(Computer::choose_discard(&hand("Kd As 4c Ah 4d")), Some(1));
    }

    #[test]
    fn no_drop_for_distinct_targets() {
        assert_eq!(Computer::choose_discard(&hand("As Kd 4c 7h")), None);
    }

    #[test]
    fn wants_target_ranks_only() {
        let h = hand("As Kd 9c 2h");
        assert!(Computer::wants_card(card("7h"), &h));
        assert!(Computer::wants_card(card("Ah"), &h));
        assert!(!Computer::wants_card(card("8h"), &h));
        assert!(!Computer::wants_card(card("As"), &h));
    }

    #[test]
    fn takes_offer_only_when_greedy() {
        let h = hand("As Kd 9c 2h");
        let offer = Some(card("7h"));
        assert_eq!(Computer::default().source(&h, offer), Source::Pile);
        assert_eq!(Computer::greedy().source(&h, offer), Source::Discard);
        assert_eq!(Computer::greedy().source(&h, Some(card("8h"))), Source::Pile);
        assert_eq!(Computer::greedy().source(&h, None), Source::Pile);
    }
}
