use super::rank::Rank;
use super::suit::Suit;

/// A playing card. Immutable once dealt; equality is by (rank, suit).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Two-character notation, e.g. `A♠` or `10♥`.
    pub fn short(&self) -> String {
        format!("{}{}", self.rank, self.suit.symbol())
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// str isomorphism
/// rank notation followed by a one-character suit: `As`, `Td`, `10h`, `7♣`
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}
impl Card {
    /// Parses whitespace-separated card notations into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reads_rank_of_suit() {
        let card = Card::from((Rank::Ten, Suit::Hearts));
        assert_eq!(card.to_string(), "10 of Hearts");
        assert_eq!(card.short(), "10♥");
    }

    #[test]
    fn bijective_rank_suit() {
        let card = Card::from((Rank::King, Suit::Diamonds));
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn parses_notations() {
        assert_eq!(Card::try_from("As"), Ok(Card::from((Rank::Ace, Suit::Spades))));
        assert_eq!(Card::try_from("10h"), Ok(Card::from((Rank::Ten, Suit::Hearts))));
        assert_eq!(Card::try_from("7♣"), Ok(Card::from((Rank::Seven, Suit::Clubs))));
        assert!(Card::try_from("s").is_err());
        assert!(Card::try_from("").is_err());
        assert!(Card::try_from("Zs").is_err());
    }

    #[test]
    fn parses_many() {
        let cards = Card::parse("As Kd 4c 7h").unwrap();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[1], Card::from((Rank::King, Suit::Diamonds)));
        assert!(Card::parse("As Xx").is_err());
    }
}
