use super::hand::Hand;
use super::rank::Rank;
use crate::EIGHT_POINTS;
use crate::Points;
use std::collections::BTreeSet;

/// How the loser's hand is valued at the end of a round.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Scoring {
    /// Each distinct target rank counts once: ten for A and K, pips for 4 and 7.
    #[default]
    Target,
    /// Every card counts its face value, except an eight which counts fifty.
    Face,
}

impl Scoring {
    pub fn score(&self, hand: &Hand) -> Points {
        match self {
            Self::Target => Self::target(hand),
            Self::Face => Self::face(hand),
        }
    }
    fn target(hand: &Hand) -> Points {
        hand.iter()
            .map(|c| c.rank())
            .filter(Rank::is_target)
            .collect::<BTreeSet<Rank>>()
            .iter()
            .map(Rank::face)
            .sum()
    }
    fn face(hand: &Hand) -> Points {
        hand.iter()
            .map(|c| match c.rank() {
                Rank::Eight => EIGHT_POINTS,
                rank => rank.face(),
            })
            .sum()
    }
}

impl std::fmt::Display for Scoring {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Target => write!(f, "target"),
            Self::Face => write!(f, "face"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hand(s: &str) -> Hand {
        Hand::from(Card::parse(s).unwrap())
    }

    #[test]
    fn target_letters() {
        assert_eq!(Scoring::Target.score(&hand("As Kd")), 20);
    }

    #[test]
    fn target_numbers() {
        assert_eq!(Scoring::Target.score(&hand("4c 7h")), 11);
    }

    #[test]
    fn target_ignores_duplicates_and_off_target() {
        assert_eq!(Scoring::Target.score(&hand("As Ah Kd 4c 4d 7h")), 31);
        assert_eq!(Scoring::Target.score(&hand("Js 3d 9c 2h")), 0);
        assert_eq!(Scoring::Target.score(&hand("8s Qh As")), 10);
    }

    #[test]
    fn face_eights() {
        assert_eq!(Scoring::Face.score(&hand("8s 8d")), 100);
    }

    #[test]
    fn face_values() {
        assert_eq!(Scoring::Face.score(&hand("Jc")), 10);
        assert_eq!(Scoring::Face.score(&hand("5h")), 5);
        assert_eq!(Scoring::Face.score(&hand("Js 3d 9c 2h")), 24);
        assert_eq!(Scoring::Face.score(&hand("As Kd 10h")), 30);
    }

    #[test]
    fn empty_hand_scores_nothing() {
        assert_eq!(Scoring::Target.score(&Hand::empty()), 0);
        assert_eq!(Scoring::Face.score(&Hand::empty()), 0);
    }
}
