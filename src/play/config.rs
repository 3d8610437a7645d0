use crate::GameError;
use crate::HAND_SIZE;
use crate::MAX_HAND_SIZE;
use crate::Points;
use crate::THRESHOLD;
use crate::cards::Scoring;

/// Table rules fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Cards dealt to each seat at the start of a round.
    pub hand_size: usize,
    /// How the loser's hand is valued.
    pub scoring: Scoring,
    /// Cumulative points that end the match. `None` plays rounds indefinitely.
    pub threshold: Option<Points>,
    /// Seed for the shuffle. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Whether the computer takes a face-up discard it wants.
    pub greedy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            scoring: Scoring::default(),
            threshold: Some(THRESHOLD),
            seed: None,
            greedy: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), GameError> {
        match (1..=MAX_HAND_SIZE).contains(&self.hand_size) {
            true => Ok(()),
            false => Err(GameError::InvalidHandSize(self.hand_size)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WIDE_HAND_SIZE;

    #[test]
    fn default_is_four_cards_to_a_hundred() {
        let config = Config::default();
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.threshold, Some(100));
        assert_eq!(config.scoring, Scoring::Target);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn hand_size_bounds() {
        let config = |hand_size| Config {
            hand_size,
            ..Config::default()
        };
        assert!(config(WIDE_HAND_SIZE).validate().is_ok());
        assert!(config(25).validate().is_ok());
        assert_eq!(config(0).validate(), Err(GameError::InvalidHandSize(0)));
        assert_eq!(config(26).validate(), Err(GameError::InvalidHandSize(26)));
    }
}
