use super::Player;
use crate::cards::Card;
use crate::cards::Hand;
use crate::play::Source;
use dialoguer::Select;

/// Terminal player choosing through `dialoguer` menus.
#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn source(&mut self, _: &Hand, offer: Option<Card>) -> Source {
        match offer {
            None => Source::Pile,
            Some(card) => {
                let labels = [String::from("Draw from the pile"), format!("Take the {}", card)];
                match Self::selection("Take a card", &labels) {
                    Some(1) => Source::Discard,
                    _ => Source::Pile,
                }
            }
        }
    }
    fn discard(&mut self, hand: &Hand) -> Option<usize> {
        let labels = hand.iter().map(Card::to_string).collect::<Vec<_>>();
        Self::selection("Drop a card", &labels)
    }
}

impl Human {
    fn selection(prompt: &str, labels: &[String]) -> Option<usize> {
        Select::new()
            .with_prompt(prompt)
            .report(false)
            .items(labels)
            .default(0)
            .interact()
            .inspect_err(|e| log::warn!("input aborted: {}", e))
            .ok()
    }
}
