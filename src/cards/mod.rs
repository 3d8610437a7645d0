pub mod card;
pub use card::*;

pub mod hand;
pub use hand::*;

pub mod pile;
pub use pile::*;

pub mod rank;
pub use rank::*;

pub mod scoring;
pub use scoring::*;

pub mod suit;
pub use suit::*;
