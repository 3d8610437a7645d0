pub mod config;
pub use config::*;

pub mod ply;
pub use ply::*;

pub mod seat;
pub use seat::*;

pub mod session;
pub use session::*;
