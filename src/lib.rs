//! Core rules for AK47, a draw-and-discard card game.
//!
//! Two seats share a draw pile and a discard pile. Each turn a seat draws
//! one card and drops one, racing to hold the four target ranks
//! A, K, 4 and 7. The first seat to do so wins the round and collects
//! the value of the opponent's hand.
//!
//! ## Modules
//!
//! - [`cards`] — Card values, piles, hands and the two scoring policies
//! - [`players`] — The [`players::Player`] seam, the greedy computer and the interactive human
//! - [`play`] — Round and match orchestration in [`play::Session`]
pub mod cards;
pub mod error;
pub mod play;
pub mod players;

pub use error::GameError;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round and match points.
pub type Points = u32;

// ============================================================================
// TABLE CONFIGURATION
// ============================================================================
/// Seats at the table.
pub const N: usize = 2;
/// Cards in a standard deck. Draw pile, discard pile and hands always sum to this.
pub const DECK_SIZE: usize = 52;
/// Starting hand size against the computer.
pub const HAND_SIZE: usize = 4;
/// Starting hand size of the wide variant.
pub const WIDE_HAND_SIZE: usize = 7;
/// Largest starting hand that still leaves two cards in the draw pile.
pub const MAX_HAND_SIZE: usize = (DECK_SIZE - 2) / N;
/// Cumulative points that end a match.
pub const THRESHOLD: Points = 100;

// ============================================================================
// SCORING
// ============================================================================
/// Value of a letter rank (A, J, Q, K).
pub const LETTER_POINTS: Points = 10;
/// Value of an eight under face scoring.
pub const EIGHT_POINTS: Points = 50;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Route game logs to the terminal at `level` and to `logs/ak47-<unix-time>.log`
/// at DEBUG, so a finished match can be replayed from its draws and discards.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = journal(stamp);
    std::fs::create_dir_all("logs")?;
    let replay = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path)?,
    );
    let table = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![table, replay])?;
    log::debug!("logging match to {}", path.display());
    Ok(())
}

/// Log file for a session started at `stamp` seconds past the epoch.
#[cfg(feature = "cli")]
fn journal(stamp: u64) -> std::path::PathBuf {
    std::path::Path::new("logs").join(format!("ak47-{}.log", stamp))
}
