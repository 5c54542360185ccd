//! Core type aliases, traits, and constants for runout.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by the card primitives, the enumeration engine, and the binary.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Completions examined, wins, ties, and category occurrences.
pub type Count = u64;
/// Derived statistics reported on a 0..=100 scale.
pub type Percentage = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and fixtures.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// CARD UNIVERSE
// ============================================================================
/// Cards in a standard deck. Every card is one bit of a `u64`.
pub const DECK_SIZE: usize = 52;
/// Private cards dealt to each player.
pub const HOLE_SIZE: usize = 2;
/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;
/// Most players a single deck can serve once the board is complete.
pub const MAX_SEATS: usize = (DECK_SIZE - BOARD_SIZE) / HOLE_SIZE;

// ============================================================================
// ENUMERATION
// ============================================================================
/// Completions between progress log messages.
pub const PROGRESS_CHECKPOINT: Count = 250_000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Environment variable naming a directory for DEBUG-level log files.
#[cfg(feature = "cli")]
pub const LOG_DIR_VAR: &str = "RUNOUT_LOG_DIR";

/// Initialize logging. INFO goes to the terminal; if `RUNOUT_LOG_DIR` is set,
/// DEBUG also goes to a timestamped file in that directory.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if let Ok(dir) = std::env::var(LOG_DIR_VAR) {
        std::fs::create_dir_all(&dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let path = std::path::Path::new(&dir).join(format!("{}.log", time));
        let file = simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            std::fs::File::create(path)?,
        );
        loggers.push(file);
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
