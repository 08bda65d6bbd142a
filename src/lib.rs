//! Four classical sorts raced on a deck of playing cards.
//!
//! A deck is generated from interleaved rank and suit cycles, then sorted
//! by selection sort and binary insertion sort, each in an iterative and a
//! recursive flavour. Every variant realizes the same total order over
//! [`cards::Card`]: rank ascending, ties broken by suit priority
//! (♠ before ♥ before ♣ before ♦).
//!
//! ## Modules
//!
//! - [`cards`]: rank, suit, card ordering, and the cyclic deck generator
//! - [`sorting`]: the four algorithms and the [`sorting::Algorithm`] roster
//! - [`report`]: fixed-width card layout and per-algorithm timings
//! - `cli`: argument parsing, the y/n prompt, and the report flow
pub mod cards;
pub mod report;
pub mod sorting;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and shuffled decks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECK PARAMETERS
// ============================================================================
/// Number of cards generated when no size is requested.
pub const DECK_SIZE: usize = 250;
/// Largest deck accepted from the command line. Recursive sorts nest one
/// frame per card, so this also bounds stack depth.
pub const MAX_DECK_SIZE: usize = 10_000;

// ============================================================================
// REPORT LAYOUT
// ============================================================================
/// Cards printed per line.
pub const COLUMNS: usize = 7;
/// Width the rank label is left-padded to inside each `[rank suit]` cell.
pub const LABEL_WIDTH: usize = 7;
/// Question asked before anything is printed.
pub const PROMPT: &str = "Apakah anda ingin menampilkan data kartu? (y/n)";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so the stdout report stays clean.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        log::warn!("logger already initialized");
    }
}
