/// Module for the two private hole cards.
mod pocket;
/// Export `Pocket`
pub use self::pocket::Pocket;

/// Module for the five community-card slots.
mod table;
/// Export `Table`
pub use self::table::Table;

/// Module with the closed-form pre-flop combinatorics.
pub mod preflop;

/// Module that enumerates and classifies board completions.
mod enumerate;
/// Export the enumeration entry points
pub use self::enumerate::{completion_distribution, completion_histogram};

/// Module for the per-stage controller.
mod game;
/// Export `Game` and its result types
pub use self::game::{Game, Stage, StageReport};
