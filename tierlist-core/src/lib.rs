/// tierlist-core: Pure ranking & scoring engine.
///
/// Pairwise comparisons → strict total order → percentile tier scores.
/// No IO, no terminal, no filesystem. Bring your own comparator oracle.
///
/// The sorter is binary insertion: each new item is binary-searched into a
/// growing sorted prefix, one blocking oracle query at a time, which keeps
/// the total query count near the `n*log2(n)` information-theoretic bound.
/// The scorer maps each rank's percentile position onto configurable
/// threshold bands and quantizes to a rounding increment.
///
/// # Quick start
///
/// ```rust
/// use tierlist_core::{session, Item, ScoringOptions, ScriptedOracle, ThresholdBand};
///
/// let items = vec![
///     Item::new("Currents", "Tame Impala"),
///     Item::new("In Rainbows", "Radiohead"),
/// ];
///
/// // Tests and batch judges use a scripted oracle; the CLI wires up a
/// // terminal prompt implementing the same trait.
/// let mut oracle = ScriptedOracle::new(&["In Rainbows", "Currents"]);
///
/// let bands = vec![
///     ThresholdBand { upper_bound: 0.5, score: 9.0 },
///     ThresholdBand { upper_bound: 1.0, score: 7.0 },
/// ];
///
/// let results = session::run(&items, &mut oracle, &bands, &ScoringOptions::default(), None)
///     .unwrap();
///
/// assert_eq!(results[0].item.name, "In Rainbows");
/// assert_eq!(results[0].score, 9.0);
/// assert_eq!(results[1].score, 7.0);
/// ```

pub mod error;
pub mod oracle;
pub mod scoring;
pub mod session;
pub mod sorter;
pub mod types;

// Re-export primary public API at crate root.
pub use error::Error;
pub use oracle::{ComparatorOracle, ScriptedOracle, Verdict};
pub use scoring::{score, validate_bands, ScoringOptions};
pub use sorter::{estimate_comparisons, rank};
pub use types::{Item, Progress, Ranking, ScoredResult, ThresholdBand};
