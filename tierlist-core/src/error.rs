use thiserror::Error;

/// Errors surfaced by the ranking and scoring engine.
///
/// All variants propagate unchanged through the session coordinator: every
/// one reflects either invalid configuration (caller fixes and retries the
/// whole session) or a deliberate abort. The engine performs no local
/// recovery, and an empty item list is deliberately NOT an error: ranking
/// nothing yields an empty ranking.
#[derive(Error, Debug)]
pub enum Error {
    /// The oracle could not resolve a required comparison. The session is
    /// abandoned; no partial ranking is returned.
    #[error("comparison aborted before the ranking was complete")]
    IndeterminateComparison,

    /// Malformed threshold band configuration (or a non-positive rounding
    /// increment). Detected before any scoring work begins.
    #[error("invalid threshold bands: {0}")]
    InvalidBands(String),

    /// A re-score was handed rank positions that are not a 1-based
    /// permutation, or duplicate item keys.
    #[error("invalid ranking: {0}")]
    InvalidRanking(String),
}
