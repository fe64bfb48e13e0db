/// Percentile scorer: total order in, tier scores out.
///
/// One entry function, one options struct. Pure and deterministic: identical
/// ranking, bands, and options always yield identical scores.
use crate::error::Error;
use crate::types::{Ranking, ScoredResult, ThresholdBand};

/// Options for [`score()`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringOptions {
    /// Rounding granularity; every emitted score is a multiple of this.
    /// Halfway cases round up (8.625 at 0.25 rounds to 8.75).
    pub increment: f64,
    /// Optional `(min, max)` applied before quantization.
    pub clamp: Option<(f64, f64)>,
    /// Piecewise-linear interpolation between band boundary points instead of
    /// the default step assignment.
    pub interpolate: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        ScoringOptions {
            increment: 0.25,
            clamp: None,
            interpolate: false,
        }
    }
}

/// Validate a band configuration before any scoring work.
///
/// Bands must be non-empty, strictly ascending by upper bound, each bound in
/// (0, 1], and the last bound exactly 1.0. Together that partitions (0, 1]
/// with no gaps and no overlaps.
pub fn validate_bands(bands: &[ThresholdBand]) -> Result<(), Error> {
    if bands.is_empty() {
        return Err(Error::InvalidBands("no bands configured".to_string()));
    }
    let mut prev = 0.0f64;
    for band in bands {
        if !(band.upper_bound > 0.0 && band.upper_bound <= 1.0) {
            return Err(Error::InvalidBands(format!(
                "upper bound {} outside (0, 1]",
                band.upper_bound,
            )));
        }
        if band.upper_bound <= prev {
            return Err(Error::InvalidBands(format!(
                "upper bounds must be strictly ascending ({} after {})",
                band.upper_bound, prev,
            )));
        }
        if !band.score.is_finite() {
            return Err(Error::InvalidBands(format!(
                "score for bound {} is not finite",
                band.upper_bound,
            )));
        }
        prev = band.upper_bound;
    }
    if prev != 1.0 {
        return Err(Error::InvalidBands(format!(
            "last band must end at 1.0, ends at {prev}",
        )));
    }
    Ok(())
}

fn validate_options(options: &ScoringOptions) -> Result<(), Error> {
    if !(options.increment > 0.0) || !options.increment.is_finite() {
        return Err(Error::InvalidBands(format!(
            "rounding increment must be positive, got {}",
            options.increment,
        )));
    }
    if let Some((min, max)) = options.clamp {
        if !(min < max) {
            return Err(Error::InvalidBands(format!(
                "clamp minimum {min} must be below maximum {max}",
            )));
        }
    }
    Ok(())
}

/// Score every item in a ranking against percentile threshold bands.
///
/// The item at 1-based rank `r` of `n` sits at percentile position `r / n`
/// (best item smallest). Step mode assigns the score of the first band whose
/// upper bound is at or above that position; interpolate mode lerps between
/// adjacent band boundary points. The result is clamped (if configured) and
/// quantized to the rounding increment, half-up.
pub fn score(
    ranking: &Ranking,
    bands: &[ThresholdBand],
    options: &ScoringOptions,
) -> Result<Vec<ScoredResult>, Error> {
    validate_bands(bands)?;
    validate_options(options)?;

    let n = ranking.len();
    let mut results = Vec::with_capacity(n);
    for (idx, item) in ranking.items().iter().enumerate() {
        let rank = idx + 1;
        let percentile = rank as f64 / n as f64;
        let raw = if options.interpolate {
            interpolated_score(bands, percentile)
        } else {
            step_score(bands, percentile)
        };
        let clamped = match options.clamp {
            Some((min, max)) => raw.clamp(min, max),
            None => raw,
        };
        results.push(ScoredResult {
            item: item.clone(),
            rank,
            score: quantize(clamped, options.increment),
        });
    }
    Ok(results)
}

/// First band (ascending) whose upper bound covers the percentile position.
fn step_score(bands: &[ThresholdBand], percentile: f64) -> f64 {
    for band in bands {
        if band.upper_bound >= percentile {
            return band.score;
        }
    }
    // Unreachable after validation: the last bound is 1.0 and percentile <= 1.
    bands[bands.len() - 1].score
}

/// Piecewise-linear between adjacent band boundary points. At or below the
/// first bound the first band's score applies unchanged.
fn interpolated_score(bands: &[ThresholdBand], percentile: f64) -> f64 {
    if percentile <= bands[0].upper_bound {
        return bands[0].score;
    }
    for pair in bands.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if percentile <= hi.upper_bound {
            let t = (percentile - lo.upper_bound) / (hi.upper_bound - lo.upper_bound);
            return lo.score + t * (hi.score - lo.score);
        }
    }
    bands[bands.len() - 1].score
}

/// Round to the nearest multiple of `increment`, halfway cases up.
fn quantize(value: f64, increment: f64) -> f64 {
    (value / increment + 0.5).floor() * increment
}
