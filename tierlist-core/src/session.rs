/// Session coordinator: wires the sorter and the scorer together.
///
/// Two entry points. `run` is a fresh interactive session: bands are
/// validated before the first oracle query (fail fast), then sort, then
/// score. `rescore` re-applies new bands to a previously computed order
/// without ever touching an oracle. All state is carried in the arguments;
/// there are no ambient globals.
use crate::error::Error;
use crate::oracle::ComparatorOracle;
use crate::scoring::{self, ScoringOptions};
use crate::sorter;
use crate::types::{Item, Progress, Ranking, ScoredResult, ThresholdBand};

/// Rank `items` through the oracle, then score the resulting order.
///
/// A sorter failure (oracle abort) propagates unchanged and the scorer is
/// never invoked. An empty item list yields an empty result set with zero
/// oracle queries.
pub fn run(
    items: &[Item],
    oracle: &mut dyn ComparatorOracle,
    bands: &[ThresholdBand],
    options: &ScoringOptions,
    on_progress: Option<&mut dyn FnMut(Progress)>,
) -> Result<Vec<ScoredResult>, Error> {
    scoring::validate_bands(bands)?;
    let ranking = sorter::rank(items, oracle, on_progress)?;
    scoring::score(&ranking, bands, options)
}

/// Re-apply threshold bands to an existing ranking. No comparisons happen;
/// this is how stored rank order is replayed against different tiers.
pub fn rescore(
    ranking: &Ranking,
    bands: &[ThresholdBand],
    options: &ScoringOptions,
) -> Result<Vec<ScoredResult>, Error> {
    scoring::score(ranking, bands, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ScriptedOracle;

    fn items(names: &[&str]) -> Vec<Item> {
        names.iter().map(|n| Item::new(*n, "Artist")).collect()
    }

    fn default_bands() -> Vec<ThresholdBand> {
        vec![
            ThresholdBand { upper_bound: 0.01, score: 10.0 },
            ThresholdBand { upper_bound: 0.10, score: 9.5 },
            ThresholdBand { upper_bound: 0.25, score: 8.75 },
            ThresholdBand { upper_bound: 0.75, score: 7.5 },
            ThresholdBand { upper_bound: 1.00, score: 6.0 },
        ]
    }

    #[test]
    fn test_run_sorts_then_scores() {
        let mut oracle = ScriptedOracle::new(&["A", "B", "C", "D"]);
        let results = run(
            &items(&["D", "B", "A", "C"]),
            &mut oracle,
            &default_bands(),
            &ScoringOptions::default(),
            None,
        )
        .unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        let scores: Vec<f64> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![8.75, 7.5, 7.5, 6.0]);
    }

    #[test]
    fn test_run_empty_items() {
        let mut oracle = ScriptedOracle::new(&[]);
        let results = run(
            &[],
            &mut oracle,
            &default_bands(),
            &ScoringOptions::default(),
            None,
        )
        .unwrap();
        assert!(results.is_empty());
        assert!(oracle.queries.is_empty());
    }

    #[test]
    fn test_run_validates_bands_before_any_query() {
        let mut oracle = ScriptedOracle::new(&["A", "B"]);
        let bad = vec![ThresholdBand { upper_bound: 0.5, score: 8.0 }];
        let err = run(
            &items(&["B", "A"]),
            &mut oracle,
            &bad,
            &ScoringOptions::default(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBands(_)));
        assert!(oracle.queries.is_empty(), "bands must fail before sorting");
    }

    #[test]
    fn test_run_abort_skips_scorer() {
        let mut oracle = ScriptedOracle::new(&["A", "B", "C"]).abort_on_query(2);
        let err = run(
            &items(&["C", "B", "A"]),
            &mut oracle,
            &default_bands(),
            &ScoringOptions::default(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::IndeterminateComparison));
    }

    #[test]
    fn test_rescore_never_compares_and_is_deterministic() {
        let entries = (1..=10)
            .map(|r| (r, Item::new(format!("album{r}"), "Artist")))
            .collect::<Vec<_>>();
        let ranking = Ranking::from_ranked(entries).unwrap();

        let first = rescore(&ranking, &default_bands(), &ScoringOptions::default()).unwrap();
        let second = rescore(&ranking, &default_bands(), &ScoringOptions::default()).unwrap();
        assert_eq!(first, second);

        let flat = rescore(
            &ranking,
            &[ThresholdBand { upper_bound: 1.0, score: 5.0 }],
            &ScoringOptions::default(),
        )
        .unwrap();
        assert!(flat.iter().all(|r| r.score == 5.0));
    }
}
