use std::collections::HashSet;

use crate::error::Error;

/// An item being ranked, e.g. one album.
///
/// The `name`/`artist` pair is the item's stable key and must be unique
/// within a session. `tracks` and `url` are display payload shown to the
/// oracle during a comparison; ordering logic never reads them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub artist: String,
    /// Track titles shown on request during a comparison.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tracks: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub url: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Item {
            name: name.into(),
            artist: artist.into(),
            tracks: Vec::new(),
            url: None,
        }
    }

    /// Stable identity within a session.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.artist)
    }
}

/// An immutable strict total order over items, best first.
///
/// Produced once by the sorter, or rebuilt from stored rank positions via
/// [`Ranking::from_ranked`]. Never mutated afterwards.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    items: Vec<Item>,
}

impl Ranking {
    pub(crate) fn from_sorted(items: Vec<Item>) -> Self {
        Ranking { items }
    }

    /// Rebuild a ranking from stored `(rank_position, item)` pairs, e.g. rows
    /// read back from an exported result file.
    ///
    /// Positions must be exactly the 1-based permutation `1..=n` and item keys
    /// must be unique; anything else is `Error::InvalidRanking`.
    pub fn from_ranked(mut entries: Vec<(usize, Item)>) -> Result<Self, Error> {
        entries.sort_by_key(|(rank, _)| *rank);
        for (i, (rank, _)) in entries.iter().enumerate() {
            if *rank != i + 1 {
                return Err(Error::InvalidRanking(format!(
                    "rank positions must be exactly 1..={}, found {}",
                    entries.len(),
                    rank,
                )));
            }
        }
        let mut seen = HashSet::new();
        for (_, item) in &entries {
            if !seen.insert((item.name.clone(), item.artist.clone())) {
                return Err(Error::InvalidRanking(format!(
                    "duplicate item \"{}\" by \"{}\"",
                    item.name, item.artist,
                )));
            }
        }
        Ok(Ranking {
            items: entries.into_iter().map(|(_, item)| item).collect(),
        })
    }

    /// Items best first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A scoring tier: every rank whose percentile position falls at or under
/// `upper_bound` (and over the previous band's bound) receives `score`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdBand {
    /// Cumulative percentile upper bound in (0, 1]. Bands are ordered
    /// ascending and the last band's bound must be exactly 1.0.
    pub upper_bound: f64,
    pub score: f64,
}

/// One scored item: 1-based rank position plus the quantized tier score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredResult {
    pub item: Item,
    pub rank: usize,
    pub score: f64,
}

/// Running comparison count reported to the sorter's progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Oracle queries answered so far.
    pub completed: usize,
    /// Worst-case total for this input size (`estimate_comparisons`).
    pub estimated_total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item::new(name, "Artist")
    }

    #[test]
    fn test_from_ranked_reorders_by_position() {
        let ranking = Ranking::from_ranked(vec![
            (3, item("C")),
            (1, item("A")),
            (2, item("B")),
        ])
        .unwrap();
        let names: Vec<&str> = ranking.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_from_ranked_empty_is_valid() {
        let ranking = Ranking::from_ranked(Vec::new()).unwrap();
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_from_ranked_rejects_duplicate_position() {
        let err = Ranking::from_ranked(vec![(1, item("A")), (1, item("B"))]).unwrap_err();
        assert!(matches!(err, Error::InvalidRanking(_)));
    }

    #[test]
    fn test_from_ranked_rejects_missing_position() {
        // 1 and 3 with no 2
        let err = Ranking::from_ranked(vec![(1, item("A")), (3, item("B"))]).unwrap_err();
        assert!(matches!(err, Error::InvalidRanking(_)));
    }

    #[test]
    fn test_from_ranked_rejects_zero_position() {
        let err = Ranking::from_ranked(vec![(0, item("A")), (1, item("B"))]).unwrap_err();
        assert!(matches!(err, Error::InvalidRanking(_)));
    }

    #[test]
    fn test_from_ranked_rejects_duplicate_key() {
        let err = Ranking::from_ranked(vec![(1, item("A")), (2, item("A"))]).unwrap_err();
        assert!(matches!(err, Error::InvalidRanking(_)));
    }

    #[test]
    fn test_same_name_different_artist_is_distinct() {
        let a = Item::new("Greatest Hits", "Queen");
        let b = Item::new("Greatest Hits", "ABBA");
        let ranking = Ranking::from_ranked(vec![(1, a), (2, b)]).unwrap();
        assert_eq!(ranking.len(), 2);
    }
}
