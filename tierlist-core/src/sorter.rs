/// Pairwise ranking sorter: binary insertion driven by oracle queries.
///
/// Maintains a growing sorted prefix and binary-searches each new item into
/// position, asking the oracle one comparison at a time. Inserting the k-th
/// item costs at most `ceil(log2(k+1))` queries, about `n*log2(n)` overall:
/// the information-theoretic bound for comparison sorts, and far under the
/// `n*(n-1)/2` of a round-robin. A globally minimal query count is not
/// promised (optimal sorting is NP-hard); this is the practical optimum.
use crate::error::Error;
use crate::oracle::{ComparatorOracle, Verdict};
use crate::types::{Item, Progress, Ranking};

/// Worst-case number of oracle queries to rank `n` items:
/// `sum over i in 2..=n of ceil(log2(i))`.
///
/// Drives the `estimated_total` field of the progress callback.
pub fn estimate_comparisons(n: usize) -> usize {
    (2..=n).map(ceil_log2).sum()
}

fn ceil_log2(k: usize) -> usize {
    (usize::BITS - (k - 1).leading_zeros()) as usize
}

/// Rank `items` into a strict total order, best first.
///
/// The only side effect is the oracle queries themselves; given a
/// deterministic oracle the result is deterministic. `on_progress`, when
/// supplied, is invoked after every answered query, a pass-through hook for
/// frontends that render progress.
///
/// An empty input returns an empty ranking without touching the oracle.
/// `Verdict::Abort` on any query abandons the session with
/// `Error::IndeterminateComparison`; no partial ranking escapes.
pub fn rank(
    items: &[Item],
    oracle: &mut dyn ComparatorOracle,
    mut on_progress: Option<&mut dyn FnMut(Progress)>,
) -> Result<Ranking, Error> {
    if items.is_empty() {
        return Ok(Ranking::from_sorted(Vec::new()));
    }

    let estimated_total = estimate_comparisons(items.len());
    let mut completed = 0usize;

    let mut ordered: Vec<Item> = Vec::with_capacity(items.len());
    ordered.push(items[0].clone());

    for x in &items[1..] {
        let mut lo = 0usize;
        let mut hi = ordered.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            match oracle.compare(x, &ordered[mid]) {
                Verdict::First => hi = mid,
                Verdict::Second => lo = mid + 1,
                Verdict::Abort => return Err(Error::IndeterminateComparison),
            }
            completed += 1;
            if let Some(cb) = on_progress.as_mut() {
                cb(Progress {
                    completed,
                    estimated_total,
                });
            }
        }
        ordered.insert(lo, x.clone());
    }

    Ok(Ranking::from_sorted(ordered))
}
