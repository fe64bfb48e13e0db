/// The comparator oracle seam.
///
/// The sorter performs comparisons through this trait and nothing else. The
/// reference frontend is an interactive terminal prompt, tests use
/// [`ScriptedOracle`], and any batch judge satisfying the same contract works
/// unchanged.
use crate::types::Item;

/// Outcome of a single pairwise query.
///
/// The contract is a strict preference: there is no "equal" verdict. An
/// oracle that internally allows "no preference" must resolve it to a
/// deterministic strict preference itself, or return `Abort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The first item is preferred.
    First,
    /// The second item is preferred.
    Second,
    /// The oracle declines to answer; the session is abandoned.
    Abort,
}

/// Resolves pairwise preference queries.
///
/// Calls are blocking request/response with exactly one query in flight:
/// each comparison may depend on the previous answer, so there is nothing to
/// fan out. Latency is unbounded (a human may be on the other end). Any
/// "inspect metadata first" affordance lives inside an implementation and is
/// invisible to the sorter.
pub trait ComparatorOracle {
    fn compare(&mut self, a: &Item, b: &Item) -> Verdict;
}

/// Deterministic oracle driven by a fixed preference order, best first.
///
/// Records every query it answers so tests can check the sorter's behavior
/// against what was actually asked. Can be told to abort on a specific query.
pub struct ScriptedOracle {
    order: Vec<String>,
    abort_on: Option<usize>,
    /// Item names of every answered or aborted query, in ask order.
    pub queries: Vec<(String, String)>,
}

impl ScriptedOracle {
    /// `order` lists item names from most to least preferred.
    pub fn new(order: &[&str]) -> Self {
        ScriptedOracle {
            order: order.iter().map(|s| s.to_string()).collect(),
            abort_on: None,
            queries: Vec::new(),
        }
    }

    /// Abort on the `n`-th query (1-based) instead of answering it.
    pub fn abort_on_query(mut self, n: usize) -> Self {
        self.abort_on = Some(n);
        self
    }

    fn position(&self, item: &Item) -> usize {
        self.order
            .iter()
            .position(|name| name == &item.name)
            .unwrap_or_else(|| panic!("ScriptedOracle: unknown item \"{}\"", item.name))
    }
}

impl ComparatorOracle for ScriptedOracle {
    fn compare(&mut self, a: &Item, b: &Item) -> Verdict {
        self.queries.push((a.name.clone(), b.name.clone()));
        if self.abort_on == Some(self.queries.len()) {
            return Verdict::Abort;
        }
        if self.position(a) < self.position(b) {
            Verdict::First
        } else {
            Verdict::Second
        }
    }
}
