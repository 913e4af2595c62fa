//! Counters maintained during a search.

/// Per-search statistics.
///
/// Each root task of a parallel search owns its own context; the counts are
/// summed when the results are merged.
#[derive(Clone, Debug, Default)]
pub struct SearchContext {
    /// Number of nodes searched in this context
    pub n_nodes: u64,
    /// Number of beta cutoffs
    #[cfg(feature = "search-stats")]
    pub n_cutoffs: u64,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    #[inline]
    pub fn record_cutoff(&mut self) {
        #[cfg(feature = "search-stats")]
        {
            self.n_cutoffs += 1;
        }
    }

    /// Adds the counters of `other` into `self`.
    pub fn merge(&mut self, other: &SearchContext) {
        self.n_nodes += other.n_nodes;
        #[cfg(feature = "search-stats")]
        {
            self.n_cutoffs += other.n_cutoffs;
        }
    }
}
