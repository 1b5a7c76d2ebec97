//! Pagination states.

crate::state_enum! {
    /// Where the pager is in its lifecycle.
    ///
    /// `Complete` and `Fail` are terminal: the default table has no rule
    /// leaving them.
    pub enum PageState {
        /// Nothing requested yet, or just reset
        Idle => "idle",
        /// A page fetch is in flight
        Fetching => "fetching",
        /// The last page left items behind
        More => "more",
        /// The source is exhausted
        Complete => "complete",
        /// A fetch failed
        Fail => "fail",
    }
    final: [Complete, Fail]
    error: [Fail]
}

impl Default for PageState {
    fn default() -> Self {
        Self::Idle
    }
}
