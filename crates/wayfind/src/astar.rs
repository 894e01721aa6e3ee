use std::cmp::Ordering;

use log::{debug, trace};
use thiserror::Error;

use crate::config::SearchConfig;
use crate::session::SearchSession;
use crate::traits::AstarPather;

/// Why a search stopped without an answer.
///
/// "No path" is not an error: it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<E> {
    /// The pather's `neighbors`, `estimate` or `cost` failed.
    #[error("pather failed: {0}")]
    Pather(E),
    /// [`SearchConfig::max_expansions`] was reached before the goal.
    #[error("expansion limit reached after {expanded} nodes")]
    ExpansionLimit { expanded: usize },
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes whose neighbors were enumerated.
    pub expanded: usize,
    /// Distinct nodes registered.
    pub discovered: usize,
    /// Outdated frontier entries discarded on extraction.
    pub stale_skipped: usize,
    /// Cost of the returned path, if one was found.
    pub cost: Option<f32>,
}

/// Result of [`PathFinder::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<N> {
    /// Start-to-goal path, or `None` if the goal is unreachable.
    pub path: Option<Vec<N>>,
    pub stats: SearchStats,
}

/// A* search driver bound to a pather.
///
/// The finder itself is stateless between calls: each search runs in its
/// own [`SearchSession`].
pub struct PathFinder<P> {
    pather: P,
    config: SearchConfig,
}

impl<P: AstarPather> PathFinder<P> {
    /// Create a finder with the default configuration.
    pub fn new(pather: P) -> Self {
        Self::with_config(pather, SearchConfig::default())
    }

    pub fn with_config(pather: P, config: SearchConfig) -> Self {
        Self { pather, config }
    }

    #[inline]
    pub fn pather(&self) -> &P {
        &self.pather
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Compute the lowest-cost path from `start` to `end`.
    ///
    /// Returns the full path (including both endpoints), `Ok(None)` if `end`
    /// is unreachable, or the first error raised by the pather.
    pub fn find_path(
        &self,
        start: P::Node,
        end: P::Node,
    ) -> Result<Option<Vec<P::Node>>, SearchError<P::Error>> {
        self.search(start, end).map(|outcome| outcome.path)
    }

    /// Like [`find_path`](Self::find_path), also returning search counters.
    pub fn search(
        &self,
        start: P::Node,
        end: P::Node,
    ) -> Result<SearchOutcome<P::Node>, SearchError<P::Error>> {
        let mut session = SearchSession::new();
        self.search_in(&mut session, start, end)
    }

    /// Run a search reusing the allocations of `session`.
    ///
    /// The session is reset first; afterwards it can be inspected with
    /// [`SearchSession::cost_of`] until the next search.
    pub fn search_in(
        &self,
        session: &mut SearchSession<P::Node>,
        start: P::Node,
        end: P::Node,
    ) -> Result<SearchOutcome<P::Node>, SearchError<P::Error>> {
        session.reset();
        let mut stats = SearchStats::default();

        let start_idx = session.resolve(&start);
        let goal_idx = session.resolve(&end);

        let h = self.pather.estimate(&start, &end).map_err(SearchError::Pather)?;
        session.open(start_idx, start_idx, 0.0, h);

        let mut nbuf = std::mem::take(&mut session.nbuf);
        let result = self.run(session, &mut nbuf, goal_idx, &end, &mut stats);
        session.nbuf = nbuf;

        stats.discovered = session.discovered();
        let found = result?;

        let path = found.map(|idx| {
            stats.cost = session.nodes[idx].g;
            session.path_to(idx)
        });
        debug!(
            "A* {}: expanded={} discovered={} stale_skipped={}",
            if path.is_some() { "found path" } else { "no path" },
            stats.expanded,
            stats.discovered,
            stats.stale_skipped,
        );
        Ok(SearchOutcome { path, stats })
    }

    /// Main expansion loop. Returns the goal slot when reached.
    fn run(
        &self,
        session: &mut SearchSession<P::Node>,
        nbuf: &mut Vec<P::Node>,
        goal_idx: usize,
        end: &P::Node,
        stats: &mut SearchStats,
    ) -> Result<Option<usize>, SearchError<P::Error>> {
        while let Ok(current) = session.frontier.extract_min() {
            let ci = current.idx;

            // Skip entries superseded by a cheaper enqueue or already expanded.
            let node = &session.nodes[ci];
            if !node.open || current.priority > node.priority {
                stats.stale_skipped += 1;
                continue;
            }

            if ci == goal_idx {
                return Ok(Some(ci));
            }

            if let Some(max) = self.config.max_expansions {
                if stats.expanded >= max {
                    debug!("A* expansion limit reached: {} nodes", stats.expanded);
                    return Err(SearchError::ExpansionLimit {
                        expanded: stats.expanded,
                    });
                }
            }

            let current_g = node.g.unwrap_or(0.0);
            let current_loc = node.location.clone();
            session.nodes[ci].open = false;
            stats.expanded += 1;
            trace!("A* expanding slot {ci} (g={current_g}, f={})", current.priority);

            nbuf.clear();
            self.pather
                .neighbors(&current_loc, nbuf)
                .map_err(SearchError::Pather)?;

            for m in nbuf.iter() {
                let step = self.pather.cost(&current_loc, m).map_err(SearchError::Pather)?;
                let tentative_g = current_g + step;

                let mi = session.resolve(m);
                // NaN never counts as an improvement.
                if let Some(g) = session.nodes[mi].g {
                    if tentative_g.partial_cmp(&g) != Some(Ordering::Less) {
                        continue;
                    }
                }

                let h = self.pather.estimate(m, end).map_err(SearchError::Pather)?;
                session.open(mi, ci, tentative_g, tentative_g + h);
            }
        }
        Ok(None)
    }
}
