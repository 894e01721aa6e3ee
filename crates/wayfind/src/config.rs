/// Tunables for a [`PathFinder`](crate::PathFinder) search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up. `None` searches
    /// until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Builder: cap the number of expanded nodes.
    #[must_use]
    pub fn max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Builder: remove the expansion cap.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_expansions = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(SearchConfig::default().max_expansions, None);
    }

    #[test]
    fn builder_sets_and_clears_cap() {
        let cfg = SearchConfig::default().max_expansions(64);
        assert_eq!(cfg.max_expansions, Some(64));
        assert_eq!(cfg.unbounded(), SearchConfig::default());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::default().max_expansions(10);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());
    }
}
