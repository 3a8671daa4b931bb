//! Include/exclude filters over enumerable keys (entity kinds, game modes).

use std::collections::HashMap;
use std::hash::Hash;

/// Whether a mentioned key is accepted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Include,
    Exclude,
}

/// A filter over keys of type `T` with three shapes:
///
/// - `None`: unconstrained, everything matches.
/// - `Require(key)`: exactly that key matches, nothing else.
/// - `Toggles(map)`: unmentioned keys match, included keys match, excluded
///   keys do not.
///
/// A requirement structurally overrides any toggle list: setting one replaces
/// whatever was configured before, and later toggles do not displace it.
/// Re-requiring replaces the previous requirement (last write wins, matching
/// a redeclared single-value selector constraint).
#[derive(Debug, Clone)]
pub enum ToggleFilter<T> {
    None,
    Require(T),
    Toggles(HashMap<T, bool>),
}

impl<T: Eq + Hash> ToggleFilter<T> {
    /// Add an include/exclude entry for `key`.
    ///
    /// Ignored while a requirement is active, since the requirement already
    /// decides every key.
    pub fn toggle(&mut self, key: T, toggle: Toggle) {
        let include = matches!(toggle, Toggle::Include);
        match self {
            ToggleFilter::None => {
                let mut map = HashMap::new();
                map.insert(key, include);
                *self = ToggleFilter::Toggles(map);
            }
            ToggleFilter::Require(_) => {}
            ToggleFilter::Toggles(map) => {
                map.insert(key, include);
            }
        }
    }

    /// Make `key` the sole accepted value, discarding any toggle entries.
    pub fn require(&mut self, key: T) {
        *self = ToggleFilter::Require(key);
    }

    /// True when no constraint is configured and the filter stage is a no-op.
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, ToggleFilter::None)
    }

    /// Whether `key` passes this filter.
    pub fn matches(&self, key: &T) -> bool {
        match self {
            ToggleFilter::None => true,
            ToggleFilter::Require(required) => key == required,
            ToggleFilter::Toggles(map) => map.get(key).copied().unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_matches_everything() {
        let filter: ToggleFilter<&str> = ToggleFilter::None;
        assert!(filter.is_unconstrained());
        assert!(filter.matches(&"zombie"));
        assert!(filter.matches(&"skeleton"));
    }

    #[test]
    fn exclude_drops_mentioned_key_only() {
        let mut filter = ToggleFilter::None;
        filter.toggle("zombie", Toggle::Exclude);
        assert!(!filter.is_unconstrained());
        assert!(!filter.matches(&"zombie"));
        assert!(filter.matches(&"skeleton"));
    }

    #[test]
    fn include_passes_mentioned_key() {
        let mut filter = ToggleFilter::None;
        filter.toggle("skeleton", Toggle::Include);
        filter.toggle("zombie", Toggle::Exclude);
        assert!(filter.matches(&"skeleton"));
        assert!(!filter.matches(&"zombie"));
        assert!(filter.matches(&"creeper"));
    }

    #[test]
    fn requirement_overrides_toggles() {
        let mut filter = ToggleFilter::None;
        filter.toggle("skeleton", Toggle::Include);
        filter.require("zombie");
        assert!(filter.matches(&"zombie"));
        assert!(!filter.matches(&"skeleton"));
        assert!(!filter.matches(&"creeper"));
    }

    #[test]
    fn toggle_after_requirement_is_ignored() {
        let mut filter = ToggleFilter::None;
        filter.require("zombie");
        filter.toggle("skeleton", Toggle::Include);
        assert!(filter.matches(&"zombie"));
        assert!(!filter.matches(&"skeleton"));
    }

    #[test]
    fn second_requirement_wins() {
        let mut filter = ToggleFilter::None;
        filter.require("zombie");
        filter.require("skeleton");
        assert!(filter.matches(&"skeleton"));
        assert!(!filter.matches(&"zombie"));
    }
}
