//! Canned suggestions keyed by product name.

use serde::{Deserialize, Serialize};

/// How a trigger keyword is compared with tracked item names (both case-folded).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Keyword equals the whole item name.
    #[default]
    Exact,
    /// Keyword occurs anywhere in the item name.
    Substring,
}

impl MatchPolicy {
    fn matches(self, keyword: &str, name: &str) -> bool {
        match self {
            MatchPolicy::Exact => keyword == name,
            MatchPolicy::Substring => name.contains(keyword),
        }
    }
}

/// Ordered keyword → suggestion table plus a matching policy.
#[derive(Debug, Clone, Default)]
pub struct SuggestionMatcher {
    entries: Vec<(String, String)>,
    policy: MatchPolicy,
}

impl SuggestionMatcher {
    /// Keywords are case-folded once here. A repeated keyword replaces the earlier
    /// suggestion but keeps its original position.
    pub fn new<K, V>(mapping: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (keyword, suggestion) in mapping {
            let keyword = fold(keyword.as_ref());
            let suggestion = suggestion.into();
            match entries.iter().position(|(k, _)| *k == keyword) {
                Some(i) => entries[i].1 = suggestion,
                None => entries.push((keyword, suggestion)),
            }
        }
        Self {
            entries,
            policy: MatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Suggestions whose keyword matches at least one name, in table order.
    pub fn suggest<I, S>(&self, names: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names.into_iter().map(|n| fold(n.as_ref())).collect();
        self.entries
            .iter()
            .filter(|(keyword, _)| names.iter().any(|name| self.policy.matches(keyword, name)))
            .map(|(_, suggestion)| suggestion.as_str())
            .collect()
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}
