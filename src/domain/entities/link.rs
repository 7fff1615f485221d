use serde::{Deserialize, Serialize};

/// Link attached to a post, with its redirect-resolved target once known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    original: String,
    expanded: Option<String>,
}

impl Link {
    /// Creates a link with no expanded target.
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            expanded: None,
        }
    }

    /// Sets the expanded target. Empty targets are ignored.
    #[must_use]
    pub fn with_expanded(mut self, expanded: impl Into<String>) -> Self {
        self.set_expanded(expanded);
        self
    }

    /// The link as posted.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The redirect-resolved link, if resolution has happened.
    #[must_use]
    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// The expanded link when present, otherwise the original.
    #[must_use]
    pub fn effective(&self) -> &str {
        self.expanded().unwrap_or(&self.original)
    }

    /// Returns true if the original link is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Records the redirect target.
    pub fn set_expanded(&mut self, expanded: impl Into<String>) {
        let expanded = expanded.into();
        self.expanded = (!expanded.is_empty()).then_some(expanded);
    }
}

impl From<&str> for Link {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Link {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.effective())
    }
}
