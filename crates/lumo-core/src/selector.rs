// ── Target selectors ──
//
// A selector is the opaque string the service uses to address bulbs.
// Explicit multi-target sets are not a selector: the orchestrator walks
// them as independent single-target calls.

use std::fmt;

/// Which bulb(s) a query or mutation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every bulb visible to the credential (wire token `all`).
    All,
    /// One explicit bulb identifier, rendered verbatim.
    Id(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Id(id) => f.write_str(id),
        }
    }
}

impl From<&str> for Selector {
    fn from(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Id(s.to_owned())
        }
    }
}

impl From<String> for Selector {
    fn from(s: String) -> Self {
        if s == "all" { Self::All } else { Self::Id(s) }
    }
}

impl From<Option<String>> for Selector {
    /// Missing argument means "everything" -- `list` with no bulb ID.
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::All, Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_renders_the_sentinel_token() {
        assert_eq!(Selector::All.to_string(), "all");
    }

    #[test]
    fn id_renders_verbatim() {
        assert_eq!(
            Selector::Id("d073d5000001".into()).to_string(),
            "d073d5000001"
        );
    }

    #[test]
    fn parsing_recognizes_the_sentinel() {
        assert_eq!(Selector::from("all"), Selector::All);
        assert_eq!(
            Selector::from("d073d5000001"),
            Selector::Id("d073d5000001".into())
        );
    }

    #[test]
    fn missing_argument_means_all() {
        assert_eq!(Selector::from(None), Selector::All);
        assert_eq!(
            Selector::from(Some("d073d5000001".to_owned())),
            Selector::Id("d073d5000001".into())
        );
    }
}
