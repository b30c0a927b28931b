//! ItemKind - the variants of accepted items and their duration policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of accepted item.
///
/// Panels and lightning talks have a fixed length; papers default to
/// fifteen minutes but may be given any valid duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Paper,
    Panel,
    LightningTalk,
}

impl ItemKind {
    /// All kinds, in display order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Paper, ItemKind::Panel, ItemKind::LightningTalk];

    /// Returns the type label used in tables and in the file format.
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Paper => "Paper",
            ItemKind::Panel => "Panel",
            ItemKind::LightningTalk => "LightningTalk",
        }
    }

    /// Length in minutes an item of this kind gets when none is supplied.
    pub fn default_duration(&self) -> i32 {
        match self {
            ItemKind::Paper => 15,
            ItemKind::Panel => 75,
            ItemKind::LightningTalk => 5,
        }
    }

    /// Returns true if items of this kind may override the default length.
    pub fn allows_custom_duration(&self) -> bool {
        matches!(self, ItemKind::Paper)
    }

    /// Resolves a type label, ignoring case and surrounding whitespace.
    ///
    /// `lightning talk` (with a space) is accepted as well.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "paper" => Some(ItemKind::Paper),
            "panel" => Some(ItemKind::Panel),
            "lightningtalk" | "lightning talk" => Some(ItemKind::LightningTalk),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_ignores_case() {
        assert_eq!(ItemKind::from_label("PAPER"), Some(ItemKind::Paper));
        assert_eq!(ItemKind::from_label("panel"), Some(ItemKind::Panel));
        assert_eq!(ItemKind::from_label("LightningTalk"), Some(ItemKind::LightningTalk));
        assert_eq!(ItemKind::from_label("Lightning Talk"), Some(ItemKind::LightningTalk));
    }

    #[test]
    fn from_label_rejects_unknown() {
        assert_eq!(ItemKind::from_label("Keynote"), None);
        assert_eq!(ItemKind::from_label(""), None);
    }

    #[test]
    fn only_papers_allow_custom_duration() {
        assert!(ItemKind::Paper.allows_custom_duration());
        assert!(!ItemKind::Panel.allows_custom_duration());
        assert!(!ItemKind::LightningTalk.allows_custom_duration());
    }

    #[test]
    fn labels_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_label(kind.label()), Some(kind));
        }
    }
}
