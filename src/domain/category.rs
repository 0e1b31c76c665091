//! Fixed expense category set.
//!
//! Five labels in a fixed display order. The last one, `Otros`, is the
//! catch-all bucket: any expense whose category is missing, empty, or not
//! one of the known labels is counted there.

use serde::{Deserialize, Serialize};

/// One of the five fixed expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Combustible,
    Mantenimiento,
    Amarre,
    Provisiones,
    /// Catch-all bucket for unknown or missing categories.
    Otros,
}

impl Category {
    /// All categories in display order. `Otros` is always last.
    pub const ALL: [Self; 5] = [
        Self::Combustible,
        Self::Mantenimiento,
        Self::Amarre,
        Self::Provisiones,
        Self::Otros,
    ];

    /// The catch-all bucket.
    pub const CATCH_ALL: Self = Self::Otros;

    /// Display label, identical to the persisted free-form string.
    pub fn label(self) -> &'static str {
        match self {
            Self::Combustible => "Combustible",
            Self::Mantenimiento => "Mantenimiento",
            Self::Amarre => "Amarre",
            Self::Provisiones => "Provisiones",
            Self::Otros => "Otros",
        }
    }

    /// Resolve a free-form category string to its bucket.
    ///
    /// Missing, empty, and unrecognized labels all resolve to the
    /// catch-all. Matching is exact: labels are data, not user input
    /// to be normalized.
    pub fn resolve(label: Option<&str>) -> Self {
        match label {
            Some(s) => Self::ALL
                .into_iter()
                .find(|c| c.label() == s)
                .unwrap_or(Self::CATCH_ALL),
            None => Self::CATCH_ALL,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_resolve_to_themselves() {
        for cat in Category::ALL {
            assert_eq!(Category::resolve(Some(cat.label())), cat);
        }
    }

    #[test]
    fn test_unknown_label_resolves_to_catch_all() {
        assert_eq!(Category::resolve(Some("Unknown")), Category::Otros);
        assert_eq!(Category::resolve(Some("combustible")), Category::Otros);
    }

    #[test]
    fn test_missing_and_empty_resolve_to_catch_all() {
        assert_eq!(Category::resolve(None), Category::Otros);
        assert_eq!(Category::resolve(Some("")), Category::Otros);
    }

    #[test]
    fn test_catch_all_is_last_in_display_order() {
        assert_eq!(Category::ALL[Category::ALL.len() - 1], Category::CATCH_ALL);
    }
}
