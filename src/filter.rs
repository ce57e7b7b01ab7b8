use std::fmt;

use crate::feature::Feature;

/// Category selection. `All` is the "ALL" sentinel and places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Selector value reserved for "no constraint".
    pub const ALL: &'static str = "ALL";

    /// Parse a selector value. "ALL" is always the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL { Self::All } else { Self::Only(value.to_string()) }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Only(category) => category,
        }
    }

    /// Exact, case-sensitive match. A missing category reads as "".
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category.unwrap_or(""),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self { Self::parse(value) }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Search text plus category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub text: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(text: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        Self { text: text.into(), category: category.into() }
    }

    /// True when the state matches every feature.
    pub fn is_unconstrained(&self) -> bool {
        self.text.trim().is_empty() && self.category == CategoryFilter::All
    }
}

/// Features matching both the name search and the category selection,
/// in input order.
///
/// The search is a case-insensitive substring test on the trimmed text
/// against `name` (missing reads as ""). Empty text matches everything.
pub fn filter<'a>(features: &'a [Feature], state: &FilterState) -> Vec<&'a Feature> {
    let needle = state.text.trim().to_lowercase();

    features.iter()
        .filter(|f| needle.is_empty() || f.name().unwrap_or("").to_lowercase().contains(&needle))
        .filter(|f| state.category.matches(f.category()))
        .collect()
}
