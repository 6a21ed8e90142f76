use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of spending/earning categories shared by transaction creation,
/// filtering, and aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Transport,
    Salary,
    Bills,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Salary,
        Category::Bills,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Salary => "Salary",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Raised when a string does not name one of the closed categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// Category criterion of a filter. `Unrecognized` captures filter input that
/// names no real category; it matches nothing rather than failing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized,
}

impl CategoryFilter {
    /// Parses a UI-provided category value, with `"all"` as the sentinel for
    /// no constraint.
    pub fn parse(value: &str) -> CategoryFilter {
        if value == "all" {
            return CategoryFilter::All;
        }
        match value.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unrecognized,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
            CategoryFilter::Unrecognized => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sentinel_and_category_names() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Food"),
            CategoryFilter::Only(Category::Food)
        );
        assert_eq!(
            CategoryFilter::parse("Groceries"),
            CategoryFilter::Unrecognized
        );
        // Category names are case-sensitive.
        assert_eq!(CategoryFilter::parse("food"), CategoryFilter::Unrecognized);
    }

    #[test]
    fn unrecognized_matches_nothing() {
        for category in Category::ALL {
            assert!(!CategoryFilter::Unrecognized.matches(category));
            assert!(CategoryFilter::All.matches(category));
        }
    }
}
