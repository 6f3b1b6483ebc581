//! Fixed spending-category vocabulary and the selector conventions built on it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Option value of the "All Categories" pseudo-option
pub const ALL_OPTION_VALUE: &str = "all";

/// Option value of the "Other" (uncategorized) option
pub const OTHER_OPTION_VALUE: &str = "other";

/// Label shown for records without a category
pub const OTHER_LABEL: &str = "Other";

const DEFAULT_COLOR_CLASS: &str = "text-gray-800 font-semibold";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
}

impl Category {
    /// Every category, in selector order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
        }
    }

    /// Case-insensitive lookup; stored records may carry lowercase names
    pub fn parse(value: &str) -> Option<Category> {
        let value = value.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Category::Food => "text-orange-600 font-semibold",
            Category::Transport => "text-blue-600 font-semibold",
            Category::Shopping => "text-purple-600 font-semibold",
            Category::Entertainment => "text-pink-600 font-semibold",
            Category::Bills => "text-gray-600 font-semibold",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Colour class for a stored category value, whatever its case
pub fn color_class(category: Option<&str>) -> &'static str {
    category
        .and_then(Category::parse)
        .map(|c| c.color_class())
        .unwrap_or(DEFAULT_COLOR_CLASS)
}

/// Display label for a stored category value. Unknown names are shown with
/// their first letter capitalised; absent or blank values read "Other".
pub fn display_label(category: Option<&str>) -> String {
    match category.map(str::trim).filter(|c| !c.is_empty()) {
        None => OTHER_LABEL.to_string(),
        Some(value) => match Category::parse(value) {
            Some(known) => known.as_str().to_string(),
            None => {
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => OTHER_LABEL.to_string(),
                }
            }
        },
    }
}

/// What a category selector reports for a raw option value: the "all"
/// sentinel and the empty value mean no selection, anything else is passed
/// through verbatim.
pub fn normalize_selection(raw: &str) -> Option<String> {
    if raw.is_empty() || raw == ALL_OPTION_VALUE {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Category constraint applied to a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// Records stored without a category
    Uncategorized,
}

impl CategoryFilter {
    /// Interpret a selector result (see [`normalize_selection`])
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None => CategoryFilter::All,
            Some(value) if value.eq_ignore_ascii_case(OTHER_OPTION_VALUE) => {
                CategoryFilter::Uncategorized
            }
            Some(value) => Category::parse(value)
                .map(CategoryFilter::Only)
                .unwrap_or(CategoryFilter::All),
        }
    }

    /// Selector option value that represents this filter
    pub fn option_value(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_OPTION_VALUE,
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Uncategorized => OTHER_OPTION_VALUE,
        }
    }

    /// Value of the `category` query parameter. `None` omits the parameter;
    /// uncategorized records are requested with an explicit empty string.
    pub fn query_value(&self) -> Option<String> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category.as_str().to_string()),
            CategoryFilter::Uncategorized => Some(String::new()),
        }
    }

    /// Human label used in captions, `None` when unconstrained
    pub fn label(&self) -> Option<&'static str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(category) => Some(category.as_str()),
            CategoryFilter::Uncategorized => Some(OTHER_LABEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["Food", "Transport", "Shopping", "Entertainment", "Bills"]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse(" BILLS "), Some(Category::Bills));
        assert_eq!(Category::parse("Groceries"), None);
        assert_eq!("Transport".parse::<Category>(), Ok(Category::Transport));
        assert!("Rent".parse::<Category>().is_err());
    }

    #[test]
    fn test_normalize_selection() {
        assert_eq!(normalize_selection("all"), None);
        assert_eq!(normalize_selection(""), None);
        assert_eq!(normalize_selection("Shopping"), Some("Shopping".to_string()));
    }

    #[test]
    fn test_all_categories_omits_parameter() {
        let filter = CategoryFilter::from_selection(normalize_selection("all").as_deref());
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(filter.query_value(), None);
    }

    #[test]
    fn test_other_sends_explicit_empty_parameter() {
        let filter = CategoryFilter::from_selection(Some(OTHER_OPTION_VALUE));
        assert_eq!(filter, CategoryFilter::Uncategorized);
        assert_eq!(filter.query_value(), Some(String::new()));
        assert_ne!(filter.query_value(), CategoryFilter::All.query_value());
    }

    #[test]
    fn test_listed_category_is_sent_verbatim() {
        let filter = CategoryFilter::from_selection(Some("Entertainment"));
        assert_eq!(filter, CategoryFilter::Only(Category::Entertainment));
        assert_eq!(filter.query_value().as_deref(), Some("Entertainment"));
        assert_eq!(filter.option_value(), "Entertainment");
    }

    #[test]
    fn test_color_class_defaults() {
        assert_eq!(color_class(Some("transport")), "text-blue-600 font-semibold");
        assert_eq!(color_class(Some("Rent")), "text-gray-800 font-semibold");
        assert_eq!(color_class(None), "text-gray-800 font-semibold");
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label(Some("food")), "Food");
        assert_eq!(display_label(Some("rent")), "Rent");
        assert_eq!(display_label(Some("  ")), "Other");
        assert_eq!(display_label(None), "Other");
    }
}
