//! Filter state of the expense ledger and the list query derived from it.

use thiserror::Error;

use crate::category::CategoryFilter;
use crate::format;

/// Month value meaning "the whole year"
pub const ENTIRE_YEAR: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Restricted to a month (or whole year) of a given year
    #[default]
    Filtered,
    /// Every record, optionally restricted by category
    All,
}

/// Which list endpoint a query goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEndpoint {
    All,
    DateRange,
}

impl ListEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ListEndpoint::All => "/expenses/get-all",
            ListEndpoint::DateRange => "/expenses/get-by-date-range",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Enter a valid year")]
    InvalidYear(String),
    #[error("Month must be between 0 and 12")]
    InvalidMonth(u32),
}

/// Client-side filter selection. `month` and `year_input` only matter in
/// [`ViewMode::Filtered`]; the year is kept as typed so partial input
/// survives re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFilter {
    pub view_mode: ViewMode,
    /// 0 for the entire year, otherwise 1-12
    pub month: u32,
    pub year_input: String,
    pub category: CategoryFilter,
}

impl ExpenseFilter {
    /// Whole-year view of `year` across all categories
    pub fn for_year(year: i32) -> Self {
        Self {
            view_mode: ViewMode::Filtered,
            month: ENTIRE_YEAR,
            year_input: year.to_string(),
            category: CategoryFilter::All,
        }
    }

    /// A single month across all categories
    pub fn for_month(month: u32, year: i32) -> Self {
        Self {
            month,
            ..Self::for_year(year)
        }
    }

    pub fn with_view_mode(self, view_mode: ViewMode) -> Self {
        Self { view_mode, ..self }
    }

    pub fn with_month(self, month: u32) -> Self {
        Self { month, ..self }
    }

    pub fn with_year_input(self, year_input: impl Into<String>) -> Self {
        Self {
            year_input: year_input.into(),
            ..self
        }
    }

    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    pub fn year(&self) -> Result<i32, FilterError> {
        self.year_input
            .trim()
            .parse::<i32>()
            .map_err(|_| FilterError::InvalidYear(self.year_input.clone()))
    }

    /// Derive the list request for the current selection
    pub fn to_query(&self) -> Result<ExpenseQuery, FilterError> {
        let category = self.category.query_value();

        match self.view_mode {
            ViewMode::All => Ok(ExpenseQuery {
                endpoint: ListEndpoint::All,
                month: None,
                year: None,
                category,
            }),
            ViewMode::Filtered => {
                if self.month > 12 {
                    return Err(FilterError::InvalidMonth(self.month));
                }
                Ok(ExpenseQuery {
                    endpoint: ListEndpoint::DateRange,
                    month: Some(self.month),
                    year: Some(self.year()?),
                    category,
                })
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self.view_mode {
            ViewMode::All => "All Expense Records",
            ViewMode::Filtered => "Filtered Expense Records",
        }
    }

    /// Prose description of the active filter
    pub fn caption(&self) -> String {
        let suffix = self
            .category
            .label()
            .map(|label| format!(" - {}", label))
            .unwrap_or_default();

        match self.view_mode {
            ViewMode::All => format!("All expenses{}", suffix),
            ViewMode::Filtered if self.month == ENTIRE_YEAR => {
                format!("Expenses for {}{}", self.year_input.trim(), suffix)
            }
            ViewMode::Filtered => match self.year() {
                Ok(year) => format!("{}{}", format::format_month_year(self.month, year), suffix),
                Err(_) => format!("{} {}{}", format::month_name(self.month), self.year_input.trim(), suffix),
            },
        }
    }

    /// Text of the empty-state row
    pub fn empty_message(&self) -> String {
        match (self.view_mode, self.category.label()) {
            (ViewMode::Filtered, Some(label)) => format!("No expenses found for {}.", label),
            _ => "No expenses found.".to_string(),
        }
    }
}

/// A list request: endpoint plus query parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseQuery {
    pub endpoint: ListEndpoint,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub category: Option<String>,
}

impl ExpenseQuery {
    /// Query parameters in wire order; absent values are omitted
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(month) = self.month {
            params.push(("month", month.to_string()));
        }
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_filtered_query_carries_month_year_and_category() {
        let filter = ExpenseFilter::for_month(3, 2026)
            .with_category(CategoryFilter::Only(Category::Food));

        let query = filter.to_query().unwrap();
        assert_eq!(query.endpoint, ListEndpoint::DateRange);
        assert_eq!(
            query.params(),
            vec![
                ("month", "3".to_string()),
                ("year", "2026".to_string()),
                ("category", "Food".to_string()),
            ]
        );
    }

    #[test]
    fn test_switching_to_all_drops_month_and_year() {
        for month in [0, 1, 12] {
            for category in [
                CategoryFilter::All,
                CategoryFilter::Only(Category::Bills),
                CategoryFilter::Uncategorized,
            ] {
                let filtered = ExpenseFilter::for_month(month, 2025).with_category(category);
                let all = filtered.clone().with_view_mode(ViewMode::All);

                let query = all.to_query().unwrap();
                assert_eq!(query.endpoint, ListEndpoint::All);
                assert_eq!(query.month, None);
                assert_eq!(query.year, None);
                assert_eq!(query.category, filtered.to_query().unwrap().category);
            }
        }
    }

    #[test]
    fn test_all_categories_omits_category_param() {
        let query = ExpenseFilter::for_year(2026).to_query().unwrap();
        assert!(query.params().iter().all(|(key, _)| *key != "category"));
    }

    #[test]
    fn test_other_sends_empty_category_param() {
        let query = ExpenseFilter::for_year(2026)
            .with_view_mode(ViewMode::All)
            .with_category(CategoryFilter::Uncategorized)
            .to_query()
            .unwrap();
        assert_eq!(query.params(), vec![("category", String::new())]);
    }

    #[test]
    fn test_invalid_year_is_rejected_in_filtered_mode_only() {
        let filter = ExpenseFilter::for_year(2026).with_year_input("");
        assert_eq!(filter.to_query(), Err(FilterError::InvalidYear(String::new())));

        let all = filter.with_view_mode(ViewMode::All);
        assert!(all.to_query().is_ok());
    }

    #[test]
    fn test_year_input_is_trimmed() {
        let filter = ExpenseFilter::for_year(2026).with_year_input(" 2024 ");
        assert_eq!(filter.to_query().unwrap().year, Some(2024));
    }

    #[test]
    fn test_month_out_of_range() {
        let filter = ExpenseFilter::for_month(13, 2026);
        assert_eq!(filter.to_query(), Err(FilterError::InvalidMonth(13)));
    }

    #[test]
    fn test_captions() {
        let year = ExpenseFilter::for_year(2026);
        assert_eq!(year.caption(), "Expenses for 2026");

        let month = ExpenseFilter::for_month(1, 2026)
            .with_category(CategoryFilter::Only(Category::Transport));
        assert_eq!(month.caption(), "January 2026 - Transport");

        let all = ExpenseFilter::for_year(2026)
            .with_view_mode(ViewMode::All)
            .with_category(CategoryFilter::Uncategorized);
        assert_eq!(all.caption(), "All expenses - Other");
        assert_eq!(all.title(), "All Expense Records");
    }

    #[test]
    fn test_empty_messages() {
        let filtered = ExpenseFilter::for_year(2026)
            .with_category(CategoryFilter::Only(Category::Shopping));
        assert_eq!(filtered.empty_message(), "No expenses found for Shopping.");

        let all = filtered.with_view_mode(ViewMode::All);
        assert_eq!(all.empty_message(), "No expenses found.");
    }
}
