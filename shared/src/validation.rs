//! Expense form fields and the declarative validation policy applied to them
//! before any request is sent.

use thiserror::Error;

use crate::category::Category;
use crate::format;
use crate::{Expense, ExpenseRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Amount,
    Date,
    Description,
    Category,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Amount is required")]
    MissingAmount,
    #[error("Amount must be a number")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero")]
    AmountNotPositive,
    #[error("Date is required")]
    MissingDate,
    #[error("Date must be a valid YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("Description is required")]
    MissingDescription,
    #[error("Category is required")]
    MissingCategory,
}

/// Set of fields a form must have filled in before saving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    required: &'static [RequiredField],
}

impl ValidationPolicy {
    /// Dashboard create form
    pub const CREATE: ValidationPolicy = ValidationPolicy {
        required: &[RequiredField::Amount],
    };

    /// Edit dialog
    pub const EDIT: ValidationPolicy = ValidationPolicy {
        required: &[RequiredField::Amount, RequiredField::Date],
    };

    /// Every field filled in
    pub const STRICT: ValidationPolicy = ValidationPolicy {
        required: &[
            RequiredField::Amount,
            RequiredField::Description,
            RequiredField::Category,
            RequiredField::Date,
        ],
    };

    pub const fn new(required: &'static [RequiredField]) -> Self {
        Self { required }
    }

    pub fn requires(&self, field: RequiredField) -> bool {
        self.required.contains(&field)
    }

    /// Check presence of the required fields, then the format of whatever was
    /// entered, and build the request body. The first failure is reported.
    pub fn validate(&self, draft: &ExpenseDraft) -> Result<ExpenseRequest, ValidationError> {
        let amount_input = draft.amount.trim();
        let description = draft.description.trim();
        let date = draft.date.trim();
        let category = draft
            .category
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        for field in self.required {
            match field {
                RequiredField::Amount if amount_input.is_empty() => {
                    return Err(ValidationError::MissingAmount)
                }
                RequiredField::Date if date.is_empty() => return Err(ValidationError::MissingDate),
                RequiredField::Description if description.is_empty() => {
                    return Err(ValidationError::MissingDescription)
                }
                RequiredField::Category if category.is_none() => {
                    return Err(ValidationError::MissingCategory)
                }
                _ => {}
            }
        }

        // A record cannot exist without an amount, whatever the policy says.
        if amount_input.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        let amount = amount_input
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ValidationError::InvalidAmount(amount_input.to_string()))?;
        if amount <= 0.0 {
            return Err(ValidationError::AmountNotPositive);
        }

        if !date.is_empty() && format::parse_date(date).is_none() {
            return Err(ValidationError::InvalidDate(date.to_string()));
        }

        Ok(ExpenseRequest {
            amount,
            category: category.map(canonical_category).unwrap_or_default(),
            description: description.to_string(),
            date: date.to_string(),
        })
    }
}

/// Known categories are sent in their canonical spelling; anything else a
/// record already carries is sent back unchanged.
fn canonical_category(value: &str) -> String {
    Category::parse(value)
        .map(|category| category.as_str().to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Expense form fields as entered by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    /// Selector value; may be a category outside the vocabulary when the
    /// draft was seeded from a stored record
    pub category: Option<String>,
    pub description: String,
    /// YYYY-MM-DD, as produced by a date input
    pub date: String,
}

impl ExpenseDraft {
    /// Blank form dated `date`
    pub fn dated(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Form seeded from an existing record
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.to_string(),
            category: expense
                .category
                .clone()
                .filter(|category| !category.trim().is_empty()),
            description: expense.description.clone().unwrap_or_default(),
            date: expense.date_only().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(amount: &str, category: Option<Category>, description: &str, date: &str) -> ExpenseDraft {
        ExpenseDraft {
            amount: amount.to_string(),
            category: category.map(|c| c.as_str().to_string()),
            description: description.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_create_requires_only_amount() {
        let empty = ExpenseDraft::dated("2026-01-05");
        assert_eq!(ValidationPolicy::CREATE.validate(&empty), Err(ValidationError::MissingAmount));

        let minimal = draft("250", None, "", "2026-01-05");
        let request = ValidationPolicy::CREATE.validate(&minimal).unwrap();
        assert_eq!(request.amount, 250.0);
        assert_eq!(request.category, "");
        assert_eq!(request.description, "");
    }

    #[test]
    fn test_edit_requires_amount_and_date() {
        let no_date = draft("300", Some(Category::Food), "Lunch", "");
        assert_eq!(ValidationPolicy::EDIT.validate(&no_date), Err(ValidationError::MissingDate));

        let no_description = draft("300", None, "", "2026-01-05");
        assert!(ValidationPolicy::EDIT.validate(&no_description).is_ok());
    }

    #[test]
    fn test_strict_requires_everything() {
        let missing_description = draft("300", Some(Category::Food), " ", "2026-01-05");
        assert_eq!(
            ValidationPolicy::STRICT.validate(&missing_description),
            Err(ValidationError::MissingDescription)
        );

        let missing_category = draft("300", None, "Lunch", "2026-01-05");
        assert_eq!(
            ValidationPolicy::STRICT.validate(&missing_category),
            Err(ValidationError::MissingCategory)
        );

        let complete = draft("300", Some(Category::Food), "Lunch", "2026-01-05");
        let request = ValidationPolicy::STRICT.validate(&complete).unwrap();
        assert_eq!(request.category, "Food");
        assert_eq!(request.description, "Lunch");
    }

    #[test]
    fn test_amount_format_and_sign() {
        let words = draft("lots", None, "", "2026-01-05");
        assert_eq!(
            ValidationPolicy::CREATE.validate(&words),
            Err(ValidationError::InvalidAmount("lots".to_string()))
        );

        let zero = draft("0", None, "", "2026-01-05");
        assert_eq!(ValidationPolicy::CREATE.validate(&zero), Err(ValidationError::AmountNotPositive));

        let negative = draft("-5", None, "", "2026-01-05");
        assert_eq!(ValidationPolicy::EDIT.validate(&negative), Err(ValidationError::AmountNotPositive));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let bad = draft("10", None, "", "05/01/2026");
        assert_eq!(
            ValidationPolicy::CREATE.validate(&bad),
            Err(ValidationError::InvalidDate("05/01/2026".to_string()))
        );
    }

    #[test]
    fn test_custom_policy() {
        const WITH_DESCRIPTION: ValidationPolicy =
            ValidationPolicy::new(&[RequiredField::Amount, RequiredField::Description]);

        assert!(WITH_DESCRIPTION.requires(RequiredField::Description));
        assert!(!WITH_DESCRIPTION.requires(RequiredField::Date));
        assert_eq!(
            WITH_DESCRIPTION.validate(&draft("10", None, "", "2026-01-05")),
            Err(ValidationError::MissingDescription)
        );
    }

    #[test]
    fn test_draft_from_expense_truncates_date() {
        let expense = Expense {
            id: "a".to_string(),
            amount: 250.0,
            category: Some("food".to_string()),
            description: None,
            date: "2026-01-05T00:00:00".to_string(),
        };

        let draft = ExpenseDraft::from_expense(&expense);
        assert_eq!(draft.amount, "250");
        assert_eq!(draft.category.as_deref(), Some("food"));
        assert_eq!(draft.description, "");
        assert_eq!(draft.date, "2026-01-05");

        let request = ValidationPolicy::EDIT.validate(&draft).unwrap();
        assert_eq!(request.category, "Food");
    }

    #[test]
    fn test_unknown_stored_category_survives_an_edit() {
        let expense = Expense {
            id: "a".to_string(),
            amount: 1200.0,
            category: Some("Rent".to_string()),
            description: Some("March".to_string()),
            date: "2026-03-01".to_string(),
        };

        let mut draft = ExpenseDraft::from_expense(&expense);
        assert_eq!(draft.category.as_deref(), Some("Rent"));

        draft.amount = "1250".to_string();
        let request = ValidationPolicy::STRICT.validate(&draft).unwrap();
        assert_eq!(request.category, "Rent");
        assert_eq!(request.amount, 1250.0);

        draft.category = None;
        let cleared = ValidationPolicy::EDIT.validate(&draft).unwrap();
        assert_eq!(cleared.category, "");
    }

    #[test]
    fn test_blank_category_counts_as_missing() {
        let mut blank = draft("300", None, "Lunch", "2026-01-05");
        blank.category = Some("  ".to_string());
        assert_eq!(
            ValidationPolicy::STRICT.validate(&blank),
            Err(ValidationError::MissingCategory)
        );
    }
}
