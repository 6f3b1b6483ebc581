use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod category;
pub mod filter;
pub mod format;
pub mod list_state;
pub mod mutation;
pub mod validation;

pub use category::{normalize_selection, Category, CategoryFilter, UnknownCategory};
pub use filter::{ExpenseFilter, ExpenseQuery, FilterError, ListEndpoint, ViewMode};
pub use list_state::{total_amount, ExpenseChange, ExpenseListState, FetchOutcome, FetchTicket};
pub use mutation::{EditOutcome, Submission};
pub use validation::{ExpenseDraft, RequiredField, ValidationError, ValidationPolicy};

/// A persisted expense record as returned by the expenses API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque identifier assigned by the server
    pub id: String,
    pub amount: f64,
    /// One of the category vocabulary, empty or absent for "Other"
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Calendar date (YYYY-MM-DD); a trailing time component is ignored
    pub date: String,
}

impl Expense {
    /// Date without any time-of-day suffix, suitable for a date input
    pub fn date_only(&self) -> &str {
        format::date_only(&self.date)
    }

    /// Display label for the category column ("Other" when absent)
    pub fn category_label(&self) -> String {
        category::display_label(self.category.as_deref())
    }

    /// Copy of this record with the edited fields applied; the id never changes
    pub fn with_edits(&self, edits: &ExpenseRequest) -> Expense {
        Expense {
            id: self.id.clone(),
            amount: edits.amount,
            category: non_empty(&edits.category),
            description: non_empty(&edits.description),
            date: edits.date.clone(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Body of the create and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    pub amount: f64,
    /// Empty when no category was chosen
    pub category: String,
    pub description: String,
    /// YYYY-MM-DD
    pub date: String,
}

impl From<&Expense> for ExpenseRequest {
    fn from(expense: &Expense) -> Self {
        Self {
            amount: expense.amount,
            category: expense.category.clone().unwrap_or_default(),
            description: expense.description.clone().unwrap_or_default(),
            date: expense.date_only().to_string(),
        }
    }
}

/// Response after creating an expense. Servers that echo the created
/// record send its `id` instead of `expense_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreateExpenseResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "id")]
    pub expense_id: String,
}

/// Response after updating an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateExpenseResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub expense: Option<Expense>,
}

/// Response after deleting an expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeleteExpenseResponse {
    #[serde(default)]
    pub message: String,
}

/// Decode the body of a successful mutation. The change is already committed
/// once the server answers 2xx, so an empty or unexpected body yields the
/// default response instead of an error.
pub fn decode_mutation_body<T: DeserializeOwned + Default>(body: &str) -> T {
    if body.trim().is_empty() {
        return T::default();
    }
    serde_json::from_str(body).unwrap_or_default()
}

/// List endpoints answer either with a bare array or with `{ "expenses": [...] }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExpenseListResponse {
    Bare(Vec<Expense>),
    Wrapped { expenses: Vec<Expense> },
}

impl ExpenseListResponse {
    pub fn into_expenses(self) -> Vec<Expense> {
        match self {
            ExpenseListResponse::Bare(expenses) => expenses,
            ExpenseListResponse::Wrapped { expenses } => expenses,
        }
    }
}

/// Error body sent by the server. `detail` is usually a string but validation
/// failures carry a structured list, so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn detail_message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(detail)) if !detail.trim().is_empty() => {
                Some(detail.clone())
            }
            _ => None,
        }
    }
}

/// Failure of a call to the expenses API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}")]
    Server { status: u16, detail: Option<String> },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Build a server error from a non-2xx status and its raw body
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail_message());
        ApiError::Server { status, detail }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Server { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status: 404, .. })
    }

    /// A list endpoint's "nothing matched" answer: 404 with a server detail.
    /// A bare 404 means the route itself is missing.
    pub fn is_no_matches(&self) -> bool {
        self.is_not_found() && self.detail().is_some()
    }

    /// Text shown to the user: the server's detail verbatim, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Table row of an expense, formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedExpense {
    pub id: String,
    pub formatted_date: String,
    pub formatted_amount: String,
    pub category_label: String,
    pub category_class: &'static str,
    /// Description, or an em-dash when there is none
    pub description: String,
}

impl FormattedExpense {
    pub fn from_expense(expense: &Expense) -> Self {
        let description = expense
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(format::PLACEHOLDER)
            .to_string();

        Self {
            id: expense.id.clone(),
            formatted_date: format::format_row_date(&expense.date),
            formatted_amount: format::format_inr(expense.amount),
            category_label: expense.category_label(),
            category_class: category::color_class(expense.category.as_deref()),
            description,
        }
    }
}
