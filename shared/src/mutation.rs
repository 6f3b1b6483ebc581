//! What the create form and the edit dialog do with a submission and with the
//! server's answer, independent of how the UI renders it.

use crate::list_state::ExpenseChange;
use crate::validation::{ExpenseDraft, ValidationError, ValidationPolicy};
use crate::{ApiError, DeleteExpenseResponse, Expense, ExpenseRequest, UpdateExpenseResponse};

pub const CREATED_NOTICE: &str = "Expense added";
pub const UPDATED_NOTICE: &str = "Expense updated successfully!";
pub const DELETED_NOTICE: &str = "Expense deleted";

pub const CREATE_FAILED: &str = "Failed to add expense";
pub const UPDATE_FAILED: &str = "Failed to update expense";
pub const DELETE_FAILED: &str = "Failed to delete expense";

/// Decision taken when a form is submitted
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A request is already in flight; ignore the click
    Busy,
    /// Show the error, send nothing
    Rejected(ValidationError),
    Send(ExpenseRequest),
}

impl Submission {
    pub fn plan(policy: ValidationPolicy, draft: &ExpenseDraft, in_flight: bool) -> Self {
        if in_flight {
            return Submission::Busy;
        }
        match policy.validate(draft) {
            Ok(request) => Submission::Send(request),
            Err(err) => Submission::Rejected(err),
        }
    }
}

/// How an edit-dialog request ended
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Saved(Expense),
    Deleted(String),
    /// Message for the error notification; the dialog stays open
    Failed(String),
}

impl EditOutcome {
    /// Outcome of an update of `original` with `request`. The record the
    /// server returns wins; without one the edits are applied locally.
    pub fn from_update(
        original: &Expense,
        request: &ExpenseRequest,
        result: Result<UpdateExpenseResponse, ApiError>,
    ) -> Self {
        match result {
            Ok(response) => {
                let saved = response
                    .expense
                    .filter(|returned| returned.id == original.id)
                    .unwrap_or_else(|| original.with_edits(request));
                EditOutcome::Saved(saved)
            }
            Err(err) => EditOutcome::Failed(err.user_message(UPDATE_FAILED)),
        }
    }

    pub fn from_delete(id: &str, result: Result<DeleteExpenseResponse, ApiError>) -> Self {
        match result {
            Ok(_) => EditOutcome::Deleted(id.to_string()),
            Err(err) => EditOutcome::Failed(err.user_message(DELETE_FAILED)),
        }
    }

    pub fn closes_dialog(&self) -> bool {
        !matches!(self, EditOutcome::Failed(_))
    }

    /// Success notice, `None` on failure
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            EditOutcome::Saved(_) => Some(UPDATED_NOTICE),
            EditOutcome::Deleted(_) => Some(DELETED_NOTICE),
            EditOutcome::Failed(_) => None,
        }
    }

    /// Change to apply to the list the dialog was opened from
    pub fn into_change(self) -> Option<ExpenseChange> {
        match self {
            EditOutcome::Saved(expense) => Some(ExpenseChange::Updated(expense)),
            EditOutcome::Deleted(id) => Some(ExpenseChange::Deleted(id)),
            EditOutcome::Failed(_) => None,
        }
    }
}
