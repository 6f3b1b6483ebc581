//! State machine behind an expense list: the loaded collection, the loading
//! flag, and a generation counter so that only the most recently issued fetch
//! may commit its result.

use crate::{ApiError, Expense};

/// Handle for one issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What happened when a fetch result was handed back
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Result committed; number of records now shown
    Loaded(usize),
    /// Error committed; the collection was emptied
    Failed(ApiError),
    /// A newer fetch was issued since; the result was dropped
    Stale,
}

/// A change the edit dialog committed on the server
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseChange {
    Updated(Expense),
    Deleted(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseListState {
    expenses: Vec<Expense>,
    loading: bool,
    generation: u64,
}

impl ExpenseListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total(&self) -> f64 {
        total_amount(&self.expenses)
    }

    /// Start a fetch: previous records are dropped so they are never shown
    /// under a new filter.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.expenses.clear();
        FetchTicket(self.generation)
    }

    /// Re-fetch without dropping what is shown. Used after a committed change
    /// so the locally patched rows stay visible until the server answers.
    pub fn begin_revalidate(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Expense>, ApiError>,
    ) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(expenses) => {
                self.expenses = expenses;
                FetchOutcome::Loaded(self.expenses.len())
            }
            Err(err) => {
                self.expenses.clear();
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Abandon any in-flight fetch and show nothing, e.g. when the filter is
    /// invalid and no request can be built.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.expenses.clear();
    }

    /// Replace the record with the same id in place. Returns false if absent.
    pub fn apply_update(&mut self, updated: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`. Returns false if absent.
    pub fn apply_delete(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    pub fn apply_change(&mut self, change: ExpenseChange) -> bool {
        match change {
            ExpenseChange::Updated(expense) => self.apply_update(expense),
            ExpenseChange::Deleted(id) => self.apply_delete(&id),
        }
    }
}

/// Sum of amounts over exactly the given records
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExpenseRequest;

    fn expense(id: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            amount,
            category: Some("Food".to_string()),
            description: None,
            date: "2026-01-05".to_string(),
        }
    }

    fn loaded(records: Vec<Expense>) -> ExpenseListState {
        let mut state = ExpenseListState::new();
        let ticket = state.begin_fetch();
        state.finish_fetch(ticket, Ok(records));
        state
    }

    #[test]
    fn test_begin_fetch_clears_and_sets_loading() {
        let mut state = loaded(vec![expense("a", 10.0)]);
        assert_eq!(state.expenses().len(), 1);

        state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.expenses().is_empty());
    }

    #[test]
    fn test_finish_fetch_commits_latest() {
        let mut state = ExpenseListState::new();
        let ticket = state.begin_fetch();

        let outcome = state.finish_fetch(ticket, Ok(vec![expense("a", 10.0), expense("b", 5.0)]));
        assert_eq!(outcome, FetchOutcome::Loaded(2));
        assert!(!state.is_loading());
        assert_eq!(state.total(), 15.0);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ExpenseListState::new();
        let slow = state.begin_fetch();
        let fresh = state.begin_fetch();

        let fresh_outcome = state.finish_fetch(fresh, Ok(vec![expense("new", 1.0)]));
        assert_eq!(fresh_outcome, FetchOutcome::Loaded(1));

        let slow_outcome = state.finish_fetch(slow, Ok(vec![expense("old", 99.0)]));
        assert_eq!(slow_outcome, FetchOutcome::Stale);
        assert_eq!(state.expenses()[0].id, "new");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_keeps_loading_until_latest_arrives() {
        let mut state = ExpenseListState::new();
        let slow = state.begin_fetch();
        let _fresh = state.begin_fetch();

        assert_eq!(state.finish_fetch(slow, Ok(vec![expense("old", 1.0)])), FetchOutcome::Stale);
        assert!(state.is_loading());
        assert!(state.expenses().is_empty());
    }

    #[test]
    fn test_failure_empties_collection_and_clears_loading() {
        let mut state = ExpenseListState::new();
        let ticket = state.begin_fetch();
        let err = ApiError::Network("offline".to_string());

        let outcome = state.finish_fetch(ticket, Err(err.clone()));
        assert_eq!(outcome, FetchOutcome::Failed(err));
        assert!(state.expenses().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_reset_invalidates_in_flight_fetch() {
        let mut state = ExpenseListState::new();
        let ticket = state.begin_fetch();
        state.reset();

        assert!(!state.is_loading());
        assert_eq!(state.finish_fetch(ticket, Ok(vec![expense("a", 1.0)])), FetchOutcome::Stale);
        assert!(state.expenses().is_empty());
    }

    #[test]
    fn test_total_is_idempotent() {
        let state = loaded(vec![expense("a", 250.0), expense("b", 49.5), expense("c", 0.5)]);
        let first = state.total();
        let second = state.total();

        assert_eq!(first, 300.0);
        assert_eq!(first, second);
        assert_eq!(total_amount(state.expenses()), first);
    }

    #[test]
    fn test_update_keeps_id_and_does_not_duplicate() {
        let mut state = loaded(vec![expense("a", 250.0), expense("b", 20.0)]);
        let original = state.expenses()[0].clone();
        let edits = ExpenseRequest {
            amount: 300.0,
            category: "Food".to_string(),
            description: "Lunch".to_string(),
            date: "2026-01-05".to_string(),
        };

        assert!(state.apply_update(original.with_edits(&edits)));
        assert_eq!(state.expenses().len(), 2);
        assert_eq!(state.expenses()[0].id, "a");
        assert_eq!(state.expenses()[0].amount, 300.0);
        assert_eq!(state.total(), 320.0);
    }

    #[test]
    fn test_update_of_unknown_id_is_ignored() {
        let mut state = loaded(vec![expense("a", 1.0)]);
        assert!(!state.apply_update(expense("zzz", 5.0)));
        assert_eq!(state.expenses(), &[expense("a", 1.0)]);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut state = loaded(vec![expense("a", 1.0), expense("b", 2.0), expense("c", 3.0)]);

        assert!(state.apply_delete("b"));
        let ids: Vec<&str> = state.expenses().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!state.apply_delete("b"));
    }

    #[test]
    fn test_patched_rows_stay_visible_while_revalidating() {
        let mut state = loaded(vec![expense("a", 250.0), expense("b", 20.0)]);
        let edits = ExpenseRequest {
            amount: 300.0,
            category: "Food".to_string(),
            description: "Lunch".to_string(),
            date: "2026-01-05".to_string(),
        };
        let updated = state.expenses()[0].with_edits(&edits);

        assert!(state.apply_change(ExpenseChange::Updated(updated)));
        let ticket = state.begin_revalidate();
        assert!(!state.is_loading());
        assert_eq!(state.total(), 320.0);

        let outcome = state.finish_fetch(ticket, Ok(vec![expense("a", 300.0), expense("b", 20.0)]));
        assert_eq!(outcome, FetchOutcome::Loaded(2));
        assert_eq!(state.total(), 320.0);
    }

    #[test]
    fn test_deleted_row_gone_before_server_confirms() {
        let mut state = loaded(vec![expense("a", 1.0), expense("b", 2.0)]);

        assert!(state.apply_change(ExpenseChange::Deleted("a".to_string())));
        let ticket = state.begin_revalidate();
        assert_eq!(state.expenses(), &[expense("b", 2.0)]);

        let latest = state.begin_revalidate();
        assert_eq!(state.finish_fetch(ticket, Ok(vec![expense("a", 1.0)])), FetchOutcome::Stale);
        assert_eq!(state.finish_fetch(latest, Ok(vec![expense("b", 2.0)])), FetchOutcome::Loaded(1));
    }
}
