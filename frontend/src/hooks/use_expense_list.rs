use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use shared::{Expense, ExpenseChange, ExpenseFilter, ExpenseListState, ExpenseQuery, FetchOutcome, FetchTicket};
use wasm_bindgen_futures::spawn_local;
use crate::hooks::use_toasts::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "expense-list";

#[derive(Clone)]
pub struct ExpenseListView {
    pub expenses: Vec<Expense>,
    pub loading: bool,
}

pub struct UseExpenseListResult {
    pub state: ExpenseListView,
    pub actions: UseExpenseListActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpenseListActions {
    /// Re-fetch with the current filter
    pub refresh: Callback<()>,
    /// Apply a committed edit to the shown rows, then re-fetch in the
    /// background without clearing them
    pub apply_change: Callback<ExpenseChange>,
}

/// Expense collection for `filter`, re-fetched whenever the filter changes.
/// Only the latest fetch may commit, so a slow response for an old filter
/// never overwrites the current one.
#[hook]
pub fn use_expense_list(api_client: &ApiClient, filter: &ExpenseFilter, toasts: &ToastHandle) -> UseExpenseListResult {
    let store = use_mut_ref(ExpenseListState::new);
    let trigger = use_force_update();

    let refresh = {
        let api_client = api_client.clone();
        let toasts = toasts.clone();
        let store = store.clone();
        let trigger = trigger.clone();

        use_callback(filter.clone(), move |_, filter: &ExpenseFilter| {
            let query = match filter.to_query() {
                Ok(query) => query,
                Err(err) => {
                    store.borrow_mut().reset();
                    trigger.force_update();
                    toasts.error(err.to_string());
                    return;
                }
            };

            let ticket = store.borrow_mut().begin_fetch();
            trigger.force_update();
            spawn_fetch(&api_client, &store, &trigger, &toasts, query, ticket);
        })
    };

    let apply_change = {
        let api_client = api_client.clone();
        let toasts = toasts.clone();
        let store = store.clone();
        let trigger = trigger.clone();

        use_callback(filter.clone(), move |change: ExpenseChange, filter: &ExpenseFilter| {
            store.borrow_mut().apply_change(change);
            trigger.force_update();

            // An invalid filter has nothing to converge with
            if let Ok(query) = filter.to_query() {
                let ticket = store.borrow_mut().begin_revalidate();
                spawn_fetch(&api_client, &store, &trigger, &toasts, query, ticket);
            }
        })
    };

    // Re-run on every filter change
    use_effect_with(filter.clone(), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = {
        let store = store.borrow();
        ExpenseListView {
            expenses: store.expenses().to_vec(),
            loading: store.is_loading(),
        }
    };

    let actions = UseExpenseListActions {
        refresh,
        apply_change,
    };

    UseExpenseListResult { state, actions }
}

fn spawn_fetch(
    api_client: &ApiClient,
    store: &Rc<RefCell<ExpenseListState>>,
    trigger: &UseForceUpdateHandle,
    toasts: &ToastHandle,
    query: ExpenseQuery,
    ticket: FetchTicket,
) {
    Logger::debug_with_component(COMPONENT, &format!("Fetching {:?}", query));

    let api_client = api_client.clone();
    let store = store.clone();
    let trigger = trigger.clone();
    let toasts = toasts.clone();

    spawn_local(async move {
        let result = api_client.list_expenses(&query).await;
        let outcome = store.borrow_mut().finish_fetch(ticket, result);

        match outcome {
            FetchOutcome::Loaded(count) => {
                Logger::debug_with_component(COMPONENT, &format!("Loaded {} expenses", count));
            }
            FetchOutcome::Failed(err) => {
                Logger::error_with_component(COMPONENT, &format!("Failed to fetch expenses: {}", err));
                toasts.error(err.user_message("Failed to fetch expenses."));
            }
            FetchOutcome::Stale => {
                Logger::debug_with_component(COMPONENT, "Discarded response for a superseded filter");
                return;
            }
        }

        trigger.force_update();
    });
}
