use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use wasm_bindgen_futures::spawn_local;
use shared::{EditOutcome, Expense, ExpenseChange, ExpenseDraft, Submission, ValidationPolicy};
use crate::components::category_select::CategorySelect;
use crate::hooks::use_toasts::{use_toasts, ToastHandle};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "edit-expense-modal";

#[derive(Properties, PartialEq)]
pub struct EditExpenseModalProps {
    /// Record being edited; the modal is closed when `None`
    pub expense: Option<Expense>,
    pub api_client: ApiClient,
    #[prop_or(ValidationPolicy::EDIT)]
    pub policy: ValidationPolicy,
    /// Receives each change committed on the server
    pub on_changed: Callback<ExpenseChange>,
    pub on_close: Callback<()>,
}

#[function_component(EditExpenseModal)]
pub fn edit_expense_modal(props: &EditExpenseModalProps) -> Html {
    let toasts = use_toasts();
    let amount = use_state(String::new);
    let category = use_state(|| Option::<String>::None);
    let date = use_state(String::new);
    let description = use_state(String::new);
    let is_saving = use_state(|| false);
    let is_deleting = use_state(|| false);

    // Seed the form whenever a record is opened
    use_effect_with(props.expense.clone(), {
        let amount = amount.clone();
        let category = category.clone();
        let date = date.clone();
        let description = description.clone();
        let is_saving = is_saving.clone();
        let is_deleting = is_deleting.clone();
        move |expense: &Option<Expense>| {
            if let Some(expense) = expense {
                let draft = ExpenseDraft::from_expense(expense);
                amount.set(draft.amount);
                category.set(draft.category);
                date.set(draft.date);
                description.set(draft.description);
                is_saving.set(false);
                is_deleting.set(false);
            }
            || ()
        }
    });

    let Some(editing) = props.expense.clone() else {
        return html! {};
    };

    let busy = *is_saving || *is_deleting;

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |selection: Option<String>| {
            category.set(selection);
        })
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_save = {
        let draft = ExpenseDraft {
            amount: (*amount).clone(),
            category: (*category).clone(),
            description: (*description).clone(),
            date: (*date).clone(),
        };
        let editing = editing.clone();
        let policy = props.policy;
        let api_client = props.api_client.clone();
        let toasts = toasts.clone();
        let is_saving = is_saving.clone();
        let on_changed = props.on_changed.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            let request = match Submission::plan(policy, &draft, busy) {
                Submission::Send(request) => request,
                Submission::Rejected(err) => {
                    toasts.error(err.to_string());
                    return;
                }
                Submission::Busy => return,
            };

            let editing = editing.clone();
            let api_client = api_client.clone();
            let toasts = toasts.clone();
            let is_saving = is_saving.clone();
            let on_changed = on_changed.clone();
            let on_close = on_close.clone();

            is_saving.set(true);
            spawn_local(async move {
                let result = api_client.update_expense(&editing.id, &request).await;
                if let Err(err) = &result {
                    Logger::error_with_component(COMPONENT, &format!("Failed to update {}: {}", editing.id, err));
                }
                is_saving.set(false);
                finish(EditOutcome::from_update(&editing, &request, result), &toasts, &on_changed, &on_close);
            });
        })
    };

    let on_delete = {
        let id = editing.id.clone();
        let api_client = props.api_client.clone();
        let toasts = toasts.clone();
        let is_deleting = is_deleting.clone();
        let on_changed = props.on_changed.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |_: MouseEvent| {
            if busy {
                return;
            }

            let id = id.clone();
            let api_client = api_client.clone();
            let toasts = toasts.clone();
            let is_deleting = is_deleting.clone();
            let on_changed = on_changed.clone();
            let on_close = on_close.clone();

            is_deleting.set(true);
            spawn_local(async move {
                let result = api_client.delete_expense(&id).await;
                if let Err(err) = &result {
                    Logger::error_with_component(COMPONENT, &format!("Failed to delete {}: {}", id, err));
                }
                is_deleting.set(false);
                finish(EditOutcome::from_delete(&id, result), &toasts, &on_changed, &on_close);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if !busy {
                on_close.emit(());
            }
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !busy {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let required_marker = |field| if props.policy.requires(field) { "" } else { " (optional)" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal edit-expense-modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{"Edit Expense"}</h3>
                    <p class="modal-description">{"Update or delete your expense"}</p>

                    <div class="modal-form">
                        <div class="form-group">
                            <label for="edit-date">{"Date"}</label>
                            <input
                                type="date"
                                id="edit-date"
                                value={(*date).clone()}
                                oninput={on_date_change}
                                disabled={busy}
                            />
                        </div>

                        <div class="form-group">
                            <label for="edit-amount">{"Amount (₹)"}</label>
                            <input
                                type="number"
                                id="edit-amount"
                                step="0.01"
                                min="0.01"
                                placeholder="0.00"
                                value={(*amount).clone()}
                                oninput={on_amount_change}
                                disabled={busy}
                            />
                        </div>

                        <CategorySelect
                            id="edit-category"
                            value={(*category).clone()}
                            on_change={on_category_change}
                            disabled={busy}
                            allow_clear={!props.policy.requires(shared::RequiredField::Category)}
                        />

                        <div class="form-group">
                            <label for="edit-description">
                                {format!("Description{}", required_marker(shared::RequiredField::Description))}
                            </label>
                            <input
                                type="text"
                                id="edit-description"
                                placeholder="Enter description"
                                value={(*description).clone()}
                                oninput={on_description_change}
                                disabled={busy}
                            />
                        </div>
                    </div>

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-danger" onclick={on_delete} disabled={busy}>
                            {if *is_deleting { "Deleting..." } else { "Delete" }}
                        </button>
                        <div class="modal-buttons-right">
                            <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={busy}>
                                {"Cancel"}
                            </button>
                            <button type="button" class="btn btn-primary" onclick={on_save} disabled={busy}>
                                {if *is_saving { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Report a finished request: notify, hand the change to the list, and close
/// unless it failed
fn finish(outcome: EditOutcome, toasts: &ToastHandle, on_changed: &Callback<ExpenseChange>, on_close: &Callback<()>) {
    match outcome.notice() {
        Some(notice) => toasts.success(notice),
        None => {
            if let EditOutcome::Failed(message) = &outcome {
                toasts.error(message.clone());
            }
        }
    }

    let closes = outcome.closes_dialog();
    if let Some(change) = outcome.into_change() {
        Logger::info_with_component(COMPONENT, &format!("Committed {:?}", change));
        on_changed.emit(change);
    }
    if closes {
        on_close.emit(());
    }
}
