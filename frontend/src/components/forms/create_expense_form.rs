use yew::prelude::*;
use shared::ExpenseDraft;
use crate::components::category_select::CategorySelect;

#[derive(Properties, PartialEq)]
pub struct CreateExpenseFormProps {
    // Form state
    pub draft: ExpenseDraft,
    pub creating: bool,

    // Event handlers
    pub on_amount_change: Callback<InputEvent>,
    pub on_category_change: Callback<Option<String>>,
    pub on_date_change: Callback<InputEvent>,
    pub on_description_change: Callback<InputEvent>,
    pub on_submit: Callback<()>,
}

#[function_component(CreateExpenseForm)]
pub fn create_expense_form(props: &CreateExpenseFormProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="create-expense-section card">
            <h3>{"Add Expense"}</h3>

            <form class="create-expense-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="create-amount">{"Amount (₹)"}</label>
                    <input
                        type="number"
                        id="create-amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={props.draft.amount.clone()}
                        oninput={props.on_amount_change.clone()}
                        disabled={props.creating}
                    />
                </div>

                <CategorySelect
                    id="create-category"
                    value={props.draft.category.clone()}
                    on_change={props.on_category_change.clone()}
                    disabled={props.creating}
                    allow_clear={true}
                />

                <div class="form-group">
                    <label for="create-date">{"Date"}</label>
                    <input
                        type="date"
                        id="create-date"
                        value={props.draft.date.clone()}
                        oninput={props.on_date_change.clone()}
                        disabled={props.creating}
                    />
                </div>

                <div class="form-group">
                    <label for="create-description">{"Description (optional)"}</label>
                    <input
                        type="text"
                        id="create-description"
                        placeholder="Lunch, taxi, groceries..."
                        value={props.draft.description.clone()}
                        oninput={props.on_description_change.clone()}
                        disabled={props.creating}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary create-expense-btn"
                    disabled={props.creating}
                >
                    {if props.creating { "Adding..." } else { "Add Expense" }}
                </button>
            </form>
        </section>
    }
}
