use yew::prelude::*;
use shared::{Expense, ExpenseChange, ValidationPolicy};
use crate::components::expenses::{EditExpenseModal, ExpenseTable};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ExpenseLedgerProps {
    pub title: String,
    pub caption: String,
    #[prop_or("No expenses found.".to_string())]
    pub empty_message: String,
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub api_client: ApiClient,
    #[prop_or(ValidationPolicy::EDIT)]
    pub policy: ValidationPolicy,
    pub on_change: Callback<ExpenseChange>,
}

/// Expense table plus the edit dialog for whichever row was clicked
#[function_component(ExpenseLedger)]
pub fn expense_ledger(props: &ExpenseLedgerProps) -> Html {
    let editing = use_state(|| Option::<Expense>::None);

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |expense: Expense| editing.set(Some(expense)))
    };

    let on_close = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    html! {
        <>
            <ExpenseTable
                title={props.title.clone()}
                caption={props.caption.clone()}
                empty_message={props.empty_message.clone()}
                expenses={props.expenses.clone()}
                loading={props.loading}
                on_edit={on_edit}
            />
            <EditExpenseModal
                expense={(*editing).clone()}
                api_client={props.api_client.clone()}
                policy={props.policy}
                on_changed={props.on_change.clone()}
                on_close={on_close}
            />
        </>
    }
}
