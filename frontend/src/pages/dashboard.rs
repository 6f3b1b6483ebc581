use yew::prelude::*;
use shared::format::format_month_year_short;
use shared::ExpenseFilter;
use crate::components::expenses::ExpenseLedger;
use crate::components::forms::CreateExpenseForm;
use crate::hooks::use_create_expense::use_create_expense;
use crate::hooks::use_expense_list::use_expense_list;
use crate::hooks::use_toasts::use_toasts;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub api_client: ApiClient,
}

/// Create form plus this month's expenses
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let toasts = use_toasts();
    let filter = use_state(|| {
        let (month, year) = date_utils::current_month_year();
        ExpenseFilter::for_month(month, year)
    });

    let list = use_expense_list(&props.api_client, &filter, &toasts);
    let create = use_create_expense(&props.api_client, &toasts, list.actions.refresh.clone());

    let title = match filter.year() {
        Ok(year) => format_month_year_short(filter.month, year),
        Err(_) => filter.caption(),
    };

    html! {
        <div class="page dashboard-page">
            <h2 class="page-title">{"Dashboard"}</h2>

            <CreateExpenseForm
                draft={create.state.draft.clone()}
                creating={create.state.creating}
                on_amount_change={create.actions.on_amount_change.clone()}
                on_category_change={create.actions.on_category_change.clone()}
                on_date_change={create.actions.on_date_change.clone()}
                on_description_change={create.actions.on_description_change.clone()}
                on_submit={create.actions.submit.clone()}
            />

            <ExpenseLedger
                title={title}
                caption={"Expenses for this month".to_string()}
                expenses={list.state.expenses.clone()}
                loading={list.state.loading}
                api_client={props.api_client.clone()}
                on_change={list.actions.apply_change.clone()}
            />
        </div>
    }
}
