use yew::prelude::*;
use shared::ExpenseFilter;
use crate::components::expenses::ExpenseLedger;
use crate::components::filter_bar::FilterBar;
use crate::hooks::use_expense_list::use_expense_list;
use crate::hooks::use_toasts::use_toasts;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct ViewExpensesPageProps {
    pub api_client: ApiClient,
}

/// Filterable ledger over every stored expense
#[function_component(ViewExpensesPage)]
pub fn view_expenses_page(props: &ViewExpensesPageProps) -> Html {
    let toasts = use_toasts();
    let filter = use_state(|| {
        let (_, year) = date_utils::current_month_year();
        ExpenseFilter::for_year(year)
    });

    let list = use_expense_list(&props.api_client, &filter, &toasts);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: ExpenseFilter| filter.set(next))
    };

    html! {
        <div class="page view-expenses-page">
            <h2 class="page-title">{"View Expenses"}</h2>

            <FilterBar filter={(*filter).clone()} on_change={on_filter_change} />

            <ExpenseLedger
                title={filter.title().to_string()}
                caption={filter.caption()}
                empty_message={filter.empty_message()}
                expenses={list.state.expenses.clone()}
                loading={list.state.loading}
                api_client={props.api_client.clone()}
                on_change={list.actions.apply_change.clone()}
            />
        </div>
    }
}
