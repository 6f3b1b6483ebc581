use yew::prelude::*;
use shared::format::{format_inr, PLACEHOLDER};
use shared::{total_amount, Expense, FormattedExpense};

const COLUMN_COUNT: &str = "5";

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub title: String,
    /// Prose description of the active filter
    pub caption: String,
    #[prop_or("No expenses found.".to_string())]
    pub empty_message: String,
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub on_edit: Callback<Expense>,
}

/// Rows, total and caption for the loaded collection. The total only covers
/// the records in view, not a server-side aggregate.
#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let total = if props.loading {
        PLACEHOLDER.to_string()
    } else {
        format_inr(total_amount(&props.expenses))
    };

    html! {
        <section class="expenses-section card">
            <div class="expenses-header">
                <h3>{&props.title}</h3>
                <div class="expenses-total">
                    <span class="total-label">{"Total"}</span>
                    <span class="total-amount">{total}</span>
                </div>
            </div>

            <div class="table-container">
                <table class="expenses-table">
                    <caption>{&props.caption}</caption>
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Category"}</th>
                            <th>{"Description"}</th>
                            <th class="actions">{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {if props.loading {
                            html! {
                                <tr>
                                    <td colspan={COLUMN_COUNT} class="loading">{"Loading expenses..."}</td>
                                </tr>
                            }
                        } else if props.expenses.is_empty() {
                            html! {
                                <tr>
                                    <td colspan={COLUMN_COUNT} class="empty">{&props.empty_message}</td>
                                </tr>
                            }
                        } else {
                            html! {
                                {for props.expenses.iter().map(|expense| {
                                    let row = FormattedExpense::from_expense(expense);
                                    let on_edit = {
                                        let on_edit = props.on_edit.clone();
                                        let expense = expense.clone();
                                        Callback::from(move |_: MouseEvent| on_edit.emit(expense.clone()))
                                    };

                                    html! {
                                        <tr key={row.id.clone()}>
                                            <td class="date">{row.formatted_date}</td>
                                            <td class="amount">{row.formatted_amount}</td>
                                            <td>
                                                <span class={classes!("category-badge", row.category_class)}>
                                                    {row.category_label}
                                                </span>
                                            </td>
                                            <td class="description">{row.description}</td>
                                            <td class="actions">
                                                <button type="button" class="btn btn-ghost" title="Edit expense" onclick={on_edit}>
                                                    {"✎"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
