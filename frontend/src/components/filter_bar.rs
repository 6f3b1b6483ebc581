use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use shared::filter::ENTIRE_YEAR;
use shared::format::month_abbrev;
use shared::{CategoryFilter, ExpenseFilter, ViewMode};
use crate::components::category_select::CategorySelect;

const MIN_YEAR: &str = "2020";
const MAX_YEAR: &str = "2030";

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: ExpenseFilter,
    pub on_change: Callback<ExpenseFilter>,
}

/// View-mode toggle, month and year pickers and the category filter.
/// Every edit emits a complete new filter.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let view_button = |mode: ViewMode, label: &'static str| {
        let on_change = props.on_change.clone();
        let filter = props.filter.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if filter.view_mode != mode {
                on_change.emit(filter.clone().with_view_mode(mode));
            }
        });
        let class = if props.filter.view_mode == mode { "btn btn-primary" } else { "btn btn-secondary" };

        html! {
            <button type="button" {class} {onclick}>{label}</button>
        }
    };

    let on_month_change = {
        let on_change = props.on_change.clone();
        let filter = props.filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let month = select.value().parse::<u32>().unwrap_or(ENTIRE_YEAR);
            on_change.emit(filter.clone().with_month(month));
        })
    };

    let on_year_input = {
        let on_change = props.on_change.clone();
        let filter = props.filter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(filter.clone().with_year_input(input.value()));
        })
    };

    let on_category_change = {
        let on_change = props.on_change.clone();
        let filter = props.filter.clone();
        Callback::from(move |selection: Option<String>| {
            let category = CategoryFilter::from_selection(selection.as_deref());
            on_change.emit(filter.clone().with_category(category));
        })
    };

    let category_value = match props.filter.category {
        CategoryFilter::All => None,
        other => Some(other.option_value().to_string()),
    };
    let filtered = props.filter.view_mode == ViewMode::Filtered;

    html! {
        <section class="filter-bar card">
            <div class="view-toggle">
                {view_button(ViewMode::Filtered, "Filtered View")}
                {view_button(ViewMode::All, "View All")}
            </div>

            {if filtered {
                html! {
                    <>
                        <div class="form-group">
                            <label for="filter-month">{"Month"}</label>
                            <select id="filter-month" onchange={on_month_change}>
                                <option value={ENTIRE_YEAR.to_string()} selected={props.filter.month == ENTIRE_YEAR}>
                                    {"Entire Year"}
                                </option>
                                {for (1..=12u32).map(|month| html! {
                                    <option value={month.to_string()} selected={props.filter.month == month}>
                                        {month_abbrev(month)}
                                    </option>
                                })}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="filter-year">{"Year"}</label>
                            <input
                                type="number"
                                id="filter-year"
                                min={MIN_YEAR}
                                max={MAX_YEAR}
                                value={props.filter.year_input.clone()}
                                oninput={on_year_input}
                            />
                        </div>
                    </>
                }
            } else { html! {} }}

            <CategorySelect
                id="filter-category"
                value={category_value}
                on_change={on_category_change}
                placeholder="All Categories"
                show_all={true}
                show_other={true}
            />
        </section>
    }
}
