use yew::prelude::*;
use web_sys::{HtmlSelectElement, MouseEvent};
use shared::category::{display_label, normalize_selection, Category, ALL_OPTION_VALUE, OTHER_LABEL, OTHER_OPTION_VALUE};

#[derive(Properties, PartialEq)]
pub struct CategorySelectProps {
    /// Selected option value; `None` when nothing (or "all") is selected
    pub value: Option<String>,
    /// Receives the normalized selection: `None` for "all" or clear
    pub on_change: Callback<Option<String>>,
    #[prop_or("Select category".to_string())]
    pub placeholder: String,
    #[prop_or_default]
    pub disabled: bool,
    /// Offer the "All Categories" pseudo-option
    #[prop_or_default]
    pub show_all: bool,
    /// Offer "Other" for records without a category
    #[prop_or_default]
    pub show_other: bool,
    /// Offer a Clear button while a value is selected
    #[prop_or_default]
    pub allow_clear: bool,
    #[prop_or("category".to_string())]
    pub id: String,
}

#[function_component(CategorySelect)]
pub fn category_select(props: &CategorySelectProps) -> Html {
    let on_select = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(normalize_selection(&select.value()));
        })
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_change.emit(None);
        })
    };

    let current = props.value.as_deref();
    let is_selected = |option: &str| match current {
        Some(value) => value.eq_ignore_ascii_case(option),
        None => props.show_all && option == ALL_OPTION_VALUE,
    };
    let nothing_selected = current.is_none() && !props.show_all;
    // A stored record may carry a category outside the vocabulary
    let unlisted = current.filter(|value| {
        Category::parse(value).is_none()
            && !value.eq_ignore_ascii_case(OTHER_OPTION_VALUE)
            && !value.eq_ignore_ascii_case(ALL_OPTION_VALUE)
    });

    html! {
        <div class="form-group category-select">
            <label for={props.id.clone()}>{"Category"}</label>
            <div class="category-select-control">
                <select
                    id={props.id.clone()}
                    onchange={on_select}
                    disabled={props.disabled}
                >
                    <option value="" disabled={true} hidden={true} selected={nothing_selected}>
                        {&props.placeholder}
                    </option>
                    {if props.show_all {
                        html! {
                            <option value={ALL_OPTION_VALUE} selected={is_selected(ALL_OPTION_VALUE)}>
                                {"All Categories"}
                            </option>
                        }
                    } else { html! {} }}
                    {for Category::ALL.iter().map(|category| html! {
                        <option value={category.as_str()} selected={is_selected(category.as_str())}>
                            {category.as_str()}
                        </option>
                    })}
                    {if let Some(value) = unlisted {
                        html! {
                            <option value={value.to_string()} selected={true}>
                                {display_label(Some(value))}
                            </option>
                        }
                    } else { html! {} }}
                    {if props.show_other {
                        html! {
                            <option value={OTHER_OPTION_VALUE} selected={is_selected(OTHER_OPTION_VALUE)}>
                                {OTHER_LABEL}
                            </option>
                        }
                    } else { html! {} }}
                </select>

                {if props.allow_clear && current.is_some() && !props.disabled {
                    html! {
                        <button type="button" class="btn btn-secondary btn-clear" onclick={on_clear}>
                            {"Clear"}
                        </button>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
