use yew::prelude::*;
use shared::mutation::{CREATED_NOTICE, CREATE_FAILED};
use shared::{ExpenseDraft, Submission, ValidationPolicy};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use crate::hooks::use_toasts::ToastHandle;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

const COMPONENT: &str = "create-expense";

#[derive(Clone)]
pub struct CreateExpenseState {
    pub draft: ExpenseDraft,
    pub creating: bool,
}

pub struct UseCreateExpenseResult {
    pub state: CreateExpenseState,
    pub actions: UseCreateExpenseActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCreateExpenseActions {
    pub submit: Callback<()>,
    pub on_amount_change: Callback<InputEvent>,
    pub on_category_change: Callback<Option<String>>,
    pub on_date_change: Callback<InputEvent>,
    pub on_description_change: Callback<InputEvent>,
}

/// Dashboard create form. `on_created` fires after the server accepted the
/// new record and the form was reset.
#[hook]
pub fn use_create_expense(api_client: &ApiClient, toasts: &ToastHandle, on_created: Callback<()>) -> UseCreateExpenseResult {
    let amount = use_state(String::new);
    let category = use_state(|| Option::<String>::None);
    let date = use_state(date_utils::today_iso);
    let description = use_state(String::new);
    let creating = use_state(|| false);

    let draft = ExpenseDraft {
        amount: (*amount).clone(),
        category: (*category).clone(),
        description: (*description).clone(),
        date: (*date).clone(),
    };

    let submit = {
        let api_client = api_client.clone();
        let toasts = toasts.clone();
        let amount = amount.clone();
        let category = category.clone();
        let date = date.clone();
        let description = description.clone();
        let creating = creating.clone();

        use_callback((on_created, draft.clone(), *creating), move |_, (on_created, draft, in_flight)| {
            // Nothing is sent unless the form passes validation
            let request = match Submission::plan(ValidationPolicy::CREATE, draft, *in_flight) {
                Submission::Send(request) => request,
                Submission::Rejected(err) => {
                    toasts.error(err.to_string());
                    return;
                }
                Submission::Busy => return,
            };

            let api_client = api_client.clone();
            let toasts = toasts.clone();
            let amount = amount.clone();
            let category = category.clone();
            let date = date.clone();
            let description = description.clone();
            let creating = creating.clone();
            let on_created = on_created.clone();

            creating.set(true);
            spawn_local(async move {
                match api_client.create_expense(&request).await {
                    Ok(response) => {
                        Logger::info_with_component(COMPONENT, &format!("Created expense {}", response.expense_id));
                        toasts.success(CREATED_NOTICE);
                        amount.set(String::new());
                        category.set(None);
                        date.set(date_utils::today_iso());
                        description.set(String::new());
                        on_created.emit(());
                    }
                    Err(err) => {
                        Logger::error_with_component(COMPONENT, &format!("Failed to add expense: {}", err));
                        toasts.error(err.user_message(CREATE_FAILED));
                    }
                }

                creating.set(false);
            });
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        use_callback((), move |selection: Option<String>, _| {
            category.set(selection);
        })
    };

    let on_date_change = {
        let date = date.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        use_callback((), move |e: InputEvent, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let state = CreateExpenseState {
        draft,
        creating: *creating,
    };

    let actions = UseCreateExpenseActions {
        submit,
        on_amount_change,
        on_category_change,
        on_date_change,
        on_description_change,
    };

    UseCreateExpenseResult { state, actions }
}
