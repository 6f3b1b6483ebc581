use yew::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use components::sidebar::Sidebar;
use components::toaster::ToastProvider;
use pages::{DashboardPage, Page, ViewExpensesPage};
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let api_client = use_memo((), |_| ApiClient::new());
    let active_page = use_state(|| Page::Dashboard);

    use_effect_with((), {
        let base_url = api_client.base_url().to_string();
        move |_| {
            Logger::info_with_component("app", &format!("Expense tracker started against {}", base_url));
            || ()
        }
    });

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage api_client={(*api_client).clone()} /> },
        Page::ViewExpenses => html! { <ViewExpensesPage api_client={(*api_client).clone()} /> },
    };

    html! {
        <ToastProvider duration_ms={config.toast_duration_ms}>
            <div class="app-layout">
                <Sidebar active_page={*active_page} on_select={on_select} />
                <main class="app-content">
                    {content}
                </main>
            </div>
        </ToastProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
