use yew::prelude::*;
use crate::pages::Page;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="sidebar">
            <div class="sidebar-brand">{"Expense Tracker"}</div>
            <nav class="sidebar-nav">
                {for Page::ALL.iter().map(|page| {
                    let page = *page;
                    let class = if page == props.active_page { "nav-item active" } else { "nav-item" };
                    let on_select = props.on_select.clone();

                    html! {
                        <button type="button" {class} onclick={Callback::from(move |_: MouseEvent| on_select.emit(page))}>
                            {page.label()}
                        </button>
                    }
                })}
            </nav>
        </aside>
    }
}
