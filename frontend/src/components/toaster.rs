use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use crate::hooks::use_toasts::{ToastHandle, ToastKind, ToastList};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub duration_ms: u32,
    pub children: Children,
}

/// Provides a `ToastHandle` to its children and renders the toast stack
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0u32));
    let handle = ToastHandle::new(toasts.dispatcher(), Rc::clone(&next_id), props.duration_ms);

    html! {
        <ContextProvider<ToastHandle> context={handle.clone()}>
            { props.children.clone() }
            <div class="toaster" aria-live="polite">
                {for toasts.toasts.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    let on_dismiss = {
                        let handle = handle.clone();
                        let id = toast.id;
                        Callback::from(move |_: MouseEvent| handle.dismiss(id))
                    };

                    html! {
                        <div key={toast.id} class={class} role="status">
                            <span class="toast-message">{&toast.message}</span>
                            <button type="button" class="toast-close" onclick={on_dismiss}>{"×"}</button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastHandle>>
    }
}
