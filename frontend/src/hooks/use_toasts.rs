use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Handle for raising notifications, shared through context by `ToastProvider`
#[derive(Clone)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<u32>>,
    duration_ms: u32,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher
            && Rc::ptr_eq(&self.next_id, &other.next_id)
            && self.duration_ms == other.duration_ms
    }
}

impl ToastHandle {
    pub fn new(dispatcher: UseReducerDispatcher<ToastList>, next_id: Rc<Cell<u32>>, duration_ms: u32) -> Self {
        Self { dispatcher, next_id, duration_ms }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.dispatcher.dispatch(ToastAction::Dismiss(id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatcher.dispatch(ToastAction::Push(Toast { id, kind, message }));

        let dispatcher = self.dispatcher.clone();
        let duration_ms = self.duration_ms;
        wasm_bindgen_futures::spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(duration_ms).await;
            dispatcher.dispatch(ToastAction::Dismiss(id));
        });
    }
}

/// Toast handle provided by the nearest `ToastProvider`
#[hook]
pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toasts called outside of a ToastProvider")
}
