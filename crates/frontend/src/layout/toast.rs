//! Transient notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const TOAST_TTL_MS: u32 = 4_000;
const MAX_VISIBLE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Newest last; the oldest entries fall off once the stack is full.
fn enqueue(toasts: &mut Vec<Toast>, toast: Toast) {
    toasts.push(toast);
    if toasts.len() > MAX_VISIBLE {
        let overflow = toasts.len() - MAX_VISIBLE;
        toasts.drain(..overflow);
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| enqueue(list, Toast { id, kind, message }));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            this.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" on:click=move |_| service.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast { id, kind: ToastKind::Info, message: format!("#{}", id) }
    }

    #[test]
    fn stack_keeps_the_newest() {
        let mut list = Vec::new();
        for id in 0..6 {
            enqueue(&mut list, toast(id));
        }
        let ids: Vec<u64> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 3, 4, 5]);
    }
}
