use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use stylance::import_crate_style;

import_crate_style!(style, "./styles/toast.css");

/// How long a toast stays up before retiring itself.
const TOAST_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

/// Signal-backed toast service, provided via context by `App`. Copyable so
/// event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    /// Show a transient notification; it retires itself after
    /// [`TOAST_TTL_MS`] unless dismissed first.
    pub fn push(&self, kind: ToastKind, title: impl Into<String>, body: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        let toasts = self.toasts;
        toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title: title.into(),
                body: body.into(),
            });
        });

        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook for reaching the app-wide toaster.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster must be provided in context")
}

/// Fixed stack rendering the live toasts.
#[component]
pub fn ToastShelf() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class=style::toast_shelf>
            {move || {
                toaster
                    .toasts()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let kind_class = match toast.kind {
                            ToastKind::Success => style::toast_success,
                            ToastKind::Error => style::toast_error,
                        };
                        view! {
                            <div class=format!("{} {}", style::toast, kind_class)>
                                <div class=style::toast_text>
                                    <span class=style::toast_title>{toast.title}</span>
                                    <span class=style::toast_body>{toast.body}</span>
                                </div>
                                <button
                                    class=style::toast_dismiss
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "\u{00D7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
