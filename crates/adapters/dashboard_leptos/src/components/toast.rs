//! Toast notification system for transient success, warning and error
//! messages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use trackerdash_domain::action::Resolution;
use trackerdash_domain::toast::Toast;

use crate::browser;

/// A toast on screen.
#[derive(Debug, Clone)]
struct ToastMessage {
    /// Unique id for keyed rendering.
    id: u32,
    toast: Toast,
}

/// Reactive context providing toast mutation methods.
#[derive(Clone, Copy)]
pub struct ToastProvider {
    set_toasts: WriteSignal<Vec<ToastMessage>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
    lifetime_ms: u32,
}

impl ToastProvider {
    /// Push a toast. It auto-dismisses after the configured lifetime.
    pub fn push(&self, toast: Toast) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));

        self.set_toasts.update(|list| {
            list.push(ToastMessage { id, toast });
        });

        let set_toasts = self.set_toasts;
        let lifetime_ms = self.lifetime_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(lifetime_ms).await;
            set_toasts.update(|list| {
                list.retain(|t| t.id != id);
            });
        });
    }

    /// Dismiss a toast immediately by id.
    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|list| {
            list.retain(|t| t.id != id);
        });
    }

    /// Show the feedback a dialog resolution carries and schedule the reload
    /// it asks for. Inline retries are rendered by the dialog itself.
    pub fn settle(&self, resolution: &Resolution) {
        match resolution {
            Resolution::Retry(_) => {}
            Resolution::Notify(toast) => self.push(toast.clone()),
            Resolution::Close {
                toast,
                reload_after_ms,
            } => {
                self.push(toast.clone());
                if let Some(delay) = reload_after_ms {
                    browser::reload_after(*delay);
                }
            }
        }
    }
}

/// Access the toast provider from Leptos context.
///
/// Must be called within a component tree that has a [`ToastContainer`] ancestor.
#[must_use]
pub fn use_toasts() -> ToastProvider {
    expect_context::<ToastProvider>()
}

/// Container component that provides toast context and renders active toasts.
///
/// Place this once near the root of the component tree (e.g. inside `<App/>`).
#[component]
pub fn ToastContainer(
    /// Auto-dismiss delay in milliseconds.
    lifetime_ms: u32,
    children: Children,
) -> impl IntoView {
    let (toasts, set_toasts) = signal(Vec::<ToastMessage>::new());
    let (next_id, set_next_id) = signal(0_u32);

    let provider = ToastProvider {
        set_toasts,
        next_id,
        set_next_id,
        lifetime_ms,
    };

    provide_context(provider);

    view! {
        {children()}
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|message| {
                        let id = message.id;
                        let kind = message.toast.kind;
                        view! {
                            <div class=format!("toast toast-{}", kind.css_class())>
                                <i class=format!("bi bi-{}", kind.icon())></i>
                                <span class="toast-text">{message.toast.text}</span>
                                <button
                                    class="toast-dismiss"
                                    on:click=move |_| provider.dismiss(id)
                                >
                                    "\u{00D7}"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
