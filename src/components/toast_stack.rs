//! Auto-dismissing toast messages in the corner of the screen.

use leptos::prelude::*;

use crate::state::notice::Notice;
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_DURATION_MS;
use crate::state::toast::ToastState;

/// Push `notice` onto the stack and schedule its dismissal.
pub fn show_notice(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOAST_DURATION_MS))).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders the current toasts. Clicking a toast dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = if toast.notice.is_error() { "toast toast--error" } else { "toast" };
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                <strong class="toast__title">{toast.notice.title()}</strong>
                                <p class="toast__body">{toast.notice.description()}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
