//! Countdown timer shown in the recipe dialog.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::toast_stack::show_notice;
#[cfg(feature = "hydrate")]
use crate::state::notice::Notice;
use crate::state::timer::{Countdown, DEFAULT_TIMER_MINUTES};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastState;

/// Start/pause/reset countdown. Raises a toast when it reaches zero.
///
/// A one-second ticker exists only while the countdown runs; dropping it
/// (pause, finish, or the dialog closing) cancels it.
#[component]
pub fn CookingTimer(#[prop(default = DEFAULT_TIMER_MINUTES)] minutes: u32) -> impl IntoView {
    let countdown = RwSignal::new(Countdown::new(minutes));

    #[cfg(feature = "hydrate")]
    {
        let toasts = expect_context::<RwSignal<ToastState>>();
        let ticker = Rc::new(RefCell::new(None::<Interval>));
        Effect::new(move || {
            if !countdown.with(Countdown::is_running) {
                ticker.borrow_mut().take();
                return;
            }
            if ticker.borrow().is_some() {
                return;
            }
            let tick = Interval::new(1_000, move || {
                let mut finished = false;
                countdown.update(|c| finished = c.tick());
                if finished {
                    show_notice(toasts, Notice::TimerFinished);
                }
            });
            *ticker.borrow_mut() = Some(tick);
        });
    }

    let running = move || countdown.with(Countdown::is_running);

    view! {
        <div class="cooking-timer">
            <span class="cooking-timer__time">{move || countdown.with(Countdown::label)}</span>
            <div class="cooking-timer__bar">
                <div
                    class="cooking-timer__fill"
                    style=move || format!("width: {:.0}%", countdown.with(Countdown::percent_left))
                ></div>
            </div>
            <div class="cooking-timer__controls">
                <button
                    class=move || if running() { "btn btn--danger" } else { "btn btn--primary" }
                    on:click=move |_| countdown.update(Countdown::toggle)
                >
                    {move || if running() { "Pausar" } else { "Iniciar" }}
                </button>
                <button class="btn" on:click=move |_| countdown.update(Countdown::reset)>
                    "Reiniciar"
                </button>
            </div>
        </div>
    }
}
