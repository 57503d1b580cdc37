//! Badge for one achievement with a progress bar while locked.

#[cfg(test)]
#[path = "achievement_badge_test.rs"]
mod achievement_badge_test;

use leptos::prelude::*;

use crate::state::achievements::AchievementDefinition;
use crate::state::recipe_book::RecipeBook;

/// The bar is only drawn for locked badges with some progress made.
fn shows_progress(unlocked: bool, percent: f64) -> bool {
    !unlocked && percent > 0.0
}

#[component]
pub fn AchievementBadge(definition: AchievementDefinition) -> impl IntoView {
    let book = expect_context::<RwSignal<RecipeBook>>();
    let id = definition.id;

    let unlocked = move || book.with(|b| b.achievements().is_unlocked(id));
    let progress = move || book.with(|b| b.progress(id));

    view! {
        <div class=move || {
            if unlocked() { "achievement-badge achievement-badge--unlocked" } else { "achievement-badge" }
        }>
            <span class="achievement-badge__icon">{definition.icon}</span>
            <div class="achievement-badge__text">
                <h3>{definition.title}</h3>
                <p>{definition.description}</p>
            </div>
            <Show when=move || shows_progress(unlocked(), progress())>
                <div class="achievement-badge__progress">
                    <div class="achievement-badge__bar" style=move || format!("width: {:.0}%", progress())></div>
                </div>
                <p class="achievement-badge__percent">{move || format!("{:.0}%", progress())}</p>
            </Show>
        </div>
    }
}
