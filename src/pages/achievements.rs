//! Achievements page: every badge with its unlock state.

use leptos::prelude::*;

use crate::components::achievement_badge::AchievementBadge;
use crate::state::recipe_book::RecipeBook;

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let book = expect_context::<RwSignal<RecipeBook>>();

    let definitions = book.with_untracked(|b| b.achievements().definitions().to_vec());
    let total = definitions.len();
    let unlocked = move || book.with(|b| b.achievements().unlocked().len());

    view! {
        <div class="achievements-page">
            <header class="achievements-page__header">
                <h1>"Logros"</h1>
                <p>{move || format!("{} de {total} desbloqueados", unlocked())}</p>
            </header>
            <div class="achievements-page__grid">
                {definitions
                    .into_iter()
                    .map(|definition| view! { <AchievementBadge definition=definition/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
