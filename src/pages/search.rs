//! Search page: hero, search form, and the result grid.

use leptos::prelude::*;

use crate::app::AppSearchClient;
use crate::components::recipe_card::RecipeCard;
use crate::components::recipe_details::RecipeDetails;
use crate::components::search_form::{SearchForm, start_search};
use crate::net::types::Recipe;
use crate::state::recipe_book::RecipeBook;
use crate::state::search::{SearchState, SearchStatus};

/// Search page. The result area follows `SearchState::status`; a failed
/// search offers a retry with the same term.
#[component]
pub fn SearchPage() -> impl IntoView {
    let book = expect_context::<RwSignal<RecipeBook>>();
    let search = expect_context::<RwSignal<SearchState>>();
    let client = expect_context::<AppSearchClient>();

    let selected = RwSignal::new(None::<Recipe>);
    let on_details = Callback::new(move |recipe: Recipe| selected.set(Some(recipe)));
    let on_close = Callback::new(move |()| selected.set(None));

    let retry = Callback::new(move |()| {
        let term = search.with_untracked(|s| s.term.clone());
        start_search(book, search, &client, term);
    });

    let status = move || search.with(|s| s.status.clone());

    view! {
        <div class="search-page">
            <section class="hero">
                <h1>"Encuentra tu próxima receta"</h1>
                <p>"Busca entre cientos de platos de todo el mundo."</p>
                <SearchForm/>
            </section>

            <section class="search-page__results">
                {move || match status() {
                    SearchStatus::Idle => view! {
                        <p class="search-page__hint">"Escribe el nombre de un plato para empezar."</p>
                    }
                    .into_any(),
                    SearchStatus::Loading => view! {
                        <div class="spinner" role="status">"Buscando recetas..."</div>
                    }
                    .into_any(),
                    SearchStatus::Empty => view! {
                        <p class="search-page__empty">
                            {move || search.with(|s| format!("No encontramos recetas para \"{}\".", s.term))}
                        </p>
                    }
                    .into_any(),
                    SearchStatus::Failed(message) => view! {
                        <div class="search-page__error">
                            <p>"No se pudo completar la búsqueda."</p>
                            <p class="search-page__error-detail">{message}</p>
                            <button class="btn btn--primary" on:click=move |_| retry.run(())>
                                "Reintentar"
                            </button>
                        </div>
                    }
                    .into_any(),
                    SearchStatus::Found(count) => view! {
                        <div class="search-page__found">
                            <p class="search-page__count">{format!("{count} recetas encontradas")}</p>
                            <div class="recipe-grid">
                                {search
                                    .with_untracked(|s| s.recipes.clone())
                                    .into_iter()
                                    .map(|recipe| view! { <RecipeCard recipe=recipe on_details=on_details/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </section>

            {move || selected.get().map(|recipe| view! { <RecipeDetails recipe=recipe on_close=on_close/> })}
        </div>
    }
}
