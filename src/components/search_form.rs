//! Search box with recent-term suggestions.

use leptos::prelude::*;

use crate::app::AppSearchClient;
use crate::state::recipe_book::RecipeBook;
use crate::state::search::SearchState;

/// Start a search for `term` unless one is already running.
///
/// Records the term in history, then fetches in the background and stores
/// the result in `search`.
pub fn start_search(
    book: RwSignal<RecipeBook>,
    search: RwSignal<SearchState>,
    client: &AppSearchClient,
    term: String,
) {
    let mut started = false;
    search.update(|s| started = s.begin(&term));
    if !started {
        return;
    }
    book.update(|b| {
        b.record_search(&term);
    });

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let result = client.search(&term).await;
            search.update(|s| s.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
    }
}

/// Search input, submit button, and history dropdown.
#[component]
pub fn SearchForm() -> impl IntoView {
    let book = expect_context::<RwSignal<RecipeBook>>();
    let search = expect_context::<RwSignal<SearchState>>();
    let client = expect_context::<AppSearchClient>();

    let input = RwSignal::new(String::new());
    let show_history = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        show_history.set(false);
        start_search(book, search, &client, input.get_untracked());
    });

    let suggestions = move || {
        let typed = input.get();
        book.with(|b| b.history().suggestions(&typed).into_iter().map(str::to_owned).collect::<Vec<_>>())
    };
    let loading = move || search.with(SearchState::is_loading);

    view! {
        <div class="search-box">
            <form
                class="search-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <input
                    class="search-form__input"
                    type="text"
                    placeholder="Busca tus recetas favoritas..."
                    aria-label="Búsqueda de recetas"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:focus=move |_| show_history.set(true)
                    on:blur=move |_| show_history.set(false)
                />
                <button class="btn btn--primary" type="submit" disabled=loading>
                    {move || if loading() { "Buscando..." } else { "Buscar" }}
                </button>
            </form>

            // mousedown fires before the input's blur hides the list
            <Show when=move || show_history.get() && !suggestions().is_empty()>
                <ul class="search-history">
                    {move || {
                        suggestions()
                            .into_iter()
                            .map(|term| {
                                let picked = term.clone();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="search-history__item"
                                            on:mousedown=move |_| input.set(picked.clone())
                                        >
                                            {term}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <li>
                        <button
                            type="button"
                            class="search-history__clear"
                            on:mousedown=move |_| book.update(RecipeBook::clear_history)
                        >
                            "Borrar historial"
                        </button>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
