//! Favorites page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::favorites_list::FavoritesList;
use crate::components::recipe_details::RecipeDetails;
use crate::net::types::Recipe;
use crate::state::recipe_book::RecipeBook;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let book = expect_context::<RwSignal<RecipeBook>>();
    let selected = RwSignal::new(None::<Recipe>);
    let on_details = Callback::new(move |recipe: Recipe| selected.set(Some(recipe)));
    let on_close = Callback::new(move |()| selected.set(None));

    let count = move || book.with(|b| b.favorites().len());

    view! {
        <div class="favorites-page">
            <header class="favorites-page__header">
                <h1>"Mis favoritas"</h1>
                <span class="badge">{count}</span>
            </header>
            <Show
                when=move || { count() > 0 }
                fallback=|| view! {
                    <div class="favorites-page__empty">
                        <p>"Todavía no guardaste ninguna receta."</p>
                        <A href="/">"Buscar recetas"</A>
                    </div>
                }
            >
                <FavoritesList on_details=on_details/>
            </Show>
            {move || selected.get().map(|recipe| view! { <RecipeDetails recipe=recipe on_close=on_close/> })}
        </div>
    }
}
