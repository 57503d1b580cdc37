//! Compact list of saved recipes with remove buttons.

use leptos::prelude::*;

use crate::net::types::Recipe;
use crate::state::recipe_book::RecipeBook;

/// Favorites in insertion order. Each row can open details or be removed.
#[component]
pub fn FavoritesList(on_details: Callback<Recipe>) -> impl IntoView {
    let book = expect_context::<RwSignal<RecipeBook>>();
    let items = move || book.with(|b| b.favorites().items().to_vec());

    view! {
        <ul class="favorites-list">
            {move || {
                items()
                    .into_iter()
                    .map(|recipe| {
                        let id = recipe.id.clone();
                        let name = recipe.name.clone();
                        let thumbnail = recipe.thumbnail.clone();
                        view! {
                            <li class="favorites-list__item">
                                <img class="favorites-list__thumb" src=thumbnail alt=name.clone()/>
                                <span class="favorites-list__name">{name}</span>
                                <button class="btn" on:click=move |_| on_details.run(recipe.clone())>
                                    "Ver"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| {
                                        book.update(|b| {
                                            b.remove_favorite(&id);
                                        });
                                    }
                                >
                                    "Eliminar"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}
