//! Card for one recipe in a result grid.

use leptos::prelude::*;

use crate::net::types::Recipe;
use crate::state::recipe_book::RecipeBook;

/// Recipe card with a favorite toggle and a details button.
#[component]
pub fn RecipeCard(recipe: Recipe, on_details: Callback<Recipe>) -> impl IntoView {
    let book = expect_context::<RwSignal<RecipeBook>>();

    let id = recipe.id.clone();
    let is_favorite = Memo::new(move |_| book.with(|b| b.is_favorite(&id)));

    let toggled = recipe.clone();
    let on_toggle = move |_| {
        book.update(|b| {
            b.toggle_favorite(&toggled);
        });
    };

    let tags: Vec<String> = recipe.tag_list().into_iter().map(str::to_owned).collect();
    let meta = match &recipe.area {
        Some(area) if !area.is_empty() => format!("{} · {area}", recipe.category),
        _ => recipe.category.clone(),
    };
    let name = recipe.name.clone();
    let thumbnail = recipe.thumbnail.clone();

    view! {
        <article class="recipe-card">
            <img class="recipe-card__image" src=thumbnail alt=name.clone() loading="lazy"/>
            <div class="recipe-card__body">
                <h3 class="recipe-card__title">{name}</h3>
                <p class="recipe-card__meta">{meta}</p>
                <div class="recipe-card__tags">
                    {tags.into_iter().map(|tag| view! { <span class="badge">{tag}</span> }).collect::<Vec<_>>()}
                </div>
                <div class="recipe-card__actions">
                    <button class="btn" on:click=move |_| on_details.run(recipe.clone())>
                        "Ver receta"
                    </button>
                    <button
                        class=move || if is_favorite.get() { "btn btn--favorite btn--active" } else { "btn btn--favorite" }
                        aria-pressed=move || is_favorite.get().to_string()
                        on:click=on_toggle
                    >
                        {move || if is_favorite.get() { "♥ Guardada" } else { "♡ Guardar" }}
                    </button>
                </div>
            </div>
        </article>
    }
}
