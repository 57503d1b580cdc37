//! Modal with a recipe's ingredients, instructions, and a cooking timer.

#[cfg(test)]
#[path = "recipe_details_test.rs"]
mod recipe_details_test;

use leptos::prelude::*;

use crate::components::cooking_timer::CookingTimer;
use crate::net::types::{Ingredient, Recipe};

fn ingredient_line(ingredient: Ingredient<'_>) -> String {
    match ingredient.measure {
        Some(measure) => format!("{measure} {}", ingredient.name),
        None => ingredient.name.to_owned(),
    }
}

#[component]
pub fn RecipeDetails(recipe: Recipe, on_close: Callback<()>) -> impl IntoView {
    let lines: Vec<String> = recipe.ingredient_lines().map(ingredient_line).collect();
    let video = recipe.youtube.clone().filter(|url| !url.trim().is_empty());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog recipe-details" on:click=move |ev| ev.stop_propagation()>
                <h2>{recipe.name.clone()}</h2>
                <img class="recipe-details__image" src=recipe.thumbnail.clone() alt=recipe.name.clone()/>
                <h3>"Ingredientes"</h3>
                <ul class="recipe-details__ingredients">
                    {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}
                </ul>
                <h3>"Instrucciones"</h3>
                <p class="recipe-details__instructions">{recipe.instructions.clone()}</p>
                <CookingTimer/>
                {video.map(|url| {
                    view! {
                        <a class="btn" href=url target="_blank" rel="noopener noreferrer">
                            "Ver video"
                        </a>
                    }
                })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
