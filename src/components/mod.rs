//! Reusable view components.
//!
//! Components read shared state from context (`RwSignal<RecipeBook>`,
//! `RwSignal<SearchState>`, `RwSignal<ToastState>`) and mutate it only
//! through the stores' public operations.

pub mod achievement_badge;
pub mod cooking_timer;
pub mod favorites_list;
pub mod recipe_card;
pub mod recipe_details;
pub mod search_form;
pub mod toast_stack;
