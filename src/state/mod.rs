//! Client-side state: persistence, stores, and view state.
//!
//! DESIGN
//! ======
//! `storage` is the only module touching the key-value backend. The stores
//! (`favorites`, `history`, `achievements`) sit on top of it and are owned
//! together by `recipe_book`. `search`, `timer`, and `toast` are plain view
//! state held in signals by components.

pub mod achievements;
pub mod favorites;
pub mod history;
pub mod notice;
pub mod recipe_book;
pub mod search;
pub mod storage;
pub mod timer;
pub mod toast;
