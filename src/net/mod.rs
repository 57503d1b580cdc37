//! Networking for the recipe API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `search` issues the name search and validates responses; `types` defines
//! the recipe record and its wire shape.

pub mod search;
pub mod types;
