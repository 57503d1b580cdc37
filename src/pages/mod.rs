//! Routed pages.

pub mod achievements;
pub mod favorites;
pub mod search;
