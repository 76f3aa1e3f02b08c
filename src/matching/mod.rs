//! Ingredient-safety matching: normalization, token sets and classification.

mod classify;
mod normalize;
mod tokens;

pub use classify::{classify, AptItem, Restrictions};
pub use normalize::normalize;
pub use tokens::Ingredient;
