//! Text analysis: lexical features and rating derivation.

pub mod features;
pub mod rating;

pub use features::{extract, TextFeatures};
