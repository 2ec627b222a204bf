//! Asset creation form input and its validation rules.
//!
//! The surrounding application builds an [`asset::AssetInput`] from user
//! data and runs [`validation::AssetInputValidator`] over it before
//! submitting. Violations are returned as values, never raised.

pub mod asset;
pub mod error;
pub mod validation;
