//! Asset input validation.
//!
//! Provides the violation types and a pure evaluator that runs every rule
//! against one input and accumulates the failures.

pub mod evaluator;
pub mod rules;

pub use evaluator::AssetInputValidator;
pub use rules::{AssetField, FieldViolation, ValidationResult};
