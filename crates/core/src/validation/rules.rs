//! Validation field, violation and result types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters long";
pub const SYMBOL_REQUIRED: &str = "Symbol is required";
pub const PRECISION_NEGATIVE: &str = "Precision must be zero or positive";

/// Minimum number of characters in an asset name.
pub const NAME_MIN_LENGTH: usize = 3;

/// Fields of [`AssetInput`](crate::asset::AssetInput) that violations refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetField {
    Name,
    Type,
    Symbol,
    Precision,
}

impl AssetField {
    pub const ALL: [AssetField; 4] = [
        AssetField::Name,
        AssetField::Type,
        AssetField::Symbol,
        AssetField::Precision,
    ];

    /// Wire name of the field, as it appears in JSON payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetField::Name => "name",
            AssetField::Type => "type",
            AssetField::Symbol => "symbol",
            AssetField::Precision => "precision",
        }
    }
}

impl fmt::Display for AssetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a field name case-insensitively, so form bindings that use the
/// property name (`"Name"`) resolve as well as wire names.
impl FromStr for AssetField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: AssetField,
    pub rule_type: &'static str,
    pub message: &'static str,
}

/// Aggregated result of evaluating all rules against one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn from_violations(errors: Vec<FieldViolation>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Violation messages in rule order.
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|v| v.message)
    }

    pub fn for_field(&self, field: AssetField) -> impl Iterator<Item = &FieldViolation> + '_ {
        self.errors.iter().filter(move |v| v.field == field)
    }
}
