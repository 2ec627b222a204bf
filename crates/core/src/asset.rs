//! Asset creation input record.

use serde::{Deserialize, Serialize};

/// Field values submitted by the asset creation form.
///
/// A plain value holder: nothing is enforced on construction. Missing keys
/// in a JSON payload fall back to the defaults (empty text, zero precision).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetInput {
    /// Display name.
    pub name: String,
    /// Asset category. Free-form; no rule applies to it.
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Ticker or code.
    pub symbol: String,
    /// Number of decimal places.
    pub precision: i32,
}

impl AssetInput {
    pub fn new(
        name: impl Into<String>,
        asset_type: impl Into<String>,
        symbol: impl Into<String>,
        precision: i32,
    ) -> Self {
        Self {
            name: name.into(),
            asset_type: asset_type.into(),
            symbol: symbol.into(),
            precision,
        }
    }
}
