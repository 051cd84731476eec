//! Tunable parameters for the checks.
//!
//! Every field has a default, so a partial JSON document such as
//! `{"sum": {"axis": "column"}}` is a complete plan.
use crate::store::Axis;
use serde::{Deserialize, Deserializer, Serialize};

/// Rounding precision ceiling; an f64 carries about 15 significant digits.
pub const MAX_DECIMALS: u32 = 15;

fn default_target() -> f64 { 1.0 }
fn default_true() -> bool { true }
fn default_decimals() -> u32 { 4 }

fn decimals_in_range<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let decimals = u32::deserialize(d)?;
    if decimals > MAX_DECIMALS {
        return Err(serde::de::Error::custom(format!(
            "decimals must be at most {}, got {}",
            MAX_DECIMALS, decimals
        )));
    }
    Ok(decimals)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SumOptions {
    /// The value every row/column sum must round to.
    #[serde(default = "default_target")]
    pub target: f64,
    /// Sum absolute values instead of signed ones.
    #[serde(default = "default_true")]
    pub absolute: bool,
    #[serde(default)]
    pub axis: Axis,
    /// Decimal places both sides are rounded to before comparing.
    /// Values above [`MAX_DECIMALS`] are rejected on load and capped in use.
    #[serde(default = "default_decimals", deserialize_with = "decimals_in_range")]
    pub decimals: u32,
}

impl Default for SumOptions {
    fn default() -> Self {
        Self {
            target: default_target(),
            absolute: true,
            axis: Axis::Row,
            decimals: default_decimals(),
        }
    }
}

impl SumOptions {
    pub fn target(mut self, target: f64) -> Self { self.target = target; self }
    pub fn absolute(mut self, absolute: bool) -> Self { self.absolute = absolute; self }
    pub fn axis(mut self, axis: Axis) -> Self { self.axis = axis; self }
    pub fn decimals(mut self, decimals: u32) -> Self { self.decimals = decimals; self }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOptions {
    /// Compare the date's canonical string form against a text index.
    #[serde(default)]
    pub as_string: bool,
}

/// A reusable set of check parameters, typically loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckPlan {
    #[serde(default)]
    pub sum: Option<SumOptions>,
    #[serde(default)]
    pub date: Option<DateOptions>,
}

impl CheckPlan {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
