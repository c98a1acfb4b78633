//! Semantic actions — the small command vocabulary every lamp understands.
//!
//! Value ranges mirror the bounds of the UI controls. They are enforced at the
//! HTTP boundary via [`SemanticAction::validate`]; the dispatcher forwards
//! whatever it is given.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{LumenError, ValidationError};

/// Accepted brightness percentages.
pub const BRIGHTNESS_RANGE: RangeInclusive<u32> = 1..=100;

/// Accepted color temperatures, in Kelvin.
pub const COLOR_TEMPERATURE_RANGE: RangeInclusive<u32> = 3000..=6400;

/// A device-independent command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SemanticAction {
    Toggle,
    SetBrightness { value: u32 },
    SetColorTemperature { value: u32 },
}

impl SemanticAction {
    /// Stable snake-case name, used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::SetBrightness { .. } => "set_brightness",
            Self::SetColorTemperature { .. } => "set_color_temperature",
        }
    }

    /// The numeric argument carried by the action, if any.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Toggle => None,
            Self::SetBrightness { value } | Self::SetColorTemperature { value } => Some(*value),
        }
    }

    /// Confirmation text reported after the action succeeded.
    #[must_use]
    pub fn confirmation(&self) -> String {
        match self {
            Self::Toggle => "Toggled switch".to_string(),
            Self::SetBrightness { value } => format!("Brightness set to {value}%"),
            Self::SetColorTemperature { value } => format!("Color temperature set to {value}K"),
        }
    }

    /// Check the carried value against the control bounds.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Validation`] when the value is outside
    /// [`BRIGHTNESS_RANGE`] or [`COLOR_TEMPERATURE_RANGE`].
    pub fn validate(&self) -> Result<(), LumenError> {
        match self {
            Self::Toggle => Ok(()),
            Self::SetBrightness { value } => check_range("brightness", *value, &BRIGHTNESS_RANGE),
            Self::SetColorTemperature { value } => {
                check_range("color_temperature", *value, &COLOR_TEMPERATURE_RANGE)
            }
        }
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), LumenError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(ValidationError::OutOfRange {
        field,
        value: i64::from(value),
        min: i64::from(*range.start()),
        max: i64::from(*range.end()),
    }
    .into())
}
