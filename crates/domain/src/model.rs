//! Model matcher — binds a vendor model string to a protocol family.
//!
//! Patterns are tested in table order and the first hit wins, so a family
//! token that also appears inside a more specific signature can never steal
//! it. Anything that matches nothing is rejected; there is no fallback family.

use serde::Serialize;

use crate::error::UnsupportedModelError;

/// The wire protocol family a device speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolFamily {
    /// Commands are named remote procedures with positional arguments.
    ActionInvocation,
    /// State is read and written at `(siid, piid)` coordinates.
    PropertyAddressed,
}

/// How a model string is compared against a known token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelPattern {
    /// Case-sensitive substring match against a vendor-model signature.
    Signature(&'static str),
    /// Case-insensitive substring match against a vendor family token.
    FamilyToken(&'static str),
}

impl ModelPattern {
    #[must_use]
    pub fn matches(&self, model: &str) -> bool {
        match self {
            Self::Signature(signature) => model.contains(signature),
            Self::FamilyToken(token) => model
                .to_ascii_lowercase()
                .contains(&token.to_ascii_lowercase()),
        }
    }
}

/// Known patterns, in priority order.
pub const MODEL_PATTERNS: &[(ModelPattern, ProtocolFamily)] = &[
    (
        ModelPattern::Signature("xiaomi.light.lamp30"),
        ProtocolFamily::ActionInvocation,
    ),
    (
        ModelPattern::FamilyToken("huayi"),
        ProtocolFamily::PropertyAddressed,
    ),
];

impl ProtocolFamily {
    /// Resolve the protocol family for `model`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedModelError`] carrying `model` when no pattern
    /// matches.
    pub fn resolve(model: &str) -> Result<Self, UnsupportedModelError> {
        MODEL_PATTERNS
            .iter()
            .find(|(pattern, _)| pattern.matches(model))
            .map(|(_, family)| *family)
            .ok_or_else(|| UnsupportedModelError {
                model: model.to_string(),
            })
    }
}
