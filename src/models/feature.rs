use serde::{Deserialize, Serialize};

/// Input for creating a feature workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureRequest {
    /// Free-text description of the feature. Must contain non-whitespace text.
    pub description: String,
    /// Explicit short name. Sanitized like a derived name; skips derivation entirely.
    pub short_name: Option<String>,
}

impl FeatureRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            short_name: None,
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }
}

/// Record of a branch name cut down to the byte cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truncation {
    pub original: String,
    pub original_bytes: usize,
    pub truncated: String,
    pub truncated_bytes: usize,
}

/// A session-scoped setting handed back to the caller to propagate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionVariable {
    pub name: String,
    pub value: String,
}
