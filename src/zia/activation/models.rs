//! Configuration activation data models

use serde::{Deserialize, Serialize};

/// Activation state of the organization's pending configuration changes
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivationStatus {
    pub status: Option<String>,
}

impl ActivationStatus {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    /// ACTIVE means nothing is waiting to be activated
    pub fn is_active(&self) -> bool {
        self.status() == "ACTIVE"
    }
}
