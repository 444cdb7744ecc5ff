//! Administrative gate configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Shared-secret gate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GateConfig {
    /// Password unlocking configuration and expense administration
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl GateConfig {
    /// Validate gate configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.admin_password.is_empty() {
            return Err(ValidationError::EmptyAdminPassword);
        }
        Ok(())
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
        }
    }
}

fn default_admin_password() -> String {
    "admin".to_string()
}
