use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    #[error("theme is missing color role '{role}'")]
    MissingThemeRole { role: String },
}

impl RenderError {
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    pub fn missing_role(role: impl Into<String>) -> Self {
        Self::MissingThemeRole { role: role.into() }
    }
}
