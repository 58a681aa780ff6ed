use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrbitError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl OrbitError {
    pub fn is_domain_error(&self) -> bool {
        matches!(self, OrbitError::DomainError(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, OrbitError::ParseError(_))
    }
}

pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, OrbitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(OrbitError::DomainError(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}
