use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::control::primary_body::PrimaryBody;
use crate::errors::OrbitError;

#[derive(Clone, Debug, Deserialize)]
pub struct BodyCatalog {
    pub bodies: Vec<PrimaryBody>,
}

impl BodyCatalog {
    pub fn builtin() -> Self {
        BodyCatalog {
            bodies: PrimaryBody::presets(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, OrbitError> {
        let catalog: BodyCatalog = toml::from_str(contents)
            .map_err(|e| OrbitError::ConfigError(format!("failed to parse TOML: {}", e)))?;

        if catalog.bodies.is_empty() {
            return Err(OrbitError::ConfigError(
                "catalog does not define any bodies".to_string(),
            ));
        }
        for body in &catalog.bodies {
            body.validate().map_err(|e| {
                OrbitError::ConfigError(format!("invalid body '{}': {}", body.name, e))
            })?;
        }

        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, OrbitError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            OrbitError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        debug!(
            "Loaded {} bodies from {}",
            catalog.bodies.len(),
            path.display()
        );
        Ok(catalog)
    }

    // Case-insensitive
    pub fn find(&self, name: &str) -> Result<PrimaryBody, OrbitError> {
        let upper = name.trim().to_uppercase();
        self.bodies
            .iter()
            .find(|body| body.name.to_uppercase() == upper)
            .cloned()
            .ok_or_else(|| {
                OrbitError::ConfigError(format!("body '{}' not found in catalog", name))
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.bodies.iter().map(|body| body.name.as_str()).collect()
    }
}
