//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! # Design Principles
//!
//! 1. **Validate once**: the engine configuration is checked at startup
//! 2. **Cheap cloning**: all fields are behind `Arc`
//! 3. **Immutable after creation**: state is read-only during request handling

use crate::config::AppConfig;
use std::sync::Arc;
use tdee_engine::{ConfigError, TdeeCalculator};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Calculator built from `config.engine`
    pub calculator: Arc<TdeeCalculator>,
}

impl AppState {
    /// Create a new application state
    ///
    /// # Errors
    ///
    /// Fails when the engine section of the configuration does not validate
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let calculator = TdeeCalculator::new(config.engine.clone())?;

        Ok(Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        })
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the calculator
    #[inline]
    pub fn calculator(&self) -> &TdeeCalculator {
        &self.calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clone_shares_calculator() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.calculator, &cloned.calculator));
    }

    #[test]
    fn test_invalid_engine_config_rejected() {
        let mut config = AppConfig::default();
        config.engine.trend.kcal_per_lb = 0.0;
        assert!(AppState::new(config).is_err());
    }
}
