//! Application state for the childcare benefit engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::calculation::Calculator;
use crate::config::ConfigLoader;
use crate::error::EngineResult;

/// Shared application state.
///
/// Holds the loaded rate configuration, which is read-only once the server
/// starts.
#[derive(Clone)]
pub struct AppState {
    /// The loaded scheme configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a calculator for the rates effective on `date`, or for the
    /// newest rates when no date is given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::RatesNotFound`] if no snapshot is
    /// effective on `date`.
    pub fn calculator(&self, date: Option<NaiveDate>) -> EngineResult<Calculator<'_>> {
        let rates = match date {
            Some(date) => self.config.rates_for(date)?,
            None => self.config.latest(),
        };
        Ok(Calculator::new(rates))
    }
}
