//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the scheme
//! configuration and its dated rate snapshots from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{SchemeConfig, SchemeMetadata, StatutoryRates};

/// Loads and provides access to the scheme configuration.
///
/// # Directory Structure
///
/// ```text
/// config/jp_childcare/
/// ├── scheme.yaml          # Scheme metadata
/// └── rates/
///     └── 2025-04-01.yaml  # Statutory constants effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use childcare_benefit_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/jp_childcare").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let rates = loader.rates_for(date).unwrap();
/// println!("Using {}", rates.fiscal_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchemeConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rate snapshot breaks a structural rule
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scheme_path = path.join("scheme.yaml");
        let metadata = Self::load_yaml::<SchemeMetadata>(&scheme_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        debug!(
            scheme = %metadata.code,
            snapshots = rates.len(),
            "Loaded scheme configuration"
        );

        Ok(Self {
            config: SchemeConfig::new(metadata, rates),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and validates all rate snapshots from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<StatutoryRates>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let snapshot = Self::load_yaml::<StatutoryRates>(&path)?;
                snapshot.validate()?;
                rates.push(snapshot);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }
        Self::check_distinct_dates(&rates)?;

        Ok(rates)
    }

    /// Rejects snapshots that share an effective date.
    fn check_distinct_dates(rates: &[StatutoryRates]) -> EngineResult<()> {
        let mut dates: Vec<NaiveDate> = rates.iter().map(|r| r.effective_date).collect();
        dates.sort();
        match dates.windows(2).find(|pair| pair[0] == pair[1]) {
            Some(pair) => Err(EngineError::InvalidConfig {
                message: format!("more than one rate snapshot effective on {}", pair[0]),
            }),
            None => Ok(()),
        }
    }

    /// Builds a loader from already-constructed parts.
    ///
    /// Each snapshot is validated exactly as if it had been read from disk.
    pub fn from_parts(
        metadata: SchemeMetadata,
        rates: Vec<StatutoryRates>,
    ) -> EngineResult<Self> {
        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: "(no rate snapshots supplied)".to_string(),
            });
        }
        for snapshot in &rates {
            snapshot.validate()?;
        }
        Self::check_distinct_dates(&rates)?;
        Ok(Self {
            config: SchemeConfig::new(metadata, rates),
        })
    }

    /// Returns the underlying scheme configuration.
    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Gets the rate snapshot effective on a given date.
    ///
    /// The method finds the most recent snapshot that is effective
    /// on or before the given date.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&StatutoryRates> {
        self.config
            .rates()
            .iter()
            .rfind(|r| r.effective_date <= date)
            .ok_or(EngineError::RatesNotFound { date })
    }

    /// Gets the most recent rate snapshot.
    pub fn latest(&self) -> &StatutoryRates {
        // from_parts and load both refuse an empty snapshot list
        &self.config.rates()[self.config.rates().len() - 1]
    }
}
