use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use titan_core::{Body, OdeFunction, State};
use tracing::{debug, info};

use crate::{Error, Method, Solution, Solver, StepPlan};

/// A validated solver selection and schedule.
///
/// Loaded from TOML such as:
///
/// ```toml
/// method = "rk4"
/// step_size = 0.01
/// final_time = 10.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct SolverConfig {
    method: Method,
    plan: StepPlan,
}

/// Errors that can occur when loading a solver config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    method: Method,
    step_size: f64,
    final_time: f64,
}

impl SolverConfig {
    /// Creates a config, validating the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if `step_size` or `final_time` is invalid.
    pub fn new(method: Method, step_size: f64, final_time: f64) -> Result<Self, Error> {
        Ok(Self {
            method,
            plan: StepPlan::new(final_time, step_size)?,
        })
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid config,
    /// including an unknown method name or an invalid schedule.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), method = %config.method, "loaded solver config");
        Ok(config)
    }

    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn plan(&self) -> &StepPlan {
        &self.plan
    }

    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.plan.step_size()
    }

    #[must_use]
    pub fn final_time(&self) -> f64 {
        self.plan.final_time()
    }

    /// Solves from `initial` with the configured method and schedule.
    pub fn run<B, F>(&self, function: &F, initial: &State<B>) -> Solution<B>
    where
        B: Body,
        F: OdeFunction<B>,
    {
        debug!(method = %self.method, "running configured solve");
        self.method.solve_planned(function, initial, &self.plan, ())
    }
}

impl TryFrom<RawConfig> for SolverConfig {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.method, raw.step_size, raw.final_time)
    }
}

impl From<SolverConfig> for RawConfig {
    fn from(config: SolverConfig) -> Self {
        Self {
            method: config.method,
            step_size: config.step_size(),
            final_time: config.final_time(),
        }
    }
}
