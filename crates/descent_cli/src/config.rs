//! CLI configuration management
//!
//! Settings come from a TOML file, `DESCENT_*` environment variables and
//! command line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::path::{Path, PathBuf};
use std::str::FromStr;

use descent_core::math::solvers::{Method, SolverConfig};
use serde::Deserialize;
use thiserror::Error;

/// Default configuration file, read only when present
pub const DEFAULT_CONFIG_FILE: &str = "descent.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Solver settings (`[solver]` table)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Method used by `solve` when `--method` is absent
    #[serde(deserialize_with = "deserialize_method")]
    pub method: Method,
    /// Convergence tolerance on the residual norm
    pub tolerance: f64,
    /// Iteration budget before falling back to the initial guess
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let config = SolverConfig::<f64>::default();
        Self {
            method: Method::default(),
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }
}

impl SolverSettings {
    /// Solver configuration for `descent_core`
    pub fn solver_config(&self) -> SolverConfig<f64> {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Test matrix settings (`[matrix]` table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatrixSettings {
    /// Matrix dimension
    pub size: usize,
    /// Offset of the outer band
    pub bandwidth: usize,
}

impl Default for MatrixSettings {
    fn default() -> Self {
        Self {
            size: 15,
            bandwidth: 6,
        }
    }
}

/// Complete CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Solver settings
    pub solver: SolverSettings,
    /// Test matrix settings
    pub matrix: MatrixSettings,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_method<'de, D>(deserializer: D) -> Result<Method, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Method::from_str(&s).map_err(serde::de::Error::custom)
}

/// Command line overrides; `None` keeps the lower-priority value
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub method: Option<Method>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub size: Option<usize>,
    pub bandwidth: Option<usize>,
    pub verbose: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::FileError(e.to_string()))
    }

    /// Apply `DESCENT_*` overrides from a variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("DESCENT_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(method) = lookup("DESCENT_METHOD") {
            self.solver.method = Method::from_str(&method)
                .map_err(|e| ConfigError::EnvError(format!("DESCENT_METHOD: {}", e)))?;
        }
        if let Some(tolerance) = lookup("DESCENT_TOLERANCE") {
            self.solver.tolerance = parse_env("DESCENT_TOLERANCE", &tolerance)?;
        }
        if let Some(max_iterations) = lookup("DESCENT_MAX_ITERATIONS") {
            self.solver.max_iterations = parse_env("DESCENT_MAX_ITERATIONS", &max_iterations)?;
        }
        if let Some(size) = lookup("DESCENT_MATRIX_SIZE") {
            self.matrix.size = parse_env("DESCENT_MATRIX_SIZE", &size)?;
        }
        if let Some(bandwidth) = lookup("DESCENT_BANDWIDTH") {
            self.matrix.bandwidth = parse_env("DESCENT_BANDWIDTH", &bandwidth)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(method) = cli.method {
            self.solver.method = method;
        }
        if let Some(tolerance) = cli.tolerance {
            self.solver.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.solver.max_iterations = max_iterations;
        }
        if let Some(size) = cli.size {
            self.matrix.size = size;
        }
        if let Some(bandwidth) = cli.bandwidth {
            self.matrix.bandwidth = bandwidth;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver
            .solver_config()
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                field: "solver.tolerance".to_string(),
                message: e.to_string(),
            })?;
        if self.matrix.size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "matrix.size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}: cannot parse '{}'", name, value)))
}

/// Build configuration from all sources
///
/// An explicit `config_file` must exist; otherwise `descent.toml` in the
/// working directory is used when present.
pub fn build_config(
    config_file: Option<&Path>,
    cli: &CliOverrides,
) -> Result<CliConfig, ConfigError> {
    let mut config = match config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(&default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(|name| std::env::var(name).ok())?;
    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.solver.method, Method::ConjugateGradient);
        assert!((config.solver.tolerance - 1e-5).abs() < 1e-15);
        assert_eq!(config.solver.max_iterations, 200);
        assert_eq!(config.matrix.size, 15);
        assert_eq!(config.matrix.bandwidth, 6);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Info), "info");
        assert_eq!(format!("{}", LogLevel::Error), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"

            [solver]
            method = "gd"
            tolerance = 1e-8
            max_iterations = 500

            [matrix]
            size = 30
            bandwidth = 4
        "#;

        let config = CliConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.solver.method, Method::GradientDescent);
        assert!((config.solver.tolerance - 1e-8).abs() < 1e-20);
        assert_eq!(config.solver.max_iterations, 500);
        assert_eq!(config.matrix, MatrixSettings { size: 30, bandwidth: 4 });
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config = CliConfig::from_toml("[solver]\nmax_iterations = 50\n").unwrap();
        assert_eq!(config.solver.max_iterations, 50);
        assert_eq!(config.solver.method, Method::ConjugateGradient);
        assert_eq!(config.matrix, MatrixSettings::default());
    }

    #[test]
    fn test_toml_invalid_method() {
        let result = CliConfig::from_toml("[solver]\nmethod = \"jacobi\"\n");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DESCENT_METHOD", "gradient-descent"),
            ("DESCENT_TOLERANCE", "1e-7"),
            ("DESCENT_MAX_ITERATIONS", "1000"),
            ("DESCENT_MATRIX_SIZE", "20"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_env(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.solver.method, Method::GradientDescent);
        assert!((config.solver.tolerance - 1e-7).abs() < 1e-20);
        assert_eq!(config.solver.max_iterations, 1000);
        assert_eq!(config.matrix.size, 20);
        assert_eq!(config.matrix.bandwidth, 6);
    }

    #[test]
    fn test_env_parse_error() {
        let mut config = CliConfig::default();
        let result = config.apply_env(|name| {
            (name == "DESCENT_MAX_ITERATIONS").then(|| "many".to_string())
        });
        match result {
            Err(ConfigError::EnvError(msg)) => assert!(msg.contains("DESCENT_MAX_ITERATIONS")),
            other => panic!("Expected EnvError, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_merge() {
        let mut config = CliConfig::default();
        let cli = CliOverrides {
            method: Some(Method::GradientDescent),
            tolerance: Some(1e-9),
            max_iterations: Some(0),
            size: Some(5),
            bandwidth: None,
            verbose: true,
        };

        config.merge_with_cli(&cli);

        assert_eq!(config.solver.method, Method::GradientDescent);
        assert_eq!(config.solver.max_iterations, 0);
        assert_eq!(config.matrix.size, 5);
        assert_eq!(config.matrix.bandwidth, 6);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_validate() {
        let mut config = CliConfig::default();
        assert!(config.validate().is_ok());

        config.solver.tolerance = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.solver.tolerance = 1e-5;
        config.matrix.size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = build_config(
            Some(Path::new("/nonexistent/descent.toml")),
            &CliOverrides::default(),
        );
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_solver_config_conversion() {
        let settings = SolverSettings {
            method: Method::ConjugateGradient,
            tolerance: 1e-6,
            max_iterations: 42,
        };
        assert_eq!(settings.solver_config(), SolverConfig::new(1e-6, 42));
    }
}
