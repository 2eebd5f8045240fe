//! Configuration structures for the visitor pass manager
//!
//! This module contains the front desk configuration structure, the command
//! line arguments that override it, and the validation logic.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Token shape constants
pub mod tokens {
    /// Length of a generated visitor ID
    pub const VISITOR_ID_LENGTH: usize = 8;

    /// Fixed prefix of every ePass
    pub const EPASS_PREFIX: &str = "EPASS-";

    /// Length of the random part of an ePass
    pub const EPASS_SUFFIX_LENGTH: usize = 5;
}

/// Default number of pre-approvals each employee may hold
pub const DEFAULT_PRE_APPROVAL_LIMIT: u32 = 5;

/// Identity of a staff member given as `ID:NAME` on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffSeed {
    /// Staff identifier, e.g. `E001`
    pub id: String,
    /// Display name, also the lookup key for employees
    pub name: String,
}

impl StaffSeed {
    /// Create a staff seed
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

impl fmt::Display for StaffSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.name)
    }
}

impl FromStr for StaffSeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, name) = s
            .split_once(':')
            .ok_or_else(|| format!("Expected ID:NAME, got '{}'", s))?;
        let (id, name) = (id.trim(), name.trim());
        if id.is_empty() || name.is_empty() {
            return Err(format!("Expected ID:NAME with both parts present, got '{}'", s));
        }
        Ok(Self::new(id, name))
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "visitor-pass-manager",
    version = "0.1.0",
    about = "Visitor Pass Manager - Front desk console for visitor registration and ePasses",
    long_about = "Registers visitors against a known employee, issues ePasses, records check-in and check-out times, and hands out pre-approval tokens. All state lives in memory for a single run.

EXAMPLES:
    # Run with the default roster (employee E001 Alice)
    visitor-pass-manager

    # Use a configuration file
    visitor-pass-manager --config desk.json

    # Replace the roster and lower the pre-approval limit
    visitor-pass-manager --employee E001:Alice --employee E002:Bob --pre-approval-limit 3

    # Generate configuration template
    visitor-pass-manager --print-config > desk.json

    # Validate configuration without opening the desk
    visitor-pass-manager --config desk.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Maximum pre-approvals per employee
    #[arg(
        long,
        help = "Maximum pre-approvals per employee",
        long_help = "Number of pre-approval tokens each employee may request during a run. Default: 5"
    )]
    pub pre_approval_limit: Option<u32>,

    /// Employees known to the desk (replaces the configured roster)
    #[arg(
        long = "employee",
        value_name = "ID:NAME",
        help = "Employee known to the desk (repeatable)",
        long_help = "Employee known to the desk, given as ID:NAME. May be repeated. When present, replaces the roster from the configuration file."
    )]
    pub employees: Vec<StaffSeed>,

    /// Security officer on duty
    #[arg(long, value_name = "ID:NAME", help = "Security officer on duty")]
    pub security_officer: Option<StaffSeed>,

    /// Administrator who sets the pre-approval limit
    #[arg(long, value_name = "ID:NAME", help = "Administrator identity")]
    pub admin: Option<StaffSeed>,

    /// Random seed for reproducible tokens
    #[arg(long, help = "Random seed for reproducible visitor IDs and ePasses")]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, value_name = "DIR", help = "Directory for rolling log files")]
    pub log_dir: Option<String>,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Dry run mode - validate configuration without opening the desk
    #[arg(long, help = "Validate configuration without opening the desk")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Maximum pre-approvals per employee
    pub pre_approval_limit: Option<u32>,

    /// Employees known to the desk
    pub employees: Option<Vec<StaffSeed>>,

    /// Security officer on duty
    pub security_officer: Option<StaffSeed>,

    /// Administrator identity
    pub admin: Option<StaffSeed>,

    /// Random seed for reproducible tokens
    pub seed: Option<u64>,
}

/// Configuration for the front desk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maximum pre-approvals per employee
    pub pre_approval_limit: u32,

    /// Employees known to the desk
    pub employees: Vec<StaffSeed>,

    /// Security officer on duty
    pub security_officer: StaffSeed,

    /// Administrator identity
    pub admin: StaffSeed,

    /// Random seed for reproducible tokens
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the front desk configuration
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// No employee configured, so no visitor could ever be registered
    #[error("At least one employee must be configured")]
    NoEmployees,

    /// A staff entry has an empty ID
    #[error("Empty ID for {role} '{name}'")]
    EmptyId {
        /// Role of the offending entry
        role: String,
        /// Name of the offending entry
        name: String,
    },

    /// A staff entry has an empty name
    #[error("Empty name for {role} with ID '{id}'")]
    EmptyName {
        /// Role of the offending entry
        role: String,
        /// ID of the offending entry
        id: String,
    },

    /// Two employees share a name (names are lookup keys)
    #[error("Duplicate employee name: {0}")]
    DuplicateEmployeeName(String),

    /// Two employees share an ID (IDs key pre-approval counts)
    #[error("Duplicate employee ID: {0}")]
    DuplicateEmployeeId(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pre_approval_limit: DEFAULT_PRE_APPROVAL_LIMIT,
            employees: vec![StaffSeed::new("E001", "Alice")],
            security_officer: StaffSeed::new("S001", "Security"),
            admin: StaffSeed::new("A001", "Admin"),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            pre_approval_limit: config_file
                .pre_approval_limit
                .unwrap_or(defaults.pre_approval_limit),
            employees: config_file.employees.unwrap_or(defaults.employees),
            security_officer: config_file.security_officer.unwrap_or(defaults.security_officer),
            admin: config_file.admin.unwrap_or(defaults.admin),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.pre_approval_limit {
            config.pre_approval_limit = value;
        }
        if !args.employees.is_empty() {
            config.employees = args.employees;
        }
        if let Some(value) = args.security_officer {
            config.security_officer = value;
        }
        if let Some(value) = args.admin {
            config.admin = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.employees.is_empty() {
            return Err(ConfigValidationError::NoEmployees);
        }

        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for employee in &self.employees {
            Self::validate_staff("employee", employee)?;
            if !names.insert(employee.name.as_str()) {
                return Err(ConfigValidationError::DuplicateEmployeeName(employee.name.clone()));
            }
            if !ids.insert(employee.id.as_str()) {
                return Err(ConfigValidationError::DuplicateEmployeeId(employee.id.clone()));
            }
        }

        Self::validate_staff("security officer", &self.security_officer)?;
        Self::validate_staff("admin", &self.admin)?;

        Ok(())
    }

    fn validate_staff(role: &str, seed: &StaffSeed) -> Result<(), ConfigValidationError> {
        if seed.id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyId {
                role: role.to_string(),
                name: seed.name.clone(),
            });
        }
        if seed.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyName {
                role: role.to_string(),
                id: seed.id.clone(),
            });
        }
        Ok(())
    }
}
