// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::dashboard::seed;
use crate::dashboard::{DashboardState, EntityId, Role, User};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.yaml";
const MAX_WORKERS: usize = 64;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    pub seed: Option<SeedConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub server: ServerConfig,
    pub admin: AdminConfig,
    pub app: AppConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
    pub source: ConfigSource,
}

impl ValidatedConfig {
    /// Fresh dashboard state built from the configured seed data.
    pub fn initial_state(&self) -> DashboardState {
        DashboardState::new(self.seed.users.clone(), self.seed.roles.clone())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl ServerConfig {
    pub fn address_tuple(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    1
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AdminConfig {
    #[serde(default = "default_admin_path")]
    pub path: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            path: default_admin_path(),
        }
    }
}

fn default_admin_path() -> String {
    "/admin".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_app_description")]
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            description: default_app_description(),
        }
    }
}

fn default_app_name() -> String {
    "RBAC Admin Dashboard".to_string()
}

fn default_app_description() -> String {
    "Users, roles and permissions".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> LevelFilter {
        match self.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Initial collections. Both lists replace the built-in seed data when given.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SeedConfig {
    #[serde(default = "seed::seed_users")]
    pub users: Vec<User>,
    #[serde(default = "seed::seed_roles")]
    pub roles: Vec<Role>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: seed::seed_users(),
            roles: seed::seed_roles(),
        }
    }
}

impl Config {
    /// Reads `config.yaml` from `root`. A missing or empty file yields the defaults.
    pub fn load(root: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok((Config::default(), ConfigSource::Defaults));
        }
        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        if config_content.trim().is_empty() {
            return Ok((Config::default(), ConfigSource::File(config_path)));
        }
        let config: Config = serde_yaml::from_str(&config_content).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to parse config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;
        Ok((config, ConfigSource::File(config_path)))
    }

    /// Loads and validates configuration at startup. If validation fails, the application should not start.
    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let (config, source) = Self::load(root)?;
        config.validate(source)
    }

    pub fn validate(self, source: ConfigSource) -> Result<ValidatedConfig, ConfigError> {
        Self::validate_server(&self.server)?;
        Self::validate_admin(&self.admin)?;
        Self::validate_logging(&self.logging)?;
        let seed = self.seed.unwrap_or_default();
        Self::validate_seed(&seed)?;

        Ok(ValidatedConfig {
            server: self.server,
            admin: self.admin,
            app: self.app,
            logging: self.logging,
            seed,
            source,
        })
    }

    fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
        if server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Server host must not be empty".to_string(),
            ));
        }
        if server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be between 1 and 65535".to_string(),
            ));
        }
        if !(1..=MAX_WORKERS).contains(&server.workers) {
            return Err(ConfigError::ValidationError(format!(
                "Server workers must be between 1 and {}, got: {}",
                MAX_WORKERS, server.workers
            )));
        }
        Ok(())
    }

    fn validate_admin(admin: &AdminConfig) -> Result<(), ConfigError> {
        let path = admin.path.as_str();
        if !path.starts_with('/') || path.len() < 2 || path.ends_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "Admin path must start with '/', must not end with '/' and must not be the site root, got: '{}'",
                path
            )));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "Admin path must not contain whitespace, got: '{}'",
                path
            )));
        }
        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let level = logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Logging level must be one of {}, got: '{}'",
                LOG_LEVELS.join(", "),
                logging.level
            )));
        }
        Ok(())
    }

    fn validate_seed(seed: &SeedConfig) -> Result<(), ConfigError> {
        let mut user_ids = HashSet::new();
        for user in &seed.users {
            Self::validate_seed_id("user", user.id)?;
            if !user_ids.insert(user.id) {
                return Err(ConfigError::ValidationError(format!(
                    "Seed users contain duplicate id {}",
                    user.id
                )));
            }
        }

        let mut role_ids = HashSet::new();
        for role in &seed.roles {
            Self::validate_seed_id("role", role.id)?;
            if !role_ids.insert(role.id) {
                return Err(ConfigError::ValidationError(format!(
                    "Seed roles contain duplicate id {}",
                    role.id
                )));
            }
            let mut granted = HashSet::new();
            for permission in &role.permissions {
                if !granted.insert(permission.as_str()) {
                    return Err(ConfigError::ValidationError(format!(
                        "Seed role '{}' lists permission '{}' more than once",
                        role.name, permission
                    )));
                }
            }
        }
        Ok(())
    }

    /// The largest id would leave no room for the next added entity.
    fn validate_seed_id(kind: &str, id: EntityId) -> Result<(), ConfigError> {
        if id == EntityId::MAX {
            return Err(ConfigError::ValidationError(format!(
                "Seed {} id must be below {}",
                kind,
                EntityId::MAX
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::UserStatus;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(CONFIG_FILE_NAME), content).expect("write config");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = Config::load_and_validate(temp.path()).expect("defaults");
        assert_eq!(config.source, ConfigSource::Defaults);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.admin.path, "/admin");
        assert_eq!(config.seed.users.len(), 3);
        assert_eq!(config.seed.roles.len(), 3);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_config(temp.path(), "\n");
        let config = Config::load_and_validate(temp.path()).expect("defaults");
        assert!(matches!(config.source, ConfigSource::File(_)));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_config(
            temp.path(),
            "server:\n  port: 9191\nadmin:\n  path: /rbac\nlogging:\n  level: debug\n",
        );
        let config = Config::load_and_validate(temp.path()).expect("valid config");
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.admin.path, "/rbac");
        assert_eq!(config.logging.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn seed_section_replaces_builtin_data() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_config(
            temp.path(),
            r#"
seed:
  users:
    - id: 10
      name: Grace Hopper
      email: grace@example.com
      role: auditor
      status: inactive
  roles:
    - id: 4
      name: auditor
      permissions: [view_user]
"#,
        );
        let config = Config::load_and_validate(temp.path()).expect("valid seed");
        let state = config.initial_state();
        assert_eq!(state.users().len(), 1);
        assert_eq!(state.users()[0].status, UserStatus::Inactive);
        assert_eq!(state.next_user_id(), Some(11));
        assert_eq!(state.next_role_id(), Some(5));
    }

    #[test]
    fn unparsable_file_is_load_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_config(temp.path(), "server: [not, a, mapping\n");
        let err = Config::load_and_validate(temp.path()).expect_err("parse failure");
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn rejects_duplicate_seed_ids() {
        let mut seed = SeedConfig::default();
        seed.users[1].id = 1;
        let err = Config::validate_seed(&seed).expect_err("duplicate user id");
        assert!(err.to_string().contains("duplicate id 1"));
    }

    #[test]
    fn rejects_seed_ids_at_top_of_id_space() {
        let mut seed = SeedConfig::default();
        seed.users[0].id = EntityId::MAX;
        let err = Config::validate_seed(&seed).expect_err("user id at max");
        assert!(err.to_string().contains("Seed user id must be below"));

        let mut seed = SeedConfig::default();
        seed.roles[0].id = EntityId::MAX;
        assert!(Config::validate_seed(&seed).is_err());

        let mut seed = SeedConfig::default();
        seed.roles[0].id = EntityId::MAX - 1;
        assert!(Config::validate_seed(&seed).is_ok());
    }

    #[test]
    fn rejects_duplicate_permissions_in_seed_role() {
        let mut seed = SeedConfig::default();
        seed.roles[2].permissions.push("view_user".to_string());
        assert!(Config::validate_seed(&seed).is_err());
    }

    #[test]
    fn rejects_bad_admin_paths() {
        for path in ["admin", "/", "/admin/", "/ad min"] {
            let admin = AdminConfig {
                path: path.to_string(),
            };
            assert!(Config::validate_admin(&admin).is_err(), "path {:?}", path);
        }
        assert!(Config::validate_admin(&AdminConfig::default()).is_ok());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let logging = LoggingConfig {
            level: "verbose".to_string(),
        };
        assert!(Config::validate_logging(&logging).is_err());
        let logging = LoggingConfig {
            level: "WARN".to_string(),
        };
        assert!(Config::validate_logging(&logging).is_ok());
    }

    #[test]
    fn rejects_zero_port_and_worker_bounds() {
        let mut server = ServerConfig::default();
        server.port = 0;
        assert!(Config::validate_server(&server).is_err());

        let mut server = ServerConfig::default();
        server.workers = 0;
        assert!(Config::validate_server(&server).is_err());
        server.workers = MAX_WORKERS + 1;
        assert!(Config::validate_server(&server).is_err());
    }
}
