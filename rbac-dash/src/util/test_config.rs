// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use crate::config::{
    AdminConfig, AppConfig, ConfigSource, LoggingConfig, SeedConfig, ServerConfig,
    ValidatedConfig,
};
use crate::dashboard::{Role, User};

#[derive(Debug, Clone)]
pub struct TestConfigBuilder {
    config: ValidatedConfig,
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatedConfig {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 5466,
                    workers: 1,
                },
                admin: AdminConfig {
                    path: "/admin".to_string(),
                },
                app: AppConfig {
                    name: "Test App".to_string(),
                    description: "Test Description".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                },
                seed: SeedConfig::default(),
                source: ConfigSource::Defaults,
            },
        }
    }

    pub fn with_admin_path(mut self, path: &str) -> Self {
        self.config.admin.path = path.to_string();
        self
    }

    pub fn with_app_name(mut self, name: &str) -> Self {
        self.config.app.name = name.to_string();
        self
    }

    pub fn with_seed(mut self, users: Vec<User>, roles: Vec<Role>) -> Self {
        self.config.seed = SeedConfig { users, roles };
        self
    }

    pub fn build(self) -> ValidatedConfig {
        self.config
    }
}
