// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::dashboard::permissions;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type EntityId = u64;

/// Anything that lives in a dashboard collection keyed by id.
pub trait Entity: Clone {
    fn id(&self) -> EntityId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

impl Entity for User {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Role {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|granted| granted == permission)
    }

    /// Returns a copy with `permission` removed when granted, appended otherwise.
    pub fn with_permission_toggled(&self, permission: &str) -> Role {
        Role {
            permissions: permissions::toggle(&self.permissions, permission),
            ..self.clone()
        }
    }
}

impl Entity for Role {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Users,
    Roles,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Users, Tab::Roles];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Users => "users",
            Tab::Roles => "roles",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Users => "Users",
            Tab::Roles => "Roles",
        }
    }

    /// Caption of the add button shown while this tab is active.
    pub fn add_label(&self) -> &'static str {
        match self {
            Tab::Users => "Add User",
            Tab::Roles => "Add Role",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "users" => Some(Tab::Users),
            "roles" => Some(Tab::Roles),
            _ => None,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
