// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::dashboard::permissions::{CREATE_USER, DELETE_USER, EDIT_USER, MANAGE_ROLES, VIEW_USER};
use crate::dashboard::types::{Role, User, UserStatus};

fn user(id: u64, name: &str, email: &str, role: &str, status: UserStatus) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status,
    }
}

fn role(id: u64, name: &str, permissions: &[&str]) -> Role {
    Role {
        id,
        name: name.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        user(1, "John Doe", "john@example.com", "admin", UserStatus::Active),
        user(2, "Jane Smith", "jane@example.com", "editor", UserStatus::Active),
        user(3, "Bob Wilson", "bob@example.com", "viewer", UserStatus::Inactive),
    ]
}

pub fn seed_roles() -> Vec<Role> {
    vec![
        role(1, "admin", &[CREATE_USER, EDIT_USER, DELETE_USER, MANAGE_ROLES]),
        role(2, "editor", &[EDIT_USER, VIEW_USER]),
        role(3, "viewer", &[VIEW_USER]),
    ]
}
