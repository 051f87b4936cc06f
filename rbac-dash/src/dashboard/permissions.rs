// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub const CREATE_USER: &str = "create_user";
pub const EDIT_USER: &str = "edit_user";
pub const DELETE_USER: &str = "delete_user";
pub const VIEW_USER: &str = "view_user";
pub const MANAGE_ROLES: &str = "manage_roles";

/// Capabilities offered as toggle badges on every role card.
pub const AVAILABLE_PERMISSIONS: [&str; 5] =
    [CREATE_USER, EDIT_USER, DELETE_USER, VIEW_USER, MANAGE_ROLES];

/// Badge caption: only the first underscore becomes a space.
pub fn label(permission: &str) -> String {
    permission.replacen('_', " ", 1)
}

pub fn toggle(granted: &[String], permission: &str) -> Vec<String> {
    if granted.iter().any(|existing| existing == permission) {
        granted
            .iter()
            .filter(|existing| existing.as_str() != permission)
            .cloned()
            .collect()
    } else {
        let mut next = granted.to_vec();
        next.push(permission.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn label_replaces_first_underscore() {
        assert_eq!(label(CREATE_USER), "create user");
        assert_eq!(label(MANAGE_ROLES), "manage roles");
        assert_eq!(label("a_b_c"), "a b_c");
        assert_eq!(label("plain"), "plain");
    }

    #[test]
    fn toggle_twice_restores_original_set() {
        let original = owned(&[EDIT_USER, VIEW_USER]);
        for permission in AVAILABLE_PERMISSIONS {
            let once = toggle(&original, permission);
            let twice = toggle(&once, permission);
            let mut expected = original.clone();
            let mut actual = twice.clone();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected, "round trip for {}", permission);
        }
    }

    #[test]
    fn toggle_accepts_permissions_outside_the_list() {
        let next = toggle(&[], "export_audit");
        assert_eq!(next, owned(&["export_audit"]));
        assert!(!AVAILABLE_PERMISSIONS.contains(&"export_audit"));
    }

    #[test]
    fn toggle_never_duplicates() {
        let next = toggle(&owned(&[VIEW_USER]), VIEW_USER);
        assert!(next.is_empty());
        let next = toggle(&next, VIEW_USER);
        assert_eq!(next, owned(&[VIEW_USER]));
    }
}
