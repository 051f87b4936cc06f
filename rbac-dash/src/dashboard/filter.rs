// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::dashboard::types::{Role, User};

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn user_matches(user: &User, term: &str) -> bool {
    contains_ignore_case(&user.name, term) || contains_ignore_case(&user.email, term)
}

pub fn role_matches(role: &Role, term: &str) -> bool {
    contains_ignore_case(&role.name, term)
}

pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users.iter().filter(|user| user_matches(user, term)).collect()
}

pub fn filter_roles<'a>(roles: &'a [Role], term: &str) -> Vec<&'a Role> {
    roles.iter().filter(|role| role_matches(role, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::seed;

    #[test]
    fn empty_term_is_identity() {
        let users = seed::seed_users();
        let filtered = filter_users(&users, "");
        let ids: Vec<_> = filtered.iter().map(|user| user.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn user_search_ignores_case() {
        let users = seed::seed_users();
        let filtered = filter_users(&users, "JOHN");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "John Doe");
    }

    #[test]
    fn user_search_matches_email() {
        let users = seed::seed_users();
        let filtered = filter_users(&users, "bob@");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn role_search_only_looks_at_name() {
        let roles = seed::seed_roles();
        assert_eq!(filter_roles(&roles, "EDIT").len(), 1);
        // "view_user" is a permission of several roles but not part of any name
        assert!(filter_roles(&roles, "view_user").is_empty());
    }

    #[test]
    fn non_ascii_terms_fold_case() {
        assert!(contains_ignore_case("Ärztin", "ärz"));
        assert!(!contains_ignore_case("Ärztin", "arz"));
    }
}
