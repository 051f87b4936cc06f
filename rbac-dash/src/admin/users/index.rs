// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::users::edit::UserDraftView;
use crate::dashboard::{DashboardState, EntityId, UserStatus};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: &'static str,
    pub status_variant: &'static str,
    pub draft: Option<UserDraftView>,
}

pub fn status_variant(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => "success",
        UserStatus::Inactive => "destructive",
    }
}

/// Rows for the users table, filtered by the current search term. The row
/// whose id matches the edit slot carries the draft instead of display values.
pub fn user_rows(state: &DashboardState) -> Vec<UserRow> {
    let draft = state.editing_user().draft();
    state
        .filtered_users()
        .into_iter()
        .map(|user| UserRow {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            status: user.status.as_str(),
            status_variant: status_variant(user.status),
            draft: draft
                .filter(|draft| draft.id == user.id)
                .map(|draft| UserDraftView::new(draft, state.roles())),
        })
        .collect()
}
