// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::dashboard::permissions::{self, AVAILABLE_PERMISSIONS};
use crate::dashboard::{DashboardState, EntityId, Role};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PermissionBadge {
    pub permission: &'static str,
    pub label: String,
    pub granted: bool,
    pub variant: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleCard {
    pub id: EntityId,
    pub name: String,
    pub draft_name: Option<String>,
    pub badges: Vec<PermissionBadge>,
}

/// Badges always reflect the committed role, one per available permission.
pub fn permission_badges(role: &Role) -> Vec<PermissionBadge> {
    AVAILABLE_PERMISSIONS
        .into_iter()
        .map(|permission| {
            let granted = role.has_permission(permission);
            PermissionBadge {
                permission,
                label: permissions::label(permission),
                granted,
                variant: if granted { "default" } else { "outline" },
            }
        })
        .collect()
}

pub fn role_cards(state: &DashboardState) -> Vec<RoleCard> {
    let draft = state.editing_role().draft();
    state
        .filtered_roles()
        .into_iter()
        .map(|role| RoleCard {
            id: role.id,
            name: role.name.clone(),
            draft_name: draft
                .filter(|draft| draft.id == role.id)
                .map(|draft| draft.name.clone()),
            badges: permission_badges(role),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_cover_every_available_permission() {
        let state = DashboardState::seeded();
        let cards = role_cards(&state);
        assert_eq!(cards.len(), 3);

        let viewer = &cards[2];
        assert_eq!(viewer.badges.len(), AVAILABLE_PERMISSIONS.len());
        let granted: Vec<_> = viewer
            .badges
            .iter()
            .filter(|badge| badge.granted)
            .map(|badge| badge.permission)
            .collect();
        assert_eq!(granted, vec!["view_user"]);
        assert_eq!(viewer.badges[0].label, "create user");
        assert_eq!(viewer.badges[0].variant, "outline");
    }

    #[test]
    fn only_edited_card_carries_draft_name() {
        let state = DashboardState::seeded().begin_role_edit(1);
        let cards = role_cards(&state);
        assert_eq!(cards[0].draft_name.as_deref(), Some("admin"));
        assert!(cards[1].draft_name.is_none());
    }
}
