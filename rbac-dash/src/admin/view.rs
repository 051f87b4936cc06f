// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! View model for the dashboard page.
//!
//! Everything the template needs is computed here from one state snapshot,
//! so the template itself stays free of logic beyond loops and conditionals.

use crate::admin::roles::index::{RoleCard, role_cards};
use crate::admin::users::index::{UserRow, user_rows};
use crate::dashboard::{AVAILABLE_PERMISSIONS, DashboardState, EditSlot, EntityId, Role, Tab, User};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TabLink {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub selected_tab: &'static str,
    pub tabs: Vec<TabLink>,
    pub add_action: &'static str,
    pub add_label: &'static str,
    pub search_term: String,
    pub users: Vec<UserRow>,
    pub roles: Vec<RoleCard>,
    pub total_users: usize,
    pub total_roles: usize,
}

pub fn build_dashboard_view(state: &DashboardState) -> DashboardView {
    let selected = state.selected_tab();
    DashboardView {
        selected_tab: selected.as_str(),
        tabs: Tab::ALL
            .iter()
            .map(|tab| TabLink {
                value: tab.as_str(),
                label: tab.label(),
                active: *tab == selected,
            })
            .collect(),
        add_action: match selected {
            Tab::Users => "add_user",
            Tab::Roles => "add_role",
        },
        add_label: selected.add_label(),
        search_term: state.search_term().to_string(),
        users: user_rows(state),
        roles: role_cards(state),
        total_users: state.users().len(),
        total_roles: state.roles().len(),
    }
}

/// JSON shape served by the state endpoint.
#[derive(Debug, Serialize)]
pub struct StateSnapshotView<'a> {
    pub users: &'a [User],
    pub roles: &'a [Role],
    pub search_term: &'a str,
    pub selected_tab: Tab,
    pub editing_user: &'a EditSlot<User>,
    pub editing_role: &'a EditSlot<Role>,
    pub filtered_user_ids: Vec<EntityId>,
    pub filtered_role_ids: Vec<EntityId>,
    pub available_permissions: &'static [&'static str],
}

impl<'a> StateSnapshotView<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self {
            users: state.users(),
            roles: state.roles(),
            search_term: state.search_term(),
            selected_tab: state.selected_tab(),
            editing_user: state.editing_user(),
            editing_role: state.editing_role(),
            filtered_user_ids: state.filtered_users().iter().map(|user| user.id).collect(),
            filtered_role_ids: state.filtered_roles().iter().map(|role| role.id).collect(),
            available_permissions: &AVAILABLE_PERMISSIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_button_follows_selected_tab() {
        let view = build_dashboard_view(&DashboardState::seeded());
        assert_eq!(view.add_action, "add_user");
        assert_eq!(view.add_label, "Add User");
        assert!(view.tabs[0].active);

        let view = build_dashboard_view(&DashboardState::seeded().select_tab(Tab::Roles));
        assert_eq!(view.add_action, "add_role");
        assert_eq!(view.add_label, "Add Role");
        assert!(view.tabs[1].active);
    }

    #[test]
    fn totals_ignore_search_filter() {
        let state = DashboardState::seeded().set_search_term("nobody".to_string());
        let view = build_dashboard_view(&state);
        assert!(view.users.is_empty());
        assert!(view.roles.is_empty());
        assert_eq!(view.total_users, 3);
        assert_eq!(view.total_roles, 3);
    }

    #[test]
    fn snapshot_lists_filtered_ids() {
        let state = DashboardState::seeded().set_search_term("example.com".to_string());
        let snapshot = StateSnapshotView::new(&state);
        assert_eq!(snapshot.filtered_user_ids, vec![1, 2, 3]);
        assert!(snapshot.filtered_role_ids.is_empty());

        let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
        assert_eq!(json["selected_tab"], "users");
        assert_eq!(json["editing_user"]["state"], "idle");
        assert_eq!(json["available_permissions"][4], "manage_roles");
    }
}
