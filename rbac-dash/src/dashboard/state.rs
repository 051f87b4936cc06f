// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Dashboard state and its reducer.
//!
//! `DashboardState` is a plain value. Every interaction is described by an
//! [`Action`] and applied with [`reduce`], which consumes the current state
//! and returns the next one. The transitions are also exposed as individual
//! methods so each rule can be exercised on its own.

use crate::dashboard::edit::{EditSlot, RoleDraftChange, UserDraftChange};
use crate::dashboard::filter;
use crate::dashboard::ids::IdSequence;
use crate::dashboard::permissions;
use crate::dashboard::seed;
use crate::dashboard::types::{EntityId, Role, Tab, User, UserStatus};
use serde::Serialize;

pub const NEW_USER_NAME: &str = "New User";
pub const NEW_USER_EMAIL: &str = "new@example.com";
pub const NEW_USER_ROLE: &str = "viewer";
pub const NEW_ROLE_NAME: &str = "New Role";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddUser,
    UpdateUser(User),
    DeleteUser(EntityId),
    AddRole,
    UpdateRole(Role),
    DeleteRole(EntityId),
    TogglePermission {
        role_id: EntityId,
        permission: String,
    },
    SetSearchTerm(String),
    SelectTab(Tab),
    SetEditingUser(Option<User>),
    SetEditingRole(Option<Role>),
    BeginUserEdit(EntityId),
    /// Field change aimed at the draft of the given user. Ignored unless that
    /// user is the one in the edit slot.
    ChangeUserDraft(EntityId, UserDraftChange),
    /// Commits the user draft, only if the slot still holds the given user.
    CommitUserEdit(EntityId),
    CancelUserEdit,
    BeginRoleEdit(EntityId),
    ChangeRoleDraft(EntityId, RoleDraftChange),
    CommitRoleEdit(EntityId),
    CancelRoleEdit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddUser => "add_user",
            Action::UpdateUser(_) => "update_user",
            Action::DeleteUser(_) => "delete_user",
            Action::AddRole => "add_role",
            Action::UpdateRole(_) => "update_role",
            Action::DeleteRole(_) => "delete_role",
            Action::TogglePermission { .. } => "toggle_permission",
            Action::SetSearchTerm(_) => "set_search_term",
            Action::SelectTab(_) => "select_tab",
            Action::SetEditingUser(_) => "set_editing_user",
            Action::SetEditingRole(_) => "set_editing_role",
            Action::BeginUserEdit(_) => "begin_user_edit",
            Action::ChangeUserDraft(..) => "change_user_draft",
            Action::CommitUserEdit(_) => "commit_user_edit",
            Action::CancelUserEdit => "cancel_user_edit",
            Action::BeginRoleEdit(_) => "begin_role_edit",
            Action::ChangeRoleDraft(..) => "change_role_draft",
            Action::CommitRoleEdit(_) => "commit_role_edit",
            Action::CancelRoleEdit => "cancel_role_edit",
        }
    }

    /// True for actions that may change the committed `users` or `roles`.
    pub fn touches_collections(&self) -> bool {
        matches!(
            self,
            Action::AddUser
                | Action::UpdateUser(_)
                | Action::DeleteUser(_)
                | Action::AddRole
                | Action::UpdateRole(_)
                | Action::DeleteRole(_)
                | Action::TogglePermission { .. }
                | Action::CommitUserEdit(_)
                | Action::CommitRoleEdit(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    users: Vec<User>,
    roles: Vec<Role>,
    search_term: String,
    selected_tab: Tab,
    editing_user: EditSlot<User>,
    editing_role: EditSlot<Role>,
    #[serde(skip)]
    user_ids: IdSequence,
    #[serde(skip)]
    role_ids: IdSequence,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

pub fn reduce(state: DashboardState, action: Action) -> DashboardState {
    state.apply(action)
}

impl DashboardState {
    /// Builds a state over the given collections. Ids are expected to be
    /// unique per collection; the id sequences start after the largest one.
    pub fn new(users: Vec<User>, roles: Vec<Role>) -> Self {
        let user_ids = IdSequence::starting_after(users.iter().map(|user| user.id));
        let role_ids = IdSequence::starting_after(roles.iter().map(|role| role.id));
        Self {
            users,
            roles,
            search_term: String::new(),
            selected_tab: Tab::default(),
            editing_user: EditSlot::Idle,
            editing_role: EditSlot::Idle,
            user_ids,
            role_ids,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_users(), seed::seed_roles())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub fn editing_user(&self) -> &EditSlot<User> {
        &self.editing_user
    }

    pub fn editing_role(&self) -> &EditSlot<Role> {
        &self.editing_role
    }

    pub fn user(&self, id: EntityId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn role(&self, id: EntityId) -> Option<&Role> {
        self.roles.iter().find(|role| role.id == id)
    }

    /// Id the next added user will get, `None` once the id space is used up.
    pub fn next_user_id(&self) -> Option<EntityId> {
        self.user_ids.peek()
    }

    pub fn next_role_id(&self) -> Option<EntityId> {
        self.role_ids.peek()
    }

    pub fn filtered_users(&self) -> Vec<&User> {
        filter::filter_users(&self.users, &self.search_term)
    }

    pub fn filtered_roles(&self) -> Vec<&Role> {
        filter::filter_roles(&self.roles, &self.search_term)
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::AddUser => self.add_user(),
            Action::UpdateUser(user) => self.update_user(user),
            Action::DeleteUser(id) => self.delete_user(id),
            Action::AddRole => self.add_role(),
            Action::UpdateRole(role) => self.update_role(role),
            Action::DeleteRole(id) => self.delete_role(id),
            Action::TogglePermission {
                role_id,
                permission,
            } => self.toggle_permission(role_id, &permission),
            Action::SetSearchTerm(term) => self.set_search_term(term),
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::SetEditingUser(user) => self.set_editing_user(user),
            Action::SetEditingRole(role) => self.set_editing_role(role),
            Action::BeginUserEdit(id) => self.begin_user_edit(id),
            Action::ChangeUserDraft(id, change) => {
                if self.editing_user.is_editing(id) {
                    self.change_user_draft(change)
                } else {
                    self.ignore_stale_draft("user", id)
                }
            }
            Action::CommitUserEdit(id) => {
                if self.editing_user.is_editing(id) {
                    self.commit_user_edit()
                } else {
                    self.ignore_stale_draft("user", id)
                }
            }
            Action::CancelUserEdit => self.cancel_user_edit(),
            Action::BeginRoleEdit(id) => self.begin_role_edit(id),
            Action::ChangeRoleDraft(id, change) => {
                if self.editing_role.is_editing(id) {
                    self.change_role_draft(change)
                } else {
                    self.ignore_stale_draft("role", id)
                }
            }
            Action::CommitRoleEdit(id) => {
                if self.editing_role.is_editing(id) {
                    self.commit_role_edit()
                } else {
                    self.ignore_stale_draft("role", id)
                }
            }
            Action::CancelRoleEdit => self.cancel_role_edit(),
        }
    }

    fn ignore_stale_draft(self, kind: &str, id: EntityId) -> Self {
        log::debug!("Ignoring draft action for {} {}: not in the edit slot", kind, id);
        self
    }

    pub fn add_user(mut self) -> Self {
        let Some(id) = self.user_ids.allocate() else {
            log::warn!("User ids exhausted, not adding a user");
            return self;
        };
        let user = User {
            id,
            name: NEW_USER_NAME.to_string(),
            email: NEW_USER_EMAIL.to_string(),
            role: NEW_USER_ROLE.to_string(),
            status: UserStatus::Active,
        };
        self.editing_user = EditSlot::begin(&user);
        self.users.push(user);
        self
    }

    pub fn update_user(mut self, updated: User) -> Self {
        if let Some(existing) = self.users.iter_mut().find(|user| user.id == updated.id) {
            *existing = updated;
        }
        self.editing_user = EditSlot::Idle;
        self
    }

    pub fn delete_user(mut self, id: EntityId) -> Self {
        self.users.retain(|user| user.id != id);
        if self.editing_user.is_editing(id) {
            self.editing_user = EditSlot::Idle;
        }
        self
    }

    pub fn add_role(mut self) -> Self {
        let Some(id) = self.role_ids.allocate() else {
            log::warn!("Role ids exhausted, not adding a role");
            return self;
        };
        let role = Role {
            id,
            name: NEW_ROLE_NAME.to_string(),
            permissions: Vec::new(),
        };
        self.editing_role = EditSlot::begin(&role);
        self.roles.push(role);
        self
    }

    pub fn update_role(mut self, updated: Role) -> Self {
        self.replace_role(updated);
        self.editing_role = EditSlot::Idle;
        self
    }

    pub fn delete_role(mut self, id: EntityId) -> Self {
        self.roles.retain(|role| role.id != id);
        if self.editing_role.is_editing(id) {
            self.editing_role = EditSlot::Idle;
        }
        self
    }

    /// Flips one permission on a committed role. The role draft, if it is the
    /// same role, gets the same flip; the edit slot itself is left alone.
    pub fn toggle_permission(mut self, role_id: EntityId, permission: &str) -> Self {
        let Some(toggled) = self
            .role(role_id)
            .map(|role| role.with_permission_toggled(permission))
        else {
            return self;
        };
        self.replace_role(toggled);
        if let Some(draft) = self.editing_role.draft_mut()
            && draft.id == role_id
        {
            draft.permissions = permissions::toggle(&draft.permissions, permission);
        }
        self
    }

    pub fn set_search_term(mut self, term: String) -> Self {
        self.search_term = term;
        self
    }

    pub fn select_tab(mut self, tab: Tab) -> Self {
        self.selected_tab = tab;
        self
    }

    pub fn set_editing_user(mut self, user: Option<User>) -> Self {
        self.editing_user = EditSlot::from_option(user);
        self
    }

    pub fn set_editing_role(mut self, role: Option<Role>) -> Self {
        self.editing_role = EditSlot::from_option(role);
        self
    }

    pub fn begin_user_edit(mut self, id: EntityId) -> Self {
        if let Some(user) = self.user(id) {
            self.editing_user = EditSlot::begin(user);
        }
        self
    }

    pub fn change_user_draft(mut self, change: UserDraftChange) -> Self {
        if let Some(draft) = self.editing_user.draft_mut() {
            change.apply(draft);
        }
        self
    }

    pub fn commit_user_edit(mut self) -> Self {
        match std::mem::take(&mut self.editing_user).into_draft() {
            Some(draft) => self.update_user(draft),
            None => self,
        }
    }

    pub fn cancel_user_edit(mut self) -> Self {
        self.editing_user = EditSlot::Idle;
        self
    }

    pub fn begin_role_edit(mut self, id: EntityId) -> Self {
        if let Some(role) = self.role(id) {
            self.editing_role = EditSlot::begin(role);
        }
        self
    }

    pub fn change_role_draft(mut self, change: RoleDraftChange) -> Self {
        if let Some(draft) = self.editing_role.draft_mut() {
            change.apply(draft);
        }
        self
    }

    pub fn commit_role_edit(mut self) -> Self {
        match std::mem::take(&mut self.editing_role).into_draft() {
            Some(draft) => self.update_role(draft),
            None => self,
        }
    }

    pub fn cancel_role_edit(mut self) -> Self {
        self.editing_role = EditSlot::Idle;
        self
    }

    fn replace_role(&mut self, updated: Role) {
        if let Some(existing) = self.roles.iter_mut().find(|role| role.id == updated.id) {
            *existing = updated;
        }
    }
}
