// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::form::{ActionForm, ActionFormError};
use crate::admin::view::SelectOption;
use crate::dashboard::{Action, Role, User, UserDraftChange, UserStatus};
use serde::Serialize;

/// Inline form values for the user row currently being edited.
#[derive(Debug, Clone, Serialize)]
pub struct UserDraftView {
    pub name: String,
    pub email: String,
    pub role_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
}

impl UserDraftView {
    pub fn new(draft: &User, roles: &[Role]) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            role_options: role_options(&draft.role, roles),
            status_options: UserStatus::ALL
                .iter()
                .map(|status| SelectOption {
                    value: status.as_str().to_string(),
                    label: status.label().to_string(),
                    selected: *status == draft.status,
                })
                .collect(),
        }
    }
}

/// One option per role name. A draft whose role no longer names any role
/// keeps its value as the first option so saving does not silently change it.
fn role_options(current: &str, roles: &[Role]) -> Vec<SelectOption> {
    let mut options = Vec::with_capacity(roles.len() + 1);
    if !roles.iter().any(|role| role.name == current) {
        options.push(SelectOption {
            value: current.to_string(),
            label: current.to_string(),
            selected: true,
        });
    }
    options.extend(roles.iter().map(|role| SelectOption {
        value: role.name.clone(),
        label: role.name.clone(),
        selected: role.name == current,
    }));
    options
}

pub fn user_actions(form: ActionForm) -> Result<Vec<Action>, ActionFormError> {
    match form.action.as_str() {
        "add_user" => Ok(vec![Action::AddUser]),
        "edit_user" => Ok(vec![Action::BeginUserEdit(form.required_id()?)]),
        "delete_user" => Ok(vec![Action::DeleteUser(form.required_id()?)]),
        "cancel_user" => Ok(vec![Action::CancelUserEdit]),
        "save_user" => save_user_actions(form),
        other => Err(ActionFormError::new(format!("Unknown action '{}'", other))),
    }
}

/// Every action carries the form's user id, so a save from a page that no
/// longer matches the edit slot changes nothing.
fn save_user_actions(form: ActionForm) -> Result<Vec<Action>, ActionFormError> {
    let id = form.required_id()?;
    let mut actions = Vec::new();
    if let Some(name) = form.name {
        actions.push(Action::ChangeUserDraft(id, UserDraftChange::Name(name)));
    }
    if let Some(email) = form.email {
        actions.push(Action::ChangeUserDraft(id, UserDraftChange::Email(email)));
    }
    if let Some(role) = form.role {
        actions.push(Action::ChangeUserDraft(id, UserDraftChange::Role(role)));
    }
    if let Some(raw) = form.status {
        let status = UserStatus::parse(&raw)
            .ok_or_else(|| ActionFormError::new(format!("Unknown status '{}'", raw)))?;
        actions.push(Action::ChangeUserDraft(id, UserDraftChange::Status(status)));
    }
    actions.push(Action::CommitUserEdit(id));
    Ok(actions)
}
