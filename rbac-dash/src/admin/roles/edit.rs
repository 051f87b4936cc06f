// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::form::{ActionForm, ActionFormError};
use crate::dashboard::{Action, RoleDraftChange};

pub fn role_actions(form: ActionForm) -> Result<Vec<Action>, ActionFormError> {
    match form.action.as_str() {
        "add_role" => Ok(vec![Action::AddRole]),
        "edit_role" => Ok(vec![Action::BeginRoleEdit(form.required_id()?)]),
        "delete_role" => Ok(vec![Action::DeleteRole(form.required_id()?)]),
        "cancel_role" => Ok(vec![Action::CancelRoleEdit]),
        "save_role" => {
            let id = form.required_id()?;
            let mut actions = Vec::new();
            if let Some(name) = form.name {
                actions.push(Action::ChangeRoleDraft(id, RoleDraftChange::Name(name)));
            }
            actions.push(Action::CommitRoleEdit(id));
            Ok(actions)
        }
        "toggle_permission" => {
            let role_id = form.required_id()?;
            let permission = form
                .permission
                .filter(|permission| !permission.trim().is_empty())
                .ok_or_else(|| ActionFormError::new("Action 'toggle_permission' requires a permission"))?;
            Ok(vec![Action::TogglePermission {
                role_id,
                permission,
            }])
        }
        other => Err(ActionFormError::new(format!("Unknown action '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_needs_id_and_permission() {
        let form = ActionForm {
            action: "toggle_permission".to_string(),
            id: Some("3".to_string()),
            permission: Some("edit_user".to_string()),
            ..ActionForm::default()
        };
        assert_eq!(
            role_actions(form).expect("toggle"),
            vec![Action::TogglePermission {
                role_id: 3,
                permission: "edit_user".to_string()
            }]
        );

        let form = ActionForm {
            action: "toggle_permission".to_string(),
            id: Some("3".to_string()),
            ..ActionForm::default()
        };
        assert!(role_actions(form).is_err());
    }

    #[test]
    fn save_without_name_only_commits() {
        let form = ActionForm {
            action: "save_role".to_string(),
            id: Some("4".to_string()),
            ..ActionForm::default()
        };
        assert_eq!(role_actions(form).expect("save"), vec![Action::CommitRoleEdit(4)]);
    }

    #[test]
    fn save_targets_the_posted_role() {
        let form = ActionForm {
            action: "save_role".to_string(),
            id: Some("2".to_string()),
            name: Some("author".to_string()),
            ..ActionForm::default()
        };
        assert_eq!(
            role_actions(form).expect("save"),
            vec![
                Action::ChangeRoleDraft(2, RoleDraftChange::Name("author".to_string())),
                Action::CommitRoleEdit(2),
            ]
        );

        let form = ActionForm {
            action: "save_role".to_string(),
            name: Some("author".to_string()),
            ..ActionForm::default()
        };
        assert!(role_actions(form).is_err());
    }
}
