// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::{roles, users};
use crate::dashboard::{Action, EntityId, Tab};
use serde::Deserialize;
use std::fmt;

/// Fields posted by every dashboard form. Which ones are required depends on `action`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    pub action: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub permission: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub tab: Option<String>,
}

#[derive(Debug)]
pub struct ActionFormError {
    message: String,
}

impl ActionFormError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ActionFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ActionFormError {}

impl ActionForm {
    /// Translates one submitted form into the actions it stands for. Saving a
    /// draft expands into one draft change per submitted field plus the commit.
    pub fn into_actions(self) -> Result<Vec<Action>, ActionFormError> {
        match self.action.as_str() {
            "search" => Ok(vec![Action::SetSearchTerm(self.term.unwrap_or_default())]),
            "select_tab" => {
                let raw = self.tab.as_deref().unwrap_or_default();
                let tab = Tab::parse(raw)
                    .ok_or_else(|| ActionFormError::new(format!("Unknown tab '{}'", raw)))?;
                Ok(vec![Action::SelectTab(tab)])
            }
            action if action.ends_with("_user") => users::edit::user_actions(self),
            action if action.ends_with("_role") || action == "toggle_permission" => {
                roles::edit::role_actions(self)
            }
            other => Err(ActionFormError::new(format!("Unknown action '{}'", other))),
        }
    }

    pub fn required_id(&self) -> Result<EntityId, ActionFormError> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| ActionFormError::new(format!("Action '{}' requires an id", self.action)))?;
        raw.parse::<EntityId>()
            .map_err(|_| ActionFormError::new(format!("Invalid id '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(action: &str) -> ActionForm {
        ActionForm {
            action: action.to_string(),
            ..ActionForm::default()
        }
    }

    #[test]
    fn search_defaults_to_empty_term() {
        let actions = form("search").into_actions().expect("search");
        assert_eq!(actions, vec![Action::SetSearchTerm(String::new())]);
    }

    #[test]
    fn select_tab_requires_known_tab() {
        let mut select = form("select_tab");
        select.tab = Some("roles".to_string());
        assert_eq!(
            select.into_actions().expect("tab"),
            vec![Action::SelectTab(Tab::Roles)]
        );

        let mut select = form("select_tab");
        select.tab = Some("audit".to_string());
        assert!(select.into_actions().is_err());
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = form("drop_tables").into_actions().expect_err("unknown");
        assert!(err.message().contains("drop_tables"));
    }

    #[test]
    fn required_id_rejects_missing_and_garbage() {
        assert!(form("delete_user").required_id().is_err());

        let mut garbage = form("delete_user");
        garbage.id = Some("two".to_string());
        assert!(garbage.required_id().is_err());

        let mut blank = form("delete_user");
        blank.id = Some("  ".to_string());
        assert!(blank.required_id().is_err());

        let mut valid = form("delete_user");
        valid.id = Some(" 2 ".to_string());
        assert_eq!(valid.required_id().expect("id"), 2);
    }
}
