// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::dashboard::state::{Action, DashboardState, reduce};
use std::fmt;
use std::sync::RwLock;

#[derive(Debug)]
pub struct StoreError {
    message: String,
}

impl StoreError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

/// Holds the current dashboard snapshot. Actions are applied one batch at a
/// time under the write lock, so readers never observe a half-applied batch.
pub struct DashboardStore {
    state: RwLock<DashboardState>,
}

impl DashboardStore {
    pub fn new(initial: DashboardState) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }

    pub fn snapshot(&self) -> Result<DashboardState, StoreError> {
        self.state
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| StoreError::new("Dashboard store lock poisoned"))
    }

    pub fn dispatch(&self, action: Action) -> Result<DashboardState, StoreError> {
        self.dispatch_all(vec![action])
    }

    pub fn dispatch_all(&self, actions: Vec<Action>) -> Result<DashboardState, StoreError> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| StoreError::new("Dashboard store lock poisoned"))?;
        let mut next = guard.clone();
        for action in actions {
            let name = action.name();
            let touches_collections = action.touches_collections();
            next = reduce(next, action);
            if touches_collections {
                log::info!(
                    "Dashboard action {} applied ({} users, {} roles)",
                    name,
                    next.users().len(),
                    next.roles().len()
                );
            } else {
                log::debug!("Dashboard action {} applied", name);
            }
        }
        *guard = next.clone();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::edit::UserDraftChange;
    use crate::dashboard::types::Tab;

    #[test]
    fn dispatch_returns_and_stores_next_state() {
        let store = DashboardStore::new(DashboardState::seeded());
        let returned = store.dispatch(Action::AddRole).expect("dispatch");
        let stored = store.snapshot().expect("snapshot");
        assert_eq!(returned, stored);
        assert_eq!(stored.roles().len(), 4);
    }

    #[test]
    fn dispatch_all_applies_in_order() {
        let store = DashboardStore::new(DashboardState::seeded());
        store
            .dispatch_all(vec![
                Action::BeginUserEdit(3),
                Action::ChangeUserDraft(3, UserDraftChange::Name("Robert Wilson".to_string())),
                Action::CommitUserEdit(3),
                Action::SelectTab(Tab::Roles),
            ])
            .expect("dispatch batch");

        let state = store.snapshot().expect("snapshot");
        assert_eq!(state.user(3).map(|u| u.name.as_str()), Some("Robert Wilson"));
        assert!(state.editing_user().is_idle());
        assert_eq!(state.selected_tab(), Tab::Roles);
    }

    #[test]
    fn snapshots_are_detached_copies() {
        let store = DashboardStore::new(DashboardState::seeded());
        let before = store.snapshot().expect("snapshot");
        store.dispatch(Action::DeleteUser(1)).expect("dispatch");
        assert_eq!(before.users().len(), 3);
        assert_eq!(store.snapshot().expect("snapshot").users().len(), 2);
    }
}
