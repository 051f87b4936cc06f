// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Inline-edit slots.
//!
//! Each entity kind owns exactly one slot. A slot is either `Idle` or holds a
//! draft: a detached copy of one row that collects field changes until it is
//! committed back into the collection or discarded. Beginning a new edit
//! replaces whatever draft the slot held before.

use crate::dashboard::types::{Entity, EntityId, Role, User, UserStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "draft", rename_all = "lowercase")]
pub enum EditSlot<T> {
    Idle,
    Editing(T),
}

impl<T> Default for EditSlot<T> {
    fn default() -> Self {
        EditSlot::Idle
    }
}

impl<T: Entity> EditSlot<T> {
    pub fn begin(entity: &T) -> Self {
        EditSlot::Editing(entity.clone())
    }

    pub fn from_option(draft: Option<T>) -> Self {
        match draft {
            Some(draft) => EditSlot::Editing(draft),
            None => EditSlot::Idle,
        }
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            EditSlot::Idle => None,
            EditSlot::Editing(draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match self {
            EditSlot::Idle => None,
            EditSlot::Editing(draft) => Some(draft),
        }
    }

    pub fn into_draft(self) -> Option<T> {
        match self {
            EditSlot::Idle => None,
            EditSlot::Editing(draft) => Some(draft),
        }
    }

    pub fn editing_id(&self) -> Option<EntityId> {
        self.draft().map(Entity::id)
    }

    pub fn is_editing(&self, id: EntityId) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditSlot::Idle)
    }
}

/// A single field edit on the user draft (one keystroke or selection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDraftChange {
    Name(String),
    Email(String),
    Role(String),
    Status(UserStatus),
}

impl UserDraftChange {
    pub fn apply(self, draft: &mut User) {
        match self {
            UserDraftChange::Name(name) => draft.name = name,
            UserDraftChange::Email(email) => draft.email = email,
            UserDraftChange::Role(role) => draft.role = role,
            UserDraftChange::Status(status) => draft.status = status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleDraftChange {
    Name(String),
}

impl RoleDraftChange {
    pub fn apply(self, draft: &mut Role) {
        match self {
            RoleDraftChange::Name(name) => draft.name = name,
        }
    }
}
