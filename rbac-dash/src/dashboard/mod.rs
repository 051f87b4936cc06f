// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod edit;
pub mod filter;
pub mod ids;
pub mod permissions;
pub mod seed;
pub mod state;
pub mod store;
pub mod types;

pub use edit::{EditSlot, RoleDraftChange, UserDraftChange};
pub use permissions::AVAILABLE_PERMISSIONS;
pub use state::{Action, DashboardState, reduce};
pub use store::{DashboardStore, StoreError};
pub use types::{Entity, EntityId, Role, Tab, User, UserStatus};
