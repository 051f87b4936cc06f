// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::dashboard::{DashboardState, DashboardStore};
use crate::templates::{MiniJinjaEngine, TemplateEngine};

pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub store: DashboardStore,
}

impl AppState {
    pub fn new(initial_state: DashboardState) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::new()),
            store: DashboardStore::new(initial_state),
        }
    }
}
