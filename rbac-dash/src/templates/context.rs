// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::view::DashboardView;
use minijinja::{Value, context};

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
    admin_path: String,
    status: u16,
    message: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str, admin_path: &str, status: u16, message: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            admin_path: admin_path.to_string(),
            status,
            message: message.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            admin_path => &self.admin_path,
            status => self.status,
            message => &self.message
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardPageContext {
    app_name: String,
    app_description: String,
    admin_path: String,
    view: DashboardView,
}

impl DashboardPageContext {
    pub fn new(app_name: &str, app_description: &str, admin_path: &str, view: DashboardView) -> Self {
        Self {
            app_name: app_name.to_string(),
            app_description: app_description.to_string(),
            admin_path: admin_path.to_string(),
            view,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            app_name => &self.app_name,
            app_description => &self.app_description,
            admin_path => &self.admin_path,
            actions_path => format!("{}/actions", self.admin_path),
            view => &self.view
        }
    }
}
