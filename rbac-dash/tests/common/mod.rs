// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use rbac_dash::admin;
use rbac_dash::app_state::AppState;
use rbac_dash::config::ValidatedConfig;
use rbac_dash::dashboard::DashboardState;
use rbac_dash::headers;
use rbac_dash::util::TestConfigBuilder;
use std::sync::Arc;

pub struct TestHarness {
    pub config: Arc<ValidatedConfig>,
    pub app_state: Arc<AppState>,
}

pub struct AppBundle {
    pub config: Arc<ValidatedConfig>,
    pub app_state: Arc<AppState>,
    pub admin_path: String,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_config(TestConfigBuilder::new().build())
    }

    pub fn with_config(config: ValidatedConfig) -> Self {
        let app_state = Arc::new(AppState::new(config.initial_state()));
        Self {
            config: Arc::new(config),
            app_state,
        }
    }

    pub fn app_bundle(&self) -> AppBundle {
        AppBundle {
            config: self.config.clone(),
            app_state: self.app_state.clone(),
            admin_path: self.config.admin.path.clone(),
        }
    }

    pub fn state(&self) -> DashboardState {
        self.app_state.store.snapshot().expect("dashboard snapshot")
    }

    pub fn actions_uri(&self) -> String {
        format!("{}/actions", self.config.admin.path)
    }
}

pub fn build_test_app(
    bundle: AppBundle,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let admin_path = bundle.admin_path;

    App::new()
        .app_data(web::Data::from(bundle.config))
        .app_data(web::Data::from(bundle.app_state))
        .wrap(headers::security_headers())
        .configure(move |cfg| admin::configure(cfg, &admin_path))
}

/// Form post to the actions endpoint, the way the dashboard page submits it.
pub fn action_request(uri: &str, fields: &[(&str, &str)]) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_form(fields.to_vec())
}

pub fn location(resp: &ServiceResponse) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
