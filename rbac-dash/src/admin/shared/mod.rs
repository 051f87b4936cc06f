// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::view::build_dashboard_view;
use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use crate::dashboard::{DashboardState, StoreError};
use crate::templates::{
    DASHBOARD_TEMPLATE, DashboardPageContext, ERROR_TEMPLATE, ErrorPageContext,
    render_minijinja_template,
};
use actix_web::Result;
use actix_web::{HttpResponse, http::StatusCode};
use log;

pub fn render_dashboard_html(
    config: &ValidatedConfig,
    app_state: &AppState,
    state: &DashboardState,
) -> Result<String> {
    let context = DashboardPageContext::new(
        &config.app.name,
        &config.app.description,
        &config.admin.path,
        build_dashboard_view(state),
    )
    .to_value();
    render_minijinja_template(app_state.templates.as_ref(), DASHBOARD_TEMPLATE, context).map_err(
        |err| {
            log::error!("Failed to render dashboard template: {}", err);
            actix_web::error::ErrorInternalServerError("Template rendering failed")
        },
    )
}

pub fn render_dashboard_response(
    config: &ValidatedConfig,
    app_state: &AppState,
    state: &DashboardState,
) -> Result<HttpResponse> {
    let html = render_dashboard_html(config, app_state, state)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// Renders the error page. Falls back to plain text when the template itself fails.
pub fn render_error_response(
    config: &ValidatedConfig,
    app_state: &AppState,
    status_code: StatusCode,
    message: &str,
) -> HttpResponse {
    let context = ErrorPageContext::new(
        &config.app.name,
        &config.admin.path,
        status_code.as_u16(),
        message,
    )
    .to_value();
    match render_minijinja_template(app_state.templates.as_ref(), ERROR_TEMPLATE, context) {
        Ok(html) => HttpResponse::build(status_code)
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) => {
            log::error!("Failed to render error template: {}", err);
            HttpResponse::build(status_code)
                .content_type("text/plain; charset=utf-8")
                .body(message.to_string())
        }
    }
}

/// Log the store failure server-side and hand the client a generic 500.
pub fn store_error(operation: &str, err: StoreError) -> actix_web::Error {
    log::error!("Failed to {}: {}", operation, err);
    actix_web::error::ErrorInternalServerError("Dashboard state unavailable")
}
