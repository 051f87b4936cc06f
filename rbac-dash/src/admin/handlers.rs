// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::form::ActionForm;
use crate::admin::shared;
use crate::admin::view::StateSnapshotView;
use crate::app_state::AppState;
use crate::config::ValidatedConfig;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result, web};

pub fn configure(cfg: &mut web::ServiceConfig, admin_path: &str) {
    let admin_path_for_root = admin_path.to_string();

    cfg.route(
        "/",
        web::get().to(move || root_redirect_to_admin(admin_path_for_root.clone())),
    )
    .service(
        web::scope(admin_path)
            .route("", web::get().to(dashboard_index))
            .route("/actions", web::post().to(post_action))
            .route("/api/state", web::get().to(state_api)),
    );
}

async fn root_redirect_to_admin(admin_path: String) -> Result<HttpResponse> {
    Ok(HttpResponse::Found()
        .insert_header(("Location", admin_path))
        .finish())
}

async fn dashboard_index(
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let state = app_state
        .store
        .snapshot()
        .map_err(|err| shared::store_error("read dashboard state", err))?;
    shared::render_dashboard_response(&config, &app_state, &state)
}

/// Applies one submitted form as a batch of actions, then redirects back to
/// the dashboard so a browser refresh never resubmits it.
async fn post_action(
    form: web::Form<ActionForm>,
    config: web::Data<ValidatedConfig>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    let action_name = form.action.clone();
    let actions = match form.into_actions() {
        Ok(actions) => actions,
        Err(err) => {
            log::warn!("Rejected dashboard action '{}': {}", action_name, err);
            return Ok(shared::render_error_response(
                &config,
                &app_state,
                StatusCode::BAD_REQUEST,
                err.message(),
            ));
        }
    };

    app_state
        .store
        .dispatch_all(actions)
        .map_err(|err| shared::store_error("apply dashboard action", err))?;

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", config.admin.path.clone()))
        .finish())
}

async fn state_api(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    let state = app_state
        .store
        .snapshot()
        .map_err(|err| shared::store_error("read dashboard state", err))?;
    Ok(HttpResponse::Ok().json(StateSnapshotView::new(&state)))
}
