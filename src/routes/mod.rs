//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds every HTTP endpoint under a single Axum router. All garden data
//! lives behind `/api`; `/healthz` is unauthenticated for probes.

pub mod auth;
pub mod dashboard;
pub mod plants;
pub mod plantings;
pub mod plots;
pub mod schedule;
pub mod tasks;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/request-code", post(auth::request_code))
        .route("/api/auth/verify-code", post(auth::verify_code))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/users", get(users::list_users))
        .route(
            "/api/users/{id}",
            get(users::get_user).patch(users::update_user).delete(users::delete_user),
        )
        .route("/api/plots", get(plots::list_plots).post(plots::create_plot))
        .route(
            "/api/plots/{id}",
            get(plots::get_plot).patch(plots::update_plot).delete(plots::delete_plot),
        )
        .route("/api/plots/{id}/assign", post(plots::assign_plot))
        .route("/api/plants", get(plants::list_plants).post(plants::create_plant))
        .route(
            "/api/plants/{id}",
            get(plants::get_plant).patch(plants::update_plant).delete(plants::delete_plant),
        )
        .route("/api/plantings", get(plantings::list_plantings).post(plantings::create_planting))
        .route(
            "/api/plantings/{id}",
            get(plantings::get_planting)
                .patch(plantings::update_planting)
                .delete(plantings::delete_planting),
        )
        .route("/api/schedule", get(schedule::day_schedule))
        .route("/api/dashboard", get(dashboard::dashboard))
        .route("/api/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/api/tasks/{id}",
            get(tasks::get_task).patch(tasks::update_task).delete(tasks::delete_task),
        )
        .route("/api/tasks/{id}/status", patch(tasks::update_task_status))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
