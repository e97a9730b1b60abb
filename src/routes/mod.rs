use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::template::{self, NotFoundTemplate};

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, template::render(NotFoundTemplate))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/health", get(health::health))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
