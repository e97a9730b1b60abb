pub mod assets;
pub mod config;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Create the app router without binding a listener.
///
/// Useful for integration testing without starting the full server.
pub fn create_app(config: Config) -> axum::Router {
    routes::router(AppState { config })
}
