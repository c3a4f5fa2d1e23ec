use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod activity;
pub mod bookings;
pub mod error;
pub mod messages;
pub mod packages;
pub mod paging;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Assembles the full HTTP surface over a shared [`AppState`].
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(packages::routes())
        .merge(bookings::routes())
        .merge(messages::routes())
        .merge(activity::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
