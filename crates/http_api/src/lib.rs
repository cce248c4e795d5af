mod assets;
mod errors;
mod handlers;
mod middleware;
mod state;

use axum::{Router, middleware as axum_middleware, routing::post};

pub use state::{HttpState, generate_csrf_token};

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/summary", post(handlers::summary))
        .route("/records_list", post(handlers::records_list))
        .route("/records_create", post(handlers::records_create))
        .route("/records_delete", post(handlers::records_delete))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_csrf,
        ));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::ui_fallback)
        .with_state(state)
}
