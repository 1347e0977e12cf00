//! Route table.

use crate::api::rest::classifier::{method_not_allowed, panic_response, route_not_found};
use crate::api::rest::handlers::{self, AppState};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// Unknown paths get a 404 envelope and known paths called with the wrong
/// method get a 405 envelope. The method fallback only applies to routes
/// registered before it, so it is installed after every route group.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(quote_routes())
        .merge(currency_routes())
        .merge(encryption_routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn quote_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quote/original", get(handlers::get_original_quote))
        .route("/quote/transformed", get(handlers::get_transformed_quote))
}

fn currency_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/currencies",
            get(handlers::list_currencies).post(handlers::create_currency),
        )
        .route(
            "/currencies/{id}",
            get(handlers::get_currency)
                .put(handlers::update_currency)
                .delete(handlers::delete_currency),
        )
}

fn encryption_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/encryption/aes/encrypt", post(handlers::aes_encrypt))
        .route("/encryption/aes/decrypt", post(handlers::aes_decrypt))
        .route(
            "/encryption/rsa/generate-keys",
            post(handlers::rsa_generate_keys),
        )
        .route("/encryption/rsa/encrypt", post(handlers::rsa_encrypt))
        .route("/encryption/rsa/decrypt", post(handlers::rsa_decrypt))
}
