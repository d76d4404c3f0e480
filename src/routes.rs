use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{books, users};
use crate::middleware::require_bearer;
use crate::AppState;

/// Builds the application router. Login and both create endpoints are public;
/// everything under /jwt sits behind the bearer-token gate.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/users", get(users::list))
        .route(
            "/users/:id",
            get(users::get).put(users::update).delete(users::remove),
        )
        .route("/books", get(books::list))
        .route(
            "/books/:id",
            get(books::get).put(books::update).delete(books::remove),
        )
        .route_layer(from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .route("/login", post(users::login))
        .route("/users", post(users::create))
        .route("/books", post(books::create))
        .nest("/jwt", protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
