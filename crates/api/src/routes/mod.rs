pub mod health;
pub mod items;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /items                 list (GET), create (POST)
/// /items/{id}            get (GET), delete (DELETE, 204)
/// /raw                   accepted reply through the code+send handle
/// /unimplemented         not-implemented reply
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(items::list).post(items::create))
        .route("/items/{id}", get(items::get_one).delete(items::delete))
        .route("/raw", get(items::raw))
        .route("/unimplemented", get(items::unimplemented))
}
