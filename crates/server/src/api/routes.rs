use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::middleware::{import_auth_middleware, metrics_middleware};
use super::{catalog, games, handlers, import, walkthroughs};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Import is the only route behind the API key
    let import_routes = Router::new()
        .route("/import", post(import::import))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            import_auth_middleware,
        ));

    Router::new()
        // Service
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Games
        .route("/games", get(games::list_games).post(games::create_game))
        .route("/games/search", get(games::search_games))
        .route("/games/bulk", post(games::create_games_bulk))
        .route(
            "/games/{id}",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
        // RAWG passthrough
        .route("/genres", get(catalog::list_genres))
        .route("/platforms", get(catalog::list_platforms))
        // Walkthroughs
        .route("/walkthroughs", get(walkthroughs::for_library))
        .route("/walkthroughs/{name}", get(walkthroughs::for_game))
        .merge(import_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
