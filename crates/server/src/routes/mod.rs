pub mod actor;
pub mod auth;
pub mod cinema_hall;
pub mod genre;
pub mod health;
pub mod movie;
pub mod movie_session;
pub mod order;
pub mod root;

use crate::state::AppState;
use axum::{Router, routing::get};

/// Public catalog endpoints
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/genres", get(genre::list_genres).post(genre::create_genre))
        .route(
            "/genres/{id}",
            get(genre::get_genre)
                .put(genre::update_genre)
                .patch(genre::patch_genre)
                .delete(genre::delete_genre),
        )
        .route("/actors", get(actor::list_actors).post(actor::create_actor))
        .route(
            "/actors/{id}",
            get(actor::get_actor)
                .put(actor::update_actor)
                .patch(actor::patch_actor)
                .delete(actor::delete_actor),
        )
        .route(
            "/cinema_halls",
            get(cinema_hall::list_cinema_halls).post(cinema_hall::create_cinema_hall),
        )
        .route(
            "/cinema_halls/{id}",
            get(cinema_hall::get_cinema_hall)
                .put(cinema_hall::update_cinema_hall)
                .patch(cinema_hall::patch_cinema_hall)
                .delete(cinema_hall::delete_cinema_hall),
        )
        .route("/movies", get(movie::list_movies).post(movie::create_movie))
        .route(
            "/movies/{id}",
            get(movie::get_movie)
                .put(movie::update_movie)
                .patch(movie::patch_movie)
                .delete(movie::delete_movie),
        )
        .route(
            "/movie_sessions",
            get(movie_session::list_movie_sessions).post(movie_session::create_movie_session),
        )
        .route(
            "/movie_sessions/{id}",
            get(movie_session::get_movie_session)
                .put(movie_session::update_movie_session)
                .patch(movie_session::patch_movie_session)
                .delete(movie_session::delete_movie_session),
        )
}

/// Endpoints acting on behalf of the caller
///
/// Handlers here require a [`CurrentUser`](crate::extractors::CurrentUser) in
/// the request extensions; the caller decides how it gets there.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/orders", get(order::list_orders).post(order::create_order))
        .route("/orders/{id}", get(order::get_order))
}
