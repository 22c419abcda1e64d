use crate::{
    dtos::{
        catalog::{ActorResponse, CinemaHallResponse, GenreResponse},
        movie::{MovieDetail, MovieListItem, MovieResponse},
        movie_session::{
            MovieSessionDetail, MovieSessionListItem, MovieSessionResponse, SessionMovie,
        },
        order::{OrderResponse, PaginatedOrdersResponse, PaginationMeta, TicketResponse},
    },
    routes::{actor, auth, cinema_hall, genre, health, movie, movie_session, order, root},
};
use models::{
    catalog::{ActorInput, CinemaHallInput, GenreInput},
    movie::MovieInput,
    movie_session::MovieSessionInput,
    order::{OrderRequest, TicketRequest},
    seat::Seat,
    validation::FieldErrors,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "jwt",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        auth::me,
        genre::list_genres,
        genre::get_genre,
        genre::create_genre,
        genre::update_genre,
        genre::patch_genre,
        genre::delete_genre,
        actor::list_actors,
        actor::get_actor,
        actor::create_actor,
        actor::update_actor,
        actor::patch_actor,
        actor::delete_actor,
        cinema_hall::list_cinema_halls,
        cinema_hall::get_cinema_hall,
        cinema_hall::create_cinema_hall,
        cinema_hall::update_cinema_hall,
        cinema_hall::patch_cinema_hall,
        cinema_hall::delete_cinema_hall,
        movie::list_movies,
        movie::get_movie,
        movie::create_movie,
        movie::update_movie,
        movie::patch_movie,
        movie::delete_movie,
        movie_session::list_movie_sessions,
        movie_session::get_movie_session,
        movie_session::create_movie_session,
        movie_session::update_movie_session,
        movie_session::patch_movie_session,
        movie_session::delete_movie_session,
        order::list_orders,
        order::get_order,
        order::create_order
    ),
    components(schemas(
        FieldErrors,
        Seat,
        GenreInput,
        ActorInput,
        CinemaHallInput,
        MovieInput,
        MovieSessionInput,
        TicketRequest,
        OrderRequest,
        GenreResponse,
        ActorResponse,
        CinemaHallResponse,
        MovieListItem,
        MovieDetail,
        MovieResponse,
        SessionMovie,
        MovieSessionListItem,
        MovieSessionDetail,
        MovieSessionResponse,
        TicketResponse,
        OrderResponse,
        PaginationMeta,
        PaginatedOrdersResponse,
        auth::MeResponse
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Authentication", description = "Authentication related endpoints"),
        (name = "Genres", description = "Genre catalog"),
        (name = "Actors", description = "Actor catalog"),
        (name = "Cinema halls", description = "Halls and their seating layout"),
        (name = "Movies", description = "Movies with their genres and actors"),
        (name = "Movie sessions", description = "Scheduled screenings and seat availability"),
        (name = "Orders", description = "Ticket purchases of the authenticated user"),
    ),
    info(
        title = "Cinema API",
        version = "1.0.0",
        description = "Cinema ticket booking API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
