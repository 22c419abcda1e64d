pub mod config;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;
pub mod utils;

use axum::Router;
use doc::ApiDoc;
use state::AppState;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Assembles the full application
///
/// `account_routes` is [`routes::account_routes`] with whatever layers the
/// caller uses to establish the [`CurrentUser`](extractors::CurrentUser).
pub fn construct_router(state: AppState, account_routes: Router<AppState>) -> Router {
    Router::new()
        .merge(routes::catalog_routes())
        .merge(account_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .with_state(state)
}
