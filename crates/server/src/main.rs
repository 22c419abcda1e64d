use axum::middleware::from_fn;
use cinema_server::{
    config::Config, construct_router, extractors::attach_current_user, routes::account_routes,
    state::AppState, utils::shutdown::shutdown_signal,
};
use database::db::create_connection;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use std::error::Error;
use tower::ServiceBuilder;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url, config.max_connections).await?;
    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Database migrations applied");
    }

    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(config.oidc_issuer_url.as_str())
        .build()
        .await
        .map_err(|err| format!("failed to build OAuth2 resource server: {err:?}"))?;

    // Outermost layer runs first: validate the token, then expose its subject
    let account = account_routes().layer(
        ServiceBuilder::new()
            .layer(oauth2_resource_server.into_layer())
            .layer(from_fn(attach_current_user)),
    );

    let app = construct_router(AppState::new(db), account);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}
