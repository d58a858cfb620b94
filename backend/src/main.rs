use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{delete, get, patch, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use laxdb_backend::{
    auth::HttpAuthClient,
    config::Config,
    db::{create_pool, Database},
    docs::ApiDoc,
    handlers,
    middleware as app_middleware,
    state::AppState,
    utils::email::EmailService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "laxdb_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        auth_base_url = %config.auth_base_url,
        bind_port = config.bind_port,
        database_max_connections = config.database_max_connections,
        soft_delete_retention_days = config.soft_delete_retention_days,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    let db = Database::new(pool);

    let auth_client = Arc::new(HttpAuthClient::new(&config.auth_base_url)?);
    let email = Arc::new(EmailService::new()?);
    let state = AppState::new(db, config.clone(), auth_client, email);

    // Public routes
    let public_routes = Router::new().route("/api/health", get(handlers::health::health)).merge(
        Router::new()
            .route("/api/feedback", post(handlers::feedback::create_feedback))
            .route_layer(axum_middleware::from_fn_with_state(
                state.clone(),
                app_middleware::optional_auth,
            )),
    );

    // Session-protected routes
    let protected_routes = Router::new()
        .route(
            "/api/players",
            get(handlers::players::list_players).post(handlers::players::create_player),
        )
        .route(
            "/api/players/{id}",
            patch(handlers::players::update_player).delete(handlers::players::delete_player),
        )
        .route(
            "/api/players/bulk-delete",
            post(handlers::players::bulk_delete_players),
        )
        .route(
            "/api/players/{id}/contact-info",
            get(handlers::players::get_player_contact_info)
                .put(handlers::players::upsert_player_contact_info),
        )
        .route("/api/teams", post(handlers::teams::create_team))
        .route(
            "/api/teams/{team_id}",
            patch(handlers::teams::update_team).delete(handlers::teams::delete_team),
        )
        .route(
            "/api/teams/{team_id}/members",
            get(handlers::teams::list_team_members),
        )
        .route(
            "/api/teams/{team_id}/members/{member_id}",
            delete(handlers::teams::remove_team_member),
        )
        .route(
            "/api/teams/{team_id}/invitations",
            post(handlers::teams::invite_player),
        )
        .route(
            "/api/teams/{team_id}/roster",
            get(handlers::teams::get_roster).post(handlers::teams::add_to_roster),
        )
        .route(
            "/api/teams/{team_id}/roster/{player_id}",
            patch(handlers::teams::update_roster_member)
                .delete(handlers::teams::remove_from_roster),
        )
        .route(
            "/api/teams/{team_id}/roster/bulk-remove",
            post(handlers::teams::bulk_remove_from_roster),
        )
        .route(
            "/api/seasons",
            get(handlers::seasons::list_seasons).post(handlers::seasons::create_season),
        )
        .route(
            "/api/seasons/{id}",
            get(handlers::seasons::get_season)
                .patch(handlers::seasons::update_season)
                .delete(handlers::seasons::delete_season),
        )
        .route(
            "/api/games",
            get(handlers::games::list_games).post(handlers::games::create_game),
        )
        .route(
            "/api/games/{id}",
            get(handlers::games::get_game)
                .patch(handlers::games::update_game)
                .delete(handlers::games::delete_game),
        )
        .route(
            "/api/organizations",
            post(handlers::organizations::create_organization),
        )
        .route(
            "/api/organizations/accept-invitation",
            post(handlers::organizations::accept_invitation),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            app_middleware::auth,
        ));

    // Compose app with shared layers (request id, error logging, CORS, trace)
    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(app_middleware::request_id))
                .layer(axum_middleware::from_fn(app_middleware::log_error_responses))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::PATCH,
                            Method::DELETE,
                            Method::OPTIONS,
                        ])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.bind_port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
