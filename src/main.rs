use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contribution_tracker::handlers::{configure_contribution_routes, configure_github_routes};
use contribution_tracker::services::{ContributionStore, GitHubClient};
use contribution_tracker::{AppState, Config};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Open Source Contribution Tracker API is running"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contribution_tracker=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    info!(
        "Starting contribution tracker on {}:{}",
        config.host, config.port
    );
    if config.github_token.is_none() {
        info!("GITHUB_TOKEN not set, using unauthenticated GitHub API access");
    }

    let github = GitHubClient::new(&config.github_api_url, config.github_token.as_deref())
        .expect("Failed to create GitHub client");

    // The store is created once here and only ever reached through the
    // application state; its collection and id counter reset on restart.
    let store = ContributionStore::new();

    let server_addr = format!("{}:{}", config.host, config.port);
    let static_dir = config.static_dir.clone();

    let app_state = web::Data::new(AppState {
        config,
        github,
        store,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health_check))
                    .configure(configure_github_routes)
                    .configure(configure_contribution_routes),
            )
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(&server_addr)?
    .run()
    .await
}
