use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scrape_service::config::Config;
use scrape_service::{handlers, AppState};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scrape_service=debug,actix_web=info,info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(&config);

    info!("Starting scrape-service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: upstream={}, default_post_count={}, image_fetch_concurrency={}, timeout={:?}",
        config.instagram_base_url,
        config.default_post_count,
        config.image_fetch_concurrency,
        config.upstream_timeout_secs
    );

    let state = web::Data::new(
        AppState::from_config(&config).context("Failed to create Instagram client")?,
    );

    let bind_address = config.bind_address();
    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure_routes)
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run()
    .await?;

    info!("Shutting down scrape-service");

    Ok(())
}
