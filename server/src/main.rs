mod app_config;

use axum::Router;
use thiserror::Error as ThisError;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app_config::{AppConfig, AssetConfig};

const DEFAULT_CONFIG_PATH: &str = "config/config.toml";
#[derive(Debug, ThisError)]
enum Error {
    #[error("thousand_recipes failed to bind server with io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("thousand_recipes failed to load config from {DEFAULT_CONFIG_PATH}, Config Error {0}")]
    Config(#[from] config::ConfigError),
    #[error("thousand_recipes has no frontend build at {0}, run `trunk build` in frontend/")]
    MissingDist(String),
}
type Result<T> = std::result::Result<T, Error>;

/// Serves the compiled frontend; all recipe data is fetched by the browser itself.
fn routes(asset_config: &AssetConfig) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(&asset_config.dist_dir))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = AppConfig::load(DEFAULT_CONFIG_PATH)?;
    if !conf.asset_config.dist_dir.join("index.html").is_file() {
        return Err(Error::MissingDist(
            conf.asset_config.dist_dir.display().to_string(),
        ));
    }

    let host_port = conf.http_config.connection_string();
    let listener = tokio::net::TcpListener::bind(&host_port).await?;
    info!(
        "Serving {} on http://{host_port}",
        conf.asset_config.dist_dir.display()
    );
    axum::serve(listener, routes(&conf.asset_config)).await?;
    Ok(())
}
