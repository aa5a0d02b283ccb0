use std::{error::Error, sync::Arc};

use dotenv::dotenv;
use rust_blog::infra::{
    assets::DirAssetStore,
    config::Config,
    context::AppContext,
    database, routes, telemetry,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    let config = Config::from_env();
    telemetry::init_tracing(config.log_json);

    let pool = database::connect(&config.database_url, config.max_connections).await?;
    database::migrate(&pool).await?;

    if config.assets_dir.is_none() {
        tracing::warn!("ASSETS_DIR is empty, pages will not load");
    }
    let assets = Arc::new(DirAssetStore::new(config.assets_dir.clone()));
    let app = routes::create_router(AppContext::new(pool, assets));

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %config.addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
