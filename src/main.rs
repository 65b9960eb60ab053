use cms::{config, db, router, s3, storage, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = db::create_pool(&config.database_url);
    db::init_db(&pool).await?;
    let docs = db::DocStore::new(pool);

    let s3_client = s3::create_client(
        &config.s3_url,
        &config.s3_access_key,
        &config.s3_secret_key,
        &config.s3_region,
    )
    .await;
    let uploads = storage::ObjectStore::new(
        s3_client,
        config.s3_bucket.clone(),
        config.public_url_base().to_string(),
    );

    let address = config.address.clone();
    let state = AppState {
        config,
        docs,
        uploads,
    };
    let app = router::create_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
