mod config;
mod manifest_check;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");

    // Non-fatal: the pages still render their own failure placeholder.
    manifest_check::report_manifest(&config.manifest_path());

    let app = routes::app(&config.site_dir);
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "poetry-site listening");
    axum::serve(listener, app).await.expect("server failed");
}
