use tracing::info;

use sortbench_server::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("sortbench_server=debug,tower_http=debug")
        .init();

    let app = server::router();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("Sort benchmark server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
