mod config;
mod routes;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "login host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app(&config.static_dir)?;

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(addr = %config.listen_addr(), static_dir = %config.static_dir.display(), "login host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
