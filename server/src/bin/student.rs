use server::config::{self, StudentConfig};

#[tokio::main]
async fn main() {
    let dotenv_error = config::load_dotenv();
    server::init_tracing();
    if let Some(e) = dotenv_error {
        tracing::warn!(error = %e, "ignoring unreadable .env");
    }

    let config = match StudentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    if !config.catalog_dir.is_dir() {
        tracing::warn!(dir = %config.catalog_dir.display(), "catalog directory missing; /data will 404");
    }
    let app = match server::routes::student_app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(port = config.port, delay_ms = config.chat_reply_delay.as_millis(), "student portal listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
    }
}
