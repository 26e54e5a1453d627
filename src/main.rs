use salon_api::{app, config::AppConfig, database::manager, state::AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salon_api=info,tower_http=info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("configuration error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("starting salon API in {} mode", config.environment.as_str());

    let pool = match manager::connect_lazy(&config.database) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("invalid database configuration: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.server.port;
    let state = AppState::new(config, pool);
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("salon API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
