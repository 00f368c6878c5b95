use touchline::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped with error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), touchline::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&config).await?;

    let app = router::routes()
        .with_state(AppState { db })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    tracing::info!("Starting server on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
