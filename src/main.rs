mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Email delivery is optional: without Resend config, access codes are logged.
    let email = match state::EmailConfig::from_env() {
        Some(config) => {
            tracing::info!(from = %config.from, "email delivery configured");
            Some(config)
        }
        None => {
            tracing::warn!("RESEND_API_KEY not set — access codes will be logged instead of emailed");
            None
        }
    };

    let state = state::AppState::new(pool, email);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gardenhub listening");
    axum::serve(listener, app).await.expect("server failed");
}
