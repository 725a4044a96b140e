use std::sync::Arc;
use std::time::Duration;

use code_review_relay::app::create_app;
use code_review_relay::service::ReviewService;
use code_review_relay::{config, consts};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing code review relay service...");

    let config = config::load_config().expect("Failed to load config");

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client");

    let review_service = Arc::new(ReviewService::new(http_client, config));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(consts::DEFAULT_SERVER_PORT);

    let app_factory = move || create_app(review_service.clone());

    let server = actix_web::HttpServer::new(app_factory);

    log::info!("Server running on port {port}");
    server.bind(("0.0.0.0", port))?.run().await
}
