use std::sync::Arc;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use dotenvy::dotenv;

use newsbot_portal::{
    api::{CollectorApi, CollectorClient},
    config::{AppConfig, Args},
    observability::init_logging,
    security, web as pages,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let args = Args::parse();
    let config = match AppConfig::load(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    let client = match CollectorClient::new(&config.api_address, config.api_timeout) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(api_address = %config.api_address, error = %err, "Invalid collector API address");
            std::process::exit(1);
        }
    };
    tracing::info!(api_address = %client.endpoint(), "Using collector API");

    let api: Arc<dyn CollectorApi> = Arc::new(client);
    run_server(config, api).await
}

async fn run_server(config: AppConfig, api: Arc<dyn CollectorApi>) -> std::io::Result<()> {
    tracing::info!("Serving static files from {}", config.public_path);
    tracing::info!(
        "Starting server at http://{}:{}",
        config.bind_address,
        config.port
    );

    let api = web::Data::from(api);
    let public_path = config.public_path.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::new(
                middleware::TrailingSlash::Trim,
            ))
            .wrap(security::SecurityHeaders)
            .app_data(api.clone())
            .service(Files::new("/static", &public_path))
            .configure(pages::configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
