use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use actix_cors::Cors;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use portfolio_contact::{
    AppState,
    constants::SWEEP_INTERVAL,
    errors::json_payload_error_handler,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let server_addr = format!("{}:{}", config.host, config.port);
    let worker_count = config.worker_count;
    let cors_origins = config.cors_origins();

    let app_state = web::Data::new(AppState::new(config));

    let rate_limiter = app_state.rate_limiter.clone();
    rate_limiter.start_sweeper(SWEEP_INTERVAL);

    tracing::info!(
        "Starting contact API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);
        for origin in &cors_origins {
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(app_state.clone())
            .app_data(web::JsonConfig::default().error_handler(json_payload_error_handler))
            .wrap(TracingLogger::default())
            .wrap(NormalizePath::trim())
            .wrap(cors)
            .configure(configure_routes)
    })
    .workers(worker_count)
    .bind(server_addr)?
    .run();

    let result = tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    };

    rate_limiter.stop_sweeper();
    result
}
