use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use viewpoint_app::api::{CatalogApi, HttpCatalog};
use viewpoint_app::config::Config;
use viewpoint_app::routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load().map_err(|e| {
        error!("Environment misconfigured: {e}");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    info!(backend = %config.api_base_url, "Using catalog backend");
    let api: Arc<dyn CatalogApi> = Arc::new(HttpCatalog::new(config.api_base_url.clone()));
    let api_data = web::Data::from(api);

    info!("Binding to {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(api_data.clone())
            .configure(routes::config)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
