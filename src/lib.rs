#[macro_use]
extern crate diesel;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Result;
use log::info;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

pub async fn run() -> Result<()> {
    let config = config::Config::from_env()?;
    init_logger();

    info!(
        "connecting to database {} on {}:{}",
        config.database.name, config.database.host, config.database.port
    );
    let pool = db::create_connection_pool(&config.database)?;
    let repository = db::ArticleRepository::new(pool);
    repository.initialize_schema()?;

    let max_body_size = config.server.max_body_size;
    let (host, port) = config.server.bind_address();
    info!("listening on {}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::new().max_age(3600).finish())
            .data(repository.clone())
            .app_data(routes::json_config(max_body_size))
            .app_data(routes::path_config())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;
    Ok(())
}
