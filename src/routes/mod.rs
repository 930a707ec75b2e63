use crate::error::ApiError;
use actix_web::error::JsonPayloadError;
use actix_web::web;
use log::debug;
pub mod articles;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(articles::list_articles)
        .service(articles::get_article)
        .service(articles::create_article)
        .service(articles::update_article)
        .service(articles::delete_article);
}

/// Bodies over `limit` get 413; any other body that cannot be read as an
/// article request is a validation failure.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            debug!("rejected request body: {}", err);
            match err {
                JsonPayloadError::Overflow => ApiError::PayloadTooLarge.into(),
                _ => ApiError::Validation.into(),
            }
        })
}

/// A path id that is not an `i32` cannot name an article.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        debug!("rejected path: {}", err);
        ApiError::NotFound.into()
    })
}
