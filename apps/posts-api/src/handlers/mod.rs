//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::json_config;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/posts")
                    .route(web::get().to(posts::get_all_posts))
                    .route(web::post().to(posts::create)),
            )
            .service(
                web::resource("/posts/{id}")
                    .route(web::get().to(posts::find_post))
                    .route(web::put().to(posts::update)),
            ),
    );
}
