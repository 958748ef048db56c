//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list))
                .route("", web::post().to(posts::create))
                .route("/{id}", web::get().to(posts::get))
                .route("/{id}", web::put().to(posts::update))
                .route("/{id}", web::delete().to(posts::delete)),
        );
}
