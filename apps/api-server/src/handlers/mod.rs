//! HTTP handlers and route configuration.

mod blog_post;
mod health;


use actix_web::web;

use crate::middleware::error::{json_config, path_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config()).service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // One route per operation
            .route("/blog_posts", web::get().to(blog_post::list))
            .route("/blog_post_detail/{id}", web::get().to(blog_post::retrieve))
            .route("/blog_post_create", web::post().to(blog_post::create))
            .service(
                web::resource("/blog_post_update/{id}")
                    .route(web::put().to(blog_post::replace))
                    .route(web::patch().to(blog_post::patch)),
            )
            .route("/blog_post_delete/{id}", web::delete().to(blog_post::destroy))
            // Combined resource
            .service(
                web::resource("/blog_post")
                    .route(web::get().to(blog_post::resource::list))
                    .route(web::post().to(blog_post::resource::create)),
            )
            .service(
                web::resource("/blog_post/{id}")
                    .route(web::get().to(blog_post::resource::retrieve))
                    .route(web::put().to(blog_post::resource::update))
                    .route(web::patch().to(blog_post::resource::partial_update))
                    .route(web::delete().to(blog_post::resource::destroy)),
            )
            .route("/blog_post/{id}/cover", web::get().to(blog_post::cover)),
    );
}
