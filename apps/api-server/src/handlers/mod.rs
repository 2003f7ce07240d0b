//! HTTP handlers and route configuration.

mod health;
mod posts;
mod uploads;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Guestbook routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{post_id}", web::get().to(posts::get_post))
                    .route("/{post_id}", web::delete().to(posts::delete_post))
                    .route("/{post_id}/replies", web::post().to(posts::create_reply)),
            )
            // Upload completion notifications from the file store
            .route("/uploads/events", web::post().to(uploads::uploads_completed)),
    );
}
