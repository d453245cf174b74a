/// The `/api` route tree.
///
/// Registration, login, and logout are public; everything else sits behind
/// the session guard.
use actix_web::{web, Scope};
use auth_crypto::TokenCodec;

use crate::handlers;
use crate::middleware::SessionGuard;

pub fn api(codec: web::Data<TokenCodec>) -> Scope {
    web::scope("/api")
        .route("/register", web::post().to(handlers::auth::register))
        .route("/login", web::post().to(handlers::auth::login))
        .route("/logout", web::post().to(handlers::auth::logout))
        .service(
            web::scope("")
                .wrap(SessionGuard::new(codec))
                .route("/check-auth", web::get().to(handlers::auth::check_auth))
                .route("/profile", web::get().to(handlers::profile::get_profile))
                .route("/upload", web::post().to(handlers::profile::upload_profile_pic))
                .route("/post", web::post().to(handlers::posts::create_post))
                .service(
                    web::resource("/post/{id}")
                        .route(web::get().to(handlers::posts::get_post))
                        .route(web::put().to(handlers::posts::update_post))
                        .route(web::delete().to(handlers::posts::delete_post)),
                )
                .route("/like/{id}", web::post().to(handlers::posts::toggle_like)),
        )
}
