use std::sync::atomic::Ordering;

use actix_web::{
    http::StatusCode,
    middleware::{Compress, Logger, NormalizePath, TrailingSlash},
    web::{self, Data},
    App, HttpServer,
};

use page_error::{response_from_error, IS_DEBUG_ON};

mod cache;
mod macros;
mod models;
mod page_error;
mod paths;
mod req_caching;
mod templates;

async fn default_handler_debug(req: actix_web::HttpRequest) -> impl actix_web::Responder {
    macros::resp_404_NotFound!(format!("{:#?}", req))
}
async fn default_handler() -> impl actix_web::Responder {
    response_from_error("No route matched the request", StatusCode::NOT_FOUND)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let is_debug_on = std::env::var("debug")
        .map(|val| val == "1")
        .unwrap_or_default();
    IS_DEBUG_ON.store(is_debug_on, Ordering::Relaxed);
    tracing::info!(
        "Debug is {}",
        if is_debug_on { "enabled" } else { "disabled" }
    );

    let bind_address = std::env::var("address").unwrap_or("0.0.0.0:80".into());

    HttpServer::new(move || {
        let req_client = reqwest::Client::builder()
            .user_agent(concat!("pokedex-pages/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap();

        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Logger::default())
            .wrap(Compress::default())
            .app_data(Data::new(req_client))
            .configure(paths::configure)
            .default_service(if is_debug_on {
                web::to(default_handler_debug)
            } else {
                web::to(default_handler)
            })
    })
    .bind(bind_address)
    .expect("Failed to bind server to address")
    .run()
    .await
}
