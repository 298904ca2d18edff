pub mod pokemon;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    pokemon::configure(cfg);
}
