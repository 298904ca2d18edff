mod get_page;
pub mod metadata;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(get_page::get_page);
}
