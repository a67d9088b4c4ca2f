// Route exports
pub mod weather;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(weather::configure);
}
