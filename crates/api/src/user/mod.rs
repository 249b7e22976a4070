mod get_user;
mod upsert_user;

use actix_web::web;
use get_user::get_user_controller;
use upsert_user::upsert_user_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::post().to(upsert_user_controller));
    cfg.route("/users/{user_id}", web::get().to(get_user_controller));
}
