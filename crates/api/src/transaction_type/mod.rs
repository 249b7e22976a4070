mod create_transaction_type;
pub mod init_default_types;
mod list_transaction_types;

use actix_web::web;
use create_transaction_type::create_transaction_type_controller;
use list_transaction_types::list_transaction_types_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/transaction-types",
        web::get().to(list_transaction_types_controller),
    );
    cfg.route(
        "/transaction-types",
        web::post().to(create_transaction_type_controller),
    );
}
