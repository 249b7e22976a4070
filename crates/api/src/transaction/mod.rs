pub mod create_transaction;
mod delete_transaction;
mod get_transaction;
mod get_transaction_reminders;
pub mod get_transaction_stats;
pub mod list_transactions;
mod search_transactions;
pub mod update_transaction;

use actix_web::web;
use create_transaction::create_transaction_controller;
use delete_transaction::delete_transaction_controller;
use get_transaction::get_transaction_controller;
use get_transaction_reminders::get_transaction_reminders_controller;
use get_transaction_stats::get_transaction_stats_controller;
use list_transactions::list_transactions_controller;
use search_transactions::search_transactions_controller;
use update_transaction::update_transaction_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/transactions", web::post().to(create_transaction_controller));
    cfg.route("/transactions", web::get().to(list_transactions_controller));
    cfg.route(
        "/transactions/search",
        web::get().to(search_transactions_controller),
    );
    cfg.route(
        "/transactions/stats",
        web::get().to(get_transaction_stats_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}",
        web::get().to(get_transaction_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}/reminders",
        web::get().to(get_transaction_reminders_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}",
        web::put().to(update_transaction_controller),
    );
    cfg.route(
        "/transactions/{transaction_id}",
        web::delete().to(delete_transaction_controller),
    );
}
