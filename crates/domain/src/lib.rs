mod reminder;
mod shared;
mod transaction;
mod transaction_type;
mod user;

pub use reminder::{Reminder, THRESHOLD_DAYS};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shared::payload::Payload;
pub use transaction::{Priority, Transaction, TransactionStatus};
pub use transaction_type::TransactionType;
pub use user::User;
