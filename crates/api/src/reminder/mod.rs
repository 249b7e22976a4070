pub mod message;
pub mod send_reminders;
