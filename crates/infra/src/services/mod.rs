mod telegram;

pub use telegram::{Delivery, DisabledTransport, ITransport, TelegramTransport};
