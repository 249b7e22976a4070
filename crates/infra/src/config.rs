use chrono_tz::Tz;
use plazo_utils::create_random_secret;
use tracing::{info, warn};

const DEFAULT_TICK_PERIOD_SECS: u64 = 3600;
const MIN_TICK_PERIOD_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret gating the tool API
    pub api_key: String,
    /// Port for the application to run on
    pub port: usize,
    /// Credential for the chat backend. When absent, reminder delivery is
    /// disabled and due reminders stay unsent.
    pub telegram_token: Option<String>,
    /// Seconds between dispatch sweeps
    pub tick_period_secs: u64,
    /// Timezone that civil dates are computed in
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        let api_key = match std::env::var("API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find API_KEY environment variable. Going to create one.");
                let key = create_random_secret(16);
                info!("Secret key for the tool API was generated and set to: {}", key);
                key
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let telegram_token = std::env::var("TELEGRAM_BOT_TOKEN").ok();
        if telegram_token.is_none() {
            warn!("Did not find TELEGRAM_BOT_TOKEN environment variable. Reminder delivery will be disabled.");
        }

        let tick_period_secs = match std::env::var("TICK_PERIOD") {
            Ok(period) => match period.parse::<u64>() {
                Ok(period) if period >= MIN_TICK_PERIOD_SECS => period,
                _ => {
                    warn!(
                        "The given TICK_PERIOD: {} is not valid (minimum {} seconds), falling back to the default: {}.",
                        period, MIN_TICK_PERIOD_SECS, DEFAULT_TICK_PERIOD_SECS
                    );
                    DEFAULT_TICK_PERIOD_SECS
                }
            },
            Err(_) => DEFAULT_TICK_PERIOD_SECS,
        };

        let timezone = match std::env::var("TIMEZONE") {
            Ok(tz) => match tz.parse::<Tz>() {
                Ok(tz) => tz,
                Err(_) => {
                    warn!(
                        "The given TIMEZONE: {} is not valid, falling back to UTC.",
                        tz
                    );
                    Tz::UTC
                }
            },
            Err(_) => Tz::UTC,
        };

        Self {
            api_key,
            port,
            telegram_token,
            tick_period_secs,
            timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
