use std::{env, time::Duration};

use crate::{errors::Error, Result, API_ROOT_URL};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment-driven configuration for the sender binary.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: String,
    pub api_root: String,
    pub request_timeout: Duration,
}

impl Config {
    /// `token_override` wins over `TELEGRAM_BOT_TOKEN` (the CLI flag path).
    pub fn load(token_override: Option<String>) -> Result<Self> {
        let bot_token = token_override
            .and_then(non_empty)
            .or_else(|| env_str("TELEGRAM_BOT_TOKEN").and_then(non_empty))
            .ok_or_else(|| {
                Error::Config(
                    "bot token is required (--token or TELEGRAM_BOT_TOKEN)".to_string(),
                )
            })?;

        let api_root = env_str("TELEGRAM_API_ROOT")
            .and_then(non_empty)
            .unwrap_or_else(|| API_ROOT_URL.to_string());

        let request_timeout = env_str("TGSEND_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            bot_token,
            api_root,
            request_timeout,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_token_wins() {
        let cfg = Config::load(Some("123:abc".to_string())).unwrap();
        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.api_root, API_ROOT_URL);
        assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn blank_override_falls_through_to_env() {
        // A whitespace-only flag value behaves like no flag at all. The env
        // var is pinned here; no other test in this crate touches it.
        env::remove_var("TELEGRAM_BOT_TOKEN");
        assert!(matches!(
            Config::load(Some("   ".to_string())),
            Err(Error::Config(_))
        ));

        env::set_var("TELEGRAM_BOT_TOKEN", "456:def");
        let cfg = Config::load(Some("   ".to_string())).unwrap();
        assert_eq!(cfg.bot_token, "456:def");
        env::remove_var("TELEGRAM_BOT_TOKEN");
    }
}
