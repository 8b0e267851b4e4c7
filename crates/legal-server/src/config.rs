//! Server Configuration
//!
//! Read from the environment (after loading `.env`). Unparseable values
//! fall back to their defaults with a warning.

use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

/// Runtime settings for the server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Artificial delay of the simulated payment processor
    pub payment_delay: Duration,

    /// Shared secret for signed payment callbacks (None = route disabled)
    pub callback_secret: Option<String>,

    /// Price override for every document kind
    pub document_price: Option<Decimal>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3001".into(),
            payment_delay: Duration::from_millis(2000),
            callback_secret: None,
            document_price: None,
        }
    }
}

impl ServerConfig {
    /// Load from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            payment_delay: parse_or(&lookup, "PAYMENT_DELAY_MS")
                .map_or(defaults.payment_delay, Duration::from_millis),
            callback_secret: lookup("PAYMENT_WEBHOOK_SECRET").filter(|s| !s.is_empty()),
            document_price: parse_or(&lookup, "DOCUMENT_PRICE"),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config.bind_addr, "0.0.0.0:3001");
        assert_eq!(config.payment_delay, Duration::from_millis(2000));
        assert!(config.callback_secret.is_none());
        assert!(config.document_price.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("PAYMENT_DELAY_MS", "250"),
            ("PAYMENT_WEBHOOK_SECRET", "whsec_x"),
            ("DOCUMENT_PRICE", "19.50"),
        ]));

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.payment_delay, Duration::from_millis(250));
        assert_eq!(config.callback_secret.as_deref(), Some("whsec_x"));
        assert_eq!(config.document_price, Some(Decimal::new(1950, 2)));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PAYMENT_DELAY_MS", "soon"),
            ("DOCUMENT_PRICE", "free"),
            ("PAYMENT_WEBHOOK_SECRET", ""),
        ]));

        assert_eq!(config.payment_delay, Duration::from_millis(2000));
        assert!(config.document_price.is_none());
        assert!(config.callback_secret.is_none());
    }
}
