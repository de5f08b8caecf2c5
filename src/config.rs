//! Client configuration

use crate::driver::CancelVocabulary;
use crate::transport::DEFAULT_TIMEOUT;
use std::time::Duration;
use thiserror::Error;

/// LUIS v2 application endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.projectoxford.ai/luis/v2.0/apps";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("App id cannot be empty")]
    MissingAppId,
    #[error("Subscription key cannot be empty")]
    MissingSubscriptionKey,
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

/// Settings for talking to one LUIS application
#[derive(Debug, Clone)]
pub struct LuisConfig {
    pub app_id: Option<String>,
    pub subscription_key: Option<String>,
    pub endpoint: String,
    /// Ask the service for every intent, not just the top one
    pub verbose: bool,
    pub timeout: Duration,
    pub cancel_words: CancelVocabulary,
    /// Use the blocking transport instead of the async one
    pub blocking: bool,
}

impl Default for LuisConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            subscription_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            verbose: true,
            timeout: DEFAULT_TIMEOUT,
            cancel_words: CancelVocabulary::default(),
            blocking: false,
        }
    }
}

impl LuisConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            app_id: lookup("LUIS_APP_ID"),
            subscription_key: lookup("LUIS_SUBSCRIPTION_KEY"),
            endpoint: lookup("LUIS_ENDPOINT").unwrap_or(defaults.endpoint),
            verbose: lookup("LUIS_VERBOSE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.verbose),
            timeout: lookup("LUIS_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map_or(defaults.timeout, Duration::from_secs),
            cancel_words: lookup("LUIS_CANCEL_WORDS")
                .map_or(defaults.cancel_words, |v| CancelVocabulary::parse(&v)),
            blocking: lookup("LUIS_BLOCKING")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.blocking),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
