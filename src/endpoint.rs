//! Query URL construction for a LUIS application
//!
//! Parameter order on the wire is `subscription-key`, `q`, `verbose`, then
//! `contextid` and `forceset` for dialog replies.

use crate::config::{ConfigError, LuisConfig};
use reqwest::Url;

/// Base URL of one application plus its credentials
#[derive(Clone)]
pub struct Endpoint {
    app_url: Url,
    app_id: String,
    subscription_key: String,
    verbose: bool,
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("app_url", &self.app_url.as_str())
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl Endpoint {
    pub fn new(
        base: &str,
        app_id: &str,
        subscription_key: &str,
        verbose: bool,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.trim();
        if app_id.is_empty() {
            return Err(ConfigError::MissingAppId);
        }
        let subscription_key = subscription_key.trim();
        if subscription_key.is_empty() {
            return Err(ConfigError::MissingSubscriptionKey);
        }

        let invalid = |reason: String| ConfigError::InvalidEndpoint {
            url: base.to_string(),
            reason,
        };
        let mut app_url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        app_url
            .path_segments_mut()
            .map_err(|()| invalid("not a hierarchical URL".to_string()))?
            .pop_if_empty()
            .push(app_id);
        app_url.set_query(None);

        Ok(Self {
            app_url,
            app_id: app_id.to_string(),
            subscription_key: subscription_key.to_string(),
            verbose,
        })
    }

    pub fn from_config(config: &LuisConfig) -> Result<Self, ConfigError> {
        let app_id = config.app_id.as_deref().ok_or(ConfigError::MissingAppId)?;
        let key = config
            .subscription_key
            .as_deref()
            .ok_or(ConfigError::MissingSubscriptionKey)?;
        Self::new(&config.endpoint, app_id, key, config.verbose)
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// URL for a fresh query
    pub fn query_url(&self, text: &str) -> Url {
        self.build(text, None, None)
    }

    /// URL for an answer continuing the dialog identified by `context_id`
    pub fn reply_url(&self, text: &str, context_id: &str, parameter_name: Option<&str>) -> Url {
        self.build(text, Some(context_id), parameter_name)
    }

    fn build(&self, text: &str, context_id: Option<&str>, parameter_name: Option<&str>) -> Url {
        let mut url = self.app_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("subscription-key", &self.subscription_key)
                .append_pair("q", text)
                .append_pair("verbose", if self.verbose { "true" } else { "false" });
            if let Some(context_id) = context_id {
                pairs.append_pair("contextid", context_id);
            }
            if let Some(name) = parameter_name {
                pairs.append_pair("forceset", name);
            }
        }
        url
    }
}
