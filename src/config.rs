use std::{
    collections::HashMap,
    env,
};

use envconfig::Envconfig;
use url::Url;

use crate::{
    Result,
    error::PipelineError,
};

#[derive(Envconfig, Debug, Clone)]
pub struct Config {
    #[envconfig(
        from = "STILL_HERE_SOURCE_URL",
        default = "https://en.wikipedia.org/wiki/List_of_dates_predicted_for_apocalyptic_events"
    )]
    pub source_url: Url,

    #[envconfig(from = "STILL_HERE_DRY_RUN", default = "false")]
    pub dry_run: bool,

    #[envconfig(from = "STILL_HERE_LOG_FILE")]
    pub log_file: Option<String>,

    #[envconfig(from = "STILL_HERE_USER_AGENT")]
    user_agent: Option<String>,
}

impl Config {
    pub fn load() -> Result<Config> {
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Into::into)
    }

    #[inline]
    pub fn user_agent(&self) -> String {
        self.user_agent.clone()
            .unwrap_or_else(|| format!("still-here/{}", env!("CARGO_PKG_VERSION")))
    }
}

/// OAuth 1.0a user-context credentials for the posting service.
#[derive(Envconfig, Clone)]
pub struct Credentials {
    #[envconfig(from = "CONSUMER_KEY")]
    pub consumer_key: String,

    #[envconfig(from = "CONSUMER_SECRET")]
    pub consumer_secret: String,

    #[envconfig(from = "ACCESS_TOKEN")]
    pub access_token: String,

    #[envconfig(from = "ACCESS_TOKEN_SECRET")]
    pub access_token_secret: String,
}

impl Credentials {
    pub fn load() -> std::result::Result<Credentials, PipelineError> {
        let vars = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect::<HashMap<_, _>>();

        Credentials::from_map(&vars)
    }

    /// Missing credentials are reported the same way the service would reject them.
    pub fn from_map(vars: &HashMap<String, String>) -> std::result::Result<Credentials, PipelineError> {
        Credentials::init_from_hashmap(vars)
            .map_err(|e| PipelineError::Authentication(e.to_string()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
