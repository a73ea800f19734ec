//! Process configuration.
//!
//! Each acquirer brand is enabled by two variables, `<BRAND>_URL` and
//! `<BRAND>_KEY`. Empty values count as unset.

use crate::acquirer::{AcquirerEndpoint, Cielo, Rede, Stone};
use crate::application::dispatch::AcquirerService;
use reqwest::Client;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL in {var}: {reason}")]
    InvalidUrl { var: String, reason: String },
    #[error("{var} is required when {url_var} is set")]
    MissingKey { var: String, url_var: String },
    #[error("no acquirer configured; set at least one of STONE_URL, CIELO_URL or REDE_URL")]
    NoAcquirers,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub stone: Option<AcquirerEndpoint>,
    pub cielo: Option<AcquirerEndpoint>,
    pub rede: Option<AcquirerEndpoint>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            stone: endpoint(&lookup, "STONE_URL", "STONE_KEY")?,
            cielo: endpoint(&lookup, "CIELO_URL", "CIELO_KEY")?,
            rede: endpoint(&lookup, "REDE_URL", "REDE_KEY")?,
        };

        if config.stone.is_none() && config.cielo.is_none() && config.rede.is_none() {
            return Err(ConfigError::NoAcquirers);
        }
        Ok(config)
    }

    /// Registers every configured brand on a new dispatch service.
    pub fn acquirer_service(&self, client: Client) -> AcquirerService {
        let mut builder = AcquirerService::builder().http_client(client);
        if let Some(endpoint) = &self.stone {
            builder = builder.acquirer(Stone::new(endpoint.clone()));
        }
        if let Some(endpoint) = &self.cielo {
            builder = builder.acquirer(Cielo::new(endpoint.clone()));
        }
        if let Some(endpoint) = &self.rede {
            builder = builder.acquirer(Rede::new(endpoint.clone()));
        }
        builder.build()
    }
}

fn endpoint<F>(
    lookup: &F,
    url_var: &str,
    key_var: &str,
) -> Result<Option<AcquirerEndpoint>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

    let Some(raw_url) = non_empty(url_var) else {
        return Ok(None);
    };
    let url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::InvalidUrl {
        var: url_var.to_string(),
        reason: e.to_string(),
    })?;
    let api_key = non_empty(key_var).ok_or_else(|| ConfigError::MissingKey {
        var: key_var.to_string(),
        url_var: url_var.to_string(),
    })?;

    Ok(Some(AcquirerEndpoint::new(url, api_key)))
}
