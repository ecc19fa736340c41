use std::time::Duration;

use reqwest::{Client, Error, header::HeaderMap};
use tracing::debug;

use crate::configs::JioSaavnConfig;

pub struct HttpClient;

impl HttpClient {
    /// Builds the client used for every catalog request: configured user agent,
    /// HTML accept headers, optional proxy and optional timeout.
    pub fn new(config: &JioSaavnConfig) -> Result<Client, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US,en;q=0.9"),
        );

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if let Some(url) = config.proxy.as_ref().and_then(|p| p.url.as_deref()) {
            debug!("Configuring proxy for catalog requests: {}", url);
            let mut proxy = reqwest::Proxy::all(url)?;
            if let Some(proxy_config) = &config.proxy {
                if let (Some(username), Some(password)) =
                    (&proxy_config.username, &proxy_config.password)
                {
                    proxy = proxy.basic_auth(username, password);
                }
            }
            builder = builder.proxy(proxy);
        }

        builder.build()
    }
}
