use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JioSaavnConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Transport timeout. Unset keeps the client default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    #[serde(default = "default_recommendations_limit")]
    pub recommendations_limit: usize,
    #[serde(default = "default_stream_candidate_limit")]
    pub stream_candidate_limit: usize,
    #[serde(default)]
    pub proxy: Option<HttpProxyConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct HttpProxyConfig {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

fn default_base_url() -> String {
    "https://www.jiosaavn.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_search_limit() -> usize {
    50
}

fn default_recommendations_limit() -> usize {
    30
}

fn default_stream_candidate_limit() -> usize {
    5
}

impl Default for JioSaavnConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
            search_limit: default_search_limit(),
            recommendations_limit: default_recommendations_limit(),
            stream_candidate_limit: default_stream_candidate_limit(),
            proxy: None,
        }
    }
}
