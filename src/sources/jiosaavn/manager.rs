use super::{helpers::Locators, parser::JioSaavnParser};
use crate::{
    common::{errors::ApiError, types::AnyResult},
    configs::JioSaavnConfig,
    fetch::Fetcher,
};

/// Resolves catalog resources from JioSaavn pages.
///
/// Each resolver is fetch, then extract, then merge. Pages are cached by the
/// shared [`Fetcher`]; nothing else is kept between requests.
pub struct JioSaavnSource {
    pub(super) fetcher: Fetcher,
    pub(super) locators: Locators,
    pub(super) parser: JioSaavnParser,
    // Limits
    pub(super) search_limit: usize,
    pub(super) recommendations_limit: usize,
    pub(super) stream_candidate_limit: usize,
}

impl JioSaavnSource {
    pub fn new(config: &JioSaavnConfig, fetcher: Fetcher) -> AnyResult<Self> {
        Ok(Self {
            fetcher,
            locators: Locators::new(&config.base_url),
            parser: JioSaavnParser::new()?,
            search_limit: config.search_limit,
            recommendations_limit: config.recommendations_limit,
            stream_candidate_limit: config.stream_candidate_limit,
        })
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }
}

/// Rejects blank ids and returns the trimmed value.
pub(super) fn required<'a>(
    value: &'a str,
    message: &'static str,
) -> Result<&'a str, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ApiError::Validation(message))
    } else {
        Ok(value)
    }
}
