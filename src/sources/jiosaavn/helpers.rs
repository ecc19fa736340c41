pub const SOURCE_NAME: &str = "jiosaavn";

/// Builds the page URLs that double as cache keys.
#[derive(Debug, Clone)]
pub struct Locators {
    base_url: String,
}

impl Locators {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn search(&self, query: &str) -> String {
        format!("{}/search/{}", self.base_url, urlencoding::encode(query))
    }

    pub fn song(&self, id: &str) -> String {
        self.resource("song", id)
    }

    pub fn album(&self, id: &str) -> String {
        self.resource("album", id)
    }

    pub fn playlist(&self, id: &str) -> String {
        self.resource("playlist", id)
    }

    pub fn trending(&self) -> String {
        format!("{}/search/trending", self.base_url)
    }

    fn resource(&self, kind: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind, urlencoding::encode(id))
    }
}
