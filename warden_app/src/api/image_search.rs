//! Bing Image Search v7.

use rand::Rng;
use serde::Deserialize;

use super::{check_status, Client, Error};

/// Offsets without an explicit value are picked from this range.
const RANDOM_OFFSET_MAX: u32 = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub value: Vec<ImageResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageResult {
    #[serde(rename = "contentUrl")]
    pub content_url: String,
}

impl Client {
    /// Runs an image search with safe-search always enforced.
    ///
    /// `count` is how many results to request. Without an explicit
    /// `offset`, a pseudo-random one in `[0, 200]` is used so repeated
    /// identical queries don't return the same page.
    pub async fn image_search(
        &self,
        query: &str,
        count: u32,
        offset: Option<u32>,
    ) -> Result<SearchResponse, Error> {
        let key = self.image_search_key()?;
        let offset = offset.unwrap_or_else(|| rand::thread_rng().gen_range(0..=RANDOM_OFFSET_MAX));

        let response = self
            .http
            .get(&self.endpoints.image_search)
            .query(&[("q", query), ("SafeSearch", "strict")])
            .query(&[("count", count), ("offset", offset)])
            .header("Ocp-Apim-Subscription-Key", key)
            .send()
            .await?;

        Ok(check_status(response)?.json().await?)
    }

    /// Picks a single random image for the query and returns its content URL.
    pub async fn random_image_url(&self, query: &str) -> Result<String, Error> {
        let response = self.image_search(query, 1, None).await?;

        response
            .value
            .into_iter()
            .next()
            .map(|image| image.content_url)
            .ok_or(Error::NotFound { what: "image" })
    }
}
