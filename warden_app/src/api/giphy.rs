//! Giphy GIF search.

use rand::seq::SliceRandom;
use serde::Deserialize;

use super::{check_status, Client, Error};

#[derive(Debug, Clone, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Gif>,
}

#[derive(Debug, Clone, Deserialize)]
struct Gif {
    images: GifImages,
}

#[derive(Debug, Clone, Deserialize)]
struct GifImages {
    original: GifRendition,
}

#[derive(Debug, Clone, Deserialize)]
struct GifRendition {
    url: String,
}

impl Client {
    /// Searches for GIFs and returns the original-rendition URL of a
    /// random result.
    pub async fn random_gif_url(&self, query: &str, limit: u32) -> Result<String, Error> {
        let key = self.giphy_key()?;

        let response = self
            .http
            .get(&self.endpoints.giphy)
            .query(&[("q", query), ("api_key", key)])
            .query(&[("limit", limit), ("offset", 0)])
            .send()
            .await?;

        let response: SearchResponse = check_status(response)?.json().await?;

        response
            .data
            .choose(&mut rand::thread_rng())
            .map(|gif| gif.images.original.url.clone())
            .ok_or(Error::NotFound { what: "image" })
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::{Credentials, Endpoints};

    fn test_client(server: &MockServer) -> Client {
        let credentials = Credentials {
            giphy_key: Some("giphy-key".to_owned()),
            ..Credentials::default()
        };

        let endpoints = Endpoints {
            giphy: server.uri(),
            ..Endpoints::default()
        };

        Client::with_endpoints(credentials, endpoints).expect("client must build")
    }

    #[tokio::test]
    async fn picks_a_result_gif() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("q", "cuddle"))
            .and(query_param("api_key", "giphy-key"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    { "images": { "original": { "url": "https://example.com/cuddle.gif" } } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let url = client
            .random_gif_url("cuddle", 10)
            .await
            .expect("must find a gif");
        assert_eq!(url, "https://example.com/cuddle.gif");
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .random_gif_url("cuddle", 10)
            .await
            .expect_err("empty result must not yield a URL");
        assert!(matches!(err, Error::NotFound { what: "image" }));
    }
}
