//! InspiroBot image generation.
//!
//! The API answers a bare image URL as plain text rather than JSON.

use super::{check_status, Client, Error};

impl Client {
    /// Generates a new inspirational image and returns its URL.
    pub async fn inspirobot_image(&self) -> Result<String, Error> {
        let response = self
            .http
            .get(&self.endpoints.inspirobot)
            .query(&[("generate", "true")])
            .send()
            .await?;

        let url = check_status(response)?.text().await?;
        if url.is_empty() {
            return Err(Error::NotFound { what: "image" });
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::{Client, Credentials, Endpoints, Error};

    fn test_client(server: &MockServer) -> Client {
        let endpoints = Endpoints {
            inspirobot: server.uri(),
            ..Endpoints::default()
        };

        Client::with_endpoints(Credentials::default(), endpoints).expect("client must build")
    }

    #[tokio::test]
    async fn returns_the_generated_url() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("generate", "true"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("https://generated.inspirobot.me/a/xyz.jpg"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let url = client
            .inspirobot_image()
            .await
            .expect("must generate an image");
        assert_eq!(url, "https://generated.inspirobot.me/a/xyz.jpg");
    }

    #[tokio::test]
    async fn empty_body_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .inspirobot_image()
            .await
            .expect_err("empty body must not yield a URL");
        assert!(matches!(err, Error::NotFound { what: "image" }));
    }
}
