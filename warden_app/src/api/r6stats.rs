//! R6Stats player statistics.

use serde::Deserialize;

use super::{check_status, Client, Error};

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStats {
    pub username: String,
    pub uplay_id: String,
    pub progression: Progression,
    pub stats: Stats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Progression {
    pub level: i64,
    pub total_xp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub queue: Queues,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Queues {
    pub ranked: Option<QueueStats>,
    pub casual: Option<QueueStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueStats {
    pub wins: i64,
    pub losses: i64,
    pub kills: i64,
    pub deaths: i64,
    pub wl: f64,
    pub kd: f64,
    /// Playtime in seconds.
    pub playtime: i64,
}

impl QueueStats {
    /// Whether the player actually played in this queue.
    #[must_use]
    pub fn has_games(&self) -> bool {
        self.wins != 0 || self.losses != 0
    }

    /// Playtime in hours.
    #[must_use]
    pub fn playtime_hours(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let seconds = self.playtime as f64;
        seconds / 60.0 / 60.0
    }
}

impl Client {
    /// Fetches the generic stats of a player.
    pub async fn player_stats(
        &self,
        platform: &str,
        username: &str,
    ) -> Result<PlayerStats, Error> {
        let key = self.r6stats_key()?;

        let url = format!(
            "{}/stats/{}/{platform}/generic",
            self.endpoints.r6stats,
            urlencoding::encode(username),
        );

        let response = self
            .http
            .get(url)
            .bearer_auth(key)
            .send()
            .await?;

        Ok(check_status(response)?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::{Credentials, Endpoints};

    fn test_client(server: &MockServer) -> Client {
        let credentials = Credentials {
            r6stats_key: Some("r6-key".to_owned()),
            ..Credentials::default()
        };

        let endpoints = Endpoints {
            r6stats: server.uri(),
            ..Endpoints::default()
        };

        Client::with_endpoints(credentials, endpoints).expect("client must build")
    }

    #[tokio::test]
    async fn fetches_and_parses_player_stats() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stats/SaffronPants/pc/generic"))
            .and(header("Authorization", "Bearer r6-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "username": "SaffronPants",
                "uplay_id": "abc-123",
                "progression": { "level": 87, "total_xp": 123_456 },
                "stats": {
                    "queue": {
                        "ranked": {
                            "wins": 10, "losses": 5, "kills": 40, "deaths": 30,
                            "wl": 2.0, "kd": 1.33, "playtime": 9000
                        },
                        "casual": null
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let stats = client
            .player_stats("pc", "SaffronPants")
            .await
            .expect("lookup must succeed");

        assert_eq!(stats.username, "SaffronPants");
        assert_eq!(stats.progression.level, 87);

        let ranked = stats.stats.queue.ranked.expect("ranked stats present");
        assert!(ranked.has_games());
        assert!((ranked.playtime_hours() - 2.5).abs() < f64::EPSILON);
        assert!(stats.stats.queue.casual.is_none());
    }

    #[tokio::test]
    async fn status_errors_carry_the_code() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .player_stats("pc", "NoSuchPlayer")
            .await
            .expect_err("404 must fail the lookup");

        match err {
            Error::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            },
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[test]
    fn no_games_means_no_section() {
        let stats = QueueStats {
            wins: 0,
            losses: 0,
            kills: 0,
            deaths: 0,
            wl: 0.0,
            kd: 0.0,
            playtime: 0,
        };

        assert!(!stats.has_games());
    }
}
