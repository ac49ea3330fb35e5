//! Weather lookups via wttr.in's JSON interface.

use serde::Deserialize;

use super::{check_status, Client, Error};

/// One weather lookup, flattened to the parts the reply needs.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub area: Area,
    pub current: CurrentCondition,
    pub today: DailyForecast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    pub humidity: String,
    #[serde(rename = "weatherDesc")]
    pub description: Vec<Labeled>,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
    #[serde(rename = "winddir16Point")]
    pub wind_direction: String,
    #[serde(rename = "precipMM")]
    pub precip_mm: String,
    pub observation_time: String,
}

impl CurrentCondition {
    /// The sky text, e.g. "Partly cloudy".
    #[must_use]
    pub fn sky_text(&self) -> &str {
        self.description
            .first()
            .map_or("Unknown", |label| label.value.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Area {
    #[serde(rename = "areaName")]
    pub name: Vec<Labeled>,
    pub country: Vec<Labeled>,
    pub latitude: String,
    pub longitude: String,
}

impl Area {
    #[must_use]
    pub fn name_text(&self) -> &str {
        first_label(&self.name)
    }

    #[must_use]
    pub fn country_text(&self) -> &str {
        first_label(&self.country)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    #[serde(rename = "mintempC")]
    pub min_temp_c: String,
    #[serde(rename = "maxtempC")]
    pub max_temp_c: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Labeled {
    pub value: String,
}

fn first_label(labels: &[Labeled]) -> &str {
    labels.first().map_or("Unknown", |label| label.value.as_str())
}

#[derive(Debug, Deserialize)]
struct RawReport {
    #[serde(default)]
    current_condition: Vec<CurrentCondition>,
    #[serde(default)]
    nearest_area: Vec<Area>,
    #[serde(default)]
    weather: Vec<DailyForecast>,
}

impl Client {
    /// Looks up the current weather for a location name or ZIP code.
    pub async fn weather(&self, location: &str) -> Result<WeatherReport, Error> {
        let url = format!(
            "{}/{}",
            self.endpoints.weather,
            urlencoding::encode(location),
        );

        let response = self
            .http
            .get(url)
            .query(&[("format", "j1")])
            .send()
            .await?;

        let raw: RawReport = check_status(response)?.json().await?;

        let not_found = Error::NotFound {
            what: "weather data",
        };

        // wttr.in reports everything as parallel one-element arrays
        match (
            raw.nearest_area.into_iter().next(),
            raw.current_condition.into_iter().next(),
            raw.weather.into_iter().next(),
        ) {
            (Some(area), Some(current), Some(today)) => Ok(WeatherReport {
                area,
                current,
                today,
            }),
            _ => Err(not_found),
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::{Credentials, Endpoints};

    fn test_client(server: &MockServer) -> Client {
        let endpoints = Endpoints {
            weather: server.uri(),
            ..Endpoints::default()
        };

        Client::with_endpoints(Credentials::default(), endpoints).expect("client must build")
    }

    fn sample_report() -> serde_json::Value {
        serde_json::json!({
            "current_condition": [{
                "temp_C": "21",
                "FeelsLikeC": "19",
                "humidity": "60",
                "weatherDesc": [{ "value": "Partly cloudy" }],
                "windspeedKmph": "13",
                "winddir16Point": "NW",
                "precipMM": "0.1",
                "observation_time": "07:12 AM"
            }],
            "nearest_area": [{
                "areaName": [{ "value": "London" }],
                "country": [{ "value": "United Kingdom" }],
                "latitude": "51.517",
                "longitude": "-0.106"
            }],
            "weather": [{
                "mintempC": "14",
                "maxtempC": "23"
            }]
        })
    }

    #[tokio::test]
    async fn fetches_and_flattens_the_report() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/London"))
            .and(query_param("format", "j1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_report()))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let report = client.weather("London").await.expect("lookup must succeed");

        assert_eq!(report.area.name_text(), "London");
        assert_eq!(report.area.country_text(), "United Kingdom");
        assert_eq!(report.current.sky_text(), "Partly cloudy");
        assert_eq!(report.current.temp_c, "21");
        assert_eq!(report.today.max_temp_c, "23");
    }

    #[tokio::test]
    async fn missing_sections_are_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .weather("Nowhere")
            .await
            .expect_err("missing data must not yield a report");
        assert!(matches!(
            err,
            Error::NotFound {
                what: "weather data"
            }
        ));
    }
}
