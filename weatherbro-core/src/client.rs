use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{error::WeatherError, model::WeatherRecord};

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Fetch the current weather for `city`.
    ///
    /// One GET, no retries, no caching. The city goes through the query
    /// builder, so names with spaces or special characters are encoded.
    pub async fn current(&self, city: &str) -> Result<WeatherRecord, WeatherError> {
        let res = self
            .http
            .get(BASE_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(failure_for_status(status, body, city));
        }

        decode_record(&body)
    }
}

/// Map a non-success HTTP status to the matching error.
fn failure_for_status(status: StatusCode, body: String, city: &str) -> WeatherError {
    match status {
        StatusCode::UNAUTHORIZED => WeatherError::Auth,
        StatusCode::NOT_FOUND => WeatherError::NotFound {
            city: city.to_string(),
        },
        _ => WeatherError::Upstream {
            status,
            body: truncate_body(&body),
        },
    }
}

/// Decode an OpenWeather current-weather body into a [`WeatherRecord`].
fn decode_record(body: &str) -> Result<WeatherRecord, WeatherError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body)?;

    Ok(WeatherRecord {
        city: parsed.name,
        country: parsed.sys.country,
        conditions: parsed.weather.into_iter().map(|w| w.description).collect(),
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        temp_min_c: parsed.main.temp_min,
        temp_max_c: parsed.main.temp_max,
        humidity_pct: parsed.main.humidity,
        pressure_hpa: parsed.main.pressure,
        wind_speed_mps: parsed.wind.speed,
        cloudiness_pct: parsed.clouds.all,
        sunrise_unix: parsed.sys.sunrise,
        sunset_unix: parsed.sys.sunset,
        rain_1h_mm: parsed.rain.and_then(|v| v.one_h).unwrap_or(0.0),
        snow_1h_mm: parsed.snow.and_then(|v| v.one_h).unwrap_or(0.0),
        utc_offset_secs: parsed.timezone,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Walk back to a char boundary so the slice cannot split a multibyte
    // character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: u8,
}

/// Hourly precipitation volume; OpenWeather omits the whole object when dry.
#[derive(Debug, Deserialize)]
struct OwVolume {
    #[serde(rename = "1h")]
    one_h: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    clouds: OwClouds,
    rain: Option<OwVolume>,
    snow: Option<OwVolume>,
    timezone: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "London",
        "sys": { "country": "GB", "sunrise": 1700000000, "sunset": 1700030000 },
        "weather": [ { "description": "light rain" } ],
        "main": {
            "temp": 11.3, "feels_like": 10.7,
            "temp_min": 9.8, "temp_max": 12.4,
            "humidity": 83, "pressure": 1012
        },
        "wind": { "speed": 4.6 },
        "clouds": { "all": 90 },
        "rain": { "1h": 0.45 },
        "timezone": 0
    }"#;

    #[test]
    fn decodes_full_response() {
        let record = decode_record(SAMPLE).expect("sample must decode");

        assert_eq!(record.city, "London");
        assert_eq!(record.country, "GB");
        assert_eq!(record.condition(), "light rain");
        assert_eq!(record.temperature_c, 11.3);
        assert_eq!(record.temp_min_c, 9.8);
        assert_eq!(record.humidity_pct, 83);
        assert_eq!(record.pressure_hpa, 1012);
        assert_eq!(record.cloudiness_pct, 90);
        assert_eq!(record.rain_1h_mm, 0.45);
        assert_eq!(record.snow_1h_mm, 0.0);
        assert_eq!(record.sunrise_unix, 1700000000);
        assert_eq!(record.utc_offset_secs, 0);
    }

    #[test]
    fn missing_precipitation_defaults_to_zero() {
        let body = SAMPLE.replace(r#""rain": { "1h": 0.45 },"#, "");
        let record = decode_record(&body).expect("sample without rain must decode");

        assert_eq!(record.rain_1h_mm, 0.0);
        assert_eq!(record.snow_1h_mm, 0.0);
    }

    #[test]
    fn empty_conditions_render_as_na() {
        let body = SAMPLE.replace(r#"[ { "description": "light rain" } ]"#, "[]");
        let record = decode_record(&body).expect("sample without weather must decode");

        assert_eq!(record.condition(), "N/A");
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = decode_record("{ not json").unwrap_err();
        assert!(matches!(err, WeatherError::Decode(_)));
    }

    #[test]
    fn unauthorized_maps_to_auth_error() {
        let err = failure_for_status(StatusCode::UNAUTHORIZED, String::new(), "London");

        assert!(matches!(err, WeatherError::Auth));
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn not_found_names_the_city() {
        let err = failure_for_status(StatusCode::NOT_FOUND, String::new(), "Atlantis");

        assert!(matches!(err, WeatherError::NotFound { .. }));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn other_statuses_carry_status_and_body() {
        let err = failure_for_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "server error".to_string(),
            "London",
        );

        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("server error"));
    }

    #[test]
    fn long_upstream_bodies_are_truncated() {
        let err = failure_for_status(StatusCode::BAD_GATEWAY, "x".repeat(300), "London");

        let WeatherError::Upstream { body, .. } = err else {
            panic!("expected Upstream");
        };
        assert_eq!(body.len(), 203);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn multibyte_upstream_bodies_truncate_on_a_char_boundary() {
        // 70 three-byte chars = 210 bytes; byte 200 falls inside a char.
        let err = failure_for_status(StatusCode::BAD_GATEWAY, "€".repeat(70), "London");

        let WeatherError::Upstream { body, .. } = err else {
            panic!("expected Upstream");
        };
        assert!(body.ends_with("..."));
        assert_eq!(body.matches('€').count(), 66);
    }
}
