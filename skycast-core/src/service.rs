use log::debug;

use crate::{
    client::{HttpClient, HttpResponse},
    config::Config,
    error::{Error, Result},
    forecast,
    model::{Coordinates, CurrentConditions, ForecastResponse, GeoResult, WeatherBundle},
};

/// Daily records kept in a bundle.
const FORECAST_DAYS: usize = 3;

/// Sequential pipeline over the provider endpoints: geocode, fetch current
/// weather and forecast, normalize. Each invocation is independent; the
/// service holds no state beyond its config and connection pool.
#[derive(Debug, Clone)]
pub struct WeatherService {
    config: Config,
    http: HttpClient,
}

impl WeatherService {
    pub fn new(config: Config) -> Result<Self> {
        let http = HttpClient::new(config.timeout)?;
        Ok(Self { config, http })
    }

    /// Construct from `OPENWEATHER_API_KEY`. Fails before any request when
    /// the variable is absent.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Resolve a city/country pair to coordinates via the geocoding endpoint.
    pub async fn coordinates(&self, city: &str, country: &str) -> Result<Coordinates> {
        if city.trim().is_empty() || country.trim().is_empty() {
            return Err(Error::GeoCoding("city and country must not be empty".into()));
        }

        let query = [
            ("q", format!("{city},{country}")),
            ("limit", "1".to_string()),
            ("appid", self.config.api_key.clone()),
        ];
        let res = self.http.get(&self.config.geocoding_url, &query).await?;
        check_status(&res)?;

        let hits: Vec<GeoResult> = res
            .json()
            .map_err(|e| Error::GeoCoding(format!("failed to parse geocoding response: {e}")))?;

        let hit = hits.first().ok_or_else(|| {
            Error::GeoCoding(format!("City '{city}' in country '{country}' not found"))
        })?;

        debug!("geocoded {city},{country} -> ({}, {})", hit.lat, hit.lon);
        Ok(Coordinates { lat: hit.lat, lon: hit.lon })
    }

    pub async fn current_weather(&self, coords: Coordinates) -> Result<CurrentConditions> {
        let res = self.weather_get(&self.config.weather_url, coords, &[]).await?;
        res.json()
            .map_err(|e| Error::WeatherApi(format!("failed to parse current weather response: {e}")))
    }

    /// The raw 5-day/3-hour forecast feed.
    pub async fn forecast(&self, coords: Coordinates) -> Result<ForecastResponse> {
        let res = self.weather_get(&self.config.forecast_url, coords, &[]).await?;
        res.json()
            .map_err(|e| Error::WeatherApi(format!("failed to parse forecast response: {e}")))
    }

    /// One Call document with the bulky sections excluded, returned verbatim.
    pub async fn one_call(&self, coords: Coordinates) -> Result<serde_json::Value> {
        let extra = [("exclude", "minutely,hourly,alerts".to_string())];
        let res = self.weather_get(&self.config.one_call_url, coords, &extra).await?;
        res.json()
            .map_err(|e| Error::WeatherApi(format!("failed to parse one call response: {e}")))
    }

    /// Full pipeline. Geocoding runs first; a failure at any stage aborts the
    /// invocation with no partial result.
    pub async fn weather_bundle(&self, city: &str, country: &str) -> Result<WeatherBundle> {
        let coordinates = self.coordinates(city, country).await?;
        let current = self.current_weather(coordinates).await?;
        let feed = self.forecast(coordinates).await?;

        let mut daily = forecast::daily_summaries(&feed.list);
        daily.truncate(FORECAST_DAYS);

        Ok(WeatherBundle {
            city: city.to_string(),
            country: country.to_string(),
            coordinates,
            current,
            daily,
        })
    }

    async fn weather_get(
        &self,
        url: &str,
        coords: Coordinates,
        extra: &[(&str, String)],
    ) -> Result<HttpResponse> {
        let mut query = vec![
            ("lat", coords.lat.to_string()),
            ("lon", coords.lon.to_string()),
            ("units", "metric".to_string()),
            ("appid", self.config.api_key.clone()),
        ];
        query.extend(extra.iter().map(|(k, v)| (*k, v.clone())));

        let res = self.http.get(url, &query).await?;
        check_status(&res)?;
        Ok(res)
    }
}

/// Shared status classification for every provider endpoint.
fn check_status(res: &HttpResponse) -> Result<()> {
    match res.status.as_u16() {
        401 => Err(Error::WeatherApi(
            "Invalid API key. Please check your OPENWEATHER_API_KEY".into(),
        )),
        429 => Err(Error::WeatherApi(
            "API rate limit exceeded. Please try again later".into(),
        )),
        _ if !res.status.is_success() => Err(Error::WeatherApi(format!(
            "request failed with status {}: {}",
            res.status,
            truncate_body(&res.body),
        ))),
        _ => Ok(()),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
