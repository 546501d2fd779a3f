use serde::{Deserialize, Serialize};

/// Latitude/longitude pair resolved by the geocoder. Produced once per
/// invocation and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One hit from the geocoding endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResult {
    pub lat: f64,
    pub lon: f64,
    pub name: Option<String>,
    pub country: Option<String>,
}

/// The `main` block shared by current-weather documents and forecast entries.
///
/// Every field is optional; the formatter owns placeholder rendering, so an
/// incomplete document never aborts an invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionInfo {
    /// Condition group, e.g. "Clear" or "Rain". Drives emoji selection.
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

/// Current weather for one set of coordinates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionInfo>,
    #[serde(default)]
    pub wind: Wind,
    /// Meters; the formatter converts to kilometers.
    pub visibility: Option<f64>,
    pub dt: Option<i64>,
    pub name: Option<String>,
}

/// One 3-hourly entry of the forecast feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    #[serde(default)]
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

/// One calendar day summarized from the forecast feed.
///
/// Later observations for the same day only widen the min/max range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    /// Condition group of the first entry observed for the day.
    pub condition: String,
    pub description: String,
}

/// Normalized result handed from the service to the formatter.
#[derive(Debug, Clone)]
pub struct WeatherBundle {
    pub city: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub current: CurrentConditions,
    pub daily: Vec<DailyRecord>,
}
