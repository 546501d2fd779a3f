//! Render a [`WeatherBundle`] as emoji-decorated text.
//!
//! Pure string building: no network, no mutation. Absent fields render as a
//! placeholder instead of aborting.

use crate::model::{CurrentConditions, DailyRecord, WeatherBundle};

const PLACEHOLDER: &str = "N/A";

pub fn render(bundle: &WeatherBundle) -> String {
    let mut out = Vec::new();

    out.push(format!("🌍 Weather for {}, {}", bundle.city, bundle.country));
    out.push("─".repeat(50));
    render_current(&mut out, &bundle.current);

    if !bundle.daily.is_empty() {
        out.push(String::new());
        out.push("📅 3-Day Forecast:".to_string());
        out.push("─".repeat(40));
        for day in &bundle.daily {
            render_day(&mut out, day);
        }
    }

    out.join("\n")
}

fn render_current(out: &mut Vec<String>, current: &CurrentConditions) {
    let condition = current.weather.first();
    let group = condition.map(|c| c.main.as_str()).unwrap_or_default();
    let description = condition.map(|c| c.description.as_str()).unwrap_or_default();

    out.push(format!(
        "🌡️  Temperature: {}°C (Feels like {}°C)",
        decimal(current.main.temp),
        decimal(current.main.feels_like),
    ));
    out.push(format!("🌈 Conditions: {} {}", emoji_for(group), text(description)));
    out.push(String::new());

    out.push("📊 Additional Details:".to_string());
    out.push(format!("   💧 Humidity: {}%", whole(current.main.humidity)));
    out.push(format!("   📊 Pressure: {} hPa", whole(current.main.pressure)));
    out.push(format!("   💨 Wind Speed: {} m/s", decimal(current.wind.speed)));
    out.push(match current.visibility {
        Some(meters) => format!("   👁️  Visibility: {:.1} km", meters / 1000.0),
        None => format!("   👁️  Visibility: {PLACEHOLDER}"),
    });
}

fn render_day(out: &mut Vec<String>, day: &DailyRecord) {
    out.push(format!(
        "{}: {} {}",
        day.date,
        emoji_for(&day.condition),
        text(&day.description)
    ));
    out.push(format!(
        "   Max: {}°C, Min: {}°C",
        decimal(day.temp_max),
        decimal(day.temp_min)
    ));
}

fn emoji_for(condition: &str) -> &'static str {
    match condition {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Fog" | "Haze" => "🌫️",
        "Smoke" => "💨",
        _ => "🌈",
    }
}

/// One decimal place, or the placeholder.
fn decimal(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.1}"))
}

/// No decimals, for counts like humidity and pressure.
fn whole(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.0}"))
}

fn text(value: &str) -> String {
    if value.is_empty() {
        return PLACEHOLDER.to_string();
    }
    title_case(value)
}

/// Uppercase the first letter of each word; provider descriptions arrive
/// lowercase ("scattered clouds").
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
