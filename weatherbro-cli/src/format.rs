use chrono::{DateTime, Duration, Utc};
use weatherbro_core::WeatherRecord;

use crate::select::FieldSelection;

/// Render a weather report.
///
/// The current instant is a parameter so output is deterministic under test.
/// A blank line, the header and the trailing dash line are always printed;
/// field lines are gated on the selection. Every field prints at most once,
/// in a fixed order, even when several synonym tokens match it.
pub fn render(record: &WeatherRecord, selection: &FieldSelection, now: DateTime<Utc>) -> String {
    let header = format!("--- Weather in {}, {} ---", record.city, record.country);

    // Omitting --show shows everything; so does an explicit "all" token.
    let display_all = !selection.explicit() || selection.contains("all");
    let wants = |names: &[&str]| display_all || names.iter().any(|n| selection.contains(n));

    let mut lines = vec![String::new(), header.clone()];

    if wants(&["condition"]) {
        lines.push(format!(
            "Condition: {}",
            capitalize_first(record.condition())
        ));
    }
    if wants(&["temperature", "temp"]) {
        lines.push(format!(
            "Temperature: {:.1}°C (Feels like: {:.1}°C)",
            record.temperature_c, record.feels_like_c
        ));
        lines.push(format!(
            "Min Temp: {:.1}°C, Max Temp: {:.1}°C",
            record.temp_min_c, record.temp_max_c
        ));
    }
    if wants(&["humidity"]) {
        lines.push(format!("Humidity: {}%", record.humidity_pct));
    }
    if wants(&["pressure"]) {
        lines.push(format!("Pressure: {} hPa", record.pressure_hpa));
    }
    if wants(&["wind-speed", "wind"]) {
        lines.push(format!("Wind Speed: {:.1} m/s", record.wind_speed_mps));
    }
    if wants(&["cloudiness", "clouds"]) {
        lines.push(format!("Cloudiness: {}%", record.cloudiness_pct));
    }
    if wants(&["sunrise"]) {
        lines.push(format!(
            "Sunrise: {}",
            local_clock(record.sunrise_unix, record.utc_offset_secs)
        ));
    }
    if wants(&["sunset"]) {
        lines.push(format!(
            "Sunset: {}",
            local_clock(record.sunset_unix, record.utc_offset_secs)
        ));
    }
    if wants(&["precipitation", "rain", "snow"]) {
        lines.push(format!(
            "Precipitation: {}",
            precipitation_summary(record.rain_1h_mm, record.snow_1h_mm)
        ));
    }
    if wants(&["time", "current-time"]) {
        let local = Duration::try_seconds(record.utc_offset_secs)
            .and_then(|d| now.checked_add_signed(d))
            .map_or_else(
                || "N/A".to_string(),
                |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            );
        lines.push(format!("Current Local Time: {local}"));
    }

    lines.push("-".repeat(header.chars().count()));
    lines.join("\n")
}

/// Local clock time for a Unix instant: shift by the UTC offset, then render
/// the shifted instant as a UTC wall clock without further conversion.
fn local_clock(unix: i64, utc_offset_secs: i64) -> String {
    unix.checked_add(utc_offset_secs)
        .and_then(|shifted| DateTime::<Utc>::from_timestamp(shifted, 0))
        .map_or_else(|| "N/A".to_string(), |dt| dt.format("%H:%M:%S").to_string())
}

fn precipitation_summary(rain_mm: f64, snow_mm: f64) -> String {
    let mut parts = Vec::new();
    if rain_mm > 0.0 {
        parts.push(format!("Rain: {rain_mm:.2} mm (last 1h)"));
    }
    if snow_mm > 0.0 {
        parts.push(format!("Snow: {snow_mm:.2} mm (last 1h)"));
    }

    if parts.is_empty() {
        "No recent precipitation reported".to_string()
    } else {
        parts.join(", ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
