/// One decoded current-weather observation.
///
/// Built once from the API response and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct WeatherRecord {
    pub city: String,
    pub country: String,
    /// Condition descriptions; display uses the first one.
    pub conditions: Vec<String>,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub cloudiness_pct: u8,
    /// Unix seconds, UTC.
    pub sunrise_unix: i64,
    /// Unix seconds, UTC.
    pub sunset_unix: i64,
    /// Rain volume for the last hour in mm; 0.0 means none reported.
    pub rain_1h_mm: f64,
    /// Snow volume for the last hour in mm; 0.0 means none reported.
    pub snow_1h_mm: f64,
    /// Shift in seconds from UTC at the queried location.
    pub utc_offset_secs: i64,
}

impl WeatherRecord {
    /// First condition description, or "N/A" when the API sent none.
    pub fn condition(&self) -> &str {
        self.conditions.first().map_or("N/A", String::as_str)
    }
}
