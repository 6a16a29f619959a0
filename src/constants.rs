/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-desk/0.1.0";

/// wttr.in base URL
pub const DEFAULT_BASE_URL: &str = "https://wttr.in";

/// City loaded on startup and used when the input is empty
pub const DEFAULT_CITY: &str = "Kyiv";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Only every n-th hourly slot of today is shown
pub const HOURLY_STRIDE: usize = 4;

/// Number of days in the multi-day forecast
pub const FORECAST_DAYS: usize = 5;

/// Placeholder for missing numeric values
pub const NOT_AVAILABLE: &str = "N/A";
