/// Base URL of the expenses API when `EXPENSE_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// How long a toast stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

/// Build-time configuration of the frontend
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub toast_duration_ms: u32,
}

impl AppConfig {
    /// Read configuration baked in by the build environment
    pub fn from_env() -> Self {
        let api_base_url = option_env!("EXPENSE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let toast_duration_ms = option_env!("EXPENSE_TOAST_DURATION_MS")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOAST_DURATION_MS);

        Self {
            api_base_url: normalize_base_url(api_base_url),
            toast_duration_ms,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
