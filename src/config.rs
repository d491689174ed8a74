pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
pub const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws/notifications/";

/// Where the probes point.
///
/// Defaults match a locally running backend, both URLs can be redirected
/// through the environment when smoking another target.
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub api_base: String,
    pub ws_url: String,
}

impl SmokeConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("SMOKE_API_BASE").ok(),
            std::env::var("SMOKE_WS_URL").ok(),
        )
    }

    fn from_vars(api_base: Option<String>, ws_url: Option<String>) -> Self {
        let api_base = api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            // the probes append `/public/...` themselves
            api_base: api_base.trim_end_matches('/').to_string(),
            ws_url: ws_url.unwrap_or_else(|| DEFAULT_WS_URL.to_string()),
        }
    }
}
