use crate::FetchOutcome;
use crate::date::CalendarDate;
use crate::schedule::ScheduleResponse;
use log::{debug, error};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const NHL_STATS_API: &str = "https://statsapi.web.nhl.com";

/// NHL schedule client backed by the public stats API.
#[derive(Debug, Clone)]
pub struct NhlApi {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for NhlApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("nhltui/", env!("CARGO_PKG_VERSION"), " (terminal schedule viewer)"))
                .build()
                .unwrap_or_default(),
            base_url: NHL_STATS_API.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) | ApiError::Parsing(e, _) => Some(e),
        }
    }
}

impl NhlApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another schedule service, e.g. a mirror or a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            ..Self::default()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one day's games and collapse the result into a `FetchOutcome`.
    ///
    /// Every failure (transport, non-2xx, undecodable body) becomes
    /// `NetworkError`; the cause is logged here and goes no further.
    pub async fn fetch_schedule(&self, date: CalendarDate) -> FetchOutcome {
        let response = match self.schedule(date).await {
            Ok(response) => response,
            Err(e) => {
                error!("schedule fetch for {date} failed: {e}");
                return FetchOutcome::NetworkError;
            }
        };

        if response.total_items == 0 {
            debug!("no games on {date}");
            return FetchOutcome::NoGames;
        }

        if response.dates.len() > 1 {
            debug!("{} date buckets for {date}, using the first", response.dates.len());
        }
        let games = response.into_first_bucket_games();
        if games.is_empty() {
            debug!("no games in first bucket for {date}");
            FetchOutcome::NoGames
        } else {
            FetchOutcome::Games(games)
        }
    }

    /// Raw schedule for a single day, with the live linescore expanded.
    pub async fn schedule(&self, date: CalendarDate) -> ApiResult<ScheduleResponse> {
        let day = date.canonical_string();
        let url = format!(
            "{}/api/v1/schedule?startDate={day}&endDate={day}&expand=schedule.linescore",
            self.base_url
        );
        self.get(&url).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::Api(e, url.to_owned()))?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}
