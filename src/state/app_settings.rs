use log::LevelFilter;
use nhl_api::date::CalendarDate;

pub const LOG_LEVEL_ENV: &str = "NHLTUI_LOG";
pub const API_URL_ENV: &str = "NHLTUI_API_URL";

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    /// Schedule service base URL; the public stats API when unset.
    pub api_url: Option<String>,
    /// Day to open on; today when unset.
    pub start_date: Option<CalendarDate>,
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            full_screen: false,
            log_level: non_empty(LOG_LEVEL_ENV).and_then(|v| v.trim().parse().ok()),
            api_url: non_empty(API_URL_ENV).map(|v| v.trim().to_owned()),
            start_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> AppSettings {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppSettings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]);
        assert_eq!(s.log_level, None);
        assert_eq!(s.api_url, None);
        assert!(!s.full_screen);
    }

    #[test]
    fn reads_log_level_and_api_url() {
        let s = settings(&[(LOG_LEVEL_ENV, "Debug"), (API_URL_ENV, " http://localhost:8080 ")]);
        assert_eq!(s.log_level, Some(LevelFilter::Debug));
        assert_eq!(s.api_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn ignores_blank_and_unknown_values() {
        let s = settings(&[(LOG_LEVEL_ENV, "loud"), (API_URL_ENV, "   ")]);
        assert_eq!(s.log_level, None);
        assert_eq!(s.api_url, None);
    }
}
