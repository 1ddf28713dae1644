use crate::HistoryError;
use secrecy::SecretString;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub access_token: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, HistoryError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values through `get` instead
    /// of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, HistoryError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("FIT_HISTORY_ACCESS_TOKEN")
            .filter(|t| !t.is_empty())
            .ok_or_else(|| HistoryError::Config("FIT_HISTORY_ACCESS_TOKEN missing".into()))?;
        let base_url = get("FIT_HISTORY_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Ok(Self {
            access_token: SecretString::new(token.into()),
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn from_env_missing_token() {
        let get = |k: &str| match k {
            "FIT_HISTORY_BASE_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(matches!(res, Err(HistoryError::Config(_))));
    }

    #[test]
    fn from_env_rejects_empty_token() {
        let get = |k: &str| match k {
            "FIT_HISTORY_ACCESS_TOKEN" => Some(String::new()),
            _ => None,
        };
        assert!(Config::from_env_with(get).is_err());
    }

    #[test]
    fn from_env_reads_values_and_defaults_base_url() {
        let get = |k: &str| match k {
            "FIT_HISTORY_ACCESS_TOKEN" => Some("sekrit".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.access_token.expose_secret(), "sekrit");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
