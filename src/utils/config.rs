use std::str::FromStr;

use chrono::Duration;

/// Longest accepted cache lifetime, one year.
const MAX_CACHE_TTL_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub github_api_url: String,
    pub user_agent: String,
    pub cache_ttl_secs: i64,
    pub refresh_interval_secs: u64,
    pub page_size: usize,
    pub initial_category: String,
    pub theme_store_path: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: "127.0.0.1:3000".to_string(),
            github_api_url: "https://api.github.com".to_string(),
            user_agent: "news-dispatch/0.1".to_string(),
            cache_ttl_secs: 300,
            refresh_interval_secs: 300,
            page_size: 8,
            initial_category: "devops".to_string(),
            theme_store_path: "theme.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn init() -> Self {
        let defaults = Config::default();
        Config {
            bind_addr: env_or("BIND_ADDR", defaults.bind_addr),
            github_api_url: env_or("GITHUB_API_URL", defaults.github_api_url),
            user_agent: env_or("USER_AGENT", defaults.user_agent),
            cache_ttl_secs: env_parse_or("CACHE_TTL_SECS", defaults.cache_ttl_secs),
            refresh_interval_secs: env_parse_or(
                "REFRESH_INTERVAL_SECS",
                defaults.refresh_interval_secs,
            ),
            page_size: env_parse_or("PAGE_SIZE", defaults.page_size).max(1),
            initial_category: env_or("INITIAL_CATEGORY", defaults.initial_category),
            theme_store_path: env_or("THEME_STORE_PATH", defaults.theme_store_path),
            log_level: env_or("LOG_LEVEL", defaults.log_level).to_lowercase(),
        }
    }

    /// Cache lifetime, held between one second and one year.
    pub fn cache_ttl(&self) -> Duration {
        Duration::seconds(self.cache_ttl_secs.clamp(1, MAX_CACHE_TTL_SECS))
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
