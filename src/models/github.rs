use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    pub items: Vec<Repository>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
}
